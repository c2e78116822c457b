//! Report generation endpoints.
//!
//! `GET /reports/ceo/defaults` is the wizard's entry state: the request
//! form pre-filled from the settings singleton. `POST /reports/ceo`
//! confirms the wizard with any user overrides and streams back the PDF.

use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::IntoResponse,
    routing::{get, post},
};
use serde::Deserialize;
use tracing::error;

use daybrief_core::render::{PageSetup, ReportMeta};
use daybrief_core::report::ReportService;
use daybrief_core::wizard::{GenerationRequest, Wizard};
use daybrief_db::{ReportRepository, SettingsRepository};
use daybrief_shared::AppError;

use crate::AppState;

use super::error_response;

/// Creates the report routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/reports/ceo/defaults", get(get_report_defaults))
        .route("/reports/ceo", post(generate_report))
}

/// Request body for report generation.
///
/// Absent fields fall back to the configured defaults; present fields
/// override them. A `days` of zero is floored to 1 by the wizard.
#[derive(Debug, Default, Deserialize)]
pub struct GenerateReportRequest {
    /// Lookback window override in days.
    pub days: Option<i64>,
    /// Sales toggle override.
    pub sales: Option<bool>,
    /// Shipments toggle override.
    pub shipments: Option<bool>,
    /// Productions toggle override.
    pub productions: Option<bool>,
    /// Inventories toggle override.
    pub inventories: Option<bool>,
    /// Company display name for the PDF footer.
    pub company: Option<String>,
}

/// Returns the wizard's pre-filled request form.
async fn get_report_defaults(State(state): State<AppState>) -> impl IntoResponse {
    let repo = SettingsRepository::new((*state.db).clone());

    let settings = match repo.load().await {
        Ok(settings) => settings,
        Err(e) => {
            error!(error = %e, "Failed to load report settings");
            return error_response(&AppError::Database(e.to_string()));
        }
    };

    let request: GenerationRequest = Wizard::start(&settings).request().clone();
    (StatusCode::OK, Json(request)).into_response()
}

/// Generates the CEO report PDF.
async fn generate_report(
    State(state): State<AppState>,
    Json(request): Json<GenerateReportRequest>,
) -> impl IntoResponse {
    // Configuration-read failures are fatal for the invocation.
    let settings = match SettingsRepository::new((*state.db).clone()).load().await {
        Ok(settings) => settings,
        Err(e) => {
            error!(error = %e, "Failed to load report settings");
            return error_response(&AppError::Database(e.to_string()));
        }
    };

    let mut wizard = Wizard::start(&settings);
    let form = wizard.request_mut();
    if let Some(days) = request.days {
        form.days = Some(days);
    }
    if let Some(sales) = request.sales {
        form.sales = sales;
    }
    if let Some(shipments) = request.shipments {
        form.shipments = shipments;
    }
    if let Some(productions) = request.productions {
        form.productions = productions;
    }
    if let Some(inventories) = request.inventories {
        form.inventories = inventories;
    }

    let payload = wizard.generate();
    let now = chrono::Utc::now();

    let repo = ReportRepository::new((*state.db).clone());
    let context = match ReportService::assemble(payload, now, &repo).await {
        Ok(context) => context,
        Err(e) => {
            error!(error = %e, "Failed to query report records");
            return error_response(&AppError::Database(e.to_string()));
        }
    };

    let meta = ReportMeta {
        company: request.company.clone(),
        days: payload.days,
        generated_at: now,
    };
    let html = match state.renderer.render(&context, &meta) {
        Ok(html) => html,
        Err(e) => {
            error!(error = %e, "Failed to render report");
            return error_response(&AppError::Rendering(e.to_string()));
        }
    };

    let setup = PageSetup::for_company(request.company.as_deref());
    let pdf = match state.converter.convert(&html, &setup).await {
        Ok(pdf) => pdf,
        Err(e) => {
            error!(error = %e, "Failed to convert report to PDF");
            return error_response(&AppError::ExternalService(e.to_string()));
        }
    };

    (
        StatusCode::OK,
        [
            (header::CONTENT_TYPE, "application/pdf"),
            (
                header::CONTENT_DISPOSITION,
                "attachment; filename=\"ceo_report.pdf\"",
            ),
        ],
        pdf,
    )
        .into_response()
}
