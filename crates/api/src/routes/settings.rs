//! Report settings endpoints.
//!
//! The administrative surface for the configuration singleton: read the
//! current defaults, or replace them.

use axum::{Json, Router, extract::State, http::StatusCode, response::IntoResponse, routing::get};
use tracing::error;

use daybrief_core::settings::ReportSettings;
use daybrief_db::SettingsRepository;
use daybrief_shared::AppError;

use crate::AppState;

use super::error_response;

/// Creates the settings routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/report/settings", get(get_settings).put(update_settings))
}

/// Returns the current report settings (defaults if never configured).
async fn get_settings(State(state): State<AppState>) -> impl IntoResponse {
    let repo = SettingsRepository::new((*state.db).clone());

    match repo.load().await {
        Ok(settings) => (StatusCode::OK, Json(settings)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to load report settings");
            error_response(&AppError::Database(e.to_string()))
        }
    }
}

/// Replaces the report settings.
async fn update_settings(
    State(state): State<AppState>,
    Json(settings): Json<ReportSettings>,
) -> impl IntoResponse {
    let repo = SettingsRepository::new((*state.db).clone());

    match repo.save(&settings).await {
        Ok(()) => (StatusCode::OK, Json(settings)).into_response(),
        Err(e) => {
            error!(error = %e, "Failed to save report settings");
            error_response(&AppError::Database(e.to_string()))
        }
    }
}
