//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - REST API routes for report settings and generation
//! - Shared application state
//! - Error-to-response mapping

pub mod routes;

use std::sync::Arc;

use axum::Router;
use sea_orm::DatabaseConnection;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use daybrief_core::render::{HtmlRenderer, PdfConverter};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub db: Arc<DatabaseConnection>,
    /// HTML renderer with the embedded report template.
    pub renderer: Arc<HtmlRenderer>,
    /// PDF converter backend.
    pub converter: Arc<dyn PdfConverter>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .nest("/api/v1", routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
