//! Liveness endpoint.
//!
//! Lets deployments tell reporting-service instances apart by name and
//! version; carries no database or converter checks.

use axum::{Json, Router, routing::get};
use serde::Serialize;

use crate::AppState;

/// Liveness response for the reporting service.
#[derive(Serialize)]
pub struct HealthResponse {
    /// Service status.
    pub status: &'static str,
    /// Service identity.
    pub service: &'static str,
    /// Running crate version.
    pub version: &'static str,
}

/// Reports the service as alive.
async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "daybrief",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Creates the health routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health_check))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_response_names_the_service() {
        let body = serde_json::to_value(HealthResponse {
            status: "healthy",
            service: "daybrief",
            version: env!("CARGO_PKG_VERSION"),
        })
        .unwrap();

        assert_eq!(body["status"], "healthy");
        assert_eq!(body["service"], "daybrief");
        assert!(body["version"].is_string());
    }
}
