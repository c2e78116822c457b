//! Daybrief API Server
//!
//! Main entry point for the Daybrief reporting service.

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use daybrief_api::{AppState, create_router};
use daybrief_core::render::{HtmlRenderer, WkhtmltopdfConverter};
use daybrief_db::connect;
use daybrief_shared::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "daybrief=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    let config = AppConfig::load().expect("Failed to load configuration");

    // Connect to database
    let db = connect(&config.database.url).await?;
    info!("Connected to database");

    // Build the rendering pipeline
    let renderer = HtmlRenderer::new()?;
    let converter = WkhtmltopdfConverter::from_config(&config.pdf);
    info!(
        binary = %config.pdf.converter_binary,
        "PDF converter configured"
    );

    // Create application state
    let state = AppState {
        db: Arc::new(db),
        renderer: Arc::new(renderer),
        converter: Arc::new(converter),
    };

    // Create router
    let app = create_router(state);

    // Start server
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
