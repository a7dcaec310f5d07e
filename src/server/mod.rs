//! HTTP service exposing the batch merge.
//!
//! - `POST /api/pdfmerge/merge-all-companies` runs a batch
//! - `GET /api/pdfmerge/health` liveness probe
//! - `GET /merged/<file>` downloads a merged file

pub mod error;
pub mod handlers;

use anyhow::Result;
use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

use crate::config::Config;

/// State shared by all handlers.
pub struct AppState {
    pub config: Config,
}

/// Build the application router.
pub fn router(config: Config) -> Router {
    let merged_files = ServeDir::new(&config.output_root);
    let state = Arc::new(AppState { config });

    Router::new()
        .route(
            "/api/pdfmerge/merge-all-companies",
            post(handlers::merge_all_companies),
        )
        .route("/api/pdfmerge/health", get(handlers::health))
        .nest_service("/merged", merged_files)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Bind to the configured address and serve until Ctrl-C.
pub async fn serve(config: Config) -> Result<()> {
    let addr = config.bind;
    let app = router(config);

    info!("Starting pdfbatch on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Shutting down");
}
