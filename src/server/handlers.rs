//! HTTP handlers

use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tokio::task;

use crate::batch::{BatchOrchestrator, BatchResult};
use crate::error::MergeError;
use crate::server::AppState;
use crate::server::error::ApiError;

/// Liveness status token
pub const HEALTHY: &str = "Healthy";

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub timestamp: DateTime<Utc>,
}

/// Liveness probe; independent of the merge pipeline.
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: HEALTHY.to_string(),
        timestamp: Utc::now(),
    })
}

/// Run a batch over the configured roots.
///
/// `200` with the batch result when it succeeded, `400` with the same payload
/// when it reported failure. The batch runs on the blocking pool as a single
/// unit of work.
pub async fn merge_all_companies(
    State(state): State<Arc<AppState>>,
) -> Result<(StatusCode, Json<BatchResult>), ApiError> {
    tracing::info!("Starting PDF merge process for all companies");

    let input_root = state.config.input_root.clone();
    let output_root = state.config.output_root.clone();

    let result = task::spawn_blocking(move || BatchOrchestrator::run(&input_root, &output_root))
        .await
        .map_err(|e| MergeError::task_failed(e.to_string()))?;

    let status = if result.succeeded {
        StatusCode::OK
    } else {
        StatusCode::BAD_REQUEST
    };

    Ok((status, Json(result)))
}
