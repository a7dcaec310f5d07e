//! Error type for the HTTP boundary

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::error::MergeError;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The batch could not run at all.
    #[error("Internal error: {0}")]
    Fault(#[from] MergeError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let detail = match &self {
            ApiError::Fault(e) => {
                tracing::error!(error = %e, "unexpected error in merge-all-companies");
                e.to_string()
            }
        };

        let body = Json(json!({
            "success": false,
            "message": "An unexpected error occurred during the merge process.",
            "error": detail,
        }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
