use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use creed_core::CoreError;
use serde::Serialize;
use thiserror::Error;
use tracing::error;

/// Errors surfaced by the HTTP layer.
///
/// Every variant maps to a 5xx: there is no client input to reject.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("chart rendering failed: {0}")]
    Render(String),

    #[error("page template failed: {0}")]
    Template(String),

    #[error("internal error: {0}")]
    Internal(String),
}

impl From<CoreError> for ApiError {
    fn from(e: CoreError) -> Self {
        match e {
            CoreError::Render(e) => ApiError::Render(e.to_string()),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

impl From<askama::Error> for ApiError {
    fn from(e: askama::Error) -> Self {
        ApiError::Template(e.to_string())
    }
}

#[derive(Serialize)]
struct ErrorResponse {
    error: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        error!(error = %self, "request failed");
        let body = ErrorResponse {
            error: self.to_string(),
        };
        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}
