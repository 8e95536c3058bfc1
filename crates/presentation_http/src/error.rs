//! API error handling
//!
//! Prediction failures are rendered into the page, so the only error a
//! handler returns is an internal one. Its details are logged, never sent.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use infrastructure::TemplateError;
use serde::Serialize;
use thiserror::Error;

/// API error type
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error message
    pub error: String,
    /// Error code
    pub code: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let Self::Internal(msg) = &self;
        tracing::error!(error = %msg, "Internal error");

        let body = ErrorResponse {
            error: "An internal error occurred".to_string(),
            code: "internal_error".to_string(),
        };

        (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
    }
}

impl From<TemplateError> for ApiError {
    fn from(err: TemplateError) -> Self {
        Self::Internal(err.to_string())
    }
}
