//! Mapping of application errors to HTTP responses.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use financial_shared::{AppError, ValidationError};
use serde::Serialize;
use tracing::error;

/// Error body returned by every failing endpoint.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Human-readable description of the failure.
    pub status_text: String,
}

/// Handler error that renders as `{"statusText": ...}` with the mapped status.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        Self(AppError::Validation(err))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status =
            StatusCode::from_u16(self.0.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        // Server-side detail stays in the logs.
        let status_text = if self.0.is_client_error() {
            self.0.to_string()
        } else {
            error!(error = %self.0, code = self.0.error_code(), "Request failed");
            "Internal server error.".to_string()
        };

        (status, Json(ErrorResponse { status_text })).into_response()
    }
}
