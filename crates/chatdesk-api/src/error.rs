//! Maps domain `AppError` to HTTP responses.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::{Deserialize, Serialize};

use chatdesk_core::error::{AppError, ErrorKind};

/// Standard API error response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorResponse {
    /// Machine-readable error code.
    pub error: String,
    /// Human-readable message.
    pub message: String,
}

/// Status code and error code for an error kind.
pub fn status_for(kind: ErrorKind) -> (StatusCode, &'static str) {
    match kind {
        ErrorKind::Validation => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR"),
        ErrorKind::NotFound => (StatusCode::NOT_FOUND, "NOT_FOUND"),
        ErrorKind::Serialization => (StatusCode::BAD_REQUEST, "SERIALIZATION_ERROR"),
        ErrorKind::Configuration | ErrorKind::Io | ErrorKind::Internal => {
            (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL_ERROR")
        }
    }
}

/// Handler error. Wraps [`AppError`] so it can be rendered as a response.
#[derive(Debug)]
pub struct ApiError(pub AppError);

impl From<AppError> for ApiError {
    fn from(err: AppError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let err = self.0;
        let (status, error_code) = status_for(err.kind);
        if status.is_server_error() {
            tracing::error!(kind = %err.kind, error = %err.message, "Internal server error");
        }

        let body = ApiErrorResponse {
            error: error_code.to_string(),
            message: err.message,
        };

        (status, Json(body)).into_response()
    }
}
