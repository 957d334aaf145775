//! API error types and conversions

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use laptrace_core::TelemetryError;
use serde::Serialize;

/// API error type that converts to HTTP responses
#[derive(Debug)]
pub enum ApiError {
    /// 400 Bad Request
    BadRequest(String),
    /// 500 Internal Server Error
    Internal(String),
}

/// Standard error response format
#[derive(Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error_type, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "bad_request", msg),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "internal_error", msg),
        };

        if status.is_server_error() {
            tracing::error!(error = error_type, %message, "API error");
        } else {
            tracing::debug!(error = error_type, %message, "API client error");
        }

        let body = Json(ErrorResponse {
            error: error_type.to_string(),
            message,
        });

        (status, body).into_response()
    }
}

impl From<TelemetryError> for ApiError {
    fn from(err: TelemetryError) -> Self {
        match err {
            TelemetryError::InvalidParameter(msg) => ApiError::BadRequest(msg),
            TelemetryError::Csv(e) => ApiError::BadRequest(format!("CSV parse error: {e}")),
            TelemetryError::InvalidTable(msg) => ApiError::BadRequest(msg),
            TelemetryError::Internal(msg) => ApiError::Internal(msg),
        }
    }
}
