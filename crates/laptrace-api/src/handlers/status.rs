//! Liveness handler

use axum::Json;
use serde::Serialize;

/// Response for the root liveness route
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub message: String,
}

/// GET /
/// Liveness message for humans and load balancers
pub async fn root() -> Json<StatusResponse> {
    Json(StatusResponse {
        message: "laptrace telemetry API running".to_string(),
    })
}
