//! laptrace-api - HTTP API layer for the laptrace telemetry backend
//!
//! Wires the two data endpoints (CSV upload, demo generation) plus the
//! liveness routes into an axum router with tracing, CORS, a request
//! timeout, and an upload size limit.
//!
//! # Usage
//!
//! ```ignore
//! use laptrace_api::{create_router, ApiConfig, AppState};
//!
//! let state = AppState::new(ApiConfig::default());
//! let router = create_router(state);
//! ```

pub mod error;
pub mod handlers;
pub mod state;

pub use error::ApiError;
pub use state::{ApiConfig, AppState};

use axum::extract::DefaultBodyLimit;
use axum::http::{HeaderValue, Method};
use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::{AllowHeaders, AllowOrigin, CorsLayer};
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;

/// Create the laptrace API router with the given application state
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(state.config());
    let timeout = TimeoutLayer::new(state.config().request_timeout);
    let body_limit = DefaultBodyLimit::max(state.config().max_upload_bytes);

    Router::new()
        // Liveness
        .route("/", get(handlers::status::root))
        .route("/health", get(|| async { "OK" }))
        // CSV ingestion
        .route("/upload", post(handlers::upload::upload_csv))
        // Synthetic telemetry
        .route("/generate-demo", post(handlers::demo::generate_demo))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .layer(timeout)
        .layer(body_limit)
        .with_state(state)
}

/// CORS restricted to the configured browser origins.
///
/// The frontend sends credentialed requests, so the layer names explicit
/// origins and mirrors request headers instead of using wildcards.
fn cors_layer(config: &ApiConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %origin, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cors_layer_skips_invalid_origins() {
        let config = ApiConfig {
            allowed_origins: vec![
                "http://localhost:3000".to_string(),
                "not an origin\u{0}".to_string(),
            ],
            ..ApiConfig::default()
        };

        // Builds without panicking; the invalid entry is dropped
        let _ = cors_layer(&config);
    }
}
