//! Application state for the laptrace API

use std::sync::Arc;
use std::time::Duration;

/// Settings the API layer needs from the host
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Rows included in the `head` preview of responses
    pub preview_rows: usize,
    /// Browser origins allowed by the CORS layer
    pub allowed_origins: Vec<String>,
    /// Request body size limit for uploads
    pub max_upload_bytes: usize,
    /// Per-request timeout
    pub request_timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            preview_rows: 50,
            allowed_origins: vec!["http://localhost:3000".to_string()],
            max_upload_bytes: 10 * 1024 * 1024,
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// Application state shared across all handlers.
///
/// Read-only after startup; requests share nothing mutable.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ApiConfig>,
}

impl AppState {
    /// Create a new AppState with the given settings
    pub fn new(config: ApiConfig) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// The API settings
    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    /// Rows included in response previews
    pub fn preview_rows(&self) -> usize {
        self.config.preview_rows
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(ApiConfig::default())
    }
}
