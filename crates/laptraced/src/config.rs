//! laptraced configuration
//!
//! TOML server configuration with defaults for every field, so a missing
//! or partial file still yields a runnable server.

use std::path::Path;
use std::time::Duration;

use laptrace_api::ApiConfig;
use serde::{Deserialize, Serialize};

/// Complete server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen port
    #[serde(default = "default_port")]
    pub port: u16,

    /// Browser origin allow-list
    #[serde(default)]
    pub cors: CorsConfig,

    /// Request and response size limits
    #[serde(default)]
    pub limits: LimitsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorsConfig {
    /// Origins allowed to call the API from a browser
    #[serde(default = "default_allowed_origins")]
    pub allowed_origins: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LimitsConfig {
    /// Rows returned in the `head` preview
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,

    /// Upload body size limit in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    /// Per-request timeout in seconds
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_port() -> u16 {
    8000
}

fn default_allowed_origins() -> Vec<String> {
    vec!["http://localhost:3000".to_string()]
}

fn default_preview_rows() -> usize {
    50
}

fn default_max_upload_bytes() -> usize {
    10 * 1024 * 1024
}

fn default_request_timeout_secs() -> u64 {
    30
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: default_port(),
            cors: CorsConfig::default(),
            limits: LimitsConfig::default(),
        }
    }
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origins: default_allowed_origins(),
        }
    }
}

impl Default for LimitsConfig {
    fn default() -> Self {
        Self {
            preview_rows: default_preview_rows(),
            max_upload_bytes: default_max_upload_bytes(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

impl ServerConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(toml::from_str(&content)?)
    }

    /// Settings handed to the API layer
    pub fn api_config(&self) -> ApiConfig {
        ApiConfig {
            preview_rows: self.limits.preview_rows,
            allowed_origins: self.cors.allowed_origins.clone(),
            max_upload_bytes: self.limits.max_upload_bytes,
            request_timeout: Duration::from_secs(self.limits.request_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config: ServerConfig = toml::from_str("").unwrap();
        assert_eq!(config.port, 8000);
        assert_eq!(config.cors.allowed_origins, vec!["http://localhost:3000"]);
        assert_eq!(config.limits.preview_rows, 50);
        assert_eq!(config.limits.max_upload_bytes, 10 * 1024 * 1024);
        assert_eq!(config.limits.request_timeout_secs, 30);
    }

    #[test]
    fn test_partial_config_overrides() {
        let config: ServerConfig = toml::from_str(
            r#"
            port = 9000

            [cors]
            allowed_origins = ["http://localhost:3000", "https://laps.example.com"]
            "#,
        )
        .unwrap();

        assert_eq!(config.port, 9000);
        assert_eq!(config.cors.allowed_origins.len(), 2);
        // untouched section keeps its defaults
        assert_eq!(config.limits.preview_rows, 50);
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "port = 18000").unwrap();

        let config = ServerConfig::load(file.path()).unwrap();
        assert_eq!(config.port, 18000);
    }

    #[test]
    fn test_load_missing_file_errors() {
        assert!(ServerConfig::load("/nonexistent/laptraced.toml").is_err());
    }

    #[test]
    fn test_api_config_conversion() {
        let config = ServerConfig::default();
        let api = config.api_config();
        assert_eq!(api.preview_rows, 50);
        assert_eq!(api.request_timeout, Duration::from_secs(30));
    }
}
