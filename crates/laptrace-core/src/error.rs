//! Common error types for telemetry processing

use thiserror::Error;

/// Result type for telemetry operations
pub type TelemetryResult<T> = Result<T, TelemetryError>;

/// Errors that can occur while generating or ingesting telemetry
#[derive(Debug, Error)]
pub enum TelemetryError {
    /// Car parameter outside its accepted range
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// CSV input could not be parsed
    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    /// Table construction from inconsistent columns
    #[error("Invalid table: {0}")]
    InvalidTable(String),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl TelemetryError {
    /// Returns the HTTP status code for this error
    pub fn status_code(&self) -> u16 {
        match self {
            TelemetryError::InvalidParameter(_) => 400,
            TelemetryError::Csv(_) => 400,
            TelemetryError::InvalidTable(_) => 400,
            TelemetryError::Internal(_) => 500,
        }
    }
}
