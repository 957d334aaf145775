//! Data model for telemetry generation and responses

mod params;
mod sample;

pub use params::{CarParameters, DriverStyle, StyleFactors};
pub use sample::{LapMetadata, TelemetryDataset, TelemetrySample, TELEMETRY_COLUMNS};
