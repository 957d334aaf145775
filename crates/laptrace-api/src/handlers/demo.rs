//! Synthetic telemetry generation handler

use axum::extract::State;
use axum::Json;
use laptrace_core::{synthesize_lap, CarParameters, LapMetadata};
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::state::AppState;

/// Response for demo generation: the common table shape plus lap metadata
#[derive(Debug, Serialize)]
pub struct DemoDataResponse {
    /// Column names in table order
    pub columns: Vec<String>,
    /// First rows of the table, keyed `{column: {"0": value, ...}}`
    pub head: Value,
    /// Entire table in the same shape
    pub full_data: Value,
    /// Parameters the lap was generated from
    pub metadata: LapMetadata,
}

/// POST /generate-demo
/// Generate a synthetic lap from car parameters (all fields optional)
pub async fn generate_demo(
    State(state): State<AppState>,
    Json(params): Json<CarParameters>,
) -> Result<Json<DemoDataResponse>, ApiError> {
    let dataset = synthesize_lap(&params)?;
    let samples = dataset.len();
    let table = dataset.to_table();

    tracing::info!(
        track = %params.track_name,
        style = %params.driver_style,
        samples,
        "Demo telemetry generated"
    );

    Ok(Json(DemoDataResponse {
        columns: table.column_names().to_vec(),
        head: table.column_records(Some(state.preview_rows())),
        full_data: table.column_records(None),
        metadata: dataset.metadata,
    }))
}
