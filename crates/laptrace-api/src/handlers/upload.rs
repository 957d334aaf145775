//! CSV upload handler

use axum::extract::{Multipart, State};
use axum::Json;
use laptrace_core::DataTable;
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;
use crate::state::AppState;

/// Response for CSV upload: column names, row preview, and full data
#[derive(Debug, Serialize)]
pub struct UploadResponse {
    /// Column names in file order
    pub columns: Vec<String>,
    /// First rows of the table, keyed `{column: {"0": value, ...}}`
    pub head: Value,
    /// Entire table in the same shape
    pub full_data: Value,
}

/// POST /upload
/// Parse a multipart CSV upload into the common table shape
pub async fn upload_csv(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<UploadResponse>, ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() != Some("file") {
            continue;
        }

        let file_name = field.file_name().map(str::to_owned);
        let data = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(format!("Failed to read upload: {e}")))?;

        let table = DataTable::from_csv(data.as_ref())?;

        tracing::info!(
            file = file_name.as_deref().unwrap_or("<unnamed>"),
            rows = table.num_rows(),
            columns = table.num_columns(),
            "CSV uploaded"
        );

        return Ok(Json(UploadResponse {
            columns: table.column_names().to_vec(),
            head: table.column_records(Some(state.preview_rows())),
            full_data: table.column_records(None),
        }));
    }

    Err(ApiError::BadRequest(
        "Missing 'file' part in multipart payload".to_string(),
    ))
}
