//! CSV upload handler.

use axum::{
    extract::{Multipart, State},
    Json,
};
use tracing::info;

use crosscheck::{ingest, Ingested, SchemaHint};

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Ingest an uploaded CSV and replace the matching table.
///
/// Expects a multipart body with a `file` part and an optional `type` part
/// (`strings`, `classifications` or empty for detection).
pub async fn upload(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<Ingested>, ApiError> {
    let mut file = None;
    let mut hint = SchemaHint::Auto;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(format!("Invalid multipart body: {}", e)))?
    {
        let name = field.name().unwrap_or_default().to_string();
        match name.as_str() {
            "file" => {
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read file: {}", e)))?;
                file = Some(bytes);
            }
            "type" => {
                let text = field
                    .text()
                    .await
                    .map_err(|e| ApiError::BadRequest(format!("Failed to read type: {}", e)))?;
                hint = text.parse()?;
            }
            _ => {}
        }
    }

    let bytes = file.ok_or_else(|| ApiError::BadRequest("No file uploaded".to_string()))?;
    let ingested = ingest(&bytes, hint)?;

    info!(
        table = %ingested.schema,
        rows = ingested.rows.len(),
        hash = %ingested.source.hash,
        "uploaded table"
    );
    state
        .store
        .write()
        .await
        .set(ingested.schema, &ingested.rows);

    Ok(Json(ingested))
}
