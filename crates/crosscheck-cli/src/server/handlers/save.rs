//! Table save handler.

use axum::{extract::State, Json};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::info;

use crosscheck::{SaveOutcome, Schema};

use super::rows::parse_rows;
use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Request body for the save endpoint.
#[derive(Debug, Deserialize)]
pub struct SaveRequest {
    /// Target table (`strings` or `classifications`).
    #[serde(rename = "type")]
    pub table: String,
    /// Replacement rows in canonical column order.
    #[serde(default)]
    pub rows: Value,
}

/// Response for a successful save.
#[derive(Serialize)]
pub struct SaveResponse {
    pub ok: bool,
}

/// Replace a table with edited rows.
///
/// Strings rows that reference unknown classifications are rejected with
/// the full validation result and nothing is stored.
pub async fn save(
    State(state): State<AppState>,
    Json(request): Json<SaveRequest>,
) -> Result<Json<SaveResponse>, ApiError> {
    let schema: Schema = request.table.parse()?;
    let rows = parse_rows(request.rows)?;

    let mut store = state.store.write().await;
    match store.save(schema, &rows) {
        SaveOutcome::Saved => {
            info!(table = %schema, rows = rows.len(), "saved table");
            Ok(Json(SaveResponse { ok: true }))
        }
        SaveOutcome::RejectedWithValidation(result) => Err(ApiError::ValidationFailed(result)),
    }
}
