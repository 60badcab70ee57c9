//! Cross-validation handler.

use axum::{extract::State, Json};
use serde::Deserialize;
use serde_json::Value;

use crosscheck::ValidationResult;

use super::rows::parse_rows;
use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Request body for the validate endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct ValidateRequest {
    /// Strings rows to check. When absent the stored strings table is used.
    pub rows: Option<Value>,
}

/// Validate strings rows against the stored classifications.
pub async fn validate(
    State(state): State<AppState>,
    body: Option<Json<ValidateRequest>>,
) -> Result<Json<ValidationResult>, ApiError> {
    let request = body.map(|Json(r)| r).unwrap_or_default();
    let rows = request.rows.map(parse_rows).transpose()?;

    let store = state.store.read().await;
    Ok(Json(store.validate(rows.as_deref())))
}
