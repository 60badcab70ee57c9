//! CSV download handler.

use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
};

use crosscheck::Schema;

use crate::server::error::ApiError;
use crate::server::state::AppState;

/// Download a stored table as `<type>.csv`.
pub async fn export_table(
    State(state): State<AppState>,
    Path(table): Path<String>,
) -> Result<Response, ApiError> {
    let schema: Schema = table.parse()?;
    let export = state.store.read().await.export(schema);

    Ok((
        [
            (header::CONTENT_TYPE, export.content_type.to_string()),
            (header::CONTENT_DISPOSITION, export.content_disposition()),
        ],
        export.body,
    )
        .into_response())
}
