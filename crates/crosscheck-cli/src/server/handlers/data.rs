//! Current table contents.

use axum::{extract::State, Json};
use serde::Serialize;

use crosscheck::{CanonicalRow, Schema};

use crate::server::state::AppState;

/// One table with its canonical headers.
#[derive(Serialize)]
pub struct TableData {
    pub headers: Vec<String>,
    pub rows: Vec<CanonicalRow>,
}

/// Response for the data endpoint.
#[derive(Serialize)]
pub struct DataResponse {
    pub strings: TableData,
    pub classifications: TableData,
}

/// Return both stored tables.
pub async fn get_data(State(state): State<AppState>) -> Json<DataResponse> {
    let store = state.store.read().await;
    let table = |schema: Schema| TableData {
        headers: schema.headers(),
        rows: store.get(schema).to_vec(),
    };

    Json(DataResponse {
        strings: table(Schema::Strings),
        classifications: table(Schema::Classifications),
    })
}
