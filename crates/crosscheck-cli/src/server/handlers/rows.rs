//! Decoding of client-supplied row arrays.

use serde_json::Value;

use crate::server::error::ApiError;

/// Convert a JSON array of arrays into string rows.
///
/// Cells are stringified leniently: `null` becomes an empty string, strings
/// pass through, and numbers or booleans use their JSON text.
pub(crate) fn parse_rows(value: Value) -> Result<Vec<Vec<String>>, ApiError> {
    let Value::Array(rows) = value else {
        return Err(ApiError::BadRequest("Rows must be an array".to_string()));
    };

    rows.into_iter()
        .map(|row| match row {
            Value::Array(cells) => Ok(cells.into_iter().map(cell_to_string).collect()),
            _ => Err(ApiError::BadRequest(
                "Each row must be an array".to_string(),
            )),
        })
        .collect()
}

fn cell_to_string(cell: Value) -> String {
    match cell {
        Value::Null => String::new(),
        Value::String(s) => s,
        other => other.to_string(),
    }
}
