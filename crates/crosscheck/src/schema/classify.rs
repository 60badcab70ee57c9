//! Schema detection from raw headers.

use indexmap::IndexSet;

use super::alias::resolve;
use super::types::{Column, Schema};

/// Columns whose presence marks a file as a strings table.
const STRINGS_MARKERS: &[Column] = &[
    Column::Tier,
    Column::Prefix,
    Column::FuzzingIdx,
    Column::Prompt,
    Column::Risks,
    Column::Keywords,
];

const KEY_COLUMNS: &[Column] = &[Column::Topic, Column::Subtopic, Column::Industry];

/// Resolve raw headers to the distinct canonical columns they name, in
/// first-occurrence order. Unrecognized headers are skipped.
pub fn resolved_columns<S: AsRef<str>>(raw_headers: &[S]) -> IndexSet<Column> {
    raw_headers
        .iter()
        .filter_map(|h| resolve(h.as_ref()))
        .collect()
}

/// Decide which schema a header row describes.
///
/// Classifications is checked first: a file carrying the three key columns
/// plus Classification is a classifications table even if strings-only
/// columns are also present. Returns `None` when neither schema matches.
pub fn classify<S: AsRef<str>>(raw_headers: &[S]) -> Option<Schema> {
    let found = resolved_columns(raw_headers);
    let has_keys = KEY_COLUMNS.iter().all(|c| found.contains(c));

    if has_keys && found.contains(&Column::Classification) {
        return Some(Schema::Classifications);
    }
    if has_keys && STRINGS_MARKERS.iter().any(|c| found.contains(c)) {
        return Some(Schema::Strings);
    }
    None
}
