//! Validation result types.

use serde::{Deserialize, Serialize};

/// The Topic/Subtopic/Industry values of an offending strings row, as stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyFields {
    #[serde(rename = "Topic")]
    pub topic: String,
    #[serde(rename = "Subtopic")]
    pub subtopic: String,
    #[serde(rename = "Industry")]
    pub industry: String,
}

/// A strings row whose key has no matching classifications row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationError {
    /// Zero-based index into the strings rows.
    pub row_index: usize,
    /// Human-readable description.
    pub message: String,
    /// The raw key values of the row.
    pub fields: KeyFields,
}

/// Outcome of cross-validating strings rows against classifications rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    /// True when no errors were found.
    pub valid: bool,
    /// One entry per invalid row, in row order.
    pub errors: Vec<ValidationError>,
    /// Row indices of `errors`, same order.
    pub invalid_indices: Vec<usize>,
}

impl ValidationResult {
    /// Build a result from collected errors.
    pub fn from_errors(errors: Vec<ValidationError>) -> Self {
        let invalid_indices = errors.iter().map(|e| e.row_index).collect();
        Self {
            valid: errors.is_empty(),
            errors,
            invalid_indices,
        }
    }

    /// Number of invalid rows.
    pub fn error_count(&self) -> usize {
        self.errors.len()
    }
}
