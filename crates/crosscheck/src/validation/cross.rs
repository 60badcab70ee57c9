//! Referential check of strings rows against classifications rows.

use std::collections::HashSet;

use super::result::{KeyFields, ValidationError, ValidationResult};

/// Message attached to every missing-combination error.
pub const MISSING_COMBINATION: &str =
    "Invalid combination: Topic + Subtopic + Industry does not exist in classifications.csv";

/// Trimmed, lowercased (Topic, Subtopic, Industry).
///
/// Components are kept as separate tuple fields so no separator can collide
/// with field content.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct ReferenceKey(String, String, String);

impl ReferenceKey {
    fn new(topic: &str, subtopic: &str, industry: &str) -> Self {
        Self(norm(topic), norm(subtopic), norm(industry))
    }
}

fn norm(value: &str) -> String {
    value.trim().to_lowercase()
}

/// Positions of the key columns within a schema's canonical row.
#[derive(Debug, PartialEq, Eq)]
struct KeyPositions {
    topic: usize,
    subtopic: usize,
    industry: usize,
}

/// Tier, Industry, Topic, Subtopic, ...
const STRINGS_KEYS: KeyPositions = KeyPositions {
    topic: 2,
    subtopic: 3,
    industry: 1,
};

/// Topic, Subtopic, Industry, Classification.
const CLASSIFICATIONS_KEYS: KeyPositions = KeyPositions {
    topic: 0,
    subtopic: 1,
    industry: 2,
};

impl KeyPositions {
    fn fields<'r, V: AsRef<str>>(&self, row: &'r [V]) -> (&'r str, &'r str, &'r str) {
        let get = |i: usize| row.get(i).map(|v| v.as_ref()).unwrap_or("");
        (get(self.topic), get(self.subtopic), get(self.industry))
    }
}

/// Check every strings row's key against the classifications rows.
///
/// Both inputs are canonical rows of their schema; rows shorter than the
/// schema are read as if padded with empty strings. Comparison is
/// case-insensitive and ignores surrounding whitespace. The result lists
/// offending rows in input order with their raw key values.
pub fn validate<S, C>(strings_rows: &[S], classifications_rows: &[C]) -> ValidationResult
where
    S: AsRef<[String]>,
    C: AsRef<[String]>,
{
    let allowed: HashSet<ReferenceKey> = classifications_rows
        .iter()
        .map(|row| {
            let (topic, subtopic, industry) = CLASSIFICATIONS_KEYS.fields(row.as_ref());
            ReferenceKey::new(topic, subtopic, industry)
        })
        .collect();

    let errors: Vec<ValidationError> = strings_rows
        .iter()
        .enumerate()
        .filter_map(|(row_index, row)| {
            let (topic, subtopic, industry) = STRINGS_KEYS.fields(row.as_ref());
            if allowed.contains(&ReferenceKey::new(topic, subtopic, industry)) {
                return None;
            }
            Some(ValidationError {
                row_index,
                message: MISSING_COMBINATION.to_string(),
                fields: KeyFields {
                    topic: topic.to_string(),
                    subtopic: subtopic.to_string(),
                    industry: industry.to_string(),
                },
            })
        })
        .collect();

    tracing::debug!(
        strings = strings_rows.len(),
        classifications = allowed.len(),
        invalid = errors.len(),
        "cross-validated strings"
    );

    ValidationResult::from_errors(errors)
}
