//! In-memory holder for the two canonical tables.

use serde::Serialize;

use crate::output::{export, Export};
use crate::schema::{conform_row, CanonicalRow, Schema};
use crate::validation::{validate, ValidationResult};

/// Result of a save request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "validation", rename_all = "snake_case")]
pub enum SaveOutcome {
    /// Rows replaced the stored table.
    Saved,
    /// Strings rows referenced missing classifications; nothing was stored.
    RejectedWithValidation(ValidationResult),
}

impl SaveOutcome {
    /// True when the rows were stored.
    pub fn is_saved(&self) -> bool {
        matches!(self, SaveOutcome::Saved)
    }
}

/// Both canonical tables. Every `set` replaces a whole table.
#[derive(Debug, Clone, Default)]
pub struct TableStore {
    strings: Vec<CanonicalRow>,
    classifications: Vec<CanonicalRow>,
}

impl TableStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current rows of a table.
    pub fn get(&self, schema: Schema) -> &[CanonicalRow] {
        match schema {
            Schema::Strings => &self.strings,
            Schema::Classifications => &self.classifications,
        }
    }

    /// Replace a table. Values are trimmed and each row is fitted to the
    /// schema's column count.
    pub fn set<R: AsRef<[String]>>(&mut self, schema: Schema, rows: &[R]) {
        let rows: Vec<CanonicalRow> = rows
            .iter()
            .map(|row| conform_row(schema, row.as_ref()))
            .collect();
        tracing::debug!(table = %schema, rows = rows.len(), "replaced table");

        match schema {
            Schema::Strings => self.strings = rows,
            Schema::Classifications => self.classifications = rows,
        }
    }

    /// Validate the given strings rows, or the stored ones when `None`,
    /// against the stored classifications.
    pub fn validate(&self, strings_rows: Option<&[CanonicalRow]>) -> ValidationResult {
        let rows = strings_rows.unwrap_or(&self.strings);
        validate(rows, &self.classifications)
    }

    /// Store `rows` for `schema`.
    ///
    /// Strings rows are only stored when every row passes validation against
    /// the stored classifications. Classifications are stored unconditionally.
    pub fn save(&mut self, schema: Schema, rows: &[CanonicalRow]) -> SaveOutcome {
        if schema == Schema::Strings {
            let result = self.validate(Some(rows));
            if !result.valid {
                tracing::info!(invalid = result.error_count(), "rejected strings save");
                return SaveOutcome::RejectedWithValidation(result);
            }
        }
        self.set(schema, rows);
        SaveOutcome::Saved
    }

    /// Serialize a stored table with its canonical headers.
    pub fn export(&self, schema: Schema) -> Export {
        export(schema, &schema.headers(), self.get(schema))
    }
}
