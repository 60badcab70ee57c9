//! Canonical columns and the two table schemas.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CrosscheckError;

/// A canonical column label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Column {
    Tier,
    Industry,
    Topic,
    Subtopic,
    Prefix,
    #[serde(rename = "Fuzzing-Idx")]
    FuzzingIdx,
    Prompt,
    Risks,
    Keywords,
    Classification,
}

impl Column {
    /// The label used in canonical headers and exported CSV.
    pub fn label(&self) -> &'static str {
        match self {
            Column::Tier => "Tier",
            Column::Industry => "Industry",
            Column::Topic => "Topic",
            Column::Subtopic => "Subtopic",
            Column::Prefix => "Prefix",
            Column::FuzzingIdx => "Fuzzing-Idx",
            Column::Prompt => "Prompt",
            Column::Risks => "Risks",
            Column::Keywords => "Keywords",
            Column::Classification => "Classification",
        }
    }
}

impl fmt::Display for Column {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const STRINGS_COLUMNS: &[Column] = &[
    Column::Tier,
    Column::Industry,
    Column::Topic,
    Column::Subtopic,
    Column::Prefix,
    Column::FuzzingIdx,
    Column::Prompt,
    Column::Risks,
    Column::Keywords,
];

const CLASSIFICATIONS_COLUMNS: &[Column] = &[
    Column::Topic,
    Column::Subtopic,
    Column::Industry,
    Column::Classification,
];

/// One of the two known table layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Schema {
    /// Tier, Industry, Topic, Subtopic, Prefix, Fuzzing-Idx, Prompt, Risks, Keywords.
    Strings,
    /// Topic, Subtopic, Industry, Classification.
    Classifications,
}

impl Schema {
    /// Canonical columns in their fixed order.
    pub fn columns(&self) -> &'static [Column] {
        match self {
            Schema::Strings => STRINGS_COLUMNS,
            Schema::Classifications => CLASSIFICATIONS_COLUMNS,
        }
    }

    /// Canonical header labels in order.
    pub fn headers(&self) -> Vec<String> {
        self.columns().iter().map(|c| c.label().to_string()).collect()
    }

    /// Number of fields in every canonical row of this schema.
    pub fn column_count(&self) -> usize {
        self.columns().len()
    }

    /// Position of a column within this schema, if it belongs to it.
    pub fn position(&self, column: Column) -> Option<usize> {
        self.columns().iter().position(|&c| c == column)
    }

    /// Lowercase name used for hints, routes and export filenames.
    pub fn name(&self) -> &'static str {
        match self {
            Schema::Strings => "strings",
            Schema::Classifications => "classifications",
        }
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Schema {
    type Err = CrosscheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "strings" => Ok(Schema::Strings),
            "classifications" => Ok(Schema::Classifications),
            _ => Err(CrosscheckError::InvalidHint(s.to_string())),
        }
    }
}

/// Caller-declared schema for an upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SchemaHint {
    /// Run header classification.
    #[default]
    Auto,
    Strings,
    Classifications,
}

impl SchemaHint {
    /// The forced schema, or `None` for auto-detection.
    pub fn forced(&self) -> Option<Schema> {
        match self {
            SchemaHint::Auto => None,
            SchemaHint::Strings => Some(Schema::Strings),
            SchemaHint::Classifications => Some(Schema::Classifications),
        }
    }
}

impl FromStr for SchemaHint {
    type Err = CrosscheckError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "auto" => Ok(SchemaHint::Auto),
            other => other.parse::<Schema>().map(SchemaHint::from),
        }
    }
}

impl From<Schema> for SchemaHint {
    fn from(schema: Schema) -> Self {
        match schema {
            Schema::Strings => SchemaHint::Strings,
            Schema::Classifications => SchemaHint::Classifications,
        }
    }
}

impl fmt::Display for SchemaHint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.forced() {
            Some(schema) => f.write_str(schema.name()),
            None => f.write_str("auto"),
        }
    }
}
