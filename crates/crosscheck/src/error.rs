//! Error types for the crosscheck library.

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for crosscheck operations.
#[derive(Debug, Error)]
pub enum CrosscheckError {
    /// Error reading or accessing a file.
    #[error("IO error for '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The upload bytes are not valid text in the detected encoding.
    #[error("Could not decode input as {encoding}: {message}")]
    Decode {
        encoding: &'static str,
        message: String,
    },

    /// Unbalanced or otherwise broken quoting.
    #[error("Malformed CSV at line {line}: {message}")]
    MalformedCsv { line: usize, message: String },

    /// Auto-detection could not match the headers to either schema.
    #[error("Could not detect CSV type from headers: {}", .received_headers.join(", "))]
    SchemaUndetected {
        received_headers: Vec<String>,
        expected_strings: Vec<String>,
        expected_classifications: Vec<String>,
    },

    /// A schema hint or schema name that is not recognized.
    #[error("Invalid type: {0}")]
    InvalidHint(String),
}

/// Result type alias for crosscheck operations.
pub type Result<T> = std::result::Result<T, CrosscheckError>;
