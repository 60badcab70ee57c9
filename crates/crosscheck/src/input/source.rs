//! Metadata about an ingested upload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use super::dialect::Dialect;

/// Metadata about the source bytes of one ingestion.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceMetadata {
    /// SHA-256 hash of the raw bytes.
    pub hash: String,
    /// Upload size in bytes.
    pub size_bytes: u64,
    /// Detected format (csv, tsv, etc.).
    pub format: String,
    /// Detected encoding.
    pub encoding: String,
    /// Detected delimiter.
    pub delimiter: char,
    /// Whether a `sep=` directive line was removed.
    pub directive_stripped: bool,
    /// Raw header tokens as they appeared.
    pub raw_headers: Vec<String>,
    /// Number of data rows (excluding header).
    pub row_count: usize,
    /// When the ingestion was performed.
    pub ingested_at: DateTime<Utc>,
}

impl SourceMetadata {
    /// Describe `bytes` after sniffing and tokenizing them.
    pub fn new(
        bytes: &[u8],
        dialect: &Dialect,
        raw_headers: Vec<String>,
        row_count: usize,
    ) -> Self {
        Self {
            hash: content_hash(bytes),
            size_bytes: bytes.len() as u64,
            format: dialect.format().to_string(),
            encoding: dialect.encoding.clone(),
            delimiter: dialect.delimiter,
            directive_stripped: dialect.directive_stripped,
            raw_headers,
            row_count,
            ingested_at: Utc::now(),
        }
    }
}

/// `sha256:<hex>` digest of the given bytes.
pub fn content_hash(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    format!("sha256:{:x}", hasher.finalize())
}
