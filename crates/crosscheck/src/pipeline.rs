//! Upload ingestion: bytes in, canonical table out.

use std::path::Path;

use serde::Serialize;

use crate::error::{CrosscheckError, Result};
use crate::input::{sniff, tokenize, SourceMetadata};
use crate::schema::{canonicalize, classify, CanonicalRow, Schema, SchemaHint};

/// A canonicalized upload.
#[derive(Debug, Clone, Serialize)]
pub struct Ingested {
    /// Schema the rows conform to.
    #[serde(rename = "type")]
    pub schema: Schema,
    /// Canonical header labels of `schema`.
    pub headers: Vec<String>,
    /// Canonical rows, each exactly `headers.len()` long.
    pub rows: Vec<CanonicalRow>,
    /// Dialect and size information about the upload.
    #[serde(skip)]
    pub source: SourceMetadata,
}

/// Decode, tokenize and canonicalize an upload.
///
/// An explicit hint forces the schema. With [`SchemaHint::Auto`] the headers
/// are classified, and unrecognized headers fail with
/// [`CrosscheckError::SchemaUndetected`].
pub fn ingest(bytes: &[u8], hint: SchemaHint) -> Result<Ingested> {
    let (text, dialect) = sniff(bytes)?;
    let raw = tokenize(&text, dialect.delimiter)?;

    let schema = match hint.forced() {
        Some(schema) => schema,
        None => classify(&raw.headers).ok_or_else(|| CrosscheckError::SchemaUndetected {
            received_headers: raw.headers.clone(),
            expected_strings: Schema::Strings.headers(),
            expected_classifications: Schema::Classifications.headers(),
        })?,
    };

    let rows = canonicalize(schema, &raw.headers, &raw.rows);
    tracing::debug!(
        schema = %schema,
        hint = %hint,
        rows = rows.len(),
        "ingested upload"
    );

    let source = SourceMetadata::new(bytes, &dialect, raw.headers, raw.rows.len());
    Ok(Ingested {
        schema,
        headers: schema.headers(),
        rows,
        source,
    })
}

/// Read a file from disk and [`ingest`] it.
pub fn ingest_file(path: impl AsRef<Path>, hint: SchemaHint) -> Result<Ingested> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|e| CrosscheckError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;
    ingest(&bytes, hint)
}
