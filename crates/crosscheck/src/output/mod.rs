//! Exporting canonical tables as CSV.

mod writer;

pub use writer::{escape_field, serialize};

use crate::schema::Schema;

/// Media type of exported tables.
pub const CSV_CONTENT_TYPE: &str = "text/csv";

/// A serialized table ready to be delivered as a download.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Export {
    /// Attachment filename, `<schema>.csv`.
    pub filename: String,
    /// Always [`CSV_CONTENT_TYPE`].
    pub content_type: &'static str,
    /// CSV text.
    pub body: String,
}

impl Export {
    /// `Content-Disposition` header value for this download.
    pub fn content_disposition(&self) -> String {
        format!("attachment; filename={}", self.filename)
    }
}

/// Serialize `rows` under `headers` as the download for `schema`.
pub fn export<H, R>(schema: Schema, headers: &[H], rows: &[R]) -> Export
where
    H: AsRef<str>,
    R: AsRef<[String]>,
{
    Export {
        filename: format!("{}.csv", schema.name()),
        content_type: CSV_CONTENT_TYPE,
        body: serialize(headers, rows),
    }
}
