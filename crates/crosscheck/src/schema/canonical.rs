//! Reordering raw rows into canonical column order.

use indexmap::IndexMap;

use super::alias::resolve;
use super::types::{Column, Schema};

/// A row in canonical column order. Its length always equals the owning
/// schema's column count.
pub type CanonicalRow = Vec<String>;

/// Map each canonical column to the index of the first raw header that
/// resolves to it. Later duplicates are ignored.
pub fn header_index<S: AsRef<str>>(raw_headers: &[S]) -> IndexMap<Column, usize> {
    let mut index = IndexMap::new();
    for (i, header) in raw_headers.iter().enumerate() {
        if let Some(column) = resolve(header.as_ref()) {
            index.entry(column).or_insert(i);
        }
    }
    index
}

/// Produce canonical rows for `schema` from raw headers and rows.
///
/// Columns the source lacks, and fields past the end of a short row, become
/// empty strings. Every value is trimmed.
pub fn canonicalize<H, V>(
    schema: Schema,
    raw_headers: &[H],
    raw_rows: &[Vec<V>],
) -> Vec<CanonicalRow>
where
    H: AsRef<str>,
    V: AsRef<str>,
{
    let index = header_index(raw_headers);
    let mapping: Vec<Option<usize>> = schema
        .columns()
        .iter()
        .map(|c| index.get(c).copied())
        .collect();

    raw_rows
        .iter()
        .map(|row| {
            mapping
                .iter()
                .map(|idx| {
                    idx.and_then(|i| row.get(i))
                        .map(|v| v.as_ref().trim().to_string())
                        .unwrap_or_default()
                })
                .collect()
        })
        .collect()
}

/// Fit an externally supplied row to `schema`: trim every value, pad short
/// rows with empty strings and drop fields past the last column.
pub fn conform_row<V: AsRef<str>>(schema: Schema, row: &[V]) -> CanonicalRow {
    (0..schema.column_count())
        .map(|i| {
            row.get(i)
                .map(|v| v.as_ref().trim().to_string())
                .unwrap_or_default()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(data: &[&[&str]]) -> Vec<Vec<String>> {
        data.iter()
            .map(|r| r.iter().map(|s| s.to_string()).collect())
            .collect()
    }

    #[test]
    fn test_canonicalize_strings_in_order() {
        let headers = [
            "Tier", "Industry", "Topic", "SubTopic", "Prefix", "Fuzzing-Idx", "Prompt", "Risks",
            "Keywords",
        ];
        let raw = rows(&[&["1", "X", "A", "A1", "pre", "0", "foo", "low", "bar"]]);
        let out = canonicalize(Schema::Strings, &headers, &raw);
        assert_eq!(out, raw);
    }

    #[test]
    fn test_canonicalize_reorders_and_drops_unknown() {
        let headers = ["Classification", "Notes", "industry", "sub_topic", "TOPIC"];
        let raw = rows(&[&["allow", "ignored", " X ", "A1", "A"]]);
        let out = canonicalize(Schema::Classifications, &headers, &raw);
        assert_eq!(out, rows(&[&["A", "A1", "X", "allow"]]));
    }

    #[test]
    fn test_short_row_fills_empty() {
        let headers = ["Tier", "Industry"];
        let raw = rows(&[&["1", "X", "ExtraField"]]);
        let out = canonicalize(Schema::Strings, &headers, &raw);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].len(), 9);
        assert_eq!(out[0][0], "1");
        assert_eq!(out[0][1], "X");
        assert!(out[0][2..].iter().all(|f| f.is_empty()));
    }

    #[test]
    fn test_row_shorter_than_header() {
        let headers = ["Topic", "Subtopic", "Industry", "Classification"];
        let raw = rows(&[&["A"]]);
        let out = canonicalize(Schema::Classifications, &headers, &raw);
        assert_eq!(out, rows(&[&["A", "", "", ""]]));
    }

    #[test]
    fn test_first_matching_header_wins() {
        let headers = ["Topic", "Topics", "Subtopic", "Industry", "Classification"];
        let raw = rows(&[&["first", "second", "A1", "X", "allow"]]);
        let out = canonicalize(Schema::Classifications, &headers, &raw);
        assert_eq!(out[0][0], "first");
    }

    #[test]
    fn test_canonicalize_is_idempotent() {
        let headers = Schema::Classifications.headers();
        let raw = rows(&[&["A", "A1", "X", "allow"], &["B", "", "Y", ""]]);
        let once = canonicalize(Schema::Classifications, &headers, &raw);
        let twice = canonicalize(Schema::Classifications, &headers, &once);
        assert_eq!(once, raw);
        assert_eq!(twice, once);
    }

    #[test]
    fn test_conform_row() {
        assert_eq!(
            conform_row(Schema::Classifications, &[" A ", "A1"]),
            vec!["A", "A1", "", ""]
        );
        assert_eq!(
            conform_row(Schema::Classifications, &["A", "A1", "X", "allow", "extra"]),
            vec!["A", "A1", "X", "allow"]
        );
    }
}
