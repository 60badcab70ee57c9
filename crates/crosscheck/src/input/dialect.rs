//! Encoding, directive line and delimiter sniffing.

use encoding_rs::{Encoding, UTF_16LE, UTF_8};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{CrosscheckError, Result};

/// Delimiters to try when detecting, in tie-break order.
const DELIMITERS: &[char] = &[',', ';', '\t', '|'];

const UTF8_BOM: &[u8] = &[0xEF, 0xBB, 0xBF];
const UTF16LE_BOM: &[u8] = &[0xFF, 0xFE];

/// Spreadsheet export hint such as `sep=;`.
static SEP_DIRECTIVE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^sep\s*=\s*\S+").expect("valid directive pattern"));

/// What sniffing learned about an upload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dialect {
    /// Encoding label (`utf-8` or `utf-16le`).
    pub encoding: String,
    /// Field delimiter.
    pub delimiter: char,
    /// Whether a leading `sep=` line was removed.
    pub directive_stripped: bool,
}

impl Dialect {
    /// Short format label derived from the delimiter.
    pub fn format(&self) -> &'static str {
        match self.delimiter {
            ',' => "csv",
            ';' => "csv-semicolon",
            '\t' => "tsv",
            '|' => "psv",
            _ => "delimited",
        }
    }
}

/// Decode raw upload bytes to text.
///
/// A UTF-16LE byte-order mark selects UTF-16LE, anything else is read as
/// UTF-8. The byte-order mark itself is not part of the returned text.
pub fn decode(bytes: &[u8]) -> Result<String> {
    let (encoding, body): (&'static Encoding, &[u8]) = if bytes.starts_with(UTF16LE_BOM) {
        (UTF_16LE, &bytes[UTF16LE_BOM.len()..])
    } else if bytes.starts_with(UTF8_BOM) {
        (UTF_8, &bytes[UTF8_BOM.len()..])
    } else {
        (UTF_8, bytes)
    };

    encoding
        .decode_without_bom_handling_and_without_replacement(body)
        .map(|text| text.into_owned())
        .ok_or_else(|| CrosscheckError::Decode {
            encoding: encoding_label(encoding),
            message: "invalid byte sequence".to_string(),
        })
}

/// Label for the encoding [`decode`] would pick for these bytes.
pub fn detect_encoding(bytes: &[u8]) -> &'static str {
    if bytes.starts_with(UTF16LE_BOM) {
        encoding_label(UTF_16LE)
    } else {
        encoding_label(UTF_8)
    }
}

fn encoding_label(encoding: &'static Encoding) -> &'static str {
    if encoding == UTF_16LE { "utf-16le" } else { "utf-8" }
}

/// Remove a first line of the form `sep=<token>`, if present.
///
/// Returns `None` when there is no directive line, so callers keep the
/// original text untouched.
pub fn strip_directive_line(text: &str) -> Option<&str> {
    let (first, rest) = match text.find('\n') {
        Some(pos) => (&text[..pos], &text[pos + 1..]),
        None => (text, ""),
    };
    let first = first.strip_suffix('\r').unwrap_or(first);

    SEP_DIRECTIVE.is_match(first.trim()).then_some(rest)
}

/// Pick the delimiter from the first non-blank line.
///
/// Counts each candidate and returns the most frequent. Ties go to the
/// earlier candidate in comma, semicolon, tab, pipe order, and a line with
/// none of them yields a comma. Only the header line is inspected and quotes
/// are not interpreted.
///
/// A line is blank here when it is only whitespace, tabs included, since no
/// delimiter is known yet. The tokenizer later keeps a tab-only line as a row
/// of empty fields when tab is the chosen delimiter.
pub fn detect_delimiter(text: &str) -> char {
    let line = text
        .lines()
        .map(str::trim)
        .find(|l| !l.is_empty())
        .unwrap_or("");

    let mut best = ',';
    let mut best_count = 0;
    for &delim in DELIMITERS {
        let count = line.matches(delim).count();
        if count > best_count {
            best = delim;
            best_count = count;
        }
    }
    best
}

/// Decode, strip the directive line and detect the delimiter in one pass.
pub fn sniff(bytes: &[u8]) -> Result<(String, Dialect)> {
    let decoded = decode(bytes)?;
    let (text, directive_stripped) = match strip_directive_line(&decoded) {
        Some(rest) => (rest.to_string(), true),
        None => (decoded, false),
    };
    let delimiter = detect_delimiter(&text);

    tracing::debug!(
        delimiter = ?delimiter,
        directive_stripped,
        "sniffed csv dialect"
    );

    let dialect = Dialect {
        encoding: detect_encoding(bytes).to_string(),
        delimiter,
        directive_stripped,
    };
    Ok((text, dialect))
}
