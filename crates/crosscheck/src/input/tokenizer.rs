//! RFC 4180 style tokenizer producing raw header and data rows.

use std::iter::Peekable;
use std::str::Chars;

use crate::error::{CrosscheckError, Result};

/// Header and data rows exactly as they appeared in an upload.
///
/// Rows are not required to match the header length.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawTable {
    /// Header tokens of the first row.
    pub headers: Vec<String>,
    /// Data rows following the header.
    pub rows: Vec<Vec<String>>,
}

impl RawTable {
    /// Create a new raw table.
    pub fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Self {
        Self { headers, rows }
    }

    /// Number of data rows (excluding header).
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// True when the input contained no records at all.
    pub fn is_empty(&self) -> bool {
        self.headers.is_empty() && self.rows.is_empty()
    }
}

/// Split `text` into records using `delimiter`.
///
/// Quoted fields may contain delimiters, line breaks and doubled quotes.
/// Unquoted fields are trimmed; whitespace-only lines are skipped. The first
/// record becomes the header row. Empty input yields an empty table.
pub fn tokenize(text: &str, delimiter: char) -> Result<RawTable> {
    let mut records = Tokenizer::new(text, delimiter).records()?.into_iter();

    match records.next() {
        Some(headers) => Ok(RawTable::new(headers, records.collect())),
        None => Ok(RawTable::default()),
    }
}

struct Tokenizer<'a> {
    chars: Peekable<Chars<'a>>,
    delimiter: char,
    line: usize,
    record: Vec<String>,
    field: String,
    quoted: bool,
    blank: bool,
}

impl<'a> Tokenizer<'a> {
    fn new(text: &'a str, delimiter: char) -> Self {
        Self {
            chars: text.chars().peekable(),
            delimiter,
            line: 1,
            record: Vec::new(),
            field: String::new(),
            quoted: false,
            blank: true,
        }
    }

    fn records(mut self) -> Result<Vec<Vec<String>>> {
        let mut records = Vec::new();

        while let Some(c) = self.chars.next() {
            match c {
                '"' if !self.quoted && self.field.trim().is_empty() => {
                    self.read_quoted()?;
                }
                c if c == self.delimiter => {
                    self.blank = false;
                    self.end_field();
                }
                '\r' | '\n' => {
                    if c == '\r' && self.chars.peek() == Some(&'\n') {
                        self.chars.next();
                    }
                    self.line += 1;
                    if let Some(record) = self.end_record() {
                        records.push(record);
                    }
                }
                c => {
                    if !c.is_whitespace() {
                        self.blank = false;
                    }
                    self.field.push(c);
                }
            }
        }

        if let Some(record) = self.end_record() {
            records.push(record);
        }
        Ok(records)
    }

    /// Consume a quoted field after its opening quote, then any whitespace
    /// up to the next delimiter or line break.
    fn read_quoted(&mut self) -> Result<()> {
        let opened_at = self.line;
        self.field.clear();
        self.quoted = true;
        self.blank = false;

        loop {
            match self.chars.next() {
                None => {
                    return Err(CrosscheckError::MalformedCsv {
                        line: opened_at,
                        message: "unterminated quoted field".to_string(),
                    });
                }
                Some('"') => {
                    if self.chars.peek() == Some(&'"') {
                        self.chars.next();
                        self.field.push('"');
                    } else {
                        break;
                    }
                }
                Some(ch) => {
                    if ch == '\n' {
                        self.line += 1;
                    }
                    self.field.push(ch);
                }
            }
        }

        while let Some(&next) = self.chars.peek() {
            if next == self.delimiter || next == '\n' || next == '\r' {
                break;
            }
            if !next.is_whitespace() {
                return Err(CrosscheckError::MalformedCsv {
                    line: self.line,
                    message: format!("unexpected character {next:?} after closing quote"),
                });
            }
            self.chars.next();
        }
        Ok(())
    }

    fn end_field(&mut self) {
        let field = std::mem::take(&mut self.field);
        let value = if self.quoted {
            field
        } else {
            field.trim().to_string()
        };
        self.record.push(value);
        self.quoted = false;
    }

    fn end_record(&mut self) -> Option<Vec<String>> {
        let blank = std::mem::replace(&mut self.blank, true);
        if blank {
            self.field.clear();
            self.record.clear();
            return None;
        }
        self.end_field();
        Some(std::mem::take(&mut self.record))
    }
}
