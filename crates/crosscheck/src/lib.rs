//! Crosscheck: CSV ingestion and cross-table validation for strings and
//! classifications tables.
//!
//! Uploaded CSV files arrive in whatever dialect a spreadsheet produced.
//! Crosscheck decodes them, sniffs the delimiter, maps loosely spelled
//! headers onto one of two fixed schemas, and checks that every strings row
//! references a (Topic, Subtopic, Industry) combination that exists in the
//! classifications table.
//!
//! # Pipeline
//!
//! - **Sniff**: byte-order marks, `sep=` directive line, delimiter
//! - **Tokenize**: quoted fields, blank lines, ragged rows
//! - **Classify**: strings, classifications, or neither
//! - **Canonicalize**: fixed column order, missing fields as empty strings
//! - **Validate**: referential check across the two tables
//! - **Export**: RFC 4180 CSV back out
//!
//! # Example
//!
//! ```
//! use crosscheck::{ingest, validate, Schema, SchemaHint};
//!
//! let classes = b"Topic,Subtopic,Industry,Classification\nA,A1,X,allow";
//! let strings = b"tier;industry;topic;sub_topic;prompt\n1;x;a;a1;hello";
//!
//! let classes = ingest(classes, SchemaHint::Auto).unwrap();
//! let strings = ingest(strings, SchemaHint::Auto).unwrap();
//!
//! assert_eq!(classes.schema, Schema::Classifications);
//! assert_eq!(strings.schema, Schema::Strings);
//! assert!(validate(&strings.rows, &classes.rows).valid);
//! ```

pub mod error;
pub mod input;
pub mod output;
pub mod schema;
pub mod store;
pub mod validation;

mod pipeline;

pub use error::{CrosscheckError, Result};
pub use input::{RawTable, SourceMetadata};
pub use output::{export, serialize, Export};
pub use pipeline::{ingest, ingest_file, Ingested};
pub use schema::{CanonicalRow, Column, Schema, SchemaHint};
pub use store::{SaveOutcome, TableStore};
pub use validation::{validate, KeyFields, ValidationError, ValidationResult};
