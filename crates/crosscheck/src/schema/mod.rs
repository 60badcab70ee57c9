//! Canonical schemas, header aliases, detection and canonicalization.

mod alias;
mod canonical;
mod classify;
mod types;

pub use alias::{normalize_token, resolve};
pub use canonical::{canonicalize, conform_row, header_index, CanonicalRow};
pub use classify::{classify, resolved_columns};
pub use types::{Column, Schema, SchemaHint};
