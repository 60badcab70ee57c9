//! Fuzz target for upload ingestion.
//!
//! Sniffing, tokenizing and canonicalizing must never panic, and any
//! successful ingest must produce full-width rows.

#![no_main]

use crosscheck::{ingest, SchemaHint};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() > 100_000 {
        return;
    }

    for hint in [SchemaHint::Auto, SchemaHint::Strings, SchemaHint::Classifications] {
        if let Ok(ingested) = ingest(data, hint) {
            let width = ingested.schema.column_count();
            assert!(ingested.rows.iter().all(|r| r.len() == width));
        }
    }
});
