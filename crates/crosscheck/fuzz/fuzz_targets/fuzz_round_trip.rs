//! Fuzz target for serializer/tokenizer agreement.
//!
//! Any rows the serializer writes must tokenize back to the same fields.

#![no_main]

use crosscheck::input::tokenize;
use crosscheck::{serialize, Schema};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    let width = Schema::Classifications.column_count();
    let values: Vec<String> = text.split('\u{1f}').map(String::from).collect();
    let rows: Vec<Vec<String>> = values
        .chunks(width)
        .filter(|c| c.len() == width)
        .map(|c| c.to_vec())
        .collect();

    let headers = Schema::Classifications.headers();
    let csv = serialize(&headers, &rows);
    let table = tokenize(&csv, ',').expect("serializer output must tokenize");
    assert_eq!(table.headers, headers);
    assert_eq!(table.rows, rows);
});
