//! Property-based tests for the ingestion pipeline.
//!
//! # Running Property Tests
//!
//! ```bash
//! cargo test -p crosscheck --test property_tests
//!
//! # More cases
//! PROPTEST_CASES=10000 cargo test -p crosscheck --test property_tests
//! ```

use proptest::prelude::*;

use crosscheck::input::tokenize;
use crosscheck::schema::{canonicalize, classify, resolve, Column};
use crosscheck::{ingest, serialize, validate, Schema, SchemaHint};

// =============================================================================
// Test Strategies
// =============================================================================

/// Field values including every character that forces quoting.
fn field_value() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ,;|\"\t\r\n\\-]{0,12}"
}

fn canonical_rows(schema: Schema) -> impl Strategy<Value = Vec<Vec<String>>> {
    prop::collection::vec(
        prop::collection::vec(field_value(), schema.column_count()),
        0..8,
    )
}

fn any_schema() -> impl Strategy<Value = Schema> {
    prop_oneof![Just(Schema::Strings), Just(Schema::Classifications)]
}

/// Canonical labels and the plain-word aliases that map to them.
const ALIAS_BASES: &[(&str, Column)] = &[
    ("tier", Column::Tier),
    ("industry", Column::Industry),
    ("industries", Column::Industry),
    ("topic", Column::Topic),
    ("topics", Column::Topic),
    ("subtopic", Column::Subtopic),
    ("subtopics", Column::Subtopic),
    ("prefix", Column::Prefix),
    ("fuzzingidx", Column::FuzzingIdx),
    ("fuzzindex", Column::FuzzingIdx),
    ("prompt", Column::Prompt),
    ("risk", Column::Risks),
    ("risks", Column::Risks),
    ("keyword", Column::Keywords),
    ("keywords", Column::Keywords),
    ("classification", Column::Classification),
    ("classifications", Column::Classification),
];

/// A base alias rewritten with random casing and separators.
fn decorated_alias() -> impl Strategy<Value = (String, Column)> {
    prop::sample::select(ALIAS_BASES).prop_flat_map(|(base, column)| {
        let n = base.len();
        (
            prop::collection::vec(
                (any::<bool>(), prop::sample::select(vec!["", "", "_", "-", " "])),
                n,
            ),
            "[ \t]{0,2}",
            "[ \t]{0,2}",
        )
            .prop_map(move |(decor, lead, trail)| {
                let mut out = lead;
                for (ch, (upper, sep)) in base.chars().zip(decor) {
                    out.push(if upper { ch.to_ascii_uppercase() } else { ch });
                    out.push_str(sep);
                }
                out.push_str(&trail);
                (out, column)
            })
    })
}

/// A value with random ASCII case and surrounding whitespace.
fn case_and_pad(value: String) -> impl Strategy<Value = String> {
    (
        prop::collection::vec(any::<bool>(), value.len()),
        "[ ]{0,2}",
        "[ ]{0,2}",
    )
        .prop_map(move |(flips, lead, trail)| {
            let body: String = value
                .chars()
                .zip(flips)
                .map(|(c, up)| if up { c.to_ascii_uppercase() } else { c.to_ascii_lowercase() })
                .collect();
            format!("{lead}{body}{trail}")
        })
}

// =============================================================================
// Serializer / Tokenizer
// =============================================================================

proptest! {
    /// Serialized canonical rows tokenize back to the same fields.
    #[test]
    fn serialize_then_tokenize_round_trips(
        (schema, rows) in any_schema().prop_flat_map(|s| (Just(s), canonical_rows(s)))
    ) {
        let headers = schema.headers();
        let text = serialize(&headers, &rows);
        let table = tokenize(&text, ',').unwrap();

        prop_assert_eq!(table.headers, headers);
        prop_assert_eq!(table.rows, rows);
    }

    /// Ingesting an export yields the exported rows, trimmed.
    #[test]
    fn export_then_ingest_round_trips(
        (schema, rows) in any_schema().prop_flat_map(|s| (Just(s), canonical_rows(s)))
    ) {
        let text = serialize(&schema.headers(), &rows);
        let ingested = ingest(text.as_bytes(), SchemaHint::Auto).unwrap();

        let expected: Vec<Vec<String>> = rows
            .iter()
            .map(|r| r.iter().map(|v| v.trim().to_string()).collect())
            .collect();
        prop_assert_eq!(ingested.schema, schema);
        prop_assert_eq!(ingested.rows, expected);
    }

    /// Ingestion never panics, whatever the bytes.
    #[test]
    fn ingest_never_panics(bytes in prop::collection::vec(any::<u8>(), 0..300)) {
        let _ = ingest(&bytes, SchemaHint::Auto);
        let _ = ingest(&bytes, SchemaHint::Strings);
    }
}

// =============================================================================
// Header Normalizer / Classifier / Canonicalizer
// =============================================================================

proptest! {
    /// Case, separators and padding never change what a header resolves to.
    #[test]
    fn decorated_aliases_resolve((raw, column) in decorated_alias()) {
        prop_assert_eq!(resolve(&raw), Some(column));
    }

    /// Canonical headers always classify as their own schema.
    #[test]
    fn canonical_headers_classify(schema in any_schema(), extra in "[A-Za-z]{0,8}") {
        let mut headers = schema.headers();
        headers.push(extra);
        prop_assert_eq!(classify(&headers), Some(schema));
    }

    /// Canonical rows pass through canonicalization unchanged (after trim).
    #[test]
    fn canonicalize_is_idempotent(
        (schema, rows) in any_schema().prop_flat_map(|s| (Just(s), canonical_rows(s)))
    ) {
        let headers = schema.headers();
        let once = canonicalize(schema, &headers, &rows);
        let twice = canonicalize(schema, &headers, &once);
        prop_assert_eq!(&once, &twice);
        prop_assert!(once.iter().all(|r| r.len() == schema.column_count()));
    }

    /// Output rows are full width whatever the input row lengths.
    #[test]
    fn canonical_rows_are_rectangular(
        schema in any_schema(),
        rows in prop::collection::vec(prop::collection::vec(field_value(), 0..14), 0..6),
    ) {
        let out = canonicalize(schema, &Schema::Strings.headers(), &rows);
        prop_assert_eq!(out.len(), rows.len());
        prop_assert!(out.iter().all(|r| r.len() == schema.column_count()));
    }
}

// =============================================================================
// Cross-Validator
// =============================================================================

proptest! {
    /// A strings row built from a classification key validates regardless
    /// of case and padding.
    #[test]
    fn matching_keys_validate(
        (topic, subtopic, industry, t, s, i) in ("[a-z]{1,6}", "[a-z0-9]{1,6}", "[a-z]{1,6}")
            .prop_flat_map(|(t, s, i)| {
                (
                    Just(t.clone()),
                    Just(s.clone()),
                    Just(i.clone()),
                    case_and_pad(t),
                    case_and_pad(s),
                    case_and_pad(i),
                )
            })
    ) {
        let classifications = vec![vec![topic, subtopic, industry, "allow".to_string()]];
        let strings = vec![vec![
            "1".to_string(), i, t, s,
            String::new(), String::new(), String::new(), String::new(), String::new(),
        ]];
        prop_assert!(validate(&strings, &classifications).valid);
    }

    /// Invalid indices are exactly the error row indices, ascending.
    #[test]
    fn invalid_indices_match_errors(
        classes in prop::collection::vec(prop::collection::vec("[ab]", 4), 0..4),
        strings in prop::collection::vec(prop::collection::vec("[ab]", 9), 0..10),
    ) {
        let result = validate(&strings, &classes);
        let from_errors: Vec<usize> = result.errors.iter().map(|e| e.row_index).collect();
        prop_assert_eq!(&result.invalid_indices, &from_errors);
        prop_assert!(from_errors.windows(2).all(|w| w[0] < w[1]));
        prop_assert_eq!(result.valid, result.errors.is_empty());
    }
}
