//! Header normalization and the alias table.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::types::Column;

/// Normalized header token to canonical column.
///
/// Keys are already passed through [`normalize_token`], so one entry covers
/// every spelling that differs only in case, spacing, underscores, hyphens or
/// punctuation ("SubTopic", "sub_topic", "Sub-Topic" all land on `subtopic`).
static HEADER_ALIASES: Lazy<HashMap<&'static str, Column>> = Lazy::new(|| {
    HashMap::from([
        ("tier", Column::Tier),
        ("tiers", Column::Tier),
        ("industry", Column::Industry),
        ("industries", Column::Industry),
        ("topic", Column::Topic),
        ("topics", Column::Topic),
        ("subtopic", Column::Subtopic),
        ("subtopics", Column::Subtopic),
        ("prefix", Column::Prefix),
        ("prefixes", Column::Prefix),
        ("fuzzingidx", Column::FuzzingIdx),
        ("fuzzidx", Column::FuzzingIdx),
        ("fuzzindex", Column::FuzzingIdx),
        ("fuzzingindex", Column::FuzzingIdx),
        ("prompt", Column::Prompt),
        ("prompts", Column::Prompt),
        ("risks", Column::Risks),
        ("risk", Column::Risks),
        ("keywords", Column::Keywords),
        ("keyword", Column::Keywords),
        ("classification", Column::Classification),
        ("classifications", Column::Classification),
    ])
});

/// Reduce a raw header to its comparison token.
///
/// Strips byte-order marks, trims, lowercases, and drops whitespace,
/// underscores, hyphens and any other non-alphanumeric character.
pub fn normalize_token(raw: &str) -> String {
    raw.replace('\u{feff}', "")
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .collect()
}

/// Map a raw header to its canonical column.
///
/// Unrecognized headers return `None`; callers drop those columns.
pub fn resolve(raw: &str) -> Option<Column> {
    HEADER_ALIASES.get(normalize_token(raw).as_str()).copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_token() {
        assert_eq!(normalize_token("  Sub_Topic "), "subtopic");
        assert_eq!(normalize_token("\u{feff}Tier"), "tier");
        assert_eq!(normalize_token("Fuzzing - Idx"), "fuzzingidx");
        assert_eq!(normalize_token("Keywords (comma separated)"), "keywordscommaseparated");
        assert_eq!(normalize_token("Risk#"), "risk");
        assert_eq!(normalize_token(""), "");
    }

    #[test]
    fn test_subtopic_aliases() {
        for raw in ["Subtopic", "SubTopic", "sub_topic", "Sub-Topic", "subtopics", "SUB TOPIC"] {
            assert_eq!(resolve(raw), Some(Column::Subtopic), "alias {raw:?}");
        }
    }

    #[test]
    fn test_fuzzing_idx_aliases() {
        for raw in [
            "Fuzzing-Idx",
            "fuzzing_idx",
            "fuzzing idx",
            "FuzzIdx",
            "Fuzz Index",
            "fuzzing-index",
        ] {
            assert_eq!(resolve(raw), Some(Column::FuzzingIdx), "alias {raw:?}");
        }
    }

    #[test]
    fn test_singular_and_plural() {
        assert_eq!(resolve("Risk"), resolve("Risks"));
        assert_eq!(resolve("Keyword"), resolve("Keywords"));
        assert_eq!(resolve("Topic"), resolve("Topics"));
        assert_eq!(resolve("Industry"), resolve("Industries"));
        assert_eq!(resolve("Prefix"), resolve("Prefixes"));
        assert_eq!(resolve("Classification"), Some(Column::Classification));
        assert_eq!(resolve("Classifications"), Some(Column::Classification));
    }

    #[test]
    fn test_unknown_header() {
        assert_eq!(resolve("Invalid"), None);
        assert_eq!(resolve(""), None);
        assert_eq!(resolve("Category"), None);
    }
}
