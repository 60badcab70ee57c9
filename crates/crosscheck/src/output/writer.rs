//! CSV text serialization.

use std::borrow::Cow;

/// Whether a value must be quoted to survive tokenizing unchanged.
///
/// Quotes are needed for commas, double quotes, line breaks, and any value
/// with leading or trailing whitespace (unquoted fields are trimmed).
fn needs_quotes(value: &str) -> bool {
    value.contains([',', '"', '\r', '\n'])
        || value.starts_with(char::is_whitespace)
        || value.ends_with(char::is_whitespace)
}

/// Quote and escape a single field if required.
pub fn escape_field(value: &str) -> Cow<'_, str> {
    if needs_quotes(value) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

fn write_line<V: AsRef<str>>(out: &mut String, fields: &[V]) {
    for (i, field) in fields.iter().enumerate() {
        if i > 0 {
            out.push(',');
        }
        out.push_str(&escape_field(field.as_ref()));
    }
}

/// Serialize a header row and data rows as comma-delimited CSV.
///
/// Lines are separated by a single `\n`; there is no newline after the
/// last line.
pub fn serialize<H, R>(headers: &[H], rows: &[R]) -> String
where
    H: AsRef<str>,
    R: AsRef<[String]>,
{
    let mut out = String::new();
    write_line(&mut out, headers);
    for row in rows {
        out.push('\n');
        write_line(&mut out, row.as_ref());
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_field() {
        assert_eq!(escape_field("plain"), "plain");
        assert_eq!(escape_field(""), "");
        assert_eq!(escape_field("a,b"), "\"a,b\"");
        assert_eq!(escape_field("say \"hi\""), "\"say \"\"hi\"\"\"");
        assert_eq!(escape_field("two\nlines"), "\"two\nlines\"");
        assert_eq!(escape_field("cr\r"), "\"cr\r\"");
        assert_eq!(escape_field(" lead"), "\" lead\"");
        assert_eq!(escape_field("trail\t"), "\"trail\t\"");
        assert_eq!(escape_field("in side"), "in side");
    }

    #[test]
    fn test_serialize() {
        let headers = ["Tier", "Industry"];
        let rows = vec![
            vec!["1".to_string(), "X".to_string()],
            vec!["2".to_string(), "Contains, comma".to_string()],
        ];
        assert_eq!(
            serialize(&headers, &rows),
            "Tier,Industry\n1,X\n2,\"Contains, comma\""
        );
    }

    #[test]
    fn test_serialize_no_rows() {
        let rows: Vec<Vec<String>> = Vec::new();
        assert_eq!(serialize(&["a", "b"], &rows), "a,b");
    }
}
