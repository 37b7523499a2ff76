//! Forgiving field deserializers for catalog documents.
//!
//! Catalog text is hand-authored, so a field may be missing, `null`, a number
//! where text was expected, or a bare string where a list was expected. These
//! helpers coerce all of that instead of rejecting the record. Record lists
//! drop a bad element instead of the whole list.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Deserialize any JSON value into display text. Use with `#[serde(default)]`.
pub(crate) fn text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value_to_text(&value))
}

/// Deserialize any JSON value into a list of non-empty strings.
pub(crate) fn list<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Array(items) => items
            .iter()
            .map(value_to_text)
            .filter(|item| !item.is_empty())
            .collect(),
        other => {
            let single = value_to_text(&other);
            if single.is_empty() { vec![] } else { vec![single] }
        }
    })
}

/// Deserialize a flag that may arrive as a bool, a string, or a number.
pub(crate) fn flag<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Bool(b) => b,
        Value::String(s) => matches!(s.trim().to_lowercase().as_str(), "true" | "yes" | "1"),
        Value::Number(n) => n.as_f64().is_some_and(|n| n != 0.0),
        Value::Null | Value::Array(_) | Value::Object(_) => false,
    })
}

/// Deserialize a list of records, skipping any element that is not a valid record.
pub(crate) fn records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = Value::deserialize(deserializer)?;
    Ok(records_from_value(value))
}

/// Records of an already-parsed list. `null` and non-list values yield nothing.
pub(crate) fn records_from_value<T: DeserializeOwned>(value: Value) -> Vec<T> {
    let items = match value {
        Value::Array(items) => items,
        Value::Null => return vec![],
        other => {
            tracing::warn!("Expected a list of records, found {}", kind(&other));
            return vec![];
        }
    };

    items
        .into_iter()
        .enumerate()
        .filter_map(|(position, item)| match serde_json::from_value(item) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!("Skipping record {}: {}", position, e);
                None
            }
        })
        .collect()
}

const fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "a list",
        Value::Object(_) => "an object",
    }
}

fn value_to_text(value: &Value) -> String {
    match value {
        Value::Null | Value::Object(_) => String::new(),
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Array(items) => items
            .iter()
            .map(value_to_text)
            .filter(|item| !item.is_empty())
            .collect::<Vec<_>>()
            .join(" "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;
    use rstest::rstest;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Record {
        #[serde(default, deserialize_with = "text")]
        title: String,
        #[serde(default, deserialize_with = "list")]
        topics: Vec<String>,
        #[serde(default, deserialize_with = "flag")]
        free: bool,
    }

    fn parse(json: &str) -> Record {
        serde_json::from_str(json).unwrap()
    }

    #[rstest]
    #[case(r#"{}"#, "")]
    #[case(r#"{"title": null}"#, "")]
    #[case(r#"{"title": "Docker"}"#, "Docker")]
    #[case(r#"{"title": 42}"#, "42")]
    #[case(r#"{"title": true}"#, "true")]
    #[case(r#"{"title": ["Rust", null, "Book"]}"#, "Rust Book")]
    #[case(r#"{"title": {"nested": "x"}}"#, "")]
    fn test_text_coercion(#[case] json: &str, #[case] expected: &str) {
        check!(parse(json).title == expected);
    }

    #[rstest]
    #[case(r#"{}"#, &[])]
    #[case(r#"{"topics": null}"#, &[])]
    #[case(r#"{"topics": "Docker"}"#, &["Docker"])]
    #[case(r#"{"topics": ["TCP/IP", "", 7]}"#, &["TCP/IP", "7"])]
    fn test_list_coercion(#[case] json: &str, #[case] expected: &[&str]) {
        check!(parse(json).topics == expected);
    }

    #[rstest]
    #[case(r#"{"free": true}"#, true)]
    #[case(r#"{"free": "yes"}"#, true)]
    #[case(r#"{"free": 0}"#, false)]
    #[case(r#"{}"#, false)]
    fn test_flag_coercion(#[case] json: &str, #[case] expected: bool) {
        check!(parse(json).free == expected);
    }

    #[derive(Debug, Deserialize)]
    struct Shelf {
        #[serde(default, deserialize_with = "records")]
        books: Vec<Record>,
    }

    #[rstest]
    #[case(r#"{}"#, &[])]
    #[case(r#"{"books": null}"#, &[])]
    #[case(r#"{"books": "Rust Book"}"#, &[])]
    #[case(r#"{"books": {"title": "Rust Book"}}"#, &[])]
    #[case(r#"{"books": [{"title": "Rust Book"}, null, "oops", 3, {"title": 7}]}"#, &["Rust Book", "7"])]
    fn test_records_skip_bad_elements(#[case] json: &str, #[case] expected: &[&str]) {
        let shelf: Shelf = serde_json::from_str(json).unwrap();
        let titles: Vec<&str> = shelf.books.iter().map(|book| book.title.as_str()).collect();
        check!(titles == expected);
    }
}
