//! Typed value extraction and YAML stream helpers.
//!
//! Helper implementations run after schema validation, so these extractors
//! normally succeed; they still return errors rather than panic so a shape
//! violation can never escape the invoker as anything but an envelope error.

use crate::error::{Error, Result};
use serde_json::Value;

pub fn as_str<'a>(value: &'a Value, parameter: &str) -> Result<&'a str> {
    value
        .as_str()
        .ok_or_else(|| Error::other(format!("'{}' is not a string", parameter)))
}

pub fn as_list<'a>(value: &'a Value, parameter: &str) -> Result<&'a Vec<Value>> {
    value
        .as_array()
        .ok_or_else(|| Error::other(format!("'{}' is not a list", parameter)))
}

pub fn as_bool(value: &Value, parameter: &str) -> Result<bool> {
    value
        .as_bool()
        .ok_or_else(|| Error::other(format!("'{}' is not a boolean", parameter)))
}

/// Extract an integer slice index. Validation guarantees a number; fractional
/// indices are a data-dependent failure.
pub fn as_index(value: &Value, parameter: &str) -> Result<i64> {
    value
        .as_i64()
        .ok_or_else(|| Error::other(format!("'{}' is not an integer", parameter)))
}

/// Split a multi-document YAML stream on `---` markers at line starts.
///
/// Accepts both the compact form this crate emits (`---a: 1`) and the
/// conventional `---\na: 1` form. Chunks that are empty after trimming are
/// dropped, so a trailing marker or blank document does not produce a null.
pub fn split_yaml_documents(input: &str) -> Vec<&str> {
    let body = input.strip_prefix("---").unwrap_or(input);

    body.split("\n---")
        .filter(|chunk| !chunk.trim().is_empty())
        .collect()
}

/// Concatenate YAML document bodies into a multi-document stream, each body
/// prefixed by `---` with no separating newline after the marker.
pub fn join_yaml_documents(bodies: &[String]) -> String {
    let mut out = String::new();
    for body in bodies {
        out.push_str("---");
        out.push_str(body);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn as_str_extracts_string() {
        assert_eq!(as_str(&json!("hi"), "input").unwrap(), "hi");
    }

    #[test]
    fn as_str_rejects_non_string() {
        assert!(as_str(&json!(1), "input").is_err());
    }

    #[test]
    fn as_index_rejects_fractional() {
        assert!(as_index(&json!(1.5), "start").is_err());
        assert_eq!(as_index(&json!(-7), "end").unwrap(), -7);
    }

    #[test]
    fn split_handles_compact_markers() {
        let docs = split_yaml_documents("---a: 1\nb: 2\n---a: 3\nb: 4\n");
        assert_eq!(docs, vec!["a: 1\nb: 2", "a: 3\nb: 4\n"]);
    }

    #[test]
    fn split_handles_conventional_markers() {
        let docs = split_yaml_documents("---\na: 1\n---\na: 2\n");
        assert_eq!(docs.len(), 2);
        assert_eq!(docs[0].trim(), "a: 1");
        assert_eq!(docs[1].trim(), "a: 2");
    }

    #[test]
    fn split_without_markers_is_single_document() {
        assert_eq!(split_yaml_documents("a: 1\n"), vec!["a: 1\n"]);
    }

    #[test]
    fn join_emits_marker_per_document() {
        let out = join_yaml_documents(&["a: 1\n".to_string(), "a: 2\n".to_string()]);
        assert_eq!(out, "---a: 1\n---a: 2\n");
    }
}
