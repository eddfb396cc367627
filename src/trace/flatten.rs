//! JSON flattening.
//!
//! # Responsibilities
//! - Reduce a nested JSON value to a flat list of dotted-path scalars
//! - Summarize arrays by element count instead of expanding them
//!
//! # Design Decisions
//! - Objects recurse in the document's own key order (serde_json is built
//!   with `preserve_order`)
//! - Arrays emit a single `{path}.count` entry; element recursion would
//!   make trace volume unbounded for large collections
//! - Pure function of its input: re-running it yields identical entries

use serde_json::Value;

use crate::trace::entry::TraceEntry;

/// Flatten a JSON value into (path, scalar) trace entries rooted at
/// `base_path`.
///
/// ```
/// use param_monitor::trace::flatten;
/// use serde_json::json;
///
/// let entries = flatten(&json!({"a": {"b": "x"}}), "request.body");
/// assert_eq!(entries[0].path, "request.body.a.b");
/// ```
pub fn flatten(node: &Value, base_path: &str) -> Vec<TraceEntry> {
    let mut entries = Vec::new();
    walk(node, base_path, &mut entries);
    entries
}

fn walk(node: &Value, path: &str, out: &mut Vec<TraceEntry>) {
    match node {
        Value::Object(map) => {
            // No entry for the object itself, only for its leaves.
            for (key, child) in map {
                walk(child, &format!("{path}.{key}"), out);
            }
        }
        Value::Array(items) => {
            out.push(TraceEntry::new(
                format!("{path}.count"),
                Some(items.len().to_string()),
            ));
        }
        Value::String(s) => out.push(TraceEntry::new(path, Some(s.clone()))),
        Value::Number(n) => out.push(TraceEntry::new(path, Some(n.to_string()))),
        Value::Bool(b) => out.push(TraceEntry::new(path, Some(b.to_string()))),
        Value::Null => out.push(TraceEntry::new(path, None)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn lines(value: &Value) -> Vec<String> {
        flatten(value, "request.body")
            .iter()
            .map(|e| e.to_string())
            .collect()
    }

    #[test]
    fn test_scalar_field() {
        assert_eq!(
            lines(&json!({"a": 1})),
            vec!["[ParameterMonitor] request.body.a = 1"]
        );
    }

    #[test]
    fn test_nested_object() {
        let entries = flatten(&json!({"a": {"b": "x"}}), "request.body");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].path, "request.body.a.b");
        assert_eq!(entries[0].value.as_deref(), Some("x"));
    }

    #[test]
    fn test_array_summarized_by_count() {
        assert_eq!(
            lines(&json!({"items": [1, 2, 3]})),
            vec!["[ParameterMonitor] request.body.items.count = 3"]
        );
    }

    #[test]
    fn test_null_uses_placeholder() {
        assert_eq!(
            lines(&json!({"n": null})),
            vec!["[ParameterMonitor] request.body.n = nullOrEmpty"]
        );
    }

    #[test]
    fn test_root_level_array() {
        assert_eq!(
            lines(&json!([1, 2])),
            vec!["[ParameterMonitor] request.body.count = 2"]
        );
    }

    #[test]
    fn test_root_level_scalar() {
        assert_eq!(lines(&json!(42)), vec!["[ParameterMonitor] request.body = 42"]);
    }

    #[test]
    fn test_empty_object_emits_nothing() {
        assert!(flatten(&json!({}), "request.body").is_empty());
    }

    #[test]
    fn test_key_order_is_document_order() {
        let value = serde_json::from_str::<Value>(r#"{"z": 1, "a": 2, "m": {"k": 3}}"#).unwrap();
        let paths: Vec<_> = flatten(&value, "b").iter().map(|e| e.path.clone()).collect();
        assert_eq!(paths, vec!["b.z", "b.a", "b.m.k"]);
    }

    #[test]
    fn test_idempotent_and_order_stable() {
        let value = json!({
            "user": {"name": "ada", "tags": ["x", "y"], "age": 36},
            "active": true,
            "note": null
        });
        let first = flatten(&value, "request.body");
        let second = flatten(&value, "request.body");
        assert_eq!(first, second);
        let paths: Vec<_> = first.iter().map(|e| e.path.as_str()).collect();
        assert_eq!(
            paths,
            vec![
                "request.body.user.name",
                "request.body.user.tags.count",
                "request.body.user.age",
                "request.body.active",
                "request.body.note",
            ]
        );
    }
}
