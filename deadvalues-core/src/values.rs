//! Declared-value collection from YAML values documents.
//!
//! Converts an externally-parsed values document into a [`PathTree`] of
//! declared dotted paths. The source document is read once and never
//! mutated.
//!
//! Empty values (empty string, `false`, empty sequence, empty mapping) are
//! defaults meant to be overridden: they contribute no tree nodes, so they
//! can appear in neither the used nor the unused output. Numeric zero and
//! non-empty composites are kept.

use std::fs;
use std::path::Path;

use serde_yaml::{Mapping, Value};

use crate::error::{DeadvaluesError, DeadvaluesResult};
use crate::tree::PathTree;

/// Check whether a value counts as empty under the skip policy.
///
/// Exactly four forms are empty: `""`, `false`, `[]`, and `{}`. Null,
/// numbers (including zero), and everything else are not.
pub fn is_empty_value(value: &Value) -> bool {
    match value {
        Value::String(s) => s.is_empty(),
        Value::Bool(b) => !b,
        Value::Sequence(seq) => seq.is_empty(),
        Value::Mapping(map) => map.is_empty(),
        _ => false,
    }
}

/// Render a mapping key as a path segment.
///
/// Keys are almost always strings; scalar keys of other types are rendered
/// through their display form.
fn key_to_segment(key: &Value) -> String {
    match key {
        Value::String(s) => s.clone(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::Null => String::from("null"),
        other => serde_yaml::to_string(other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

/// Build the declared-value tree from a top-level mapping.
///
/// Mapping iteration order does not influence the resulting tree.
pub fn build_values_tree(values: &Mapping) -> PathTree {
    let mut root = PathTree::new();
    collect_paths(values, &mut root, "");
    root
}

/// Walk a mapping, inserting one dotted path per non-empty value.
///
/// Nested mappings are recursed into with the candidate path as the new
/// prefix, so intermediate and leaf paths both get their own tree nodes.
/// Empty values are skipped entirely: no insertion, no recursion.
fn collect_paths(values: &Mapping, tree: &mut PathTree, prefix: &str) {
    for (key, value) in values {
        if is_empty_value(value) {
            continue;
        }
        let key = key_to_segment(key);
        let full_key = if prefix.is_empty() {
            key
        } else {
            format!("{}.{}", prefix, key)
        };
        tree.insert_dotted(&full_key);
        if let Value::Mapping(nested) = value {
            collect_paths(nested, tree, &full_key);
        }
    }
}

/// Read a values file and build its declared-value tree.
///
/// Fails distinctly when the file cannot be read and when the document
/// does not parse as a mapping. An empty document yields an empty tree.
pub fn read_values_tree(path: &Path) -> DeadvaluesResult<PathTree> {
    let content = fs::read_to_string(path).map_err(|e| DeadvaluesError::io(path, e))?;
    let doc: Value =
        serde_yaml::from_str(&content).map_err(|e| DeadvaluesError::parse(path, e.to_string()))?;

    match doc {
        Value::Mapping(map) => Ok(build_values_tree(&map)),
        // An empty or comment-only file parses as null
        Value::Null => Ok(PathTree::new()),
        other => Err(DeadvaluesError::parse(
            path,
            format!(
                "expected a mapping at the document root, found {}",
                value_kind(&other)
            ),
        )),
    }
}

fn value_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Sequence(_) => "a sequence",
        Value::Mapping(_) => "a mapping",
        Value::Tagged(_) => "a tagged value",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_from(yaml: &str) -> PathTree {
        match serde_yaml::from_str::<Value>(yaml).unwrap() {
            Value::Mapping(map) => build_values_tree(&map),
            other => panic!("fixture must be a mapping, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_value_policy() {
        let value: Value = serde_yaml::from_str("\"\"").unwrap();
        assert!(is_empty_value(&value));
        assert!(is_empty_value(&Value::Bool(false)));
        assert!(is_empty_value(&serde_yaml::from_str::<Value>("[]").unwrap()));
        assert!(is_empty_value(&serde_yaml::from_str::<Value>("{}").unwrap()));

        assert!(!is_empty_value(&Value::Null));
        assert!(!is_empty_value(&serde_yaml::from_str::<Value>("0").unwrap()));
        assert!(!is_empty_value(&Value::Bool(true)));
        assert!(!is_empty_value(&serde_yaml::from_str::<Value>("[1]").unwrap()));
    }

    #[test]
    fn test_empty_values_are_skipped() {
        let tree = tree_from(
            r#"
a: ""
b: false
c: []
d: {}
e: 0
f: "x"
"#,
        );

        assert!(!tree.contains_path(&["a"]));
        assert!(!tree.contains_path(&["b"]));
        assert!(!tree.contains_path(&["c"]));
        assert!(!tree.contains_path(&["d"]));
        assert!(tree.contains_path(&["e"]));
        assert!(tree.contains_path(&["f"]));
        assert_eq!(tree.path_count(), 2);
    }

    #[test]
    fn test_nested_mapping_yields_intermediate_and_leaf_paths() {
        let tree = tree_from(
            r#"
image:
  repository: nginx
  tag: latest
"#,
        );

        assert!(tree.contains_path(&["image"]));
        assert!(tree.contains_path(&["image", "repository"]));
        assert!(tree.contains_path(&["image", "tag"]));
        assert_eq!(tree.path_count(), 3);
    }

    #[test]
    fn test_empty_nested_values_skip_recursion() {
        let tree = tree_from(
            r#"
image:
  repository: nginx
  tag: ""
empty: {}
"#,
        );

        assert!(tree.contains_path(&["image", "repository"]));
        assert!(!tree.contains_path(&["image", "tag"]));
        assert!(!tree.contains_path(&["empty"]));
    }

    #[test]
    fn test_null_values_are_declared() {
        let tree = tree_from("tolerations: null\n");
        assert!(tree.contains_path(&["tolerations"]));
    }

    #[test]
    fn test_dotted_key_splits_into_segments() {
        // A literal dotted key contributes multiple segments, matching the
        // join-then-split path construction.
        let tree = tree_from("\"a.b\": 1\n");
        assert!(tree.contains_path(&["a", "b"]));
    }

    #[test]
    fn test_read_values_tree_missing_file() {
        let err = read_values_tree(Path::new("/nonexistent/values.yaml")).unwrap_err();
        assert!(matches!(err, DeadvaluesError::Io { .. }));
    }

    #[test]
    fn test_read_values_tree_rejects_non_mapping() {
        let dir = std::env::temp_dir().join(format!("deadvalues_values_{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("list.yaml");
        fs::write(&path, "- just\n- a\n- list\n").unwrap();

        let err = read_values_tree(&path).unwrap_err();
        assert!(matches!(err, DeadvaluesError::Parse { .. }));

        fs::remove_dir_all(&dir).ok();
    }
}
