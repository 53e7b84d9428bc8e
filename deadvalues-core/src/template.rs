//! Reference extraction from raw template text.
//!
//! Scans template blobs for value-injection markers of the form
//! `{{ .Values.<dotted-path> }}` and collects the referenced dotted paths.
//! Template control structures are deliberately not parsed: a value
//! referenced only through a conditional, loop, helper call, or computed
//! key (`index`, `get`, pipelines) is invisible here and will show up in
//! the unused report. That blindness is the reason the detector skips
//! unmatched internal nodes (see [`crate::detect`]).
//!
//! Performance characteristics:
//! - One pre-compiled regex (compile once, use many)
//! - Blobs are scanned in parallel; per-blob results are concatenated.
//!   The accumulation is commutative and associative, so the parallel
//!   split needs no locking.

use std::sync::OnceLock;

use rayon::prelude::*;
use regex::Regex;

use crate::tree::PathTree;

/// Pre-compiled pattern for `.Values` reference markers.
///
/// Whitespace inside the braces is optional; the captured group is one or
/// more alphanumeric, underscore, or dot characters.
fn values_ref_regex() -> &'static Regex {
    static REGEX: OnceLock<Regex> = OnceLock::new();
    REGEX.get_or_init(|| {
        Regex::new(r"\{\{\s*\.Values\.([\w.]+)\s*\}\}").expect("Hardcoded regex pattern is valid")
    })
}

/// Extract every referenced dotted path from the given template blobs.
///
/// Duplicates are preserved here; they collapse naturally once inserted
/// into the reference tree. A blob with no markers contributes zero paths;
/// there is no failure mode at this layer.
pub fn extract_value_paths(contents: &[String]) -> Vec<String> {
    let regex = values_ref_regex();
    contents
        .par_iter()
        .flat_map_iter(|content| {
            regex
                .captures_iter(content)
                .filter_map(|cap| cap.get(1))
                .map(|m| m.as_str().to_string())
        })
        .collect()
}

/// Build the reference tree from extracted dotted paths.
pub fn build_used_tree(paths: &[String]) -> PathTree {
    let mut root = PathTree::new();
    for path in paths {
        root.insert_dotted(path);
    }
    root
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blobs(texts: &[&str]) -> Vec<String> {
        texts.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn test_extract_simple_reference() {
        let paths = extract_value_paths(&blobs(&["image: {{ .Values.image.repository }}"]));
        assert_eq!(paths, vec!["image.repository"]);
    }

    #[test]
    fn test_extract_whitespace_variants() {
        let paths = extract_value_paths(&blobs(&[
            "{{.Values.a}}",
            "{{  .Values.b.c   }}",
            "{{ .Values.d_e }}",
        ]));

        assert!(paths.contains(&"a".to_string()));
        assert!(paths.contains(&"b.c".to_string()));
        assert!(paths.contains(&"d_e".to_string()));
        assert_eq!(paths.len(), 3);
    }

    #[test]
    fn test_extract_multiple_per_blob() {
        let content = r#"
metadata:
  name: {{ .Values.name }}
spec:
  replicas: {{ .Values.replicas }}
"#;
        let paths = extract_value_paths(&blobs(&[content]));
        assert_eq!(paths.len(), 2);
    }

    #[test]
    fn test_extract_duplicates_preserved() {
        let paths = extract_value_paths(&blobs(&["{{ .Values.a }} {{ .Values.a }}"]));
        assert_eq!(paths, vec!["a", "a"]);
    }

    #[test]
    fn test_non_matching_blob_contributes_nothing() {
        let paths = extract_value_paths(&blobs(&["kind: Service", ""]));
        assert!(paths.is_empty());
    }

    #[test]
    fn test_indirect_references_are_invisible() {
        // Pipelines, helpers, and computed keys do not match the marker
        // pattern. This is the documented extraction limitation.
        let paths = extract_value_paths(&blobs(&[
            r#"{{ .Values.name | quote }}"#,
            r#"{{ index .Values "a" "b" }}"#,
            r#"{{ include "chart.labels" . }}"#,
            r#"{{- if .Values.enabled }}on{{- end }}"#,
        ]));
        assert!(paths.is_empty());
    }

    #[test]
    fn test_build_used_tree_collapses_duplicates() {
        let tree = build_used_tree(&blobs(&["a.b", "a.b", "a.c"]));

        assert!(tree.contains_path(&["a", "b"]));
        assert!(tree.contains_path(&["a", "c"]));
        assert_eq!(tree.path_count(), 3);
    }
}
