//! Unused value detection logic.
//!
//! Recursive diff of the declared-value tree against the reference tree.
//!
//! Policy, preserved exactly from the original detector:
//! - A declared leaf with no match in the reference tree is unused.
//! - A declared internal node with no match is skipped wholesale: the
//!   sub-map is presumed injected into a template as one unit (e.g. via
//!   `toYaml`), so none of its leaves are reported, even though none of
//!   them matched individually. This trades false negatives for fewer
//!   false positives on structural/grouped values.

use crate::tree::PathTree;

/// The conventional root label prefixed to every reported path.
pub const VALUES_PREFIX: &str = ".Values";

/// Find declared paths that no template references.
///
/// Walks each child of the declared tree against the reference tree,
/// accumulating dotted paths under `prefix` (conventionally
/// [`VALUES_PREFIX`]). Output follows a deterministic pre-order traversal;
/// the order carries no meaning.
pub fn find_unused_values(declared: &PathTree, used: &PathTree, prefix: &str) -> Vec<String> {
    let mut unused = Vec::new();

    for (key, declared_child) in declared.children() {
        let full_key = format!("{}.{}", prefix, key);

        match used.child(key) {
            None => {
                // Unmatched internal nodes are presumed injected as a unit
                // and never reported.
                if declared_child.is_leaf() {
                    unused.push(full_key);
                }
            }
            Some(used_child) => {
                unused.extend(find_unused_values(declared_child, used_child, &full_key));
            }
        }
    }

    unused
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree_of(paths: &[&str]) -> PathTree {
        let mut tree = PathTree::new();
        for path in paths {
            tree.insert_dotted(path);
        }
        tree
    }

    #[test]
    fn test_unreferenced_leaf_is_unused() {
        let declared = tree_of(&["replicas"]);
        let used = tree_of(&["other"]);

        let unused = find_unused_values(&declared, &used, VALUES_PREFIX);
        assert_eq!(unused, vec![".Values.replicas"]);
    }

    #[test]
    fn test_referenced_leaf_is_used() {
        let declared = tree_of(&["replicas"]);
        let used = tree_of(&["replicas"]);

        let unused = find_unused_values(&declared, &used, VALUES_PREFIX);
        assert!(unused.is_empty());
    }

    #[test]
    fn test_unmatched_internal_node_is_skipped() {
        // db.host is a declared leaf with no match: reported.
        // db2 is internal (has child port) with no match: the whole
        // subtree is skipped, so db2.port is NOT reported.
        let declared = tree_of(&["db.host", "db2.port"]);
        let used = tree_of(&["db", "other"]);

        let unused = find_unused_values(&declared, &used, VALUES_PREFIX);
        assert_eq!(unused, vec![".Values.db.host"]);
    }

    #[test]
    fn test_recursion_through_matched_branch() {
        let declared = tree_of(&["image.repository", "image.tag"]);
        let used = tree_of(&["image.repository"]);

        let unused = find_unused_values(&declared, &used, VALUES_PREFIX);
        assert_eq!(unused, vec![".Values.image.tag"]);
    }

    #[test]
    fn test_partial_reference_keeps_parent() {
        // "image" itself matches, so the walk recurses rather than
        // reporting the intermediate node.
        let declared = tree_of(&["image.repository"]);
        let used = tree_of(&["image.repository"]);

        let unused = find_unused_values(&declared, &used, VALUES_PREFIX);
        assert!(unused.is_empty());
    }

    #[test]
    fn test_empty_declared_tree() {
        let declared = PathTree::new();
        let used = tree_of(&["anything"]);

        assert!(find_unused_values(&declared, &used, VALUES_PREFIX).is_empty());
    }

    #[test]
    fn test_empty_reference_tree_reports_leaves_only() {
        let declared = tree_of(&["a", "b.c"]);
        let used = PathTree::new();

        // a is a leaf: reported. b is internal: skipped with its subtree.
        let unused = find_unused_values(&declared, &used, VALUES_PREFIX);
        assert_eq!(unused, vec![".Values.a"]);
    }

    #[test]
    fn test_output_is_deterministic_preorder() {
        let declared = tree_of(&["z", "a", "m"]);
        let used = PathTree::new();

        let unused = find_unused_values(&declared, &used, VALUES_PREFIX);
        assert_eq!(unused, vec![".Values.a", ".Values.m", ".Values.z"]);
    }
}
