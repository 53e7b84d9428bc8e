//! Prefix tree over dotted value paths.
//!
//! Both sides of the analysis are expressed as this tree: declared paths
//! collected from values documents and referenced paths extracted from
//! templates. The detector only ever needs child lookup by segment name,
//! so no deletion operation exists; trees grow via insertion and are
//! dropped with their owning scope once detection completes.
//!
//! Performance characteristics:
//! - Insert/membership: O(|path|) map lookups
//! - Merge: O(|override nodes|), disjoint subtrees move wholesale
//!
//! Children live in a `BTreeMap` so traversal order is deterministic and
//! report output is stable across runs.

use std::collections::BTreeMap;

/// A node in a value path tree.
///
/// Each node owns its children exclusively; the structure is a strict tree
/// with no sharing, no cycles, and no back-references. The root node
/// represents the empty path.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PathTree {
    children: BTreeMap<String, PathTree>,
}

impl PathTree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a path given as a sequence of segments.
    ///
    /// Creates a child for each segment not yet present and descends.
    /// Inserting the empty path is a no-op, and inserting the same path
    /// twice leaves the tree indistinguishable from inserting it once.
    pub fn insert(&mut self, path: &[&str]) {
        let Some((first, rest)) = path.split_first() else {
            return;
        };
        self.children
            .entry((*first).to_string())
            .or_default()
            .insert(rest);
    }

    /// Insert a dotted path such as `image.repository`.
    ///
    /// Empty segments (leading, trailing, or doubled separators) are
    /// dropped so the non-empty-segment invariant holds.
    pub fn insert_dotted(&mut self, dotted: &str) {
        let segments: Vec<&str> = dotted.split('.').filter(|s| !s.is_empty()).collect();
        self.insert(&segments);
    }

    /// Exact membership query.
    ///
    /// True iff a root-to-node walk exists consuming every segment in
    /// order. The empty path is trivially present. Says nothing about
    /// whether descendants exist below the matched node.
    pub fn contains_path(&self, path: &[&str]) -> bool {
        match path.split_first() {
            None => true,
            Some((first, rest)) => self
                .children
                .get(*first)
                .is_some_and(|child| child.contains_path(rest)),
        }
    }

    /// Look up a direct child by segment name.
    pub fn child(&self, name: &str) -> Option<&PathTree> {
        self.children.get(name)
    }

    /// Iterate direct children in deterministic (sorted) order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &PathTree)> {
        self.children.iter().map(|(name, child)| (name.as_str(), child))
    }

    /// True when the node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Total number of nodes below this one, i.e. the number of distinct
    /// paths the tree holds.
    pub fn path_count(&self) -> usize {
        self.children
            .values()
            .map(|child| 1 + child.path_count())
            .sum()
    }

    /// Deep-merge another tree into this one.
    ///
    /// Children present only in `other` are attached wholesale (ownership
    /// transfers). Children present in both are merged recursively, so an
    /// override can extend an existing branch but never delete from it.
    /// Structural shape mismatches are resolved by extension: a base leaf
    /// simply gains the override's grandchildren. Only path structure is
    /// compared; the merge never fails.
    pub fn merge(&mut self, other: PathTree) {
        for (name, child) in other.children {
            match self.children.get_mut(&name) {
                Some(existing) => existing.merge(child),
                None => {
                    self.children.insert(name, child);
                }
            }
        }
    }
}
