//! Builder pattern API for unused value analysis.
//!
//! Provides a fluent interface for configuring and running the whole
//! pipeline:
//!
//! ```rust,ignore
//! use deadvalues_core::prelude::*;
//!
//! let result = Deadvalues::new("/path/to/chart")
//!     .values_file("values.yaml")
//!     .override_values_file("values-prod.yaml")
//!     .analyze()?;
//!
//! for path in &result.unused {
//!     println!("Unused value: {}", path);
//! }
//! ```

use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::chart::{gather_template_files, read_templates};
use crate::detect::{find_unused_values, VALUES_PREFIX};
use crate::template::{build_used_tree, extract_value_paths};
use crate::values::read_values_tree;

/// Summary statistics for one analysis run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct ValueStats {
    /// Distinct declared paths (after override merging)
    pub declared_paths: usize,
    /// Distinct referenced paths
    pub referenced_paths: usize,
    /// Template files scanned
    pub template_files: usize,
    /// Unused paths reported (after ignore filtering)
    pub unused_count: usize,
}

/// Result of an unused-value analysis.
#[derive(Debug, Clone, Serialize)]
pub struct AnalysisResult {
    /// Unused dotted paths, prefixed with the `.Values` root label
    pub unused: Vec<String>,
    /// Summary statistics
    pub stats: ValueStats,
}

/// Builder for configuring unused value analysis.
///
/// # Example
///
/// ```rust,ignore
/// let result = Deadvalues::new("/my/chart")
///     .values_file("values.yaml")
///     .ignore_patterns(["global."])
///     .analyze()?;
/// ```
#[derive(Debug, Clone)]
pub struct Deadvalues {
    /// Chart root directory holding templates/
    chart_root: PathBuf,

    /// Declared values document. Relative paths resolve against the
    /// invocation directory, matching the CLI default.
    values_file: PathBuf,

    /// Optional override document, deep-merged over the base tree
    override_values_file: Option<PathBuf>,

    /// Reported-path patterns suppressed from the result
    ignored_patterns: Vec<String>,
}

impl Deadvalues {
    /// Create a new analysis builder for the given chart root.
    pub fn new(chart_root: impl Into<PathBuf>) -> Self {
        Self {
            chart_root: chart_root.into(),
            values_file: PathBuf::from("values.yaml"),
            override_values_file: None,
            ignored_patterns: Vec::new(),
        }
    }

    /// Set the declared values document.
    pub fn values_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.values_file = path.into();
        self
    }

    /// Set an override values document to deep-merge over the base.
    pub fn override_values_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.override_values_file = Some(path.into());
        self
    }

    /// Add patterns for reported paths to ignore.
    pub fn ignore_patterns(
        mut self,
        patterns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.ignored_patterns
            .extend(patterns.into_iter().map(Into::into));
        self
    }

    /// Run the analysis and return results.
    pub fn analyze(&self) -> Result<AnalysisResult> {
        // 1. Gather and read templates
        let files = gather_template_files(&self.chart_root)
            .context("Failed to gather template files")?;
        let contents = read_templates(&files).context("Failed to read template files")?;

        // 2. Build the reference tree from extracted paths
        let referenced = extract_value_paths(&contents);
        let used_tree = build_used_tree(&referenced);

        // 3. Build the declared tree, merging the override when present
        let mut declared_tree =
            read_values_tree(&self.values_file).context("Failed to read declared values")?;
        if let Some(ref override_path) = self.override_values_file {
            let override_tree =
                read_values_tree(override_path).context("Failed to read override values")?;
            declared_tree.merge(override_tree);
        }

        info!(
            templates = files.len(),
            declared = declared_tree.path_count(),
            referenced = used_tree.path_count(),
            "analysis input collected"
        );

        // 4. Diff the trees and filter ignored paths
        let mut unused = find_unused_values(&declared_tree, &used_tree, VALUES_PREFIX);
        if !self.ignored_patterns.is_empty() {
            unused.retain(|path| !is_ignored(path, &self.ignored_patterns));
        }

        let stats = ValueStats {
            declared_paths: declared_tree.path_count(),
            referenced_paths: used_tree.path_count(),
            template_files: files.len(),
            unused_count: unused.len(),
        };

        Ok(AnalysisResult { unused, stats })
    }
}

/// Checks if a reported path matches any ignore pattern.
pub fn is_ignored(path: &str, ignore: &[String]) -> bool {
    ignore
        .iter()
        .any(|p| p == path || path.ends_with(p) || path.contains(p))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_ignored_exact_match() {
        let ignore = vec![".Values.global".to_string()];
        assert!(is_ignored(".Values.global", &ignore));
    }

    #[test]
    fn test_is_ignored_suffix_match() {
        let ignore = vec![".tag".to_string()];
        assert!(is_ignored(".Values.image.tag", &ignore));
        assert!(!is_ignored(".Values.tagline", &ignore));
    }

    #[test]
    fn test_is_ignored_contains_match() {
        let ignore = vec!["internal".to_string()];
        assert!(is_ignored(".Values.internal.debug", &ignore));
        assert!(!is_ignored(".Values.public", &ignore));
    }

    #[test]
    fn test_builder_defaults() {
        let builder = Deadvalues::new("/chart");
        assert_eq!(builder.values_file, PathBuf::from("values.yaml"));
        assert!(builder.override_values_file.is_none());
        assert!(builder.ignored_patterns.is_empty());
    }
}
