//! Chart filesystem collaborators: root discovery and template gathering.
//!
//! Performance characteristics:
//! - Early directory pruning via `WalkDir::filter_entry` (O(1) subtree skip)
//! - Parallel file filtering via Rayon's `par_bridge`
//! - Minimal work in parallel threads (only extension checks)
//!
//! All template contents are loaded into memory before analysis begins;
//! there is no streaming or incremental update.

use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

use rayon::prelude::*;
use walkdir::WalkDir;

use crate::error::{DeadvaluesError, DeadvaluesResult, IoResultExt};

/// Directories under `templates/` that never hold renderable templates.
const EXCLUDED_DIRS: &[&str] = &[".git", "charts", "tests"];

/// File extensions treated as template sources.
const TEMPLATE_EXTENSIONS: &[&str] = &["yaml", "yml", "tpl", "txt"];

/// Detect whether a directory is a chart root (has a Chart.yaml).
pub fn is_chart_root(path: &Path) -> bool {
    path.join("Chart.yaml").exists()
}

/// Find the chart root from a given path.
///
/// Search strategy:
/// 1. If the path has Chart.yaml, it's the chart root
/// 2. If the path has a templates/ directory, treat it as the chart root
/// 3. Walk up parent directories looking for Chart.yaml
///
/// Falls back to the given path so a bare template bundle without a
/// Chart.yaml still works.
pub fn find_chart_root(path: &Path) -> Option<PathBuf> {
    let canonical = path.canonicalize().ok()?;

    if is_chart_root(&canonical) || canonical.join("templates").is_dir() {
        return Some(canonical);
    }

    let mut current = canonical.as_path();
    while let Some(parent) = current.parent() {
        if is_chart_root(parent) {
            return Some(parent.to_path_buf());
        }
        current = parent;
    }

    Some(canonical)
}

/// Checks if a directory entry should be pruned from traversal.
///
/// Called by `WalkDir::filter_entry`; runs sequentially but enables O(1)
/// subtree skipping for excluded directories.
#[inline]
fn is_excluded_dir(entry: &walkdir::DirEntry, excludes: &HashSet<&str>) -> bool {
    entry.file_type().is_dir()
        && entry
            .file_name()
            .to_str()
            .is_some_and(|name| excludes.contains(name))
}

fn is_template_file(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| TEMPLATE_EXTENSIONS.contains(&ext))
}

/// Gather all template files under `<chart>/templates` recursively.
///
/// Skips `charts/` (vendored subcharts), `tests/`, and `.git/` subtrees.
/// Fails distinctly when the templates directory is missing or cannot be
/// enumerated. Results are sorted for stable downstream ordering.
pub fn gather_template_files(chart_root: &Path) -> DeadvaluesResult<Vec<PathBuf>> {
    let templates_dir = chart_root.join("templates");
    if !templates_dir.is_dir() {
        return Err(DeadvaluesError::chart(
            &templates_dir,
            "templates directory not found",
        ));
    }

    let excludes: HashSet<&str> = EXCLUDED_DIRS.iter().copied().collect();

    let mut files = WalkDir::new(&templates_dir)
        .into_iter()
        .filter_entry(|e| !is_excluded_dir(e, &excludes))
        .par_bridge()
        .filter_map(|entry| match entry {
            Ok(e) => {
                let path = e.path();
                if path.is_file() && is_template_file(path) {
                    Some(Ok(path.to_path_buf()))
                } else {
                    None
                }
            }
            Err(e) => Some(Err(DeadvaluesError::chart(&templates_dir, e.to_string()))),
        })
        .collect::<DeadvaluesResult<Vec<_>>>()?;

    files.sort();
    Ok(files)
}

/// Read every template file into memory.
///
/// Fails distinctly, naming the offending path, when any file cannot be
/// read.
pub fn read_templates(files: &[PathBuf]) -> DeadvaluesResult<Vec<String>> {
    files
        .iter()
        .map(|path| fs::read_to_string(path).with_path(path))
        .collect()
}
