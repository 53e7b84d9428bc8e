//! deadvalues-core: NASA-grade unused Helm values detection library
//!
//! This library provides modular components for scanning a chart's
//! templates and values documents to detect declared configuration values
//! that no template references.
//!
//! # Features
//!
//! - **Declared-value collection**: values.yaml into a prefix tree of dotted paths
//! - **Reference extraction**: `{{ .Values.* }}` markers pulled from template text
//! - **Override merging**: deep-merge a second values document over the base
//! - **Unused detection**: tree diff under the leaf/internal-node policy
//! - **Chart discovery**: Chart.yaml probing and parallel template gathering
//!
//! # Quick Start
//!
//! Use the [`prelude`] module for convenient imports:
//!
//! ```rust,ignore
//! use deadvalues_core::prelude::*;
//!
//! let result = Deadvalues::new("/path/to/chart")
//!     .values_file("values.yaml")
//!     .analyze()?;
//!
//! for path in &result.unused {
//!     println!("Unused value: {}", path);
//! }
//! ```
//!
//! # Known Limitations
//!
//! Reference extraction is pattern-based, not a template parse. A value
//! referenced only through a conditional, loop, helper function, or
//! computed key is invisible to the scan and gets reported as unused. To
//! compensate, a declared sub-map whose root never matches any reference
//! is skipped wholesale (presumed injected into a template as one unit),
//! which in turn can hide genuinely unused leaves below it. Both biases
//! are preserved from the original detector.
//!
//! # Module Organization
//!
//! - [`tree`]: Prefix tree over dotted value paths
//! - [`values`]: Declared-value collection from YAML documents
//! - [`template`]: Reference extraction from template text
//! - [`detect`]: Unused value detection logic
//! - [`chart`]: Chart root discovery and template gathering
//! - [`builder`]: Fluent builder API for configuration
//! - [`report`]: Plaintext and JSON output
//! - [`config`]: Configuration loading from deadvalues.toml
//! - [`error`]: Typed error handling

pub mod builder;
pub mod chart;
pub mod config;
pub mod detect;
pub mod error;
pub mod logging;
pub mod prelude;
pub mod report;
pub mod template;
pub mod tree;
pub mod values;

// ============================================================================
// Explicit Re-exports (avoiding glob imports for clear API surface)
// ============================================================================

// Error types
pub use error::{DeadvaluesError, DeadvaluesResult, IoResultExt};

// Builder API
pub use builder::{is_ignored, AnalysisResult, Deadvalues, ValueStats};

// Configuration
pub use config::{load_config, DeadvaluesConfig, OutputConfig};

// Core detection
pub use detect::{find_unused_values, VALUES_PREFIX};

// Logging
pub use logging::init_structured_logging;

// Path trees
pub use tree::PathTree;

// Declared-value collection
pub use values::{build_values_tree, is_empty_value, read_values_tree};

// Reference extraction
pub use template::{build_used_tree, extract_value_paths};

// Chart discovery
pub use chart::{find_chart_root, gather_template_files, is_chart_root, read_templates};

// Reporting
pub use report::{print_json, print_plain};
