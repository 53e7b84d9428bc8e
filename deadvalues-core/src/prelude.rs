//! Prelude module for convenient imports.
//!
//! Import commonly used types with a single line:
//!
//! ```rust,ignore
//! use deadvalues_core::prelude::*;
//! ```
//!
//! This provides the most commonly needed types for unused value analysis
//! without polluting the namespace with rarely-used items.

// Core analysis types
pub use crate::error::{DeadvaluesError, DeadvaluesResult};
pub use crate::tree::PathTree;

// Declared-value collection
pub use crate::values::{build_values_tree, read_values_tree};

// Reference extraction
pub use crate::template::{build_used_tree, extract_value_paths};

// Unused value detection
pub use crate::detect::{find_unused_values, VALUES_PREFIX};

// Chart discovery
pub use crate::chart::{find_chart_root, gather_template_files, read_templates};

// Configuration
pub use crate::config::{load_config, DeadvaluesConfig};

// Builder API
pub use crate::builder::{AnalysisResult, Deadvalues, ValueStats};
