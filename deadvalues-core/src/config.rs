//! Configuration loading from deadvalues.toml.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::{fs, path::Path};

/// Main configuration structure for deadvalues.toml.
#[derive(Debug, Deserialize, Default)]
pub struct DeadvaluesConfig {
    /// List of value paths or patterns to ignore.
    pub ignore: Option<Vec<String>>,
    /// Output configuration.
    pub output: Option<OutputConfig>,
}

/// Output format configuration.
#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Output format: "plain" or "json".
    pub format: Option<String>,
}

/// Loads configuration from deadvalues.toml in the chart root, if it exists.
pub fn load_config(root: &Path) -> Result<Option<DeadvaluesConfig>> {
    let path = root.join("deadvalues.toml");
    if !path.exists() {
        return Ok(None);
    }

    let content = fs::read_to_string(&path)?;
    let cfg = toml::from_str(&content).context("Invalid deadvalues.toml")?;
    Ok(Some(cfg))
}
