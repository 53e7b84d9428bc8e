//! deadvalues CLI - NASA-grade unused Helm values detector.
//!
//! Features:
//! - Automatic chart root detection (Chart.yaml probing)
//! - Rayon-powered parallel template scanning
//! - Optional override values deep-merged over the base document
//! - Plain text and JSON reporting
//! - CI-friendly exit codes

use anyhow::{Context, Result};
use clap::Parser;
use std::path::Path;

use deadvalues_core::{
    find_chart_root, init_structured_logging, load_config, print_json, print_plain, Deadvalues,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "NASA-grade unused Helm values detector")]
pub struct Cli {
    /// Path to the chart directory
    chart: String,

    /// Path to the declared values file
    #[arg(long, default_value = "values.yaml")]
    values: String,

    /// Path to an override values file, deep-merged over the base
    #[arg(long)]
    override_values: Option<String>,

    /// Value paths or patterns to ignore
    #[arg(long, num_args = 1..)]
    ignore: Vec<String>,

    /// Output results in JSON format
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    // Global panic guard - NASA-grade resilience
    std::panic::set_hook(Box::new(|info| {
        eprintln!("[PANIC] deadvalues internal error: {}", info);
        eprintln!("[PANIC] The process will exit safely with code 2.");
    }));

    // Initialize structured logging (JSON to stderr, respects RUST_LOG)
    init_structured_logging();

    let cli = Cli::parse();

    // 1. Resolve the chart root
    let input_path = Path::new(&cli.chart);
    let chart_root = find_chart_root(input_path)
        .with_context(|| format!("Failed to find chart root from: {}", cli.chart))?;

    // 2. Load optional config and combine ignore patterns (CLI flags win
    // by coming first; both sets apply)
    let config = load_config(&chart_root)?;
    let mut ignore = cli.ignore.clone();
    let mut json = cli.json;
    if let Some(cfg) = config {
        if let Some(patterns) = cfg.ignore {
            ignore.extend(patterns);
        }
        if !json {
            json = cfg
                .output
                .and_then(|o| o.format)
                .is_some_and(|f| f == "json");
        }
    }

    // 3. Run the analysis
    let mut builder = Deadvalues::new(&chart_root)
        .values_file(&cli.values)
        .ignore_patterns(ignore);
    if let Some(ref path) = cli.override_values {
        builder = builder.override_values_file(path);
    }
    let result = builder.analyze()?;

    // 4. Report results
    if json {
        print_json(&result.unused);
    } else {
        print_plain(&result.unused);
    }

    // 5. Exit code (CI-friendly)
    std::process::exit(if result.unused.is_empty() { 0 } else { 1 });
}
