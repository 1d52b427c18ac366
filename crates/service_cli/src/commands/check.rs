//! Check command implementation
//!
//! Loads and validates a trade file, listing every rejected record.

use std::path::Path;

use anyhow::{bail, Context};
use service_cli::config::AppConfig;
use service_cli::pipeline::{bounded_error_lines, RiskPipeline};

/// Run the check command
pub fn run(config: AppConfig, input: &Path) -> anyhow::Result<()> {
    let limit = config.max_reported_errors;
    let pipeline = RiskPipeline::new(config);

    let result = pipeline
        .check(input)
        .with_context(|| format!("Failed to load {}", input.display()))?;

    println!(
        "{}: {} trade(s), {} valid, {} invalid",
        input.display(),
        result.total(),
        result.valid_trades.len(),
        result.errors.len()
    );

    if !result.is_valid() {
        for line in bounded_error_lines(&result.errors, limit) {
            println!("  - {line}");
        }
        bail!("Validation failed with {} error(s)", result.errors.len());
    }

    Ok(())
}
