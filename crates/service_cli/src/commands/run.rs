//! Run command implementation
//!
//! Prices a trade file end to end and prints the portfolio summary.

use std::path::Path;

use anyhow::Context;
use service_cli::config::AppConfig;
use service_cli::pipeline::RiskPipeline;
use service_cli::report::summary_table;
use tracing::info;

/// Run the run command
pub fn run(config: AppConfig, input: &Path, output_dir: Option<&Path>) -> anyhow::Result<()> {
    let price_decimals = config.price_decimal_places;
    let greek_decimals = config.greek_decimal_places;
    let pipeline = RiskPipeline::new(config);

    let outcome = pipeline
        .run(input, output_dir)
        .with_context(|| format!("Failed to process {}", input.display()))?;

    println!(
        "{}",
        summary_table(&outcome.summary, price_decimals, greek_decimals)
    );
    for path in &outcome.written {
        println!("Results written to: {}", path.display());
    }

    info!(trades = outcome.priced_trades.len(), "Processing complete");
    Ok(())
}
