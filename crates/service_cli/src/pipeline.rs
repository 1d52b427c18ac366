//! End-to-end risk pipeline.
//!
//! ```text
//! load -> validate -> price -> aggregate -> write
//! ```
//!
//! A single validation error halts the run before pricing, so no report is
//! ever written for a partially valid portfolio.

use std::path::{Path, PathBuf};

use adapter_loader::CsvTradeLoader;
use pricer_core::trade::{PortfolioSummary, PricedTrade, RawTradeRecord, ValidatedTrade};
use pricer_core::validation::{ValidationResult, Validator};
use pricer_models::engine::PricingEngine;
use pricer_risk::Aggregator;
use tracing::{error, info};

use crate::config::AppConfig;
use crate::error::{CliError, Result};
use crate::report::ReportWriter;

/// Outcome of a successful run.
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Priced trades in input order
    pub priced_trades: Vec<PricedTrade>,
    /// Portfolio totals in the reporting currency
    pub summary: PortfolioSummary,
    /// Report files written
    pub written: Vec<PathBuf>,
}

/// Sequences the pipeline stages under one configuration.
#[derive(Debug, Clone)]
pub struct RiskPipeline {
    config: AppConfig,
    loader: CsvTradeLoader,
    validator: Validator,
    engine: PricingEngine,
    aggregator: Aggregator,
    writer: ReportWriter,
}

impl RiskPipeline {
    /// Create a pipeline from validated settings
    pub fn new(config: AppConfig) -> Self {
        Self {
            loader: CsvTradeLoader::new(),
            validator: Validator::new(config.validation_config()),
            engine: PricingEngine::new(config.pricing_config()),
            aggregator: Aggregator::new(),
            writer: ReportWriter::from_config(&config),
            config,
        }
    }

    /// Returns the pipeline settings.
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Runs every stage on `input`.
    ///
    /// Reports go to `output_dir`, or next to the input file when `None`.
    pub fn run(&self, input: &Path, output_dir: Option<&Path>) -> Result<RunOutcome> {
        let reporting_currency = self.config.reporting_currency()?;
        let valuation_date = self.config.valuation_date();
        info!(
            input = %input.display(),
            %reporting_currency,
            %valuation_date,
            "Starting FX options risk aggregation"
        );

        info!("[1/5] Loading trade data");
        let records = self.loader.load_path(input)?;

        info!("[2/5] Validating trades");
        let trades = self.validated_trades(&records)?;

        info!("[3/5] Pricing trades");
        let priced_trades = self.engine.price_portfolio(&trades)?;

        info!("[4/5] Aggregating portfolio metrics");
        let summary = self
            .aggregator
            .aggregate(&priced_trades, valuation_date, reporting_currency)?;

        info!("[5/5] Writing results");
        let output_dir = match output_dir {
            Some(dir) => dir.to_path_buf(),
            None => default_output_dir(input),
        };
        let stem = input
            .file_stem()
            .and_then(|s| s.to_str())
            .ok_or_else(|| CliError::report(format!("Cannot derive report name from {}", input.display())))?;
        let written = self
            .writer
            .write(&output_dir, stem, &priced_trades, &summary)?;

        Ok(RunOutcome {
            priced_trades,
            summary,
            written,
        })
    }

    /// Loads and validates `input` without pricing.
    ///
    /// Returns the full validation result, including rejected records.
    pub fn check(&self, input: &Path) -> Result<ValidationResult> {
        let records = self.loader.load_path(input)?;
        Ok(self.validator.validate(&records))
    }

    fn validated_trades(&self, records: &[RawTradeRecord]) -> Result<Vec<ValidatedTrade>> {
        let trades = self.validator.validate(records).into_trades().map_err(|errors| {
            error!(errors = errors.len(), "Validation failed");
            for line in bounded_error_lines(&errors, self.config.max_reported_errors) {
                error!("  - {}", line);
            }
            CliError::validation(errors)
        })?;

        info!(trades = trades.len(), "All trades validated successfully");
        Ok(trades)
    }
}

/// Returns at most `limit` messages, then a count of the remainder.
pub fn bounded_error_lines(errors: &[String], limit: usize) -> Vec<String> {
    let mut lines: Vec<String> = errors.iter().take(limit).cloned().collect();
    if errors.len() > limit {
        lines.push(format!("... and {} more errors", errors.len() - limit));
    }
    lines
}

fn default_output_dir(input: &Path) -> PathBuf {
    match input.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}
