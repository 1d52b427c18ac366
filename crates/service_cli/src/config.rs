//! Application configuration.
//!
//! Sources, highest priority first:
//! 1. CLI arguments
//! 2. `FXRISK_*` environment variables
//! 3. TOML config file
//! 4. Default values

use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::NaiveDate;
use pricer_core::trade::MAX_VOLATILITY;
use pricer_core::types::Currency;
use pricer_core::validation::ValidationConfig;
use pricer_models::engine::{PricingConfig, DEFAULT_PARALLEL_THRESHOLD};
use serde::Deserialize;
use thiserror::Error;

/// Config file read from the working directory when none is given.
pub const DEFAULT_CONFIG_FILE: &str = "fxrisk.toml";

/// Largest accepted number of decimal places in reports.
const MAX_DECIMAL_PLACES: u32 = 10;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Configuration errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Failed to read config file {}: {message}", .path.display())]
    Io {
        /// Config file path
        path: PathBuf,
        /// Underlying I/O message
        message: String,
    },

    /// Config file is not valid TOML for this schema.
    #[error("Failed to parse TOML: {0}")]
    Parse(String),

    /// An environment variable holds an unparseable value.
    #[error("Invalid value '{value}' for environment variable {var}")]
    Env {
        /// Variable name
        var: String,
        /// Offending value
        value: String,
    },

    /// One or more settings are out of range.
    #[error("Invalid configuration: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Report output format.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// One CSV file per report section
    #[default]
    Csv,
    /// One JSON document holding both sections
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "csv" => Ok(OutputFormat::Csv),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format '{}'. Supported: csv, json", s)),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Csv => write!(f, "csv"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Valuation date; today when unset
    pub valuation_date: Option<NaiveDate>,
    /// ISO code of the reporting currency
    pub reporting_currency: String,
    /// Decimal places for PV in reports
    pub price_decimal_places: u32,
    /// Decimal places for delta and vega in reports
    pub greek_decimal_places: u32,
    /// Volatility ceiling (decimal)
    pub max_volatility: f64,
    /// Validation errors shown before the remainder is summarised
    pub max_reported_errors: usize,
    /// Minimum portfolio size for parallel pricing
    pub parallel_threshold: usize,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Report output format
    pub output_format: OutputFormat,
    /// Name of the trade results section
    pub trade_results_name: String,
    /// Name of the portfolio summary section
    pub portfolio_summary_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            valuation_date: None,
            reporting_currency: "USD".to_string(),
            price_decimal_places: 2,
            greek_decimal_places: 2,
            max_volatility: MAX_VOLATILITY,
            max_reported_errors: 10,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            log_level: "info".to_string(),
            output_format: OutputFormat::Csv,
            trade_results_name: "Trade_Results".to_string(),
            portfolio_summary_name: "Portfolio_Summary".to_string(),
        }
    }
}

/// Overrides taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    /// Config file path
    pub config_file: Option<PathBuf>,
    /// Reporting currency override
    pub reporting_currency: Option<String>,
    /// Valuation date override
    pub valuation_date: Option<NaiveDate>,
    /// Output format override
    pub output_format: Option<OutputFormat>,
    /// Log level override
    pub log_level: Option<String>,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Apply `FXRISK_*` environment variable overrides.
    pub fn with_env_override(self) -> Result<Self, ConfigError> {
        self.with_overrides_from(|var| std::env::var(var).ok())
    }

    /// Apply `FXRISK_*` overrides read through `lookup`.
    pub fn with_overrides_from<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(value) = lookup("FXRISK_VALUATION_DATE") {
            self.valuation_date = Some(parse_env("FXRISK_VALUATION_DATE", &value)?);
        }
        if let Some(value) = lookup("FXRISK_REPORTING_CURRENCY") {
            self.reporting_currency = value;
        }
        if let Some(value) = lookup("FXRISK_PRICE_DECIMAL_PLACES") {
            self.price_decimal_places = parse_env("FXRISK_PRICE_DECIMAL_PLACES", &value)?;
        }
        if let Some(value) = lookup("FXRISK_GREEK_DECIMAL_PLACES") {
            self.greek_decimal_places = parse_env("FXRISK_GREEK_DECIMAL_PLACES", &value)?;
        }
        if let Some(value) = lookup("FXRISK_MAX_VOLATILITY") {
            self.max_volatility = parse_env("FXRISK_MAX_VOLATILITY", &value)?;
        }
        if let Some(value) = lookup("FXRISK_MAX_REPORTED_ERRORS") {
            self.max_reported_errors = parse_env("FXRISK_MAX_REPORTED_ERRORS", &value)?;
        }
        if let Some(value) = lookup("FXRISK_PARALLEL_THRESHOLD") {
            self.parallel_threshold = parse_env("FXRISK_PARALLEL_THRESHOLD", &value)?;
        }
        if let Some(value) = lookup("FXRISK_LOG_LEVEL") {
            self.log_level = value;
        }
        if let Some(value) = lookup("FXRISK_OUTPUT_FORMAT") {
            self.output_format = parse_env("FXRISK_OUTPUT_FORMAT", &value)?;
        }

        Ok(self)
    }

    /// Merge with CLI arguments (CLI takes precedence).
    pub fn merge_with_cli(&mut self, cli: &CliOverrides) {
        if let Some(currency) = &cli.reporting_currency {
            self.reporting_currency = currency.clone();
        }
        if let Some(date) = cli.valuation_date {
            self.valuation_date = Some(date);
        }
        if let Some(format) = cli.output_format {
            self.output_format = format;
        }
        if let Some(level) = &cli.log_level {
            self.log_level = level.clone();
        }
    }

    /// Validate the configuration, collecting every problem.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if Currency::from_str(&self.reporting_currency).is_err() {
            errors.push(format!(
                "Invalid reporting_currency '{}'. Valid values: {}",
                self.reporting_currency,
                Currency::ALL.map(|c| c.code()).join(", ")
            ));
        }

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        for (name, value) in [
            ("price_decimal_places", self.price_decimal_places),
            ("greek_decimal_places", self.greek_decimal_places),
        ] {
            if value > MAX_DECIMAL_PLACES {
                errors.push(format!(
                    "{} {} exceeds maximum allowed ({})",
                    name, value, MAX_DECIMAL_PLACES
                ));
            }
        }

        if !(self.max_volatility > 0.0 && self.max_volatility <= MAX_VOLATILITY) {
            errors.push(format!(
                "max_volatility must be in (0, {}], got {}",
                MAX_VOLATILITY, self.max_volatility
            ));
        }

        if self.max_reported_errors == 0 {
            errors.push("max_reported_errors must be greater than 0".to_string());
        }

        for (name, value) in [
            ("trade_results_name", &self.trade_results_name),
            ("portfolio_summary_name", &self.portfolio_summary_name),
        ] {
            if value.trim().is_empty() {
                errors.push(format!("{} cannot be empty", name));
            } else if value.contains(['/', '\\']) {
                errors.push(format!("{} '{}' must not contain path separators", name, value));
            }
        }

        if self.trade_results_name == self.portfolio_summary_name {
            errors.push("trade_results_name and portfolio_summary_name must differ".to_string());
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Reporting currency as a typed code.
    pub fn reporting_currency(&self) -> Result<Currency, ConfigError> {
        Currency::from_str(&self.reporting_currency).map_err(|e| ConfigError::Validation(vec![e.to_string()]))
    }

    /// Configured valuation date, or today.
    pub fn valuation_date(&self) -> NaiveDate {
        self.valuation_date
            .unwrap_or_else(|| chrono::Local::now().date_naive())
    }

    /// Settings for the validation stage.
    pub fn validation_config(&self) -> ValidationConfig {
        ValidationConfig {
            max_volatility: self.max_volatility,
        }
    }

    /// Settings for the pricing stage.
    pub fn pricing_config(&self) -> PricingConfig {
        PricingConfig::new(self.parallel_threshold)
    }
}

fn parse_env<T: FromStr>(var: &str, value: &str) -> Result<T, ConfigError> {
    value.trim().parse().map_err(|_| ConfigError::Env {
        var: var.to_string(),
        value: value.to_string(),
    })
}

/// Build configuration from all sources.
///
/// Without an explicit config file, `fxrisk.toml` in the working directory
/// is used when present.
pub fn build_config(cli: &CliOverrides) -> Result<AppConfig, ConfigError> {
    let mut config = match &cli.config_file {
        Some(path) => AppConfig::load(path)?,
        None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
            AppConfig::load(Path::new(DEFAULT_CONFIG_FILE))?
        }
        None => AppConfig::default(),
    }
    .with_env_override()?;

    config.merge_with_cli(cli);
    config.validate()?;

    Ok(config)
}
