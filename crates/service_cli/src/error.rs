//! Error types for the fxrisk CLI.

use adapter_loader::LoaderError;
use pricer_core::types::PricingError;
use pricer_risk::AggregationError;
use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Data loading error
    #[error("Data loading error: {0}")]
    Load(#[from] LoaderError),

    /// One or more trades failed validation
    #[error("Validation failed with {} error(s)", .errors.len())]
    Validation {
        /// Every validation message, in input order
        errors: Vec<String>,
    },

    /// Pricing produced an unusable result
    #[error("Pricing error: {0}")]
    Pricing(#[from] PricingError),

    /// Portfolio could not be aggregated
    #[error("Aggregation error: {0}")]
    Aggregation(#[from] AggregationError),

    /// Report could not be written
    #[error("Report error: {0}")]
    Report(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CliError {
    /// Create a validation error
    pub fn validation(errors: Vec<String>) -> Self {
        Self::Validation { errors }
    }

    /// Create a report error
    pub fn report(msg: impl Into<String>) -> Self {
        Self::Report(msg.into())
    }
}

impl From<csv::Error> for CliError {
    fn from(err: csv::Error) -> Self {
        Self::report(err.to_string())
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        Self::report(err.to_string())
    }
}

/// Result alias for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;
