//! # service_cli: FX Option Risk Command Line
//!
//! Library half of the `fxrisk` binary. Wires the loader, validator, pricing
//! engine and aggregator into one pipeline and writes the reports.
//!
//! ```text
//! adapter_loader  -> RawTradeRecord
//! pricer_core     -> ValidatedTrade
//! pricer_models   -> PricedTrade
//! pricer_risk     -> PortfolioSummary
//! report          -> <stem>_Trade_Results.csv, <stem>_Portfolio_Summary.csv
//! ```
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use service_cli::config::AppConfig;
//! use service_cli::pipeline::RiskPipeline;
//!
//! let pipeline = RiskPipeline::new(AppConfig::default());
//! let outcome = pipeline.run(Path::new("trades.csv"), None)?;
//! println!("Total PV: {}", outcome.summary.total_pv);
//! # Ok::<(), service_cli::CliError>(())
//! ```

#![deny(missing_docs)]

pub mod config;
pub mod error;
pub mod pipeline;
pub mod report;

pub use error::{CliError, Result};
