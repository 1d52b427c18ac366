//! fxrisk - FX option portfolio risk aggregation
//!
//! # Commands
//!
//! - `fxrisk run <trades.csv>` - Price a portfolio and write the reports
//! - `fxrisk check <trades.csv>` - Load and validate trades without pricing
//!
//! Settings come from `fxrisk.toml`, `FXRISK_*` environment variables and
//! command-line flags, in increasing order of precedence.

use std::path::PathBuf;
use std::process::ExitCode;

use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use service_cli::config::{build_config, CliOverrides, OutputFormat};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod commands;

/// FX option portfolio risk aggregation
#[derive(Parser)]
#[command(name = "fxrisk")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, global = true)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Price a portfolio and write trade results and portfolio summary
    Run {
        /// Path to the trade CSV file
        input: PathBuf,

        /// Output directory (defaults to the input file's directory)
        #[arg(short, long)]
        output_dir: Option<PathBuf>,

        /// Reporting currency (USD or JPY)
        #[arg(long)]
        reporting_currency: Option<String>,

        /// Valuation date (YYYY-MM-DD)
        #[arg(long)]
        valuation_date: Option<NaiveDate>,

        /// Report format
        #[arg(short, long, value_enum)]
        format: Option<OutputFormat>,
    },

    /// Load and validate a trade file without pricing
    Check {
        /// Path to the trade CSV file
        input: PathBuf,
    },
}

fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.to_lowercase()));
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .with(filter)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let mut overrides = CliOverrides {
        config_file: cli.config,
        log_level: cli.log_level,
        ..CliOverrides::default()
    };
    if let Commands::Run {
        reporting_currency,
        valuation_date,
        format,
        ..
    } = &cli.command
    {
        overrides.reporting_currency = reporting_currency.clone();
        overrides.valuation_date = *valuation_date;
        overrides.output_format = *format;
    }

    let config = match build_config(&overrides) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };
    init_tracing(&config.log_level);

    let result = match cli.command {
        Commands::Run {
            input, output_dir, ..
        } => commands::run::run(config, &input, output_dir.as_deref()),
        Commands::Check { input } => commands::check::run(config, &input),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}
