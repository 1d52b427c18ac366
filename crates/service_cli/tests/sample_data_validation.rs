//! Integration tests to validate the bundled sample data files.

use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use service_cli::config::AppConfig;
use service_cli::pipeline::RiskPipeline;
use tempfile::TempDir;

fn data_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("data")
}

#[test]
fn test_sample_config_parses_and_validates() {
    let config = AppConfig::load(&data_dir().join("fxrisk.toml")).expect("Should parse fxrisk.toml");
    config.validate().expect("Sample config should be valid");
    assert_eq!(config, AppConfig::default());
}

#[test]
fn test_sample_trades_all_valid() {
    let result = RiskPipeline::new(AppConfig::default())
        .check(&data_dir().join("sample_trades.csv"))
        .expect("Should load sample_trades.csv");

    assert!(result.is_valid(), "Unexpected errors: {:?}", result.errors);
    assert_eq!(result.valid_trades.len(), 6);
}

#[test]
fn test_sample_trades_price_in_usd() {
    let out = TempDir::new().unwrap();
    let config = AppConfig {
        valuation_date: NaiveDate::from_ymd_opt(2026, 10, 16),
        ..AppConfig::default()
    };

    let outcome = RiskPipeline::new(config)
        .run(&data_dir().join("sample_trades.csv"), Some(out.path()))
        .expect("Sample portfolio should price");

    assert_eq!(outcome.summary.total_trades, 6);
    assert!(outcome.summary.total_pv > 0.0);
    assert!(outcome.summary.total_vega > 0.0);
    for path in &outcome.written {
        assert!(path.exists(), "{} should exist", path.display());
    }
}
