//! Report writer.
//!
//! Emits two sections, trade results and portfolio summary. Figures are
//! rounded here and nowhere else.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};

use pricer_core::trade::{PortfolioSummary, PricedTrade};
use serde::Serialize;
use tracing::info;

use crate::config::{AppConfig, OutputFormat};
use crate::error::Result;

/// One row of the trade results section.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct TradeResultRow {
    /// Trade identifier
    #[serde(rename = "TradeID")]
    pub trade_id: String,
    /// Pair in slash notation
    pub currency_pair: String,
    /// `CALL` or `PUT`
    pub option_type: String,
    /// Strike
    pub strike: f64,
    /// Notional amount
    pub notional: f64,
    /// Notional currency code
    pub notional_currency: String,
    /// Spot rate
    pub spot: f64,
    /// Time to expiry in years
    pub time_to_expiry: f64,
    /// Volatility (decimal)
    pub volatility: f64,
    /// Rounded present value
    #[serde(rename = "PV")]
    pub pv: f64,
    /// Rounded delta
    pub delta: f64,
    /// Rounded vega
    pub vega: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "PascalCase")]
struct SummaryRow {
    metric: String,
    value: String,
}

/// Writes pricing results to files.
#[derive(Debug, Clone)]
pub struct ReportWriter {
    format: OutputFormat,
    price_decimals: u32,
    greek_decimals: u32,
    trade_results_name: String,
    portfolio_summary_name: String,
}

impl ReportWriter {
    /// Create a writer from application settings
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            format: config.output_format,
            price_decimals: config.price_decimal_places,
            greek_decimals: config.greek_decimal_places,
            trade_results_name: config.trade_results_name.clone(),
            portfolio_summary_name: config.portfolio_summary_name.clone(),
        }
    }

    /// Converts priced trades into rounded report rows.
    pub fn trade_rows(&self, trades: &[PricedTrade]) -> Vec<TradeResultRow> {
        trades
            .iter()
            .map(|priced| {
                let trade = priced.trade();
                TradeResultRow {
                    trade_id: trade.trade_id().to_string(),
                    currency_pair: trade.currency_pair().display_code(),
                    option_type: trade.option_type().to_string(),
                    strike: trade.strike(),
                    notional: trade.notional(),
                    notional_currency: trade.notional_currency().to_string(),
                    spot: trade.spot(),
                    time_to_expiry: trade.time_to_expiry(),
                    volatility: trade.volatility(),
                    pv: round_to(priced.pv(), self.price_decimals),
                    delta: round_to(priced.delta(), self.greek_decimals),
                    vega: round_to(priced.vega(), self.greek_decimals),
                }
            })
            .collect()
    }

    /// Returns the summary with totals rounded for display.
    pub fn rounded_summary(&self, summary: &PortfolioSummary) -> PortfolioSummary {
        PortfolioSummary {
            total_pv: round_to(summary.total_pv, self.price_decimals),
            total_delta: round_to(summary.total_delta, self.greek_decimals),
            total_vega: round_to(summary.total_vega, self.greek_decimals),
            ..summary.clone()
        }
    }

    /// Write both sections under `output_dir`, naming files after `stem`.
    ///
    /// Returns the paths written.
    pub fn write(
        &self,
        output_dir: &Path,
        stem: &str,
        trades: &[PricedTrade],
        summary: &PortfolioSummary,
    ) -> Result<Vec<PathBuf>> {
        fs::create_dir_all(output_dir)?;

        let paths = match self.format {
            OutputFormat::Csv => self.write_csv(output_dir, stem, trades, summary)?,
            OutputFormat::Json => vec![self.write_json(output_dir, stem, trades, summary)?],
        };

        for path in &paths {
            info!(path = %path.display(), format = %self.format, "Report written to file");
        }
        Ok(paths)
    }

    fn write_csv(
        &self,
        output_dir: &Path,
        stem: &str,
        trades: &[PricedTrade],
        summary: &PortfolioSummary,
    ) -> Result<Vec<PathBuf>> {
        let trades_path = output_dir.join(format!("{}_{}.csv", stem, self.trade_results_name));
        let mut writer = csv::Writer::from_path(&trades_path)?;
        for row in self.trade_rows(trades) {
            writer.serialize(row)?;
        }
        writer.flush()?;

        let summary_path = output_dir.join(format!("{}_{}.csv", stem, self.portfolio_summary_name));
        let mut writer = csv::Writer::from_path(&summary_path)?;
        for row in self.summary_rows(summary) {
            writer.serialize(row)?;
        }
        writer.flush()?;

        Ok(vec![trades_path, summary_path])
    }

    fn write_json(
        &self,
        output_dir: &Path,
        stem: &str,
        trades: &[PricedTrade],
        summary: &PortfolioSummary,
    ) -> Result<PathBuf> {
        let mut document = serde_json::Map::new();
        document.insert(
            self.trade_results_name.clone(),
            serde_json::to_value(self.trade_rows(trades))?,
        );
        document.insert(
            self.portfolio_summary_name.clone(),
            serde_json::to_value(self.rounded_summary(summary))?,
        );

        let path = output_dir.join(format!("{}_results.json", stem));
        let file = BufWriter::new(File::create(&path)?);
        serde_json::to_writer_pretty(file, &document)?;
        Ok(path)
    }

    fn summary_rows(&self, summary: &PortfolioSummary) -> Vec<SummaryRow> {
        let ccy = summary.reporting_currency;
        let row = |metric: String, value: String| SummaryRow { metric, value };
        vec![
            row("Total Trades".to_string(), summary.total_trades.to_string()),
            row(
                format!("Total PV ({ccy})"),
                format!("{:.*}", self.price_decimals as usize, summary.total_pv),
            ),
            row(
                format!("Total Delta ({ccy})"),
                format!("{:.*}", self.greek_decimals as usize, summary.total_delta),
            ),
            row(
                format!("Total Vega ({ccy})"),
                format!("{:.*}", self.greek_decimals as usize, summary.total_vega),
            ),
            row("Valuation Date".to_string(), summary.valuation_date.to_string()),
        ]
    }
}

/// Rounds `value` to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Formats `value` with thousands separators, e.g. `-1,234,567.89`.
pub fn format_amount(value: f64, decimals: u32) -> String {
    let formatted = format!("{:.*}", decimals as usize, value.abs());
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((int_part, frac_part)) => (int_part, Some(frac_part)),
        None => (formatted.as_str(), None),
    };

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    match frac_part {
        Some(frac) => format!("{sign}{grouped}.{frac}"),
        None => format!("{sign}{grouped}"),
    }
}

/// Renders the portfolio summary as a console table.
pub fn summary_table(summary: &PortfolioSummary, price_decimals: u32, greek_decimals: u32) -> String {
    let ccy = summary.reporting_currency;
    let rule = "=".repeat(60);
    let lines = [
        rule.clone(),
        "PORTFOLIO SUMMARY".to_string(),
        rule.clone(),
        format!("{:<22}{}", "Valuation Date:", summary.valuation_date),
        format!("{:<22}{}", "Total Trades:", summary.total_trades),
        format!(
            "{:<22}{}",
            format!("Total PV ({ccy}):"),
            format_amount(summary.total_pv, price_decimals)
        ),
        format!(
            "{:<22}{}",
            format!("Total Delta ({ccy}):"),
            format_amount(summary.total_delta, greek_decimals)
        ),
        format!(
            "{:<22}{}",
            format!("Total Vega ({ccy}):"),
            format_amount(summary.total_vega, greek_decimals)
        ),
        rule,
    ];
    lines.join("\n")
}
