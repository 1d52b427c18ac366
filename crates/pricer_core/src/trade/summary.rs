//! Portfolio-level summary.

use chrono::NaiveDate;

use crate::types::Currency;

/// Aggregated portfolio metrics in a single reporting currency.
///
/// Created once per run by the aggregation stage.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortfolioSummary {
    /// Number of trades aggregated
    pub total_trades: usize,
    /// Sum of present values
    pub total_pv: f64,
    /// Sum of deltas
    pub total_delta: f64,
    /// Sum of vegas
    pub total_vega: f64,
    /// Valuation date of the run
    pub valuation_date: NaiveDate,
    /// Currency of every total
    pub reporting_currency: Currency,
}

impl PortfolioSummary {
    /// Summary of an empty portfolio.
    pub fn empty(valuation_date: NaiveDate, reporting_currency: Currency) -> Self {
        Self {
            total_trades: 0,
            total_pv: 0.0,
            total_delta: 0.0,
            total_vega: 0.0,
            valuation_date,
            reporting_currency,
        }
    }
}
