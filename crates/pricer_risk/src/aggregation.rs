//! Portfolio aggregation in a single reporting currency.
//!
//! Each priced trade's PV, delta and vega are converted with
//! [`convert`](crate::conversion::convert) and summed in input order, so
//! repeated runs over the same input give bit-identical totals.

use std::iter::Sum;
use std::ops::Add;

use chrono::NaiveDate;
use pricer_core::trade::{PortfolioSummary, PricedTrade};
use pricer_core::types::Currency;
use thiserror::Error;
use tracing::{debug, info};

use crate::conversion::{convert, ConversionError};

/// Aggregation errors. Always fatal for the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AggregationError {
    /// A trade's metrics cannot be expressed in the reporting currency.
    #[error("Trade {trade_id}: {source}")]
    Conversion {
        /// Identifier of the offending trade
        trade_id: String,
        /// Underlying conversion failure
        #[source]
        source: ConversionError,
    },
}

/// PV, delta and vega in one currency.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RiskTotals {
    /// Present value
    pub pv: f64,
    /// Delta
    pub delta: f64,
    /// Vega per volatility point
    pub vega: f64,
}

impl RiskTotals {
    /// Creates a new set of totals.
    pub fn new(pv: f64, delta: f64, vega: f64) -> Self {
        Self { pv, delta, vega }
    }
}

impl Add for RiskTotals {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            pv: self.pv + rhs.pv,
            delta: self.delta + rhs.delta,
            vega: self.vega + rhs.vega,
        }
    }
}

impl Sum for RiskTotals {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::default(), Add::add)
    }
}

/// Aggregates priced trades into a [`PortfolioSummary`].
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use pricer_core::types::Currency;
/// use pricer_risk::aggregation::Aggregator;
///
/// let date = NaiveDate::from_ymd_opt(2024, 1, 15).unwrap();
/// let summary = Aggregator::new().aggregate(&[], date, Currency::USD).unwrap();
/// assert_eq!(summary.total_trades, 0);
/// assert_eq!(summary.total_pv, 0.0);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Aggregator;

impl Aggregator {
    /// Creates an aggregator.
    pub fn new() -> Self {
        Self
    }

    /// Converts one trade's metrics into `reporting_currency`.
    ///
    /// # Errors
    ///
    /// Returns `ConversionError` when no conversion rule applies.
    pub fn convert_trade(
        &self,
        trade: &PricedTrade,
        reporting_currency: Currency,
    ) -> Result<RiskTotals, ConversionError> {
        let pair = trade.currency_pair();
        let from = trade.notional_currency();
        let spot = trade.spot();
        let to_reporting = |amount| convert(amount, pair, from, reporting_currency, spot);

        Ok(RiskTotals {
            pv: to_reporting(trade.pv())?,
            delta: to_reporting(trade.delta())?,
            vega: to_reporting(trade.vega())?,
        })
    }

    /// Sums converted metrics over `trades` in input order.
    ///
    /// # Errors
    ///
    /// Returns `AggregationError::Conversion` for the first trade that cannot
    /// be converted; no partial summary is produced.
    pub fn aggregate(
        &self,
        trades: &[PricedTrade],
        valuation_date: NaiveDate,
        reporting_currency: Currency,
    ) -> Result<PortfolioSummary, AggregationError> {
        if trades.is_empty() {
            info!(currency = %reporting_currency, "Empty portfolio aggregated");
            return Ok(PortfolioSummary::empty(valuation_date, reporting_currency));
        }

        let totals = trades
            .iter()
            .map(|trade| {
                let converted = self.convert_trade(trade, reporting_currency).map_err(|source| {
                    AggregationError::Conversion {
                        trade_id: trade.trade_id().to_string(),
                        source,
                    }
                })?;
                debug!(
                    trade_id = %trade.trade_id(),
                    from = %trade.notional_currency(),
                    to = %reporting_currency,
                    pv = converted.pv,
                    "Trade converted"
                );
                Ok::<_, AggregationError>(converted)
            })
            .sum::<Result<RiskTotals, AggregationError>>()?;

        info!(
            trades = trades.len(),
            currency = %reporting_currency,
            total_pv = totals.pv,
            "Portfolio aggregated"
        );

        Ok(PortfolioSummary {
            total_trades: trades.len(),
            total_pv: totals.pv,
            total_delta: totals.delta,
            total_vega: totals.vega,
            valuation_date,
            reporting_currency,
        })
    }
}
