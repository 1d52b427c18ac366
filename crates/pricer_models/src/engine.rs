//! Portfolio pricing engine.
//!
//! Prices validated trades under Garman-Kohlhagen and scales the per-unit
//! results by notional. Large batches are priced in parallel with Rayon;
//! output order always matches input order.

use pricer_core::trade::{PricedTrade, ValidatedTrade};
use pricer_core::types::PricingError;
use rayon::prelude::*;
use tracing::{debug, info};

use crate::analytical::{GarmanKohlhagen, GarmanKohlhagenParams};

/// Default minimum batch size before pricing switches to Rayon.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 256;

/// Configuration for the pricing engine.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PricingConfig {
    /// Minimum number of trades before using parallelism
    pub parallel_threshold: usize,
}

impl Default for PricingConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl PricingConfig {
    /// Creates a new pricing configuration.
    pub fn new(parallel_threshold: usize) -> Self {
        Self { parallel_threshold }
    }

    /// Returns whether to use parallel processing for the given trade count.
    #[inline]
    pub fn should_parallelize(&self, n_trades: usize) -> bool {
        n_trades >= self.parallel_threshold
    }
}

/// Closed-form pricing engine for validated FX option trades.
///
/// # Examples
///
/// ```
/// use pricer_core::trade::{TradeTerms, ValidatedTrade};
/// use pricer_core::types::{Currency, CurrencyPair, OptionType};
/// use pricer_models::engine::PricingEngine;
///
/// let trade = ValidatedTrade::new(
///     "T001",
///     CurrencyPair::EURUSD,
///     OptionType::Call,
///     Currency::USD,
///     TradeTerms {
///         notional: 1_000_000.0,
///         spot: 1.10,
///         strike: 1.10,
///         volatility: 0.10,
///         domestic_rate: 0.05,
///         foreign_rate: 0.03,
///         time_to_expiry: 0.5,
///     },
/// )
/// .unwrap();
///
/// let priced = PricingEngine::default().price_trade(&trade).unwrap();
/// assert!(priced.pv() > 10_000.0 && priced.pv() < 100_000.0);
/// assert!(priced.delta() > 400_000.0 && priced.delta() < 600_000.0);
/// assert!(priced.vega() > 0.0);
/// ```
#[derive(Clone, Debug, Default)]
pub struct PricingEngine {
    config: PricingConfig,
}

impl PricingEngine {
    /// Creates a pricing engine with the given configuration.
    pub fn new(config: PricingConfig) -> Self {
        Self { config }
    }

    /// Returns the engine configuration.
    pub fn config(&self) -> &PricingConfig {
        &self.config
    }

    /// Prices a single trade.
    ///
    /// PV, delta and vega are in the trade's notional currency, multiplied by
    /// notional. Vega is per one volatility point.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::NonFiniteResult` if any metric is NaN or
    /// infinite, and `PricingError::InvalidInput` if the model rejects the
    /// trade's parameters. Neither occurs for trades within the validated
    /// ranges.
    pub fn price_trade(&self, trade: &ValidatedTrade) -> Result<PricedTrade, PricingError> {
        let params = GarmanKohlhagenParams::new(
            trade.spot(),
            trade.strike(),
            trade.domestic_rate(),
            trade.foreign_rate(),
            trade.volatility(),
            trade.time_to_expiry(),
        )?;
        let model = GarmanKohlhagen::new(params);
        let option_type = trade.option_type();
        let notional = trade.notional();

        let pv = model.price(option_type) * notional;
        let delta = model.delta(option_type) * notional;
        let vega = model.vega() * notional;

        debug!(
            trade_id = %trade.trade_id(),
            d1 = model.d1(),
            d2 = model.d2(),
            pv,
            delta,
            vega,
            "Trade priced"
        );

        PricedTrade::new(trade.clone(), pv, delta, vega)
    }

    /// Prices a batch of trades, preserving input order.
    ///
    /// # Errors
    ///
    /// Returns the first pricing error encountered. A failure in any trade
    /// fails the whole batch.
    pub fn price_portfolio(
        &self,
        trades: &[ValidatedTrade],
    ) -> Result<Vec<PricedTrade>, PricingError> {
        let parallel = self.config.should_parallelize(trades.len());

        let priced = if parallel {
            trades
                .par_iter()
                .map(|trade| self.price_trade(trade))
                .collect::<Result<Vec<_>, _>>()?
        } else {
            trades
                .iter()
                .map(|trade| self.price_trade(trade))
                .collect::<Result<Vec<_>, _>>()?
        };

        info!(trades = priced.len(), parallel, "Portfolio priced");
        Ok(priced)
    }
}
