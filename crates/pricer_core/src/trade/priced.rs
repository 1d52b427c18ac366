//! Priced trades.

use super::validated::ValidatedTrade;
use crate::types::{Currency, CurrencyPair, OptionType, PricingError};

/// A validated trade together with its present value and sensitivities.
///
/// All metrics are expressed in the trade's notional currency and scaled by
/// notional. Vega is per one volatility point.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PricedTrade {
    #[cfg_attr(feature = "serde", serde(flatten))]
    trade: ValidatedTrade,
    pv: f64,
    delta: f64,
    vega: f64,
}

impl PricedTrade {
    /// Attaches pricing results to a trade.
    ///
    /// # Errors
    ///
    /// Returns `PricingError::NonFiniteResult` naming the first metric that
    /// is NaN or infinite.
    pub fn new(trade: ValidatedTrade, pv: f64, delta: f64, vega: f64) -> Result<Self, PricingError> {
        for (metric, value) in [("pv", pv), ("delta", delta), ("vega", vega)] {
            if !value.is_finite() {
                return Err(PricingError::NonFiniteResult {
                    trade_id: trade.trade_id().to_string(),
                    metric,
                    value,
                });
            }
        }
        Ok(Self {
            trade,
            pv,
            delta,
            vega,
        })
    }

    /// The underlying validated trade.
    #[inline]
    pub fn trade(&self) -> &ValidatedTrade {
        &self.trade
    }

    /// Trade identifier.
    #[inline]
    pub fn trade_id(&self) -> &str {
        self.trade.trade_id()
    }

    /// Underlying currency pair.
    #[inline]
    pub fn currency_pair(&self) -> CurrencyPair {
        self.trade.currency_pair()
    }

    /// Call or put.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.trade.option_type()
    }

    /// Currency in which pv, delta and vega are expressed.
    #[inline]
    pub fn notional_currency(&self) -> Currency {
        self.trade.notional_currency()
    }

    /// Spot exchange rate at pricing.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.trade.spot()
    }

    /// Present value.
    #[inline]
    pub fn pv(&self) -> f64 {
        self.pv
    }

    /// Delta (dPV/dS).
    #[inline]
    pub fn delta(&self) -> f64 {
        self.delta
    }

    /// Vega per one volatility point.
    #[inline]
    pub fn vega(&self) -> f64 {
        self.vega
    }
}
