//! Error types for structured error handling.
//!
//! This module provides:
//! - `CurrencyError`: Errors from currency and currency pair parsing
//! - `TradeError`: Field and business-rule violations on a single trade
//! - `PricingError`: Fatal errors raised while pricing validated trades

use thiserror::Error;

/// Currency-related errors.
///
/// # Examples
/// ```
/// use pricer_core::types::CurrencyError;
///
/// let err = CurrencyError::UnknownCurrency("XYZ".to_string());
/// assert_eq!(format!("{}", err), "Unknown currency: XYZ");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CurrencyError {
    /// Unknown ISO 4217 code.
    #[error("Unknown currency: {0}")]
    UnknownCurrency(String),

    /// Underlying text that does not map to a supported pair.
    #[error("Unsupported currency pair: {0}")]
    UnsupportedPair(String),
}

/// Validation failure for a single trade.
///
/// Display strings are the `<reason>` part of the
/// `"Trade <trade_id>: <reason>"` messages reported for a batch.
///
/// # Examples
/// ```
/// use pricer_core::types::TradeError;
///
/// let err = TradeError::NonPositiveExpiry(-0.25);
/// assert_eq!(err.to_string(), "Expiry must be positive, got -0.25");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum TradeError {
    /// Option type text is neither CALL nor PUT.
    #[error("Invalid OptionType '{0}'. Must be one of: CALL, PUT")]
    InvalidOptionType(String),

    /// Underlying text does not normalise to a supported pair.
    #[error(
        "Invalid Underlying '{0}'. Must be one of: EUR/USD, GBP/USD, USD/JPY, AUD/USD, USD/CAD, USD/CHF"
    )]
    InvalidUnderlying(String),

    /// Time to expiry is zero or negative.
    #[error("Expiry must be positive, got {0}")]
    NonPositiveExpiry(f64),

    /// A numeric field is NaN or infinite.
    #[error("{field} must be a finite number, got {value}")]
    NonFinite {
        /// Field name as it appears in the source data
        field: &'static str,
        /// Offending value
        value: f64,
    },

    /// A numeric field violates its permitted range.
    #[error("{field} must be {constraint}, got {value}")]
    OutOfRange {
        /// Field name as it appears in the source data
        field: &'static str,
        /// Offending value
        value: f64,
        /// Human-readable range, e.g. `"> 0"` or `"in [-0.1, 1.0]"`
        constraint: &'static str,
    },

    /// Volatility above the enforced ceiling.
    #[error(
        "Volatility {:.2}% seems unreasonably high (maximum {:.2}%)",
        .volatility * 100.0,
        .ceiling * 100.0
    )]
    VolatilityTooHigh {
        /// Offending volatility (decimal)
        volatility: f64,
        /// Enforced ceiling (decimal)
        ceiling: f64,
    },

    /// Notional currency outside {USD, JPY}.
    #[error("NotionalCurrency must be USD or JPY, got {0}")]
    UnsupportedNotionalCurrency(String),
}

/// Pricing errors.
///
/// Pricing never fails for validated input; these variants surface defects
/// and are fatal for the run.
///
/// # Examples
/// ```
/// use pricer_core::types::PricingError;
///
/// let err = PricingError::InvalidInput("Negative spot price".to_string());
/// assert_eq!(format!("{}", err), "Invalid input: Negative spot price");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PricingError {
    /// Model parameters rejected by the pricing model.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// A computed metric is NaN or infinite.
    #[error("Trade {trade_id}: pricing produced non-finite {metric} ({value})")]
    NonFiniteResult {
        /// Trade identifier
        trade_id: String,
        /// Metric name (`pv`, `delta` or `vega`)
        metric: &'static str,
        /// Offending value
        value: f64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_display() {
        let err = TradeError::OutOfRange {
            field: "Strike",
            value: -1.1,
            constraint: "> 0",
        };
        assert_eq!(err.to_string(), "Strike must be > 0, got -1.1");
    }

    #[test]
    fn test_volatility_too_high_display() {
        let err = TradeError::VolatilityTooHigh {
            volatility: 1.5,
            ceiling: 1.0,
        };
        assert_eq!(
            err.to_string(),
            "Volatility 150.00% seems unreasonably high (maximum 100.00%)"
        );
    }

    #[test]
    fn test_invalid_underlying_display() {
        let err = TradeError::InvalidUnderlying("EUR/CHF".to_string());
        assert!(err.to_string().starts_with("Invalid Underlying 'EUR/CHF'."));
    }

    #[test]
    fn test_non_finite_result_display() {
        let err = PricingError::NonFiniteResult {
            trade_id: "T1".to_string(),
            metric: "pv",
            value: f64::NAN,
        };
        assert_eq!(err.to_string(), "Trade T1: pricing produced non-finite pv (NaN)");
    }

    #[test]
    fn test_error_trait_implementation() {
        let err = CurrencyError::UnsupportedPair("EURCHF".to_string());
        let _: &dyn std::error::Error = &err;
    }
}
