//! Reporting-currency conversion.
//!
//! The supported conversions form a closed set: identity, and USD/JPY via
//! the trade's own spot rate. Everything else is an error.

use pricer_core::types::{Currency, CurrencyPair};
use thiserror::Error;

/// Conversion errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversionError {
    /// No conversion rule exists for this pair and currency combination.
    #[error("Unsupported conversion {from}->{to} for {pair}")]
    Unsupported {
        /// Source currency
        from: Currency,
        /// Target currency
        to: Currency,
        /// Currency pair of the trade
        pair: CurrencyPair,
    },
}

/// Converts `amount` from `from` into `to` for a trade on `pair` quoted at
/// `spot`.
///
/// - Same currency: unchanged.
/// - USDJPY, JPY to USD: divided by spot.
/// - USDJPY, USD to JPY: multiplied by spot.
///
/// # Errors
///
/// Returns `ConversionError::Unsupported` for any other combination.
///
/// # Examples
///
/// ```
/// use pricer_core::types::{Currency, CurrencyPair};
/// use pricer_risk::conversion::convert;
///
/// let usd = convert(1_100.0, CurrencyPair::USDJPY, Currency::JPY, Currency::USD, 110.0).unwrap();
/// assert_eq!(usd, 10.0);
///
/// let err = convert(1.0, CurrencyPair::EURUSD, Currency::EUR, Currency::USD, 1.1).unwrap_err();
/// assert_eq!(err.to_string(), "Unsupported conversion EUR->USD for EURUSD");
/// ```
pub fn convert(
    amount: f64,
    pair: CurrencyPair,
    from: Currency,
    to: Currency,
    spot: f64,
) -> Result<f64, ConversionError> {
    match (pair, from, to) {
        (_, from, to) if from == to => Ok(amount),
        (CurrencyPair::USDJPY, Currency::JPY, Currency::USD) => Ok(amount / spot),
        (CurrencyPair::USDJPY, Currency::USD, Currency::JPY) => Ok(amount * spot),
        (pair, from, to) => Err(ConversionError::Unsupported { from, to, pair }),
    }
}
