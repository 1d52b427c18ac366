//! Currency pair types for FX option underlyings.
//!
//! The supported universe is a closed set of six major pairs. Free-form
//! underlying text such as `"EUR/USD"`, `"EUR / USD"` or `"eurusd"` is
//! normalised onto this set.
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::{Currency, CurrencyPair};
//!
//! let pair = CurrencyPair::normalise("usd / jpy").unwrap();
//! assert_eq!(pair, CurrencyPair::USDJPY);
//! assert_eq!(pair.base(), Currency::USD);
//! assert_eq!(pair.quote(), Currency::JPY);
//! assert_eq!(pair.display_code(), "USD/JPY");
//! ```

use std::fmt;
use std::str::FromStr;

use super::currency::Currency;
use super::error::CurrencyError;

/// Supported FX currency pairs, quoted BASE/QUOTE.
///
/// 1 unit of the base currency is worth `spot` units of the quote currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CurrencyPair {
    /// Euro / US Dollar
    EURUSD,
    /// British Pound / US Dollar
    GBPUSD,
    /// US Dollar / Japanese Yen
    USDJPY,
    /// Australian Dollar / US Dollar
    AUDUSD,
    /// US Dollar / Canadian Dollar
    USDCAD,
    /// US Dollar / Swiss Franc
    USDCHF,
}

impl CurrencyPair {
    /// Every supported pair, in declaration order.
    pub const ALL: [CurrencyPair; 6] = [
        CurrencyPair::EURUSD,
        CurrencyPair::GBPUSD,
        CurrencyPair::USDJPY,
        CurrencyPair::AUDUSD,
        CurrencyPair::USDCAD,
        CurrencyPair::USDCHF,
    ];

    /// Returns the base currency.
    #[inline]
    pub fn base(&self) -> Currency {
        match self {
            CurrencyPair::EURUSD => Currency::EUR,
            CurrencyPair::GBPUSD => Currency::GBP,
            CurrencyPair::AUDUSD => Currency::AUD,
            CurrencyPair::USDJPY | CurrencyPair::USDCAD | CurrencyPair::USDCHF => Currency::USD,
        }
    }

    /// Returns the quote currency.
    #[inline]
    pub fn quote(&self) -> Currency {
        match self {
            CurrencyPair::EURUSD | CurrencyPair::GBPUSD | CurrencyPair::AUDUSD => Currency::USD,
            CurrencyPair::USDJPY => Currency::JPY,
            CurrencyPair::USDCAD => Currency::CAD,
            CurrencyPair::USDCHF => Currency::CHF,
        }
    }

    /// Returns the compact pair code, e.g. `"EURUSD"`.
    pub fn code(&self) -> &'static str {
        match self {
            CurrencyPair::EURUSD => "EURUSD",
            CurrencyPair::GBPUSD => "GBPUSD",
            CurrencyPair::USDJPY => "USDJPY",
            CurrencyPair::AUDUSD => "AUDUSD",
            CurrencyPair::USDCAD => "USDCAD",
            CurrencyPair::USDCHF => "USDCHF",
        }
    }

    /// Returns the pair code in slash notation, e.g. `"EUR/USD"`.
    pub fn display_code(&self) -> String {
        format!("{}/{}", self.base().code(), self.quote().code())
    }

    /// Normalises free-form underlying text onto a supported pair.
    ///
    /// Slashes and whitespace are stripped and the remainder upper-cased
    /// before matching.
    ///
    /// # Errors
    ///
    /// Returns `CurrencyError::UnsupportedPair` carrying the raw input when
    /// the normalised text is not one of the supported pairs.
    ///
    /// # Examples
    ///
    /// ```
    /// use pricer_core::types::CurrencyPair;
    ///
    /// for raw in ["EUR/USD", "EUR / USD", "eurusd"] {
    ///     assert_eq!(CurrencyPair::normalise(raw).unwrap(), CurrencyPair::EURUSD);
    /// }
    /// assert!(CurrencyPair::normalise("EUR/CHF").is_err());
    /// ```
    pub fn normalise(raw: &str) -> Result<Self, CurrencyError> {
        let compact: String = raw
            .chars()
            .filter(|c| *c != '/' && !c.is_whitespace())
            .collect::<String>()
            .to_uppercase();

        match compact.as_str() {
            "EURUSD" => Ok(CurrencyPair::EURUSD),
            "GBPUSD" => Ok(CurrencyPair::GBPUSD),
            "USDJPY" => Ok(CurrencyPair::USDJPY),
            "AUDUSD" => Ok(CurrencyPair::AUDUSD),
            "USDCAD" => Ok(CurrencyPair::USDCAD),
            "USDCHF" => Ok(CurrencyPair::USDCHF),
            _ => Err(CurrencyError::UnsupportedPair(raw.to_string())),
        }
    }
}

impl FromStr for CurrencyPair {
    type Err = CurrencyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::normalise(s)
    }
}

impl fmt::Display for CurrencyPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
