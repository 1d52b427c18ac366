//! Option type (Call or Put).
//!
//! Two-variant enumeration that drives formula selection through
//! exhaustive `match` in the pricing layer.

use std::fmt;
use std::str::FromStr;

use super::error::TradeError;

/// Vanilla option type.
///
/// - Call: right to buy the base currency at the strike
/// - Put: right to sell the base currency at the strike
///
/// # Examples
///
/// ```
/// use pricer_core::types::OptionType;
///
/// for raw in ["call", "Call", "CALL"] {
///     assert_eq!(raw.parse::<OptionType>().unwrap(), OptionType::Call);
/// }
/// assert_eq!(OptionType::Put.to_string(), "PUT");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "UPPERCASE"))]
pub enum OptionType {
    /// Right to buy the base currency.
    Call,
    /// Right to sell the base currency.
    Put,
}

impl OptionType {
    /// Returns whether this is a call option.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, OptionType::Call)
    }

    /// Returns whether this is a put option.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, OptionType::Put)
    }

    /// Canonical upper-case label.
    pub fn as_str(&self) -> &'static str {
        match self {
            OptionType::Call => "CALL",
            OptionType::Put => "PUT",
        }
    }
}

impl FromStr for OptionType {
    type Err = TradeError;

    /// Parses case-insensitively; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "CALL" => Ok(OptionType::Call),
            "PUT" => Ok(OptionType::Put),
            _ => Err(TradeError::InvalidOptionType(s.to_string())),
        }
    }
}

impl fmt::Display for OptionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
