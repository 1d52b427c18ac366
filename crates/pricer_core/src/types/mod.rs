//! Core financial types.
//!
//! This module provides:
//! - `currency`: ISO 4217 currency codes with metadata
//! - `currency_pair`: The closed set of supported FX pairs
//! - `option_type`: Call/Put enumeration
//! - `error`: Structured error types for currency, trade and pricing operations

pub mod currency;
pub mod currency_pair;
pub mod error;
pub mod option_type;

// Re-export commonly used types at module level
pub use currency::Currency;
pub use currency_pair::CurrencyPair;
pub use error::{CurrencyError, PricingError, TradeError};
pub use option_type::OptionType;
