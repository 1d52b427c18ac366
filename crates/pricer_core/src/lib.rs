//! # pricer_core: Trade Data Model for FX Option Risk
//!
//! ## Layer 1 (Foundation) Role
//!
//! pricer_core is the bottom layer of the workspace, providing:
//! - Currency types: `Currency`, `CurrencyPair`, `OptionType` (`types`)
//! - Typed records for each pipeline stage (`trade`)
//! - Record-by-record validation with partial-failure semantics (`validation`)
//! - Error types: `CurrencyError`, `TradeError`, `PricingError` (`types::error`)
//!
//! ## Usage Examples
//!
//! ```rust
//! use pricer_core::trade::RawTradeRecord;
//! use pricer_core::types::{Currency, CurrencyPair};
//! use pricer_core::validation::Validator;
//!
//! let good = RawTradeRecord {
//!     trade_id: "T1".to_string(),
//!     underlying: "usd / jpy".to_string(),
//!     notional: 100_000_000.0,
//!     notional_currency: "JPY".to_string(),
//!     spot: 110.0,
//!     strike: 112.0,
//!     volatility: 0.09,
//!     domestic_rate: 0.001,
//!     foreign_rate: 0.02,
//!     expiry_years: 1.0,
//!     option_type: "put".to_string(),
//! };
//! let bad = RawTradeRecord { strike: -1.0, trade_id: "T2".to_string(), ..good.clone() };
//!
//! let result = Validator::default().validate(&[good, bad]);
//! assert!(!result.is_valid());
//! assert_eq!(result.valid_trades[0].currency_pair(), CurrencyPair::USDJPY);
//! assert_eq!(result.valid_trades[0].notional_currency(), Currency::JPY);
//! assert!(result.errors[0].starts_with("Trade T2:"));
//! ```
//!
//! ## Feature Flags
//!
//! - `serde` (default): Serialisation for the data model. `RawTradeRecord`
//!   deserialises from the tabular column names.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod trade;
pub mod types;
pub mod validation;
