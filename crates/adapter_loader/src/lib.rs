//! # adapter_loader: Tabular Trade Input
//!
//! Parses trade files into [`RawTradeRecord`](pricer_core::trade::RawTradeRecord)s
//! for the validation stage. Required columns:
//!
//! `TradeID, Underlying, Notional, NotionalCurrency, Spot, Strike, Vol,
//! RateDomestic, RateForeign, Expiry, OptionType`
//!
//! Row numbers in errors match a spreadsheet view of the file: the header
//! is row 1 and the first trade is row 2.

#![deny(missing_docs)]

pub mod csv_loader;
pub mod error;

pub use csv_loader::CsvTradeLoader;
pub use error::LoaderError;
