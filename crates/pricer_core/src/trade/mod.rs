//! Typed records for each pipeline stage.
//!
//! Data flows forward and is never mutated after creation:
//!
//! ```text
//! RawTradeRecord --validate--> ValidatedTrade --price--> PricedTrade --aggregate--> PortfolioSummary
//! ```

pub mod priced;
pub mod raw;
pub mod summary;
pub mod validated;

pub use priced::PricedTrade;
pub use raw::RawTradeRecord;
pub use summary::PortfolioSummary;
pub use validated::{
    TradeTerms, ValidatedTrade, MAX_RATE, MAX_TIME_TO_EXPIRY, MAX_VOLATILITY, MIN_RATE,
};
