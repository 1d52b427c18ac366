//! Validation of raw trade records.
//!
//! Per record, in order:
//! 1. Option type text, case-insensitive
//! 2. Underlying text, normalised onto a supported pair
//! 3. Positive time to expiry
//! 4. Field constraints of [`ValidatedTrade`](crate::trade::ValidatedTrade)
//! 5. Business rules (volatility ceiling)

pub mod result;
pub mod validator;

pub use result::ValidationResult;
pub use validator::{ValidationConfig, Validator};
