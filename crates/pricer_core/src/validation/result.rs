//! Outcome of validating a batch of raw trades.

use crate::trade::ValidatedTrade;

/// Valid trades and error messages, both in input order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ValidationResult {
    /// Trades that passed every check
    pub valid_trades: Vec<ValidatedTrade>,
    /// One `"Trade <trade_id>: <reason>"` message per rejected record
    pub errors: Vec<String>,
}

impl ValidationResult {
    /// Returns true iff no record was rejected.
    #[inline]
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Number of records examined.
    #[inline]
    pub fn total(&self) -> usize {
        self.valid_trades.len() + self.errors.len()
    }

    /// Consumes the result, returning the valid trades when no record was
    /// rejected and the error messages otherwise.
    pub fn into_trades(self) -> Result<Vec<ValidatedTrade>, Vec<String>> {
        if self.is_valid() {
            Ok(self.valid_trades)
        } else {
            Err(self.errors)
        }
    }
}
