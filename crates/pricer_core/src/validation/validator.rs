//! Record-by-record validation of raw trades.
//!
//! Each record is validated independently. A rejected record contributes an
//! error message and never stops evaluation of the rest of the batch.

use tracing::{debug, info, warn};

use super::result::ValidationResult;
use crate::trade::{RawTradeRecord, TradeTerms, ValidatedTrade, MAX_VOLATILITY};
use crate::types::{Currency, CurrencyPair, OptionType, TradeError};

/// Validation settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidationConfig {
    /// Volatility ceiling applied as a business rule (decimal).
    ///
    /// Values above [`MAX_VOLATILITY`] have no effect since construction
    /// already enforces that bound.
    pub max_volatility: f64,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            max_volatility: MAX_VOLATILITY,
        }
    }
}

/// Validates raw trade records into [`ValidatedTrade`]s.
///
/// # Examples
///
/// ```
/// use pricer_core::trade::RawTradeRecord;
/// use pricer_core::validation::Validator;
///
/// let record = RawTradeRecord {
///     trade_id: "T001".to_string(),
///     underlying: "EUR/USD".to_string(),
///     notional: 1_000_000.0,
///     notional_currency: "USD".to_string(),
///     spot: 1.10,
///     strike: 1.10,
///     volatility: 0.10,
///     domestic_rate: 0.05,
///     foreign_rate: 0.03,
///     expiry_years: 0.5,
///     option_type: "Call".to_string(),
/// };
///
/// let result = Validator::default().validate(&[record]);
/// assert!(result.is_valid());
/// assert_eq!(result.valid_trades.len(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Validator {
    config: ValidationConfig,
}

impl Validator {
    /// Creates a validator with the given settings.
    pub fn new(config: ValidationConfig) -> Self {
        Self { config }
    }

    /// Returns the validator settings.
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Validates a batch, preserving input order in both output sequences.
    pub fn validate(&self, records: &[RawTradeRecord]) -> ValidationResult {
        let result = records.iter().fold(
            ValidationResult::default(),
            |mut acc, record| {
                match self.validate_record(record) {
                    Ok(trade) => acc.valid_trades.push(trade),
                    Err(err) => {
                        let message = format!("Trade {}: {}", record.trade_id, err);
                        warn!(trade_id = %record.trade_id, reason = %err, "Trade rejected");
                        acc.errors.push(message);
                    }
                }
                acc
            },
        );

        info!(
            total = records.len(),
            valid = result.valid_trades.len(),
            rejected = result.errors.len(),
            "Validation complete"
        );
        result
    }

    /// Validates a single record.
    ///
    /// # Errors
    ///
    /// Returns the first failing check as a `TradeError`.
    pub fn validate_record(&self, record: &RawTradeRecord) -> Result<ValidatedTrade, TradeError> {
        let option_type: OptionType = record.option_type.parse()?;

        let currency_pair = CurrencyPair::normalise(&record.underlying)
            .map_err(|_| TradeError::InvalidUnderlying(record.underlying.clone()))?;

        if record.expiry_years <= 0.0 {
            return Err(TradeError::NonPositiveExpiry(record.expiry_years));
        }

        let notional_currency: Currency = record
            .notional_currency
            .parse()
            .map_err(|_| TradeError::UnsupportedNotionalCurrency(record.notional_currency.clone()))?;

        let trade = ValidatedTrade::new(
            record.trade_id.clone(),
            currency_pair,
            option_type,
            notional_currency,
            TradeTerms {
                notional: record.notional,
                spot: record.spot,
                strike: record.strike,
                volatility: record.volatility,
                domestic_rate: record.domestic_rate,
                foreign_rate: record.foreign_rate,
                time_to_expiry: record.expiry_years,
            },
        )?;

        self.check_business_rules(&trade)?;

        debug!(trade_id = %trade.trade_id(), pair = %currency_pair, "Trade validated");
        Ok(trade)
    }

    fn check_business_rules(&self, trade: &ValidatedTrade) -> Result<(), TradeError> {
        if trade.volatility() > self.config.max_volatility {
            return Err(TradeError::VolatilityTooHigh {
                volatility: trade.volatility(),
                ceiling: self.config.max_volatility,
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(trade_id: &str) -> RawTradeRecord {
        RawTradeRecord {
            trade_id: trade_id.to_string(),
            underlying: "EUR/USD".to_string(),
            notional: 1_000_000.0,
            notional_currency: "USD".to_string(),
            spot: 1.1,
            strike: 1.1,
            volatility: 0.01,
            domestic_rate: 0.01,
            foreign_rate: 0.01,
            expiry_years: 0.25,
            option_type: "Call".to_string(),
        }
    }

    #[test]
    fn test_valid_trade() {
        let result = Validator::default().validate(&[record("T001")]);
        assert!(result.is_valid());
        assert_eq!(result.valid_trades.len(), 1);
        assert!(result.errors.is_empty());
    }

    #[test]
    fn test_invalid_option_type() {
        let raw = RawTradeRecord {
            option_type: "INVALID".to_string(),
            ..record("T002")
        };
        let result = Validator::default().validate(&[raw]);
        assert!(!result.is_valid());
        assert!(result.valid_trades.is_empty());
        assert_eq!(
            result.errors,
            vec!["Trade T002: Invalid OptionType 'INVALID'. Must be one of: CALL, PUT".to_string()]
        );
    }

    #[test]
    fn test_invalid_underlying() {
        let raw = RawTradeRecord {
            underlying: "EUR/CHF".to_string(),
            ..record("T003")
        };
        let result = Validator::default().validate(&[raw]);
        assert!(result.errors[0].starts_with("Trade T003: Invalid Underlying 'EUR/CHF'"));
    }

    #[test]
    fn test_negative_expiry() {
        let raw = RawTradeRecord {
            expiry_years: -0.25,
            ..record("T004")
        };
        let result = Validator::default().validate(&[raw]);
        assert_eq!(result.errors, vec!["Trade T004: Expiry must be positive, got -0.25".to_string()]);
    }

    #[test]
    fn test_option_type_checked_before_underlying() {
        let raw = RawTradeRecord {
            option_type: "straddle".to_string(),
            underlying: "XXX".to_string(),
            ..record("T005")
        };
        let err = Validator::default().validate_record(&raw).unwrap_err();
        assert!(matches!(err, TradeError::InvalidOptionType(_)));
    }

    #[test]
    fn test_unknown_notional_currency_quotes_raw_text() {
        let raw = RawTradeRecord {
            notional_currency: "XYZ".to_string(),
            ..record("T006")
        };
        let err = Validator::default().validate_record(&raw).unwrap_err();
        assert_eq!(err, TradeError::UnsupportedNotionalCurrency("XYZ".to_string()));
    }

    #[test]
    fn test_eur_notional_rejected() {
        let raw = RawTradeRecord {
            notional_currency: "EUR".to_string(),
            ..record("T007")
        };
        let result = Validator::default().validate(&[raw]);
        assert_eq!(
            result.errors,
            vec!["Trade T007: NotionalCurrency must be USD or JPY, got EUR".to_string()]
        );
    }

    #[test]
    fn test_configured_volatility_ceiling() {
        let validator = Validator::new(ValidationConfig {
            max_volatility: 0.5,
        });
        let raw = RawTradeRecord {
            volatility: 0.6,
            ..record("T008")
        };
        let err = validator.validate_record(&raw).unwrap_err();
        assert_eq!(
            err,
            TradeError::VolatilityTooHigh {
                volatility: 0.6,
                ceiling: 0.5
            }
        );
        assert!(Validator::default().validate_record(&raw).is_ok());
    }

    #[test]
    fn test_partial_failure_preserves_order() {
        let records = vec![
            record("A"),
            RawTradeRecord {
                strike: -1.1,
                ..record("B")
            },
            record("C"),
            RawTradeRecord {
                option_type: "x".to_string(),
                ..record("D")
            },
        ];
        let result = Validator::default().validate(&records);

        let ids: Vec<&str> = result.valid_trades.iter().map(|t| t.trade_id()).collect();
        assert_eq!(ids, vec!["A", "C"]);
        assert_eq!(result.errors.len(), 2);
        assert!(result.errors[0].starts_with("Trade B:"));
        assert!(result.errors[1].starts_with("Trade D:"));
        assert_eq!(result.total(), 4);
    }
}
