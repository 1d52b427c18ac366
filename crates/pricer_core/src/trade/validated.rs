//! Validated FX option trades.
//!
//! A [`ValidatedTrade`] can only be obtained through [`ValidatedTrade::new`],
//! which enforces every field constraint. Downstream stages may therefore
//! rely on strictly positive spot, strike, volatility and expiry.

use crate::types::{Currency, CurrencyPair, OptionType, TradeError};

/// Upper bound on time to expiry in years.
pub const MAX_TIME_TO_EXPIRY: f64 = 10.0;

/// Volatility ceiling (decimal). 1.0 = 100%.
pub const MAX_VOLATILITY: f64 = 1.0;

/// Lower bound on domestic and foreign rates.
pub const MIN_RATE: f64 = -0.1;

/// Upper bound on domestic and foreign rates.
pub const MAX_RATE: f64 = 1.0;

/// Economic terms of an FX option, prior to range checks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TradeTerms {
    /// Notional amount
    pub notional: f64,
    /// Spot exchange rate
    pub spot: f64,
    /// Strike
    pub strike: f64,
    /// Implied volatility (decimal)
    pub volatility: f64,
    /// Domestic rate
    pub domestic_rate: f64,
    /// Foreign rate
    pub foreign_rate: f64,
    /// Time to expiry in years
    pub time_to_expiry: f64,
}

/// An FX option whose fields are mutually consistent and range-checked.
///
/// # Examples
///
/// ```
/// use pricer_core::trade::{TradeTerms, ValidatedTrade};
/// use pricer_core::types::{Currency, CurrencyPair, OptionType};
///
/// let terms = TradeTerms {
///     notional: 1_000_000.0,
///     spot: 1.10,
///     strike: 1.10,
///     volatility: 0.10,
///     domestic_rate: 0.05,
///     foreign_rate: 0.03,
///     time_to_expiry: 0.5,
/// };
/// let trade = ValidatedTrade::new(
///     "T001",
///     CurrencyPair::EURUSD,
///     OptionType::Call,
///     Currency::USD,
///     terms,
/// )
/// .unwrap();
/// assert_eq!(trade.strike(), 1.10);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ValidatedTrade {
    trade_id: String,
    currency_pair: CurrencyPair,
    option_type: OptionType,
    strike: f64,
    notional: f64,
    notional_currency: Currency,
    time_to_expiry: f64,
    spot: f64,
    volatility: f64,
    domestic_rate: f64,
    foreign_rate: f64,
}

impl ValidatedTrade {
    /// Builds a validated trade.
    ///
    /// Constraints, checked in this order:
    /// - every numeric term is finite
    /// - strike > 0, notional > 0
    /// - notional currency is USD or JPY
    /// - 0 < time to expiry <= 10
    /// - spot > 0
    /// - 0 < volatility <= [`MAX_VOLATILITY`]
    /// - domestic and foreign rates in [-0.1, 1.0]
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint as a `TradeError`.
    pub fn new(
        trade_id: impl Into<String>,
        currency_pair: CurrencyPair,
        option_type: OptionType,
        notional_currency: Currency,
        terms: TradeTerms,
    ) -> Result<Self, TradeError> {
        let TradeTerms {
            notional,
            spot,
            strike,
            volatility,
            domestic_rate,
            foreign_rate,
            time_to_expiry,
        } = terms;

        for (field, value) in [
            ("Strike", strike),
            ("Notional", notional),
            ("Expiry", time_to_expiry),
            ("Spot", spot),
            ("Vol", volatility),
            ("RateDomestic", domestic_rate),
            ("RateForeign", foreign_rate),
        ] {
            if !value.is_finite() {
                return Err(TradeError::NonFinite { field, value });
            }
        }

        positive("Strike", strike)?;
        positive("Notional", notional)?;

        match notional_currency {
            Currency::USD | Currency::JPY => {}
            other => return Err(TradeError::UnsupportedNotionalCurrency(other.to_string())),
        }

        if time_to_expiry <= 0.0 {
            return Err(TradeError::NonPositiveExpiry(time_to_expiry));
        }
        if time_to_expiry > MAX_TIME_TO_EXPIRY {
            return Err(TradeError::OutOfRange {
                field: "Expiry",
                value: time_to_expiry,
                constraint: "<= 10 years",
            });
        }

        positive("Spot", spot)?;
        positive("Vol", volatility)?;
        if volatility > MAX_VOLATILITY {
            return Err(TradeError::VolatilityTooHigh {
                volatility,
                ceiling: MAX_VOLATILITY,
            });
        }

        rate("RateDomestic", domestic_rate)?;
        rate("RateForeign", foreign_rate)?;

        Ok(Self {
            trade_id: trade_id.into(),
            currency_pair,
            option_type,
            strike,
            notional,
            notional_currency,
            time_to_expiry,
            spot,
            volatility,
            domestic_rate,
            foreign_rate,
        })
    }

    /// Trade identifier.
    #[inline]
    pub fn trade_id(&self) -> &str {
        &self.trade_id
    }

    /// Underlying currency pair.
    #[inline]
    pub fn currency_pair(&self) -> CurrencyPair {
        self.currency_pair
    }

    /// Call or put.
    #[inline]
    pub fn option_type(&self) -> OptionType {
        self.option_type
    }

    /// Strike.
    #[inline]
    pub fn strike(&self) -> f64 {
        self.strike
    }

    /// Notional amount.
    #[inline]
    pub fn notional(&self) -> f64 {
        self.notional
    }

    /// Currency of the notional and of every priced metric.
    #[inline]
    pub fn notional_currency(&self) -> Currency {
        self.notional_currency
    }

    /// Time to expiry in years.
    #[inline]
    pub fn time_to_expiry(&self) -> f64 {
        self.time_to_expiry
    }

    /// Spot exchange rate.
    #[inline]
    pub fn spot(&self) -> f64 {
        self.spot
    }

    /// Implied volatility (decimal).
    #[inline]
    pub fn volatility(&self) -> f64 {
        self.volatility
    }

    /// Domestic rate.
    #[inline]
    pub fn domestic_rate(&self) -> f64 {
        self.domestic_rate
    }

    /// Foreign rate.
    #[inline]
    pub fn foreign_rate(&self) -> f64 {
        self.foreign_rate
    }

    /// Economic terms of the trade.
    pub fn terms(&self) -> TradeTerms {
        TradeTerms {
            notional: self.notional,
            spot: self.spot,
            strike: self.strike,
            volatility: self.volatility,
            domestic_rate: self.domestic_rate,
            foreign_rate: self.foreign_rate,
            time_to_expiry: self.time_to_expiry,
        }
    }
}

fn positive(field: &'static str, value: f64) -> Result<(), TradeError> {
    if value > 0.0 {
        Ok(())
    } else {
        Err(TradeError::OutOfRange {
            field,
            value,
            constraint: "> 0",
        })
    }
}

fn rate(field: &'static str, value: f64) -> Result<(), TradeError> {
    if (MIN_RATE..=MAX_RATE).contains(&value) {
        Ok(())
    } else {
        Err(TradeError::OutOfRange {
            field,
            value,
            constraint: "in [-0.1, 1.0]",
        })
    }
}
