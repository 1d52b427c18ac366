//! Raw trade records as received from a tabular source.

/// Loosely-typed trade record.
///
/// Mirrors one row of the input sheet. No business constraints are
/// enforced here; text fields are kept verbatim so that validation errors
/// can quote the original input.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RawTradeRecord {
    /// Trade identifier
    #[cfg_attr(feature = "serde", serde(rename = "TradeID"))]
    pub trade_id: String,
    /// Free-form pair text, e.g. `"EUR/USD"`
    #[cfg_attr(feature = "serde", serde(rename = "Underlying"))]
    pub underlying: String,
    /// Notional amount
    #[cfg_attr(feature = "serde", serde(rename = "Notional"))]
    pub notional: f64,
    /// Notional currency code
    #[cfg_attr(feature = "serde", serde(rename = "NotionalCurrency"))]
    pub notional_currency: String,
    /// Spot exchange rate
    #[cfg_attr(feature = "serde", serde(rename = "Spot"))]
    pub spot: f64,
    /// Strike
    #[cfg_attr(feature = "serde", serde(rename = "Strike"))]
    pub strike: f64,
    /// Implied volatility (decimal, 0.10 = 10%)
    #[cfg_attr(feature = "serde", serde(rename = "Vol"))]
    pub volatility: f64,
    /// Domestic (quote currency) continuously compounded rate
    #[cfg_attr(feature = "serde", serde(rename = "RateDomestic"))]
    pub domestic_rate: f64,
    /// Foreign (base currency) continuously compounded rate
    #[cfg_attr(feature = "serde", serde(rename = "RateForeign"))]
    pub foreign_rate: f64,
    /// Time to expiry in years
    #[cfg_attr(feature = "serde", serde(rename = "Expiry"))]
    pub expiry_years: f64,
    /// Free-form option type text, e.g. `"Call"`
    #[cfg_attr(feature = "serde", serde(rename = "OptionType"))]
    pub option_type: String,
}

impl RawTradeRecord {
    /// Column names of the tabular source, in canonical order.
    pub const COLUMNS: [&'static str; 11] = [
        "TradeID",
        "Underlying",
        "Notional",
        "NotionalCurrency",
        "Spot",
        "Strike",
        "Vol",
        "RateDomestic",
        "RateForeign",
        "Expiry",
        "OptionType",
    ];
}
