//! Garman-Kohlhagen model for FX option pricing.
//!
//! This module provides the Garman-Kohlhagen closed-form solution for pricing
//! European FX options. The model extends Black-Scholes to account for two
//! interest rates (domestic and foreign).
//!
//! # Mathematical Background
//!
//! The Garman-Kohlhagen formula prices FX options with:
//! - S: spot exchange rate (domestic per foreign)
//! - K: strike price
//! - rd: domestic risk-free rate (continuous compounding)
//! - rf: foreign risk-free rate (continuous compounding)
//! - σ: volatility of the exchange rate
//! - T: time to maturity in years
//!
//! ## Call Option Price
//! C = S * e^(-rf*T) * N(d1) - K * e^(-rd*T) * N(d2)
//!
//! ## Put Option Price
//! P = K * e^(-rd*T) * N(-d2) - S * e^(-rf*T) * N(-d1)
//!
//! where:
//! d1 = [ln(S/K) + (rd - rf + σ²/2) * T] / (σ * √T)
//! d2 = d1 - σ * √T
//!
//! # Examples
//!
//! ```
//! use pricer_core::types::OptionType;
//! use pricer_models::analytical::garman_kohlhagen::{
//!     GarmanKohlhagen, GarmanKohlhagenParams,
//! };
//!
//! let params = GarmanKohlhagenParams::new(
//!     1.10,   // spot
//!     1.12,   // strike
//!     0.03,   // domestic rate (3%)
//!     0.01,   // foreign rate (1%)
//!     0.15,   // volatility (15%)
//!     1.0,    // expiry (1 year)
//! ).unwrap();
//!
//! let model = GarmanKohlhagen::new(params);
//! let call_price = model.price(OptionType::Call);
//! let put_price = model.price(OptionType::Put);
//!
//! // Put-call parity check
//! let parity_diff = call_price - put_price
//!     - (1.10 * (-0.01_f64).exp() - 1.12 * (-0.03_f64).exp());
//! assert!(parity_diff.abs() < 1e-12);
//! ```

use pricer_core::types::OptionType;

use super::distributions::{norm_cdf, norm_pdf};
use super::error::AnalyticalError;

/// Parameters for the Garman-Kohlhagen model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GarmanKohlhagenParams {
    /// Spot exchange rate (domestic per foreign).
    pub spot: f64,
    /// Strike price.
    pub strike: f64,
    /// Domestic risk-free rate (continuous compounding).
    pub rate_domestic: f64,
    /// Foreign risk-free rate (continuous compounding).
    pub rate_foreign: f64,
    /// Volatility of the exchange rate.
    pub volatility: f64,
    /// Time to expiry in years.
    pub expiry: f64,
}

impl GarmanKohlhagenParams {
    /// Creates new Garman-Kohlhagen parameters.
    ///
    /// # Arguments
    ///
    /// * `spot` - Spot exchange rate (must be positive)
    /// * `strike` - Strike price (must be positive)
    /// * `rate_domestic` - Domestic risk-free rate (can be negative)
    /// * `rate_foreign` - Foreign risk-free rate (can be negative)
    /// * `volatility` - Volatility (must be positive)
    /// * `expiry` - Time to expiry in years (must be positive)
    ///
    /// # Errors
    ///
    /// Returns `AnalyticalError` if spot, strike, volatility or expiry is not
    /// a positive finite number.
    pub fn new(
        spot: f64,
        strike: f64,
        rate_domestic: f64,
        rate_foreign: f64,
        volatility: f64,
        expiry: f64,
    ) -> Result<Self, AnalyticalError> {
        if !is_positive(spot) {
            return Err(AnalyticalError::InvalidSpot { spot });
        }
        if !is_positive(strike) {
            return Err(AnalyticalError::InvalidStrike { strike });
        }
        if !is_positive(volatility) {
            return Err(AnalyticalError::InvalidVolatility { volatility });
        }
        if !is_positive(expiry) {
            return Err(AnalyticalError::InvalidExpiry { expiry });
        }

        Ok(Self {
            spot,
            strike,
            rate_domestic,
            rate_foreign,
            volatility,
            expiry,
        })
    }

    /// Returns the forward exchange rate.
    ///
    /// F = S * exp((rd - rf) * T)
    #[inline]
    pub fn forward(&self) -> f64 {
        self.spot * ((self.rate_domestic - self.rate_foreign) * self.expiry).exp()
    }
}

#[inline]
fn is_positive(x: f64) -> bool {
    x.is_finite() && x > 0.0
}

/// Garman-Kohlhagen model for FX option pricing.
///
/// All outputs are per unit of foreign notional; callers scale by notional.
#[derive(Debug, Clone)]
pub struct GarmanKohlhagen {
    params: GarmanKohlhagenParams,
    /// d1 term from the formula.
    d1: f64,
    /// d2 term from the formula.
    d2: f64,
    /// √T
    sqrt_t: f64,
    /// e^(-rd * T)
    df_domestic: f64,
    /// e^(-rf * T)
    df_foreign: f64,
}

impl GarmanKohlhagen {
    /// Creates a new Garman-Kohlhagen model instance.
    ///
    /// Pre-computes d1, d2, and discount factors.
    pub fn new(params: GarmanKohlhagenParams) -> Self {
        let sqrt_t = params.expiry.sqrt();
        let vol_sqrt_t = params.volatility * sqrt_t;

        // d1 = [ln(S/K) + (rd - rf + σ²/2) * T] / (σ * √T)
        let log_sk = (params.spot / params.strike).ln();
        let drift = params.rate_domestic - params.rate_foreign
            + 0.5 * params.volatility * params.volatility;
        let d1 = (log_sk + drift * params.expiry) / vol_sqrt_t;

        // d2 = d1 - σ * √T
        let d2 = d1 - vol_sqrt_t;

        let df_domestic = (-params.rate_domestic * params.expiry).exp();
        let df_foreign = (-params.rate_foreign * params.expiry).exp();

        Self {
            params,
            d1,
            d2,
            sqrt_t,
            df_domestic,
            df_foreign,
        }
    }

    /// Returns a reference to the parameters.
    #[inline]
    pub fn params(&self) -> &GarmanKohlhagenParams {
        &self.params
    }

    /// Returns d1.
    #[inline]
    pub fn d1(&self) -> f64 {
        self.d1
    }

    /// Returns d2.
    #[inline]
    pub fn d2(&self) -> f64 {
        self.d2
    }

    /// Returns the forward exchange rate.
    #[inline]
    pub fn forward(&self) -> f64 {
        self.params.forward()
    }

    /// Computes the option price in domestic currency per unit notional.
    pub fn price(&self, option_type: OptionType) -> f64 {
        let spot_leg = self.params.spot * self.df_foreign;
        let strike_leg = self.params.strike * self.df_domestic;

        match option_type {
            OptionType::Call => {
                // C = S * e^(-rf*T) * N(d1) - K * e^(-rd*T) * N(d2)
                spot_leg * norm_cdf(self.d1) - strike_leg * norm_cdf(self.d2)
            }
            OptionType::Put => {
                // P = K * e^(-rd*T) * N(-d2) - S * e^(-rf*T) * N(-d1)
                strike_leg * norm_cdf(-self.d2) - spot_leg * norm_cdf(-self.d1)
            }
        }
    }

    /// Computes Delta, the sensitivity of the price to the spot rate.
    pub fn delta(&self, option_type: OptionType) -> f64 {
        let nd1 = norm_cdf(self.d1);

        match option_type {
            // Δ_call = e^(-rf*T) * N(d1)
            OptionType::Call => self.df_foreign * nd1,
            // Δ_put = e^(-rf*T) * (N(d1) - 1)
            OptionType::Put => self.df_foreign * (nd1 - 1.0),
        }
    }

    /// Computes Vega per 1% volatility change.
    ///
    /// Same for both call and put options.
    pub fn vega(&self) -> f64 {
        // ν = S * e^(-rf*T) * N'(d1) * √T
        self.params.spot * self.df_foreign * norm_pdf(self.d1) * self.sqrt_t / 100.0
    }
}
