//! Analytical pricing formulas for European FX options.
//!
//! This module provides:
//! - Garman-Kohlhagen closed-form price, delta and vega
//! - Standard normal CDF/PDF accurate to machine precision
//! - `AnalyticalError` for parameters outside the formula's domain

pub mod distributions;
pub mod error;
pub mod garman_kohlhagen;

pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
pub use garman_kohlhagen::{GarmanKohlhagen, GarmanKohlhagenParams};
