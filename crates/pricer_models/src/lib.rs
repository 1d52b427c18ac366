//! # Pricer Models (L2: Pricing)
//!
//! Closed-form pricing of European FX options.
//!
//! This crate provides:
//! - Garman-Kohlhagen price, delta and vega (`analytical`)
//! - Standard normal distribution functions (`analytical::distributions`)
//! - A portfolio pricing engine with Rayon parallelism (`engine`)
//!
//! ## Usage
//!
//! ```
//! use pricer_core::trade::{TradeTerms, ValidatedTrade};
//! use pricer_core::types::{Currency, CurrencyPair, OptionType};
//! use pricer_models::engine::PricingEngine;
//!
//! let terms = TradeTerms {
//!     notional: 100_000_000.0,
//!     spot: 110.0,
//!     strike: 112.0,
//!     volatility: 0.09,
//!     domestic_rate: 0.001,
//!     foreign_rate: 0.02,
//!     time_to_expiry: 1.0,
//! };
//! let trade = ValidatedTrade::new(
//!     "JPY-1", CurrencyPair::USDJPY, OptionType::Put, Currency::JPY, terms,
//! ).unwrap();
//!
//! let priced = PricingEngine::default().price_portfolio(&[trade]).unwrap();
//! assert!(priced[0].delta() < 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod engine;

pub use engine::{PricingConfig, PricingEngine};
