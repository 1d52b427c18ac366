//! # Pricer Risk (L3: Aggregation)
//!
//! Portfolio-level risk in a single reporting currency.
//!
//! This crate provides:
//! - Closed-set currency conversion rules (`conversion`)
//! - Ordered reduction of priced trades into a `PortfolioSummary`
//!   (`aggregation`)
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │            pricer_risk (L3)             │
//! │  conversion/  - USD/JPY spot rules      │
//! │  aggregation/ - RiskTotals, Aggregator  │
//! └─────────────────────────────────────────┘
//!          ↑ PricedTrade
//! ┌─────────────────────────────────────────┐
//! │           pricer_models (L2)            │
//! │  Garman-Kohlhagen pricing engine        │
//! └─────────────────────────────────────────┘
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod aggregation;
pub mod conversion;

pub use aggregation::{AggregationError, Aggregator, RiskTotals};
pub use conversion::{convert, ConversionError};
