//! Integration tests for reporting-currency aggregation.

use approx::assert_relative_eq;
use chrono::NaiveDate;
use pricer_core::trade::{PricedTrade, TradeTerms, ValidatedTrade};
use pricer_core::types::{Currency, CurrencyPair, OptionType};
use pricer_models::engine::PricingEngine;
use pricer_risk::aggregation::{AggregationError, Aggregator};
use pricer_risk::conversion::ConversionError;
use proptest::prelude::*;

fn valuation_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 15).unwrap()
}

fn validated(trade_id: &str, pair: CurrencyPair, ccy: Currency, spot: f64) -> ValidatedTrade {
    ValidatedTrade::new(
        trade_id,
        pair,
        OptionType::Call,
        ccy,
        TradeTerms {
            notional: 1_000_000.0,
            spot,
            strike: spot,
            volatility: 0.10,
            domestic_rate: 0.02,
            foreign_rate: 0.01,
            time_to_expiry: 0.5,
        },
    )
    .unwrap()
}

fn priced(trade_id: &str, pair: CurrencyPair, ccy: Currency, spot: f64, pv: f64) -> PricedTrade {
    PricedTrade::new(validated(trade_id, pair, ccy, spot), pv, pv / 2.0, pv / 10.0).unwrap()
}

#[test]
fn test_empty_portfolio_yields_zero_totals() {
    let summary = Aggregator::new()
        .aggregate(&[], valuation_date(), Currency::JPY)
        .unwrap();
    assert_eq!(summary.total_trades, 0);
    assert_eq!(summary.total_pv, 0.0);
    assert_eq!(summary.total_delta, 0.0);
    assert_eq!(summary.total_vega, 0.0);
    assert_eq!(summary.valuation_date, valuation_date());
    assert_eq!(summary.reporting_currency, Currency::JPY);
}

#[test]
fn test_usd_trades_sum_directly() {
    let trades = vec![
        priced("T1", CurrencyPair::EURUSD, Currency::USD, 1.1, 25_000.0),
        priced("T2", CurrencyPair::GBPUSD, Currency::USD, 1.27, -5_000.0),
    ];
    let summary = Aggregator::new()
        .aggregate(&trades, valuation_date(), Currency::USD)
        .unwrap();
    assert_eq!(summary.total_trades, 2);
    assert_relative_eq!(summary.total_pv, 20_000.0, epsilon = 1e-9);
    assert_relative_eq!(summary.total_delta, 10_000.0, epsilon = 1e-9);
    assert_relative_eq!(summary.total_vega, 2_000.0, epsilon = 1e-9);
}

#[test]
fn test_jpy_trade_converted_to_usd() {
    let trades = vec![priced("J1", CurrencyPair::USDJPY, Currency::JPY, 110.0, 1_000_000.0)];
    let summary = Aggregator::new()
        .aggregate(&trades, valuation_date(), Currency::USD)
        .unwrap();
    assert_relative_eq!(summary.total_pv, 9_090.909_090_909_09, epsilon = 1e-6);
    assert_relative_eq!(summary.total_delta, 4_545.454_545_454_545, epsilon = 1e-6);
}

#[test]
fn test_usd_trade_on_usdjpy_converted_to_jpy() {
    let trades = vec![
        priced("U1", CurrencyPair::USDJPY, Currency::USD, 150.0, 100.0),
        priced("J2", CurrencyPair::USDJPY, Currency::JPY, 150.0, 3_000.0),
    ];
    let summary = Aggregator::new()
        .aggregate(&trades, valuation_date(), Currency::JPY)
        .unwrap();
    assert_relative_eq!(summary.total_pv, 18_000.0, epsilon = 1e-9);
}

#[test]
fn test_unsupported_conversion_is_fatal() {
    let trades = vec![
        priced("FIRST", CurrencyPair::EURUSD, Currency::USD, 1.1, 100.0),
        priced("SECOND", CurrencyPair::EURUSD, Currency::USD, 1.1, 100.0),
    ];
    let err = Aggregator::new()
        .aggregate(&trades, valuation_date(), Currency::JPY)
        .unwrap_err();

    assert_eq!(
        err,
        AggregationError::Conversion {
            trade_id: "FIRST".to_string(),
            source: ConversionError::Unsupported {
                from: Currency::USD,
                to: Currency::JPY,
                pair: CurrencyPair::EURUSD,
            },
        }
    );
    assert_eq!(err.to_string(), "Trade FIRST: Unsupported conversion USD->JPY for EURUSD");
}

#[test]
fn test_priced_portfolio_end_to_end() {
    let trades = vec![
        validated("E1", CurrencyPair::EURUSD, Currency::USD, 1.1),
        validated("J1", CurrencyPair::USDJPY, Currency::JPY, 110.0),
    ];
    let priced = PricingEngine::default().price_portfolio(&trades).unwrap();
    let summary = Aggregator::new()
        .aggregate(&priced, valuation_date(), Currency::USD)
        .unwrap();

    let expected_pv = priced[0].pv() + priced[1].pv() / 110.0;
    assert_eq!(summary.total_trades, 2);
    assert_relative_eq!(summary.total_pv, expected_pv, max_relative = 1e-12);
    assert!(summary.total_vega > 0.0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Repeated aggregation of the same input is bit-identical.
    #[test]
    fn test_aggregation_is_deterministic(
        pvs in prop::collection::vec(-1e7f64..1e7, 0..50)
    ) {
        let trades: Vec<PricedTrade> = pvs
            .iter()
            .enumerate()
            .map(|(i, &pv)| priced(&format!("T{i}"), CurrencyPair::USDJPY, Currency::JPY, 110.0, pv))
            .collect();
        let aggregator = Aggregator::new();

        let first = aggregator.aggregate(&trades, valuation_date(), Currency::USD).unwrap();
        let second = aggregator.aggregate(&trades, valuation_date(), Currency::USD).unwrap();

        prop_assert_eq!(first.total_pv.to_bits(), second.total_pv.to_bits());
        prop_assert_eq!(first.total_trades, pvs.len());
        let expected: f64 = pvs.iter().map(|pv| pv / 110.0).sum();
        prop_assert!((first.total_pv - expected).abs() <= 1e-6 * expected.abs().max(1.0));
    }
}
