//! Integration tests for batch validation.
//!
//! Exercises the public `pricer_core` API the way the loader and the CLI
//! pipeline use it: raw records in, validated trades and messages out.

use pricer_core::trade::RawTradeRecord;
use pricer_core::types::{Currency, CurrencyPair, OptionType};
use pricer_core::validation::{ValidationConfig, Validator};
use proptest::prelude::*;

fn sample(trade_id: &str) -> RawTradeRecord {
    RawTradeRecord {
        trade_id: trade_id.to_string(),
        underlying: "EUR/USD".to_string(),
        notional: 1_000_000.0,
        notional_currency: "USD".to_string(),
        spot: 1.10,
        strike: 1.10,
        volatility: 0.10,
        domestic_rate: 0.05,
        foreign_rate: 0.03,
        expiry_years: 0.5,
        option_type: "Call".to_string(),
    }
}

/// Every supported pair is accepted in slash, compact and mixed-case form.
#[test]
fn test_underlying_spellings_normalise() {
    for (i, spelling) in ["GBP/USD", "gbpusd", " Gbp / Usd ", "GBPUSD"].iter().enumerate() {
        let raw = RawTradeRecord {
            underlying: spelling.to_string(),
            ..sample(&format!("T{i}"))
        };
        let result = Validator::default().validate(&[raw]);
        assert!(result.is_valid(), "{spelling} rejected: {:?}", result.errors);
        assert_eq!(result.valid_trades[0].currency_pair(), CurrencyPair::GBPUSD);
    }
}

#[test]
fn test_validated_fields_carry_through() {
    let raw = RawTradeRecord {
        underlying: "USD/JPY".to_string(),
        notional_currency: "jpy".to_string(),
        spot: 110.0,
        strike: 105.0,
        option_type: "put".to_string(),
        ..sample("JPY1")
    };
    let trades = Validator::default()
        .validate(&[raw])
        .into_trades()
        .expect("trade should validate");

    let trade = &trades[0];
    assert_eq!(trade.trade_id(), "JPY1");
    assert_eq!(trade.option_type(), OptionType::Put);
    assert_eq!(trade.notional_currency(), Currency::JPY);
    assert_eq!(trade.spot(), 110.0);
    assert_eq!(trade.strike(), 105.0);
    assert_eq!(trade.time_to_expiry(), 0.5);
}

/// Each failing record yields exactly one message naming its trade.
#[test]
fn test_each_failure_reported_once() {
    let records = vec![
        RawTradeRecord {
            notional: 0.0,
            ..sample("N0")
        },
        RawTradeRecord {
            spot: -1.0,
            ..sample("S0")
        },
        RawTradeRecord {
            volatility: 1.5,
            ..sample("V0")
        },
        RawTradeRecord {
            domestic_rate: 2.0,
            ..sample("R0")
        },
        RawTradeRecord {
            expiry_years: 0.0,
            ..sample("E0")
        },
        RawTradeRecord {
            strike: f64::NAN,
            ..sample("X0")
        },
        sample("OK"),
    ];

    let result = Validator::default().validate(&records);

    assert_eq!(result.valid_trades.len(), 1);
    assert_eq!(result.valid_trades[0].trade_id(), "OK");
    let prefixes: Vec<&str> = result
        .errors
        .iter()
        .map(|e| e.split(':').next().unwrap_or_default())
        .collect();
    assert_eq!(
        prefixes,
        vec!["Trade N0", "Trade S0", "Trade V0", "Trade R0", "Trade E0", "Trade X0"]
    );
}

#[test]
fn test_volatility_message_uses_percentages() {
    let raw = RawTradeRecord {
        volatility: 0.45,
        ..sample("HV")
    };
    let validator = Validator::new(ValidationConfig {
        max_volatility: 0.40,
    });
    let result = validator.validate(&[raw]);
    assert_eq!(
        result.errors,
        vec!["Trade HV: Volatility 45.00% seems unreasonably high (maximum 40.00%)".to_string()]
    );
}

#[test]
fn test_empty_batch() {
    let result = Validator::default().validate(&[]);
    assert!(result.is_valid());
    assert_eq!(result.total(), 0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Every record lands in exactly one of the two outputs.
    #[test]
    fn test_partition_is_total(
        strikes in prop::collection::vec(-2.0f64..2.0, 0..40)
    ) {
        let records: Vec<RawTradeRecord> = strikes
            .iter()
            .enumerate()
            .map(|(i, &strike)| RawTradeRecord { strike, ..sample(&format!("P{i}")) })
            .collect();

        let result = Validator::default().validate(&records);

        prop_assert_eq!(result.total(), records.len());
        let expected_valid = strikes.iter().filter(|&&k| k > 0.0).count();
        prop_assert_eq!(result.valid_trades.len(), expected_valid);
    }

    /// Valid trades keep their relative input order.
    #[test]
    fn test_valid_trades_keep_input_order(
        mask in prop::collection::vec(any::<bool>(), 1..30)
    ) {
        let records: Vec<RawTradeRecord> = mask
            .iter()
            .enumerate()
            .map(|(i, &ok)| RawTradeRecord {
                option_type: if ok { "CALL".to_string() } else { "BAD".to_string() },
                ..sample(&format!("{i:03}"))
            })
            .collect();

        let result = Validator::default().validate(&records);

        let ids: Vec<String> = result.valid_trades.iter().map(|t| t.trade_id().to_string()).collect();
        let mut sorted = ids.clone();
        sorted.sort();
        prop_assert_eq!(ids, sorted);
    }
}
