//! Property-based tests for currency conversion.

use proptest::prelude::*;

use super::exchange::{BUILTIN_RATES, RateTable};
use super::service::CurrencyService;

/// Strategy to pick one of the built-in currencies.
fn builtin_currency() -> impl Strategy<Value = (&'static str, f64)> {
    prop::sample::select(BUILTIN_RATES.to_vec())
}

/// Strategy to generate non-negative amounts (0.00 to 1,000,000.00).
#[allow(clippy::cast_precision_loss)]
fn non_negative_amount() -> impl Strategy<Value = f64> {
    (0i64..100_000_000i64).prop_map(|cents| cents as f64 / 100.0)
}

/// Strategy to generate codes that are not in the built-in table.
fn unknown_code() -> impl Strategy<Value = String> {
    "[A-Z]{3}".prop_filter("must not be a supported code", |code| {
        RateTable::builtin().rate(code).is_none()
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// The reported rate is the table rate and the USD amount is amount / rate.
    #[test]
    fn prop_convert_divides_by_table_rate(
        (code, rate) in builtin_currency(),
        amount in non_negative_amount(),
    ) {
        let table = RateTable::builtin();
        let raw = amount.to_string();
        let result = CurrencyService::convert(&table, Some(code), Some(raw.as_str())).unwrap();

        prop_assert!((result.exchange_rate - rate).abs() < f64::EPSILON);
        let expected = amount / rate;
        prop_assert!((result.usd_amount - expected).abs() <= expected.abs() * 1e-12);
    }

    /// Converting the same input twice gives the same answer.
    #[test]
    fn prop_convert_is_deterministic(
        (code, _rate) in builtin_currency(),
        amount in non_negative_amount(),
    ) {
        let table = RateTable::builtin();
        let raw = amount.to_string();
        let first = CurrencyService::convert(&table, Some(code), Some(raw.as_str())).unwrap();
        let second = CurrencyService::convert(&table, Some(code), Some(raw.as_str())).unwrap();
        prop_assert_eq!(first, second);
    }

    /// A zero amount converts to zero dollars for every currency.
    #[test]
    fn prop_zero_amount_is_zero((code, _rate) in builtin_currency()) {
        let table = RateTable::builtin();
        let result = CurrencyService::convert(&table, Some(code), Some("0")).unwrap();
        prop_assert!(result.usd_amount.abs() < f64::EPSILON);
    }

    /// Codes outside the table are always rejected with a message naming them.
    #[test]
    fn prop_unknown_code_rejected(code in unknown_code(), amount in non_negative_amount()) {
        let table = RateTable::builtin();
        let raw = amount.to_string();
        let err = CurrencyService::convert(&table, Some(code.as_str()), Some(raw.as_str())).unwrap_err();
        prop_assert_eq!(err.status_code(), 400);
        prop_assert_eq!(err.to_string(), format!("Invalid currency {code}."));
    }
}
