//! Property-based tests for the option pipeline
//!
//! These tests verify invariants that should hold for any input accepted by
//! a field's type, whatever the option values.

use kharon_core::{validate_with, Config, FieldValue, Options, RawInput};
use proptest::prelude::*;
use serde_json::{json, Value};

// Strategy functions for property testing

/// Strategy for generating input keys
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-z_][a-z0-9_]{0,15}"
}

/// Strategy for generating scalar raw values
fn raw_value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        "[a-zA-Z0-9 ,.]{0,20}".prop_map(Value::String),
    ]
}

/// Strategy for generating numeric strings, with dot or comma separators
fn numeric_text_strategy() -> impl Strategy<Value = String> {
    (
        -100_000i64..100_000,
        proptest::option::of(0u32..1000),
        prop_oneof![Just('.'), Just(',')],
    )
        .prop_map(|(whole, fraction, separator)| match fraction {
            Some(fraction) => format!("{}{}{}", whole, separator, fraction),
            None => whole.to_string(),
        })
}

fn raw_input(key: &str, value: Value) -> RawInput {
    std::iter::once((key.to_string(), value)).collect()
}

proptest! {
    #[test]
    fn prop_empty_rule_set_gives_empty_output(
        entries in proptest::collection::btree_map(key_strategy(), raw_value_strategy(), 0..10)
    ) {
        let datas: RawInput = entries.into_iter().collect();
        let report = validate_with(datas, &Config::collecting(), |_| Ok(())).unwrap();

        prop_assert!(report.filtered.is_empty());
        prop_assert!(report.errors.is_empty());
    }

    #[test]
    fn prop_between_equals_min_and_max(
        number in numeric_text_strategy(),
        low in -1000.0f64..1000.0,
        width in 0.0f64..1000.0,
    ) {
        let high = low + width;
        let run = |options: Options| {
            validate_with(raw_input("value", json!(number)), &Config::collecting(), |v| {
                v.numeric("value", options)
            })
            .unwrap()
        };

        let with_between = run(Options::new().between(low, high));
        let with_bounds = run(Options::new().min(low).max(high));

        prop_assert_eq!(with_between, with_bounds);
    }

    #[test]
    fn prop_cast_false_keeps_raw_value(number in numeric_text_strategy(), places in 0i32..4) {
        let raw = json!(number);
        let report = validate_with(raw_input("value", raw.clone()), &Config::collecting(), |v| {
            v.numeric("value", Options::new().cast(false).round(places))
        })
        .unwrap();

        prop_assert!(report.errors.is_empty());
        prop_assert_eq!(report.filtered.get("value"), Some(&FieldValue::Raw(raw)));
    }

    #[test]
    fn prop_rename_never_keeps_original_key(
        key in key_strategy(),
        target in key_strategy(),
        text in "[a-z]{0,10}",
    ) {
        prop_assume!(key != target);
        let report = validate_with(raw_input(&key, json!(text)), &Config::collecting(), |v| {
            v.text(&key, Options::new().rename(target.clone()))
        })
        .unwrap();

        prop_assert!(!report.filtered.contains_key(&key));
        prop_assert_eq!(report.filtered.get(&target), Some(&FieldValue::Text(text)));
    }

    #[test]
    fn prop_required_absent_gives_single_violation(key in key_strategy(), other in key_strategy()) {
        prop_assume!(key != other);
        let report = validate_with(raw_input(&other, json!("x")), &Config::collecting(), |v| {
            v.any(&key, Options::new().required())
        })
        .unwrap();

        prop_assert_eq!(report.errors.len(), 1);
        prop_assert_eq!(report.errors[0].key(), Some(key.as_str()));
        prop_assert!(report.filtered.is_empty());
    }

    #[test]
    fn prop_integer_strings_round_trip(number in 0i64..i64::MAX) {
        let report = validate_with(raw_input("n", json!(number.to_string())), &Config::raising(), |v| {
            v.integer("n", Options::new())
        })
        .unwrap();

        prop_assert_eq!(report.filtered.get("n"), Some(&FieldValue::Integer(number)));
    }
}
