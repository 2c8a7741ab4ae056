//! Value constraint checks
//!
//! Each function inspects a raw value against one option and returns the
//! violation it finds, if any. They never report anything themselves: the
//! validator forwards the returned records to its error handler.
//!
//! Copyright (c) 2025 Kharon Team
//! Licensed under the Apache-2.0 license

use super::ErrorRecord;
use crate::types::string_form;
use crate::{Error, Result};
use regex::Regex;
use serde_json::{Map, Value};

/// The raw value must be one of `allowed`; an empty list allows everything
pub fn check_in(key: &str, raw: &Value, allowed: &[Value]) -> Option<ErrorRecord> {
    if allowed.is_empty() || allowed.contains(raw) {
        return None;
    }
    Some(ErrorRecord::ArrayIn {
        key: key.to_string(),
        supposed: allowed.to_vec(),
        value: raw.clone(),
    })
}

/// The raw value must equal `expected`
pub fn check_equals(key: &str, raw: &Value, expected: &Value) -> Option<ErrorRecord> {
    if raw == expected {
        return None;
    }
    Some(ErrorRecord::Equals {
        key: key.to_string(),
        supposed: expected.clone(),
        found: raw.clone(),
    })
}

/// The raw value must equal the raw value of `other`, an absent key
/// counting as `null`
pub fn check_equals_key(key: &str, raw: &Value, other: Option<&Value>) -> Option<ErrorRecord> {
    check_equals(key, raw, other.unwrap_or(&Value::Null))
}

/// The string form of the raw value must match `pattern` (unanchored)
pub fn check_regex(key: &str, raw: &Value, pattern: &str) -> Result<Option<ErrorRecord>> {
    let regex = Regex::new(pattern).map_err(|e| Error::InvalidOption {
        key: key.to_string(),
        option: "regex".to_string(),
        message: e.to_string(),
    })?;

    let matched = string_form(raw)
        .map(|text| regex.is_match(&text))
        .unwrap_or(false);
    if matched {
        return Ok(None);
    }
    Ok(Some(ErrorRecord::Regex {
        key: key.to_string(),
        regex: pattern.to_string(),
        value: raw.clone(),
    }))
}

/// `values` must hold every one of `required`
pub fn check_contains<'a, I>(key: &str, values: I, required: &[Value]) -> Option<ErrorRecord>
where
    I: IntoIterator<Item = &'a Value>,
{
    let values: Vec<&Value> = values.into_iter().collect();
    let all_present = required.iter().all(|needed| values.contains(&needed));
    if all_present {
        return None;
    }
    Some(ErrorRecord::ContainsValues {
        key: key.to_string(),
        required: required.to_vec(),
    })
}

/// `map` must hold every one of the `required` keys
pub fn check_has_keys(key: &str, map: &Map<String, Value>, required: &[String]) -> Option<ErrorRecord> {
    if required.iter().all(|needed| map.contains_key(needed)) {
        return None;
    }
    Some(ErrorRecord::ContainsKeys {
        key: key.to_string(),
        required: required.to_vec(),
    })
}

/// `number` must lie within the inclusive bounds; both bounds are checked
pub fn check_bounds(
    key: &str,
    number: f64,
    raw: &Value,
    bounds: (Option<f64>, Option<f64>),
) -> Vec<ErrorRecord> {
    let mut errors = Vec::new();
    let (min, max) = bounds;

    if let Some(min) = min {
        if number < min {
            errors.push(ErrorRecord::Min {
                key: key.to_string(),
                supposed: min,
                value: raw.clone(),
            });
        }
    }
    if let Some(max) = max {
        if number > max {
            errors.push(ErrorRecord::Max {
                key: key.to_string(),
                supposed: max,
                value: raw.clone(),
            });
        }
    }

    errors
}
