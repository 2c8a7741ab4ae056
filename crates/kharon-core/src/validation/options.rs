//! Per-field options
//!
//! [`Options`] gathers every cross-cutting option a rule can carry. It is
//! built fluently in code or deserialized from a JSON/YAML rule description;
//! keys that no option recognizes are ignored.
//!
//! Copyright (c) 2025 Kharon Team
//! Licensed under the Apache-2.0 license

use crate::types::FieldValue;
use crate::Result;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Shape of the `round` option
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RoundOption {
    /// Round to this many decimals
    Places(i32),
    /// `true` rounds to an integer, `false` does nothing
    Flag(bool),
    /// Any other shape: claims the adjustment slot but applies nothing
    Other(Value),
}

/// Numeric adjustment applied after coercion
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Adjustment {
    Round(i32),
    RoundToInteger,
    Floor,
    Ceil,
}

impl Adjustment {
    /// Apply the adjustment to a number.
    ///
    /// Rounding to a positive number of places keeps a float; every other
    /// adjustment produces an integer. A scale f64 cannot represent leaves
    /// the number unchanged, and a result outside the `i64` range stays a
    /// float.
    pub fn apply(&self, number: f64) -> FieldValue {
        match *self {
            Adjustment::Round(places) if places > 0 => {
                let factor = 10f64.powi(places);
                let scaled = number * factor;
                if !scaled.is_finite() {
                    return FieldValue::Float(number);
                }
                FieldValue::Float(scaled.round() / factor)
            }
            Adjustment::Round(places) => {
                let factor = match places.checked_neg().map(|exponent| 10f64.powi(exponent)) {
                    Some(factor) if factor.is_finite() => factor,
                    _ => return FieldValue::Float(number),
                };
                integer_or_float((number / factor).round() * factor)
            }
            Adjustment::RoundToInteger => integer_or_float(number.round()),
            Adjustment::Floor => integer_or_float(number.floor()),
            Adjustment::Ceil => integer_or_float(number.ceil()),
        }
    }
}

/// `i64::MAX as f64` is 2^63, one past the largest `i64`
fn integer_or_float(number: f64) -> FieldValue {
    if number.is_finite() && number >= i64::MIN as f64 && number < i64::MAX as f64 {
        FieldValue::Integer(number as i64)
    } else {
        FieldValue::Float(number)
    }
}

fn default_true() -> bool {
    true
}

/// Options attached to one field rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Options {
    /// Report a violation when the key is absent
    #[serde(default)]
    pub required: bool,
    /// A single key that must be present alongside this one
    #[serde(default)]
    pub dependency: Option<String>,
    /// Keys that must be present alongside this one; wins over `dependency`
    #[serde(default)]
    pub dependencies: Option<Vec<String>>,
    /// Store the value under this key instead
    #[serde(default)]
    pub rename: Option<String>,
    /// When false, the field is checked but never stored
    #[serde(default = "default_true")]
    pub extract: bool,
    /// When false, the raw value is stored without coercion
    #[serde(default = "default_true")]
    pub cast: bool,
    /// Allowed raw values; an empty list allows everything
    #[serde(default, rename = "in")]
    pub in_values: Option<Vec<Value>>,
    #[serde(default)]
    pub equals: Option<Value>,
    /// The raw value must equal the raw value of this other key
    #[serde(default)]
    pub equals_key: Option<String>,
    /// Values an array (or the values of a hash) must contain
    #[serde(default)]
    pub contains: Option<Vec<Value>>,
    /// Keys a hash must contain
    #[serde(default)]
    pub has_keys: Option<Vec<String>>,
    /// Pattern the raw text must match
    #[serde(default)]
    pub regex: Option<String>,
    #[serde(default)]
    pub min: Option<f64>,
    #[serde(default)]
    pub max: Option<f64>,
    /// Inclusive `[min, max]`; replaces `min` and `max` when given
    #[serde(default)]
    pub between: Option<[f64; 2]>,
    #[serde(default)]
    pub round: Option<RoundOption>,
    #[serde(default)]
    pub floor: bool,
    #[serde(default)]
    pub ceil: bool,
    /// Box the validated box must contain
    #[serde(default)]
    pub at_least: Option<Value>,
    /// Box the validated box must fit in
    #[serde(default)]
    pub at_most: Option<Value>,
}

impl Default for Options {
    fn default() -> Self {
        Self {
            required: false,
            dependency: None,
            dependencies: None,
            rename: None,
            extract: true,
            cast: true,
            in_values: None,
            equals: None,
            equals_key: None,
            contains: None,
            has_keys: None,
            regex: None,
            min: None,
            max: None,
            between: None,
            round: None,
            floor: false,
            ceil: false,
            at_least: None,
            at_most: None,
        }
    }
}

impl Options {
    /// Options with every default: optional, extracted, cast
    pub fn new() -> Self {
        Self::default()
    }

    /// Read options from a JSON object
    pub fn from_json(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn dependency(mut self, key: impl Into<String>) -> Self {
        self.dependency = Some(key.into());
        self
    }

    pub fn dependencies<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.dependencies = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    pub fn rename(mut self, key: impl Into<String>) -> Self {
        self.rename = Some(key.into());
        self
    }

    pub fn extract(mut self, extract: bool) -> Self {
        self.extract = extract;
        self
    }

    pub fn cast(mut self, cast: bool) -> Self {
        self.cast = cast;
        self
    }

    pub fn in_values<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.in_values = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn equals(mut self, value: impl Into<Value>) -> Self {
        self.equals = Some(value.into());
        self
    }

    pub fn equals_key(mut self, key: impl Into<String>) -> Self {
        self.equals_key = Some(key.into());
        self
    }

    pub fn contains<I, V>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<Value>,
    {
        self.contains = Some(values.into_iter().map(Into::into).collect());
        self
    }

    pub fn has_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.has_keys = Some(keys.into_iter().map(Into::into).collect());
        self
    }

    pub fn regex(mut self, pattern: impl Into<String>) -> Self {
        self.regex = Some(pattern.into());
        self
    }

    pub fn min(mut self, min: f64) -> Self {
        self.min = Some(min);
        self
    }

    pub fn max(mut self, max: f64) -> Self {
        self.max = Some(max);
        self
    }

    pub fn between(mut self, min: f64, max: f64) -> Self {
        self.between = Some([min, max]);
        self
    }

    /// Round to `places` decimals
    pub fn round(mut self, places: i32) -> Self {
        self.round = Some(RoundOption::Places(places));
        self
    }

    pub fn round_to_integer(mut self) -> Self {
        self.round = Some(RoundOption::Flag(true));
        self
    }

    pub fn floor(mut self) -> Self {
        self.floor = true;
        self
    }

    pub fn ceil(mut self) -> Self {
        self.ceil = true;
        self
    }

    /// Box that must lie inside the validated box, as a string or nested pairs
    pub fn at_least(mut self, bounds: impl Into<Value>) -> Self {
        self.at_least = Some(bounds.into());
        self
    }

    /// Box the validated box must lie inside, as a string or nested pairs
    pub fn at_most(mut self, bounds: impl Into<Value>) -> Self {
        self.at_most = Some(bounds.into());
        self
    }

    /// Keys that must be present alongside the validated one
    pub fn dependency_keys(&self) -> Vec<&str> {
        match (&self.dependencies, &self.dependency) {
            (Some(keys), _) => keys.iter().map(String::as_str).collect(),
            (None, Some(key)) => vec![key.as_str()],
            (None, None) => Vec::new(),
        }
    }

    /// Effective `(min, max)` bounds
    pub fn bounds(&self) -> (Option<f64>, Option<f64>) {
        match self.between {
            Some([min, max]) => (Some(min), Some(max)),
            None => (self.min, self.max),
        }
    }

    /// The single adjustment to apply, by precedence `round` > `floor` > `ceil`
    pub fn adjustment(&self) -> Option<Adjustment> {
        match &self.round {
            Some(RoundOption::Places(places)) => Some(Adjustment::Round(*places)),
            Some(RoundOption::Flag(true)) => Some(Adjustment::RoundToInteger),
            Some(RoundOption::Flag(false)) => None,
            Some(other) => {
                log::warn!("Ignoring round option {:?}: expected decimals or true", other);
                None
            }
            None if self.floor => Some(Adjustment::Floor),
            None if self.ceil => Some(Adjustment::Ceil),
            None => None,
        }
    }

    /// Key under which an accepted value is stored
    pub fn output_key<'a>(&'a self, key: &'a str) -> &'a str {
        self.rename.as_deref().unwrap_or(key)
    }
}
