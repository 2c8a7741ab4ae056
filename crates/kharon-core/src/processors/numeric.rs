//! Numeric processors: `integer` and `numeric`
//!
//! Both accept JSON numbers and ASCII decimal strings, and honor the `min`,
//! `max` and `between` options. `numeric` additionally honors `round`,
//! `floor` and `ceil`.
//!
//! Copyright (c) 2025 Kharon Team
//! Licensed under the Apache-2.0 license

use super::{static_pattern, Processor};
use crate::types::FieldValue;
use crate::validation::constraints::check_bounds;
use crate::validation::{ErrorRecord, FieldContext, Options};
use crate::{Error, Result};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

static INTEGER_PATTERN: OnceLock<Regex> = OnceLock::new();
static NUMERIC_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Non-negative decimal integers fitting an `i64`
#[derive(Debug, Clone, Copy, Default)]
pub struct IntegerProcessor;

impl IntegerProcessor {
    fn parse(raw: &Value) -> Option<i64> {
        match raw {
            Value::Number(number) => number.as_u64().and_then(|n| i64::try_from(n).ok()),
            Value::String(text) => {
                if !static_pattern(&INTEGER_PATTERN, r"^[0-9]+$").is_match(text) {
                    return None;
                }
                text.parse::<i64>().ok()
            }
            _ => None,
        }
    }
}

impl Processor for IntegerProcessor {
    fn type_name(&self) -> &'static str {
        "Integer"
    }

    fn recognize(&self, raw: &Value) -> bool {
        Self::parse(raw).is_some()
    }

    fn coerce(&self, raw: &Value) -> Result<FieldValue> {
        Self::parse(raw)
            .map(FieldValue::Integer)
            .ok_or_else(|| Error::Collaborator {
                message: format!("cannot parse {} as an integer", raw),
                source: None,
            })
    }

    fn check(&self, field: &FieldContext<'_>) -> Result<Vec<ErrorRecord>> {
        Ok(match Self::parse(field.raw) {
            Some(number) => check_bounds(
                field.key,
                number as f64,
                field.raw,
                field.options.bounds(),
            ),
            None => Vec::new(),
        })
    }
}

/// Optionally signed decimals, with a dot or a comma as separator
#[derive(Debug, Clone, Copy, Default)]
pub struct NumericProcessor;

impl NumericProcessor {
    fn parse(raw: &Value) -> Option<f64> {
        match raw {
            Value::Number(number) => number.as_f64(),
            Value::String(text) => {
                let pattern = static_pattern(&NUMERIC_PATTERN, r"^([+-]?[0-9]+)([,.]([0-9]+))?$");
                if !pattern.is_match(text) {
                    return None;
                }
                text.replacen(',', ".", 1).parse::<f64>().ok()
            }
            _ => None,
        }
    }
}

impl Processor for NumericProcessor {
    fn type_name(&self) -> &'static str {
        "Numeric"
    }

    fn recognize(&self, raw: &Value) -> bool {
        Self::parse(raw).is_some()
    }

    fn coerce(&self, raw: &Value) -> Result<FieldValue> {
        Self::parse(raw)
            .map(FieldValue::Float)
            .ok_or_else(|| Error::Collaborator {
                message: format!("cannot parse {} as a number", raw),
                source: None,
            })
    }

    fn check(&self, field: &FieldContext<'_>) -> Result<Vec<ErrorRecord>> {
        Ok(match Self::parse(field.raw) {
            Some(number) => check_bounds(field.key, number, field.raw, field.options.bounds()),
            None => Vec::new(),
        })
    }

    fn adjust(&self, value: FieldValue, options: &Options) -> FieldValue {
        match (options.adjustment(), value.as_f64()) {
            (Some(adjustment), Some(number)) => adjustment.apply(number),
            _ => value,
        }
    }
}
