//! Collection processors: `array` and `hash`
//!
//! Copyright (c) 2025 Kharon Team
//! Licensed under the Apache-2.0 license

use super::Processor;
use crate::types::FieldValue;
use crate::validation::constraints::{check_contains, check_has_keys};
use crate::validation::{ErrorRecord, FieldContext};
use crate::{Error, Result};
use serde_json::Value;

fn not_a(raw: &Value, what: &str) -> Error {
    Error::Collaborator {
        message: format!("{} is not {}", raw, what),
        source: None,
    }
}

/// JSON arrays, with an optional `contains` option
#[derive(Debug, Clone, Copy, Default)]
pub struct ArrayProcessor;

impl Processor for ArrayProcessor {
    fn type_name(&self) -> &'static str {
        "Array"
    }

    fn recognize(&self, raw: &Value) -> bool {
        raw.is_array()
    }

    fn coerce(&self, raw: &Value) -> Result<FieldValue> {
        raw.as_array()
            .map(|items| FieldValue::Array(items.clone()))
            .ok_or_else(|| not_a(raw, "an array"))
    }

    fn check(&self, field: &FieldContext<'_>) -> Result<Vec<ErrorRecord>> {
        let mut errors = Vec::new();
        if let (Some(required), Some(items)) = (&field.options.contains, field.raw.as_array()) {
            errors.extend(check_contains(field.key, items, required));
        }
        Ok(errors)
    }
}

/// JSON objects, with optional `has_keys` and `contains` (over the values)
#[derive(Debug, Clone, Copy, Default)]
pub struct HashProcessor;

impl Processor for HashProcessor {
    fn type_name(&self) -> &'static str {
        "Hash"
    }

    fn recognize(&self, raw: &Value) -> bool {
        raw.is_object()
    }

    fn coerce(&self, raw: &Value) -> Result<FieldValue> {
        raw.as_object()
            .map(|map| {
                FieldValue::Hash(map.iter().map(|(k, v)| (k.clone(), v.clone())).collect())
            })
            .ok_or_else(|| not_a(raw, "a hash"))
    }

    fn check(&self, field: &FieldContext<'_>) -> Result<Vec<ErrorRecord>> {
        let mut errors = Vec::new();
        let Some(map) = field.raw.as_object() else {
            return Ok(errors);
        };

        if let Some(required) = &field.options.has_keys {
            errors.extend(check_has_keys(field.key, map, required));
        }
        if let Some(required) = &field.options.contains {
            errors.extend(check_contains(field.key, map.values(), required));
        }
        Ok(errors)
    }
}
