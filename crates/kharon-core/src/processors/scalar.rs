//! Scalar processors: `any`, `boolean`, `text` and `email`
//!
//! Copyright (c) 2025 Kharon Team
//! Licensed under the Apache-2.0 license

use super::{static_pattern, Processor};
use crate::types::{string_form, FieldValue};
use crate::validation::constraints::check_regex;
use crate::validation::{ErrorRecord, FieldContext};
use crate::Result;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

/// Accepts anything and stores it untouched.
///
/// Used to apply `required`, dependencies or `rename` to a field without
/// constraining its type.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyProcessor;

impl Processor for AnyProcessor {
    fn type_name(&self) -> &'static str {
        "Any"
    }

    fn recognize(&self, _raw: &Value) -> bool {
        true
    }

    fn coerce(&self, raw: &Value) -> Result<FieldValue> {
        Ok(FieldValue::Raw(raw.clone()))
    }
}

/// `"true"`/`"false"` (or a JSON boolean)
#[derive(Debug, Clone, Copy, Default)]
pub struct BooleanProcessor;

impl BooleanProcessor {
    fn to_boolean(text: &str) -> bool {
        matches!(text, "true" | "1" | "yes")
    }
}

impl Processor for BooleanProcessor {
    fn type_name(&self) -> &'static str {
        "Boolean"
    }

    fn recognize(&self, raw: &Value) -> bool {
        matches!(string_form(raw).as_deref(), Some("true") | Some("false"))
    }

    fn coerce(&self, raw: &Value) -> Result<FieldValue> {
        let truthy = string_form(raw)
            .map(|text| Self::to_boolean(&text))
            .unwrap_or(false);
        Ok(FieldValue::Boolean(truthy))
    }
}

/// JSON strings, with an optional `regex` option
#[derive(Debug, Clone, Copy, Default)]
pub struct TextProcessor;

impl Processor for TextProcessor {
    fn type_name(&self) -> &'static str {
        "String"
    }

    fn recognize(&self, raw: &Value) -> bool {
        raw.is_string()
    }

    fn coerce(&self, raw: &Value) -> Result<FieldValue> {
        let text = match raw {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        };
        Ok(FieldValue::Text(text))
    }

    fn check(&self, field: &FieldContext<'_>) -> Result<Vec<ErrorRecord>> {
        let mut errors = Vec::new();
        if let Some(pattern) = &field.options.regex {
            errors.extend(check_regex(field.key, field.raw, pattern)?);
        }
        Ok(errors)
    }
}

static EMAIL_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Strings shaped like `local@domain.tld`, kept as text
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailProcessor;

impl Processor for EmailProcessor {
    fn type_name(&self) -> &'static str {
        "Email"
    }

    fn recognize(&self, raw: &Value) -> bool {
        let pattern = static_pattern(
            &EMAIL_PATTERN,
            r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,4}$",
        );
        raw.as_str().map_or(false, |s| pattern.is_match(s))
    }

    fn coerce(&self, raw: &Value) -> Result<FieldValue> {
        TextProcessor.coerce(raw)
    }
}
