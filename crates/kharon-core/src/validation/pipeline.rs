//! Option pipeline phases shared by every field type
//!
//! A field rule runs through a fixed sequence of phases:
//!
//! 1. pre-phase: `required` and `dependency`/`dependencies`
//! 2. recognition and coercion, delegated to the processor
//! 3. value checks: the shared `in`/`equals`/`equals_key` checks below, then
//!    the processor's own checks
//! 4. numeric adjustment, delegated to the processor
//!
//! and ends with [`commit`]. The orchestration itself lives in
//! [`super::Validator::process`].
//!
//! Copyright (c) 2025 Kharon Team
//! Licensed under the Apache-2.0 license

use super::constraints::{check_equals, check_equals_key, check_in};
use super::{ErrorRecord, Options};
use crate::types::{FieldValue, FilteredOutput, RawInput};
use serde_json::Value;

/// What a processor sees of the field being validated
#[derive(Debug, Clone, Copy)]
pub struct FieldContext<'a> {
    /// Key of the field in the raw input
    pub key: &'a str,
    /// Raw value of the field
    pub raw: &'a Value,
    pub options: &'a Options,
    /// Whole raw input, for cross-field options
    pub datas: &'a RawInput,
}

/// Presence checks run before anything else.
///
/// Dependencies are checked whether or not the key itself is present.
pub fn pre_phase(datas: &RawInput, key: &str, options: &Options) -> Vec<ErrorRecord> {
    let mut errors = Vec::new();

    if options.required && !datas.contains_key(key) {
        errors.push(ErrorRecord::Required {
            key: key.to_string(),
        });
    }

    for needed in options.dependency_keys() {
        if !datas.contains_key(needed) {
            errors.push(ErrorRecord::Dependency {
                key: key.to_string(),
                needed: needed.to_string(),
            });
        }
    }

    errors
}

/// Checks every field type supports. All of them run, in option order.
pub fn shared_checks(field: &FieldContext<'_>) -> Vec<ErrorRecord> {
    let options = field.options;
    let mut errors = Vec::new();

    if let Some(allowed) = &options.in_values {
        errors.extend(check_in(field.key, field.raw, allowed));
    }
    if let Some(expected) = &options.equals {
        errors.extend(check_equals(field.key, field.raw, expected));
    }
    if let Some(other) = &options.equals_key {
        errors.extend(check_equals_key(field.key, field.raw, field.datas.get(other)));
    }

    errors
}

/// Store an accepted value under its output key.
///
/// Returns the key used, or `None` when `extract: false` suppressed the
/// commit.
pub fn commit(
    filtered: &mut FilteredOutput,
    key: &str,
    options: &Options,
    value: FieldValue,
) -> Option<String> {
    if !options.extract {
        log::debug!("Field '{}' checked but not extracted", key);
        return None;
    }

    let output_key = options.output_key(key).to_string();
    filtered.insert(output_key.clone(), value);
    Some(output_key)
}
