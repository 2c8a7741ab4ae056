//! Field type processors
//!
//! A processor knows one field type: how to recognize a raw value of that
//! type, how to coerce it, which type-specific options it honors, and how to
//! adjust the coerced value. Processors are registered by type name in a
//! [`ProcessorRegistry`], which the validator consults for every rule.
//!
//! # Module Organization
//!
//! - [`registry`] - Type name to processor mapping
//! - [`scalar`] - `any`, `boolean`, `text` and `email`
//! - [`numeric`] - `integer` and `numeric`
//! - [`temporal`] - `date` and `datetime`
//! - [`collection`] - `array` and `hash`
//! - [`object_id`] - `identifier` (alias `ssid`)
//! - [`geo_box`] - `box`
//!
//! # Writing a processor
//!
//! ```
//! use kharon_core::processors::Processor;
//! use kharon_core::{FieldValue, Result};
//! use serde_json::Value;
//!
//! struct UppercaseProcessor;
//!
//! impl Processor for UppercaseProcessor {
//!     fn type_name(&self) -> &'static str {
//!         "Uppercase"
//!     }
//!
//!     fn recognize(&self, raw: &Value) -> bool {
//!         raw.as_str().map_or(false, |s| s.chars().all(|c| !c.is_lowercase()))
//!     }
//!
//!     fn coerce(&self, raw: &Value) -> Result<FieldValue> {
//!         Ok(FieldValue::Text(raw.as_str().unwrap_or_default().to_string()))
//!     }
//! }
//! ```
//!
//! Copyright (c) 2025 Kharon Team
//! Licensed under the Apache-2.0 license

pub mod collection;
pub mod geo_box;
pub mod numeric;
pub mod object_id;
pub mod registry;
pub mod scalar;
pub mod temporal;

#[cfg(test)]
mod tests;

use crate::types::FieldValue;
use crate::validation::{ErrorRecord, FieldContext, Options};
use crate::Result;
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

pub use collection::{ArrayProcessor, HashProcessor};
pub use geo_box::BoxProcessor;
pub use numeric::{IntegerProcessor, NumericProcessor};
pub use object_id::IdentifierProcessor;
pub use registry::ProcessorRegistry;
pub use scalar::{AnyProcessor, BooleanProcessor, EmailProcessor, TextProcessor};
pub use temporal::{DateProcessor, DatetimeProcessor};

/// Strategy for one field type
pub trait Processor: Send + Sync {
    /// Type name reported as `supposed` in type violations
    fn type_name(&self) -> &'static str;

    /// Whether the raw value is well-formed for this type
    fn recognize(&self, raw: &Value) -> bool;

    /// Convert a recognized raw value into its typed form
    fn coerce(&self, raw: &Value) -> Result<FieldValue>;

    /// Type-specific value checks, run after the shared ones.
    ///
    /// Options this processor does not support are ignored.
    fn check(&self, field: &FieldContext<'_>) -> Result<Vec<ErrorRecord>> {
        let _ = field;
        Ok(Vec::new())
    }

    /// Post-coercion adjustment of the value
    fn adjust(&self, value: FieldValue, options: &Options) -> FieldValue {
        let _ = options;
        value
    }
}

/// Compile a built-in pattern once
pub(crate) fn static_pattern(cell: &'static OnceLock<Regex>, pattern: &str) -> &'static Regex {
    cell.get_or_init(|| Regex::new(pattern).expect("built-in pattern is valid"))
}
