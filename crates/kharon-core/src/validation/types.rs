//! Core validation types and enums
//!
//! This module contains the structured violation record reported through the
//! error handlers, together with the taxonomy of violation kinds.
//!
//! Copyright (c) 2025 Kharon Team
//! Licensed under the Apache-2.0 license

use crate::geo::GeoBox;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt;

/// Description of one rule violation.
///
/// Serializes as a flat JSON object tagged by `type`, e.g.
/// `{"type": "required", "key": "name"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ErrorRecord {
    /// A required key is absent from the input
    #[serde(rename = "required")]
    Required { key: String },

    /// A key declared as a dependency of `key` is absent
    #[serde(rename = "dependency")]
    Dependency { key: String, needed: String },

    /// The raw value is not recognized by the field's processor
    #[serde(rename = "type")]
    Type {
        key: String,
        supposed: String,
        found: String,
    },

    /// The raw value is not one of the allowed values
    #[serde(rename = "array.in")]
    ArrayIn {
        key: String,
        supposed: Vec<Value>,
        value: Value,
    },

    /// The raw value differs from the expected one
    #[serde(rename = "equals")]
    Equals {
        key: String,
        supposed: Value,
        found: Value,
    },

    /// A collection misses some of the required values
    #[serde(rename = "contains.values")]
    ContainsValues { key: String, required: Vec<Value> },

    /// A hash misses some of the required keys
    #[serde(rename = "contains.keys")]
    ContainsKeys { key: String, required: Vec<String> },

    /// The value is below the lower bound
    #[serde(rename = "min")]
    Min {
        key: String,
        supposed: f64,
        value: Value,
    },

    /// The value is above the upper bound
    #[serde(rename = "max")]
    Max {
        key: String,
        supposed: f64,
        value: Value,
    },

    /// The value does not match the given pattern
    #[serde(rename = "regex")]
    Regex {
        key: String,
        regex: String,
        value: Value,
    },

    /// A box option cannot be read as a box
    #[serde(rename = "box.format")]
    BoxFormat { key: String, value: Value },

    /// A box is not contained where it should be
    #[serde(rename = "box.containment")]
    BoxContainment {
        key: String,
        container: GeoBox,
        contained: GeoBox,
    },

    /// An unexpected failure, wrapped with its original message
    #[serde(rename = "standard")]
    Standard { exception: String, message: String },
}

/// Kinds of violations, as found in the `type` tag of a record
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    Required,
    Dependency,
    Type,
    ArrayIn,
    Equals,
    ContainsValues,
    ContainsKeys,
    Min,
    Max,
    Regex,
    BoxFormat,
    BoxContainment,
    Standard,
}

impl ErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorKind::Required => "required",
            ErrorKind::Dependency => "dependency",
            ErrorKind::Type => "type",
            ErrorKind::ArrayIn => "array.in",
            ErrorKind::Equals => "equals",
            ErrorKind::ContainsValues => "contains.values",
            ErrorKind::ContainsKeys => "contains.keys",
            ErrorKind::Min => "min",
            ErrorKind::Max => "max",
            ErrorKind::Regex => "regex",
            ErrorKind::BoxFormat => "box.format",
            ErrorKind::BoxContainment => "box.containment",
            ErrorKind::Standard => "standard",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ErrorRecord {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ErrorRecord::Required { .. } => ErrorKind::Required,
            ErrorRecord::Dependency { .. } => ErrorKind::Dependency,
            ErrorRecord::Type { .. } => ErrorKind::Type,
            ErrorRecord::ArrayIn { .. } => ErrorKind::ArrayIn,
            ErrorRecord::Equals { .. } => ErrorKind::Equals,
            ErrorRecord::ContainsValues { .. } => ErrorKind::ContainsValues,
            ErrorRecord::ContainsKeys { .. } => ErrorKind::ContainsKeys,
            ErrorRecord::Min { .. } => ErrorKind::Min,
            ErrorRecord::Max { .. } => ErrorKind::Max,
            ErrorRecord::Regex { .. } => ErrorKind::Regex,
            ErrorRecord::BoxFormat { .. } => ErrorKind::BoxFormat,
            ErrorRecord::BoxContainment { .. } => ErrorKind::BoxContainment,
            ErrorRecord::Standard { .. } => ErrorKind::Standard,
        }
    }

    /// The key the violation is about; standard records have none
    pub fn key(&self) -> Option<&str> {
        match self {
            ErrorRecord::Required { key }
            | ErrorRecord::Dependency { key, .. }
            | ErrorRecord::Type { key, .. }
            | ErrorRecord::ArrayIn { key, .. }
            | ErrorRecord::Equals { key, .. }
            | ErrorRecord::ContainsValues { key, .. }
            | ErrorRecord::ContainsKeys { key, .. }
            | ErrorRecord::Min { key, .. }
            | ErrorRecord::Max { key, .. }
            | ErrorRecord::Regex { key, .. }
            | ErrorRecord::BoxFormat { key, .. }
            | ErrorRecord::BoxContainment { key, .. } => Some(key),
            ErrorRecord::Standard { .. } => None,
        }
    }

    /// Render the record as a JSON value
    pub fn to_json(&self) -> Value {
        serde_json::to_value(self).unwrap_or_else(|_| {
            serde_json::json!({ "type": self.kind().as_str(), "key": self.key() })
        })
    }
}

impl fmt::Display for ErrorRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let json = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&json)
    }
}
