//! Core data types shared by the validator and the processors
//!
//! - [`RawInput`]: the caller-supplied, read-only key-value map
//! - [`FieldValue`]: a coerced value as stored in the filtered output
//! - [`FilteredOutput`]: the result map of one validation run

use crate::geo::GeoBox;
use crate::identifier::ObjectId;
use crate::{Error, Result};
use chrono::{DateTime, FixedOffset, NaiveDate};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;

/// Filtered, coerced and renamed output of a validation run
pub type FilteredOutput = BTreeMap<String, FieldValue>;

/// Immutable input map handed to a [`crate::Validator`].
///
/// Cloning is cheap: the underlying map is shared, so several validators can
/// read the same input concurrently.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawInput {
    datas: Arc<BTreeMap<String, Value>>,
}

impl RawInput {
    /// Create an empty input
    pub fn new() -> Self {
        Self::default()
    }

    /// Build an input from a JSON value, which must be an object
    pub fn from_json(value: Value) -> Result<Self> {
        match value {
            Value::Object(map) => Ok(map.into()),
            other => Err(Error::InvalidInput {
                message: format!("expected a JSON object, found {}", json_type_name(&other)),
            }),
        }
    }

    /// Parse an input from a JSON document
    pub fn from_json_str(json: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(json)?;
        Self::from_json(value)
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.datas.get(key)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.datas.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.datas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.datas.is_empty()
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.datas.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.datas.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Borrow the underlying map
    pub fn as_map(&self) -> &BTreeMap<String, Value> {
        &self.datas
    }
}

impl From<BTreeMap<String, Value>> for RawInput {
    fn from(datas: BTreeMap<String, Value>) -> Self {
        Self {
            datas: Arc::new(datas),
        }
    }
}

impl From<Map<String, Value>> for RawInput {
    fn from(map: Map<String, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl<K: Into<String>> From<HashMap<K, Value>> for RawInput {
    fn from(map: HashMap<K, Value>) -> Self {
        map.into_iter().collect()
    }
}

impl TryFrom<Value> for RawInput {
    type Error = Error;

    fn try_from(value: Value) -> Result<Self> {
        Self::from_json(value)
    }
}

impl<K: Into<String>> FromIterator<(K, Value)> for RawInput {
    fn from_iter<I: IntoIterator<Item = (K, Value)>>(iter: I) -> Self {
        iter.into_iter()
            .map(|(k, v)| (k.into(), v))
            .collect::<BTreeMap<String, Value>>()
            .into()
    }
}

/// A value committed to the filtered output
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Uncoerced input value (`cast: false`, or the `any` type)
    Raw(Value),
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
    Date(NaiveDate),
    DateTime(DateTime<FixedOffset>),
    Identifier(ObjectId),
    Box(GeoBox),
    Array(Vec<Value>),
    Hash(BTreeMap<String, Value>),
}

impl FieldValue {
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(n) => Some(*n),
            FieldValue::Raw(value) => value.as_i64(),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Float(n) => Some(*n),
            FieldValue::Integer(n) => Some(*n as f64),
            FieldValue::Raw(value) => value.as_f64(),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(s) => Some(s),
            FieldValue::Raw(value) => value.as_str(),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            FieldValue::Raw(value) => value.as_bool(),
            _ => None,
        }
    }

    /// Render this value as plain JSON
    pub fn to_json(&self) -> Result<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        FieldValue::Raw(value)
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Boolean(value)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Integer(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

/// Render a filtered output as a JSON object
pub fn filtered_to_json(filtered: &FilteredOutput) -> Result<Value> {
    Ok(serde_json::to_value(filtered)?)
}

/// Textual form of scalar values, as used by pattern-based recognizers.
///
/// Strings are returned as-is, numbers and booleans through their JSON text.
/// Arrays, objects and null have no string form.
pub(crate) fn string_form(value: &Value) -> Option<std::borrow::Cow<'_, str>> {
    match value {
        Value::String(s) => Some(std::borrow::Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(std::borrow::Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(std::borrow::Cow::Owned(b.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Name of a JSON value's kind, reported as `found` in type violations
pub fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "Null",
        Value::Bool(_) => "Boolean",
        Value::Number(n) if n.is_f64() => "Float",
        Value::Number(_) => "Integer",
        Value::String(_) => "String",
        Value::Array(_) => "Array",
        Value::Object(_) => "Hash",
    }
}
