//! Calendar processors: `date` and `datetime`
//!
//! Parsing is locale independent. A value the parser rejects is a type
//! violation; there is no separate format option.
//!
//! Copyright (c) 2025 Kharon Team
//! Licensed under the Apache-2.0 license

use super::Processor;
use crate::types::{string_form, FieldValue};
use crate::{Error, Result};
use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime};
use serde_json::Value;

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%d/%m/%Y", "%Y%m%d"];

const NAIVE_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a calendar date, also accepting the date part of a timestamp
pub fn parse_date(text: &str) -> Option<NaiveDate> {
    let text = text.trim();
    DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .or_else(|| parse_datetime(text).map(|datetime| datetime.date_naive()))
}

/// Parse a timestamp.
///
/// RFC 3339 / RFC 2822 keep their offset; timestamps without an offset are
/// read as UTC, and a bare date is read as midnight UTC.
pub fn parse_datetime(text: &str) -> Option<DateTime<FixedOffset>> {
    let text = text.trim();
    if let Ok(datetime) = DateTime::parse_from_rfc3339(text) {
        return Some(datetime);
    }
    if let Ok(datetime) = DateTime::parse_from_rfc2822(text) {
        return Some(datetime);
    }

    let naive = NAIVE_DATETIME_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(text, format).ok())
        .or_else(|| {
            DATE_FORMATS
                .iter()
                .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
                .and_then(|date| date.and_hms_opt(0, 0, 0))
        })?;
    Some(naive.and_utc().fixed_offset())
}

fn unparsable(raw: &Value, what: &str) -> Error {
    Error::Collaborator {
        message: format!("cannot parse {} as a {}", raw, what),
        source: None,
    }
}

/// Calendar dates
#[derive(Debug, Clone, Copy, Default)]
pub struct DateProcessor;

impl Processor for DateProcessor {
    fn type_name(&self) -> &'static str {
        "Date"
    }

    fn recognize(&self, raw: &Value) -> bool {
        string_form(raw).and_then(|text| parse_date(&text)).is_some()
    }

    fn coerce(&self, raw: &Value) -> Result<FieldValue> {
        string_form(raw)
            .and_then(|text| parse_date(&text))
            .map(FieldValue::Date)
            .ok_or_else(|| unparsable(raw, "date"))
    }
}

/// Timestamps with an offset
#[derive(Debug, Clone, Copy, Default)]
pub struct DatetimeProcessor;

impl Processor for DatetimeProcessor {
    fn type_name(&self) -> &'static str {
        "DateTime"
    }

    fn recognize(&self, raw: &Value) -> bool {
        string_form(raw).and_then(|text| parse_datetime(&text)).is_some()
    }

    fn coerce(&self, raw: &Value) -> Result<FieldValue> {
        string_form(raw)
            .and_then(|text| parse_datetime(&text))
            .map(FieldValue::DateTime)
            .ok_or_else(|| unparsable(raw, "datetime"))
    }
}
