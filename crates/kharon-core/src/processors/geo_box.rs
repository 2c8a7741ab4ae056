//! `box` processor: geographic boxes with `at_least`/`at_most` containment
//!
//! `at_least` names a box the validated one must contain, `at_most` a box
//! the validated one must fit in. Either may be given as a string or as
//! nested pairs; an unreadable option is a `box.format` violation.
//!
//! Copyright (c) 2025 Kharon Team
//! Licensed under the Apache-2.0 license

use super::{static_pattern, Processor};
use crate::geo::GeoBox;
use crate::types::FieldValue;
use crate::validation::{ErrorRecord, FieldContext};
use crate::{Error, Result};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

static BOX_PATTERN: OnceLock<Regex> = OnceLock::new();

const COORDINATE: &str = r"[+-]?[0-9]{1,3}(?:\.[0-9]{1,7})?";

#[derive(Debug, Clone, Copy, Default)]
pub struct BoxProcessor;

impl BoxProcessor {
    fn pattern() -> &'static Regex {
        let pattern = format!("^{c}(?:,{c}){{3}}$", c = COORDINATE);
        static_pattern(&BOX_PATTERN, &pattern)
    }

    fn read_option(key: &str, option: &Value) -> std::result::Result<GeoBox, ErrorRecord> {
        GeoBox::from_value(option).ok_or_else(|| ErrorRecord::BoxFormat {
            key: key.to_string(),
            value: option.clone(),
        })
    }

    fn check_containment(key: &str, container: GeoBox, contained: GeoBox) -> Option<ErrorRecord> {
        if container.contains(&contained) {
            return None;
        }
        Some(ErrorRecord::BoxContainment {
            key: key.to_string(),
            container,
            contained,
        })
    }
}

impl Processor for BoxProcessor {
    fn type_name(&self) -> &'static str {
        "Box"
    }

    fn recognize(&self, raw: &Value) -> bool {
        raw.as_str()
            .map_or(false, |s| Self::pattern().is_match(s) && GeoBox::parse(s).is_some())
    }

    fn coerce(&self, raw: &Value) -> Result<FieldValue> {
        GeoBox::from_value(raw)
            .map(FieldValue::Box)
            .ok_or_else(|| Error::Collaborator {
                message: format!("cannot read {} as a box", raw),
                source: None,
            })
    }

    fn check(&self, field: &FieldContext<'_>) -> Result<Vec<ErrorRecord>> {
        let mut errors = Vec::new();
        let Some(validated) = GeoBox::from_value(field.raw) else {
            return Ok(errors);
        };

        if let Some(option) = &field.options.at_least {
            match Self::read_option(field.key, option) {
                Ok(inner) => errors.extend(Self::check_containment(field.key, validated, inner)),
                Err(record) => errors.push(record),
            }
        }
        if let Some(option) = &field.options.at_most {
            match Self::read_option(field.key, option) {
                Ok(outer) => errors.extend(Self::check_containment(field.key, outer, validated)),
                Err(record) => errors.push(record),
            }
        }
        Ok(errors)
    }
}
