//! `identifier` processor: 24-hex-digit document identifiers

use super::{static_pattern, Processor};
use crate::identifier::ObjectId;
use crate::types::FieldValue;
use crate::{Error, Result};
use regex::Regex;
use serde_json::Value;
use std::sync::OnceLock;

static IDENTIFIER_PATTERN: OnceLock<Regex> = OnceLock::new();

#[derive(Debug, Clone, Copy, Default)]
pub struct IdentifierProcessor;

impl Processor for IdentifierProcessor {
    fn type_name(&self) -> &'static str {
        "ObjectId"
    }

    fn recognize(&self, raw: &Value) -> bool {
        let pattern = static_pattern(&IDENTIFIER_PATTERN, r"^[0-9a-fA-F]{24}$");
        raw.as_str().map_or(false, |s| pattern.is_match(s))
    }

    fn coerce(&self, raw: &Value) -> Result<FieldValue> {
        let text = raw.as_str().unwrap_or_default();
        ObjectId::parse_str(text)
            .map(FieldValue::Identifier)
            .map_err(|e| Error::Collaborator {
                message: format!("cannot build an identifier from {}: {}", raw, e),
                source: Some(e.into()),
            })
    }
}
