//! Core validation engine and Validator implementation
//!
//! The Validator owns the read-only raw input, the filtered output it builds,
//! and the error handler chosen at construction. Each declaration method
//! (`integer`, `text`, ...) runs one field rule through the option pipeline.
//!
//! Copyright (c) 2025 Kharon Team
//! Licensed under the Apache-2.0 license

use super::handler::{ErrorHandler, ErrorPolicy};
use super::pipeline::{self, FieldContext};
use super::{ErrorRecord, Options};
use crate::config::Config;
use crate::processors::ProcessorRegistry;
use crate::types::{json_type_name, FieldValue, FilteredOutput, RawInput};
use crate::Result;
use std::sync::Arc;
use tracing::{debug, debug_span, trace};

/// Validates and filters one raw input map, field by field.
///
/// ```
/// use kharon_core::{Config, FieldValue, Options, RawInput, Validator};
/// use serde_json::json;
///
/// let mut validator = Validator::with_config(
///     RawInput::try_from(json!({"age": "42", "nickname": "charon"}))?,
///     &Config::collecting(),
/// );
/// validator.integer("age", Options::new().required().min(18.0))?;
/// validator.text("nickname", Options::new().rename("name"))?;
///
/// assert_eq!(validator.filtered().get("age"), Some(&FieldValue::Integer(42)));
/// assert!(validator.filtered().contains_key("name"));
/// assert!(validator.errors().is_empty());
/// # Ok::<(), kharon_core::Error>(())
/// ```
#[derive(Debug)]
pub struct Validator {
    datas: RawInput,
    registry: Arc<ProcessorRegistry>,
    filtered: FilteredOutput,
    handler: Box<dyn ErrorHandler>,
}

impl Validator {
    /// Create a validator with the default configuration (raising policy)
    pub fn new(datas: impl Into<RawInput>) -> Self {
        Self::with_config(datas, &Config::default())
    }

    /// Create a validator whose error policy comes from `config`
    pub fn with_config(datas: impl Into<RawInput>, config: &Config) -> Self {
        Self::with_parts(datas, ProcessorRegistry::shared(), config.handler())
    }

    /// Create a validator from explicit collaborators
    pub fn with_parts(
        datas: impl Into<RawInput>,
        registry: Arc<ProcessorRegistry>,
        handler: Box<dyn ErrorHandler>,
    ) -> Self {
        Self {
            datas: datas.into(),
            registry,
            filtered: FilteredOutput::new(),
            handler,
        }
    }

    /// Run one field rule using the processor registered as `type_name`.
    ///
    /// Under the raising policy the first violation is returned as
    /// `Err(Error::Validation)`; under the collecting policy violations are
    /// stored and `Ok(())` is returned. Other errors (unknown type, invalid
    /// option, collaborator failure) are returned under both policies.
    pub fn process(&mut self, type_name: &str, key: &str, options: Options) -> Result<()> {
        let processor = self.registry.lookup(type_name)?;
        let span = debug_span!("validate_field", field_type = type_name, key = key);
        let _guard = span.enter();

        // Phase 1: presence
        let mut violated = false;
        for record in pipeline::pre_phase(&self.datas, key, &options) {
            violated = true;
            self.report(record)?;
        }

        let datas = self.datas.clone();
        let Some(raw) = datas.get(key) else {
            log::debug!("Field '{}' absent, nothing to store", key);
            return Ok(());
        };

        // Phase 2: recognition and coercion
        if !processor.recognize(raw) {
            return self.report(ErrorRecord::Type {
                key: key.to_string(),
                supposed: processor.type_name().to_string(),
                found: json_type_name(raw).to_string(),
            });
        }
        let value = if options.cast {
            processor.coerce(raw)?
        } else {
            FieldValue::Raw(raw.clone())
        };

        // Phase 3: value checks, all of them evaluated
        let field = FieldContext {
            key,
            raw,
            options: &options,
            datas: &datas,
        };
        let mut records = pipeline::shared_checks(&field);
        records.extend(processor.check(&field)?);
        for record in records {
            violated = true;
            self.report(record)?;
        }

        if violated {
            log::debug!("Field '{}' violated its rule, not stored", key);
            return Ok(());
        }

        // Phase 4: adjustment
        let value = if options.cast {
            processor.adjust(value, &options)
        } else {
            value
        };

        if let Some(output_key) = pipeline::commit(&mut self.filtered, key, &options, value) {
            debug!(output_key = %output_key, "Field stored");
        }
        Ok(())
    }

    fn report(&mut self, record: ErrorRecord) -> Result<()> {
        trace!(kind = %record.kind(), "Reporting violation");
        self.handler.report_error(record)
    }

    /// Checks a non-negative integer, honoring `min`/`max`/`between`
    pub fn integer(&mut self, key: &str, options: Options) -> Result<()> {
        self.process("integer", key, options)
    }

    /// Checks a decimal number (dot or comma separator), honoring bounds and
    /// `round`/`floor`/`ceil`
    pub fn numeric(&mut self, key: &str, options: Options) -> Result<()> {
        self.process("numeric", key, options)
    }

    /// Checks a string, honoring `regex`
    pub fn text(&mut self, key: &str, options: Options) -> Result<()> {
        self.process("text", key, options)
    }

    pub fn boolean(&mut self, key: &str, options: Options) -> Result<()> {
        self.process("boolean", key, options)
    }

    pub fn date(&mut self, key: &str, options: Options) -> Result<()> {
        self.process("date", key, options)
    }

    pub fn datetime(&mut self, key: &str, options: Options) -> Result<()> {
        self.process("datetime", key, options)
    }

    /// Checks an array, honoring `contains`
    pub fn array(&mut self, key: &str, options: Options) -> Result<()> {
        self.process("array", key, options)
    }

    /// Checks a hash, honoring `has_keys` and `contains`
    pub fn hash(&mut self, key: &str, options: Options) -> Result<()> {
        self.process("hash", key, options)
    }

    /// Checks a 24-hex-digit identifier
    pub fn identifier(&mut self, key: &str, options: Options) -> Result<()> {
        self.process("identifier", key, options)
    }

    /// Checks a geographic box, honoring `at_least`/`at_most`
    pub fn geo_box(&mut self, key: &str, options: Options) -> Result<()> {
        self.process("box", key, options)
    }

    pub fn email(&mut self, key: &str, options: Options) -> Result<()> {
        self.process("email", key, options)
    }

    /// Accepts any value; only the shared options apply
    pub fn any(&mut self, key: &str, options: Options) -> Result<()> {
        self.process("any", key, options)
    }

    /// The raw input, as given
    pub fn datas(&self) -> &RawInput {
        &self.datas
    }

    /// Filtered output built so far
    pub fn filtered(&self) -> &FilteredOutput {
        &self.filtered
    }

    pub fn into_filtered(self) -> FilteredOutput {
        self.filtered
    }

    /// Copy of the violations collected so far; always empty when raising
    pub fn errors(&self) -> Vec<ErrorRecord> {
        self.handler.errors().to_vec()
    }

    pub fn has_errors(&self) -> bool {
        !self.handler.errors().is_empty()
    }

    pub fn policy(&self) -> ErrorPolicy {
        self.handler.policy()
    }

    pub fn registry(&self) -> &ProcessorRegistry {
        &self.registry
    }

    /// Split the validator into its filtered output and collected violations
    pub fn finish(self) -> (FilteredOutput, Vec<ErrorRecord>) {
        let errors = self.handler.errors().to_vec();
        (self.filtered, errors)
    }
}
