//! Whole-block validation entry points
//!
//! [`validate`] and [`validate_with`] build a validator, run a block of rule
//! declarations against it and hand back the result. They are the boundary
//! where unexpected failures become `standard` violation records: whatever
//! the block returns, the caller only ever sees `Error::Validation`.

use crate::config::Config;
use crate::types::{FilteredOutput, RawInput};
use crate::validation::{ErrorRecord, Validator};
use crate::Result;
use serde::Serialize;

/// Output of a validation run under a given configuration
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationReport {
    /// Fields that passed their rule, under their output keys
    pub filtered: FilteredOutput,
    /// Violations collected along the way; empty under the raising policy
    pub errors: Vec<ErrorRecord>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Validate `datas` with the default configuration (raising policy).
///
/// ```
/// use kharon_core::{validate, FieldValue, Options, RawInput};
/// use serde_json::json;
///
/// let datas = RawInput::try_from(json!({"key": "1"}))?;
/// let filtered = validate(datas, |v| v.integer("key", Options::new().required()))?;
/// assert_eq!(filtered.get("key"), Some(&FieldValue::Integer(1)));
/// # Ok::<(), kharon_core::Error>(())
/// ```
pub fn validate<F>(datas: impl Into<RawInput>, rules: F) -> Result<FilteredOutput>
where
    F: FnOnce(&mut Validator) -> Result<()>,
{
    validate_with(datas, &Config::default(), rules).map(|report| report.filtered)
}

/// Validate `datas` with an explicit configuration.
///
/// Under the collecting policy every violation ends up in the report and
/// `Ok` is returned as long as the block itself completes. Any error the
/// block returns, violation or not, is returned as `Error::Validation`.
pub fn validate_with<F>(datas: impl Into<RawInput>, config: &Config, rules: F) -> Result<ValidationReport>
where
    F: FnOnce(&mut Validator) -> Result<()>,
{
    let mut validator = Validator::with_config(datas, config);

    if let Err(err) = rules(&mut validator) {
        if !err.is_validation() {
            log::warn!("Validation block failed unexpectedly: {}", err);
        }
        return Err(err.into_standard());
    }

    let (filtered, errors) = validator.finish();
    Ok(ValidationReport { filtered, errors })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Error, FieldValue, Options};
    use serde_json::json;

    fn datas(value: serde_json::Value) -> RawInput {
        RawInput::try_from(value).unwrap()
    }

    #[test]
    fn test_validate_returns_filtered() {
        let filtered = validate(datas(json!({"key": "1"})), |v| {
            v.integer("key", Options::new().required())
        })
        .unwrap();
        assert_eq!(filtered.get("key"), Some(&FieldValue::Integer(1)));
    }

    #[test]
    fn test_validate_raises_on_violation() {
        let err = validate(datas(json!({"key": "something"})), |v| {
            v.integer("key", Options::new())
        })
        .unwrap_err();

        match err.record() {
            Some(ErrorRecord::Type { key, supposed, .. }) => {
                assert_eq!(key, "key");
                assert_eq!(supposed, "Integer");
            }
            other => panic!("expected a type violation, got {:?}", other),
        }
    }

    #[test]
    fn test_unexpected_failure_becomes_standard_record() {
        let err = validate(datas(json!({"key": "1"})), |v| v.process("uuid", "key", Options::new()))
            .unwrap_err();

        match err {
            Error::Validation {
                record: ErrorRecord::Standard { exception, message },
            } => {
                assert_eq!(exception, "UnknownProcessor");
                assert_eq!(message, "Unknown validator type: uuid");
            }
            other => panic!("expected a standard record, got {:?}", other),
        }
    }

    #[test]
    fn test_caller_error_inside_block() {
        let err = validate_with(datas(json!({})), &Config::collecting(), |_| {
            Err(anyhow::anyhow!("lookup table unavailable").into())
        })
        .unwrap_err();

        let record = err.into_record();
        assert_eq!(record.kind().as_str(), "standard");
        assert!(record.to_string().contains("lookup table unavailable"));
    }

    #[test]
    fn test_collecting_report() {
        let report = validate_with(datas(json!({"name": "Charon"})), &Config::collecting(), |v| {
            v.text("name", Options::new())?;
            v.integer("age", Options::new().required())
        })
        .unwrap();

        assert!(!report.is_valid());
        assert_eq!(report.filtered.len(), 1);
        assert_eq!(
            report.errors,
            vec![ErrorRecord::Required {
                key: "age".to_string()
            }]
        );
    }
}
