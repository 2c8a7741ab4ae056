//! Error-reporting policies
//!
//! The validator never decides by itself what a violation means for the rest
//! of the run: it hands every [`ErrorRecord`] to an [`ErrorHandler`].
//!
//! - [`RaisingHandler`] turns the first record into an `Err`, which the
//!   validator propagates with `?`, aborting the run.
//! - [`CollectingHandler`] stores every record and lets the run continue.
//!
//! Copyright (c) 2025 Kharon Team
//! Licensed under the Apache-2.0 license

use super::ErrorRecord;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Policy receiving the violations of one validation run
pub trait ErrorHandler: Send + fmt::Debug {
    /// Report one violation; an `Err` aborts the run
    fn report_error(&mut self, record: ErrorRecord) -> Result<()>;

    /// Violations recorded so far
    fn errors(&self) -> &[ErrorRecord] {
        &[]
    }

    /// The policy this handler implements
    fn policy(&self) -> ErrorPolicy;
}

/// Handler aborting on the first violation. Stateless.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RaisingHandler;

impl ErrorHandler for RaisingHandler {
    fn report_error(&mut self, record: ErrorRecord) -> Result<()> {
        Err(Error::Validation { record })
    }

    fn policy(&self) -> ErrorPolicy {
        ErrorPolicy::Raising
    }
}

/// Handler storing every violation in reporting order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollectingHandler {
    errors: Vec<ErrorRecord>,
}

impl CollectingHandler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a record, returning the handler so calls can be chained
    pub fn push(&mut self, record: ErrorRecord) -> &mut Self {
        self.errors.push(record);
        self
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn into_errors(self) -> Vec<ErrorRecord> {
        self.errors
    }
}

impl ErrorHandler for CollectingHandler {
    fn report_error(&mut self, record: ErrorRecord) -> Result<()> {
        self.push(record);
        Ok(())
    }

    fn errors(&self) -> &[ErrorRecord] {
        &self.errors
    }

    fn policy(&self) -> ErrorPolicy {
        ErrorPolicy::Collecting
    }
}

/// Which handler newly built validators receive
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorPolicy {
    /// Abort on the first violation
    #[default]
    #[serde(alias = "exceptions")]
    Raising,
    /// Accumulate every violation and keep going
    #[serde(alias = "messages")]
    Collecting,
}

impl ErrorPolicy {
    /// Build a fresh handler implementing this policy
    pub fn handler(self) -> Box<dyn ErrorHandler> {
        match self {
            ErrorPolicy::Raising => Box::new(RaisingHandler),
            ErrorPolicy::Collecting => Box::new(CollectingHandler::new()),
        }
    }
}

impl fmt::Display for ErrorPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorPolicy::Raising => write!(f, "raising"),
            ErrorPolicy::Collecting => write!(f, "collecting"),
        }
    }
}

impl FromStr for ErrorPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "raising" | "exceptions" => Ok(ErrorPolicy::Raising),
            "collecting" | "messages" => Ok(ErrorPolicy::Collecting),
            other => Err(Error::Configuration {
                message: format!(
                    "unknown error policy '{}', expected 'raising' or 'collecting'",
                    other
                ),
                source: None,
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn required(key: &str) -> ErrorRecord {
        ErrorRecord::Required {
            key: key.to_string(),
        }
    }

    #[test]
    fn test_raising_handler_fails_on_first_report() {
        let mut handler = RaisingHandler;
        let err = handler.report_error(required("name")).unwrap_err();
        assert_eq!(err.record(), Some(&required("name")));
        assert!(handler.errors().is_empty());
    }

    #[test]
    fn test_collecting_handler_stores_several_errors() {
        let mut handler = CollectingHandler::new();
        handler.push(required("first")).push(required("second"));
        handler.report_error(required("third")).unwrap();

        assert_eq!(handler.len(), 3);
        assert_eq!(handler.errors()[0], required("first"));
        assert_eq!(handler.into_errors()[2], required("third"));
    }

    #[test]
    fn test_policy_parsing() {
        assert_eq!("raising".parse::<ErrorPolicy>().unwrap(), ErrorPolicy::Raising);
        assert_eq!("Exceptions".parse::<ErrorPolicy>().unwrap(), ErrorPolicy::Raising);
        assert_eq!("messages".parse::<ErrorPolicy>().unwrap(), ErrorPolicy::Collecting);
        assert!("sometimes".parse::<ErrorPolicy>().is_err());
    }

    #[test]
    fn test_policy_builds_matching_handler() {
        assert_eq!(ErrorPolicy::Raising.handler().policy(), ErrorPolicy::Raising);
        assert_eq!(
            ErrorPolicy::Collecting.handler().policy(),
            ErrorPolicy::Collecting
        );
    }

    #[test]
    fn test_raising_handler_is_shareable() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<RaisingHandler>();
    }
}
