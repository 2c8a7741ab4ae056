//! Error types for the Kharon core library
//!
//! This module defines the error handling system for Kharon, using thiserror
//! for ergonomic error definitions and anyhow for flexible error contexts.
//!
//! Rule violations travel as [`Error::Validation`], carrying the structured
//! [`ErrorRecord`]. Every other variant describes a failure that is not a
//! violation of a rule (a bad option, an unknown type, a collaborator that
//! gave up); those are folded into a `standard` record at the boundary of
//! [`crate::validate`].

use crate::validation::ErrorRecord;
use thiserror::Error;

/// Main error type for Kharon operations
#[derive(Error, Debug)]
pub enum Error {
    /// A rule violation surfaced by the raising error handler
    #[error("Validation failed: {record}")]
    Validation { record: ErrorRecord },

    /// No processor is registered under the requested type name
    #[error("Unknown validator type: {name}")]
    UnknownProcessor { name: String },

    /// An option value that cannot be applied (e.g. an invalid regex)
    #[error("Invalid option '{option}' for key '{key}': {message}")]
    InvalidOption {
        key: String,
        option: String,
        message: String,
    },

    /// A collaborator (parser, identifier constructor) failed unexpectedly
    #[error("Collaborator failure: {message}")]
    Collaborator {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// Raw input that is not a key-value map
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },

    /// Configuration errors
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        #[source]
        source: Option<anyhow::Error>,
    },

    /// JSON parsing and serialization errors
    #[error("JSON error: {message}")]
    Json {
        message: String,
        #[source]
        source: serde_json::Error,
    },

    /// IO errors
    #[error("IO error: {message}")]
    Io {
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic internal error with context
    #[error("Internal error: {message}")]
    Internal {
        message: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Convenience type alias for Results using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Name of the variant, reported as the `exception` of a standard record
    pub fn variant_name(&self) -> &'static str {
        match self {
            Error::Validation { .. } => "Validation",
            Error::UnknownProcessor { .. } => "UnknownProcessor",
            Error::InvalidOption { .. } => "InvalidOption",
            Error::Collaborator { .. } => "Collaborator",
            Error::InvalidInput { .. } => "InvalidInput",
            Error::Configuration { .. } => "Configuration",
            Error::Json { .. } => "Json",
            Error::Io { .. } => "Io",
            Error::Internal { .. } => "Internal",
        }
    }

    /// Whether this error is a rule violation rather than an unexpected failure
    pub fn is_validation(&self) -> bool {
        matches!(self, Error::Validation { .. })
    }

    /// The violation carried by this error, if it is one
    pub fn record(&self) -> Option<&ErrorRecord> {
        match self {
            Error::Validation { record } => Some(record),
            _ => None,
        }
    }

    /// Translate this error into an [`ErrorRecord`].
    ///
    /// Violations are returned as-is; anything else becomes a `standard`
    /// record preserving the original message.
    pub fn into_record(self) -> ErrorRecord {
        match self {
            Error::Validation { record } => record,
            other => ErrorRecord::Standard {
                exception: other.variant_name().to_string(),
                message: other.to_string(),
            },
        }
    }

    /// Same as [`Error::into_record`], but always wrapped back into an error
    pub fn into_standard(self) -> Error {
        Error::Validation {
            record: self.into_record(),
        }
    }
}

// Conversion implementations
impl From<ErrorRecord> for Error {
    fn from(record: ErrorRecord) -> Self {
        Error::Validation { record }
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Json {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io {
            message: err.to_string(),
            source: err,
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Error::Internal {
            message: err.to_string(),
            source: err,
        }
    }
}
