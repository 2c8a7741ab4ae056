//! Configuration for validators
//!
//! The only setting is the error policy new validators receive. It can come
//! from:
//! - Default values (raising)
//! - Configuration files (YAML/JSON)
//! - Environment variables
//! - Per-call overrides with [`Config::use_exceptions`]

use crate::error::{Error, Result};
use crate::validation::{ErrorHandler, ErrorPolicy};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Environment variable naming the policy (`raising` or `collecting`)
pub const ERROR_POLICY_ENV: &str = "KHARON_ERROR_POLICY";

/// Boolean environment variable, `true` for raising
pub const USE_EXCEPTIONS_ENV: &str = "KHARON_USE_EXCEPTIONS";

/// Main configuration structure
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Policy of the error handler given to each new validator
    pub error_policy: ErrorPolicy,
}

impl Config {
    /// Configuration with the given policy
    pub fn new(error_policy: ErrorPolicy) -> Self {
        Self { error_policy }
    }

    /// Abort on the first violation
    pub fn raising() -> Self {
        Self::new(ErrorPolicy::Raising)
    }

    /// Accumulate every violation
    pub fn collecting() -> Self {
        Self::new(ErrorPolicy::Collecting)
    }

    /// Load configuration from a file, YAML when the extension says so and
    /// JSON otherwise
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;

        let is_yaml = matches!(
            path.extension().and_then(|s| s.to_str()),
            Some("yaml") | Some("yml")
        );
        let config = if is_yaml {
            serde_yaml::from_str(&content).map_err(|e| Error::Configuration {
                message: format!("invalid YAML configuration in {}: {}", path.display(), e),
                source: Some(e.into()),
            })?
        } else {
            serde_json::from_str(&content)?
        };

        log::debug!("Loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load configuration from the process environment
    pub fn from_env() -> Result<Self> {
        Self::from_env_with(|name| std::env::var(name).ok())
    }

    /// Load configuration through an environment lookup function.
    ///
    /// `KHARON_ERROR_POLICY` wins over `KHARON_USE_EXCEPTIONS`; with neither
    /// set the default policy is kept.
    pub fn from_env_with<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(policy) = lookup(ERROR_POLICY_ENV) {
            return Ok(Self::new(policy.parse()?));
        }

        match lookup(USE_EXCEPTIONS_ENV) {
            Some(flag) => Ok(Self::default().use_exceptions(parse_flag(&flag)?)),
            None => Ok(Self::default()),
        }
    }

    /// Switch between the raising (`true`) and collecting (`false`) policies
    pub fn use_exceptions(mut self, enabled: bool) -> Self {
        self.error_policy = if enabled {
            ErrorPolicy::Raising
        } else {
            ErrorPolicy::Collecting
        };
        self
    }

    pub fn uses_exceptions(&self) -> bool {
        self.error_policy == ErrorPolicy::Raising
    }

    /// Build the handler for a new validator
    pub fn handler(&self) -> Box<dyn ErrorHandler> {
        self.error_policy.handler()
    }
}

fn parse_flag(value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(Error::Configuration {
            message: format!("{} must be a boolean, got '{}'", USE_EXCEPTIONS_ENV, other),
            source: None,
        }),
    }
}
