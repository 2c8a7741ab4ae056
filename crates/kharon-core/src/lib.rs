//! Kharon Core - Declarative validation and coercion of untyped input
//!
//! This crate takes an untyped key-value map (typically HTTP request
//! parameters or a decoded JSON body), checks each declared field against a
//! type and a set of options, coerces accepted values into native types and
//! builds a filtered output map.
//!
//! # Main Components
//!
//! - **Validator**: Runs one field rule at a time through the option pipeline
//! - **Processors**: One per field type, looked up by name in a registry
//! - **Error Handling**: Raising or collecting policy for rule violations,
//!   plus a `thiserror` error type for everything else
//! - **Configuration**: Policy selection from files or the environment
//!
//! # Example
//!
//! ```
//! use kharon_core::{validate_with, Config, FieldValue, Options, RawInput};
//! use serde_json::json;
//!
//! fn example() -> kharon_core::Result<()> {
//!     let datas = RawInput::try_from(json!({
//!         "price": "1000,5",
//!         "currency": "EUR",
//!         "tags": ["sale", "new"],
//!     }))?;
//!
//!     let report = validate_with(datas, &Config::collecting(), |v| {
//!         v.numeric("price", Options::new().required().min(0.0))?;
//!         v.text("currency", Options::new().in_values(["EUR", "USD"]))?;
//!         v.array("tags", Options::new().contains(["sale"]))?;
//!         v.integer("stock", Options::new().required())
//!     })?;
//!
//!     assert_eq!(report.filtered.get("price"), Some(&FieldValue::Float(1000.5)));
//!     assert_eq!(report.errors.len(), 1);
//!     Ok(())
//! }
//! # example().unwrap();
//! ```

pub mod config;
pub mod error;
pub mod geo;
pub mod identifier;
pub mod processors;
pub mod types;
pub mod validate;
pub mod validation;

// Re-export main types for convenience
pub use config::Config;
pub use error::{Error, Result};
pub use geo::GeoBox;
pub use identifier::{IdentifierError, ObjectId};
pub use processors::{Processor, ProcessorRegistry};
pub use types::{filtered_to_json, FieldValue, FilteredOutput, RawInput};
pub use validate::{validate, validate_with, ValidationReport};
pub use validation::{
    // Validator and options
    Options, Validator,

    // Error policies
    CollectingHandler, ErrorHandler, ErrorPolicy, RaisingHandler,

    // Violation records
    ErrorKind, ErrorRecord,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
