//! Field validation: the Validator and the option pipeline it drives
//!
//! # Module Organization
//!
//! - [`core`] - The [`Validator`] and its per-type declaration methods
//! - [`pipeline`] - Presence checks, shared value checks and commit
//! - [`options`] - Rule options and their builder
//! - [`constraints`] - Individual value checks
//! - [`handler`] - Raising and collecting error policies
//! - [`types`] - Structured violation records
//!
//! Copyright (c) 2025 Kharon Team
//! Licensed under the Apache-2.0 license

pub mod constraints;
pub mod core;
pub mod handler;
pub mod options;
pub mod pipeline;
pub mod types;


pub use self::core::Validator;
pub use handler::{CollectingHandler, ErrorHandler, ErrorPolicy, RaisingHandler};
pub use options::{Adjustment, Options, RoundOption};
pub use pipeline::FieldContext;
pub use types::{ErrorKind, ErrorRecord};
