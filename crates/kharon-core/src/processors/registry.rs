//! Processor registry - type name to processor mapping
//!
//! The registry is built once, usually through [`ProcessorRegistry::new`]
//! which registers every built-in type, and is then shared read-only behind
//! an `Arc` by all validators.

use super::*;
use crate::{Error, Result};
use std::collections::HashMap;
use std::fmt;
use std::sync::{Arc, OnceLock};
use tracing::debug;

static SHARED_REGISTRY: OnceLock<Arc<ProcessorRegistry>> = OnceLock::new();

/// Registry of every known field type
#[derive(Clone)]
pub struct ProcessorRegistry {
    processors: HashMap<String, Arc<dyn Processor>>,
}

impl ProcessorRegistry {
    /// Create a registry holding the built-in processors
    pub fn new() -> Self {
        let mut registry = Self::empty();
        registry.register_builtin_processors();
        registry
    }

    /// Create a registry without any processor
    pub fn empty() -> Self {
        Self {
            processors: HashMap::new(),
        }
    }

    /// Process-wide registry of the built-in processors
    pub fn shared() -> Arc<ProcessorRegistry> {
        Arc::clone(SHARED_REGISTRY.get_or_init(|| Arc::new(ProcessorRegistry::new())))
    }

    fn register_builtin_processors(&mut self) {
        self.register("any", Arc::new(AnyProcessor));
        self.register("array", Arc::new(ArrayProcessor));
        self.register("boolean", Arc::new(BooleanProcessor));
        self.register("box", Arc::new(BoxProcessor));
        self.register("date", Arc::new(DateProcessor));
        self.register("datetime", Arc::new(DatetimeProcessor));
        self.register("email", Arc::new(EmailProcessor));
        self.register("hash", Arc::new(HashProcessor));
        self.register("integer", Arc::new(IntegerProcessor));
        self.register("numeric", Arc::new(NumericProcessor));
        self.register("text", Arc::new(TextProcessor));

        let identifier: Arc<dyn Processor> = Arc::new(IdentifierProcessor);
        self.register("identifier", Arc::clone(&identifier));
        self.register("ssid", identifier);

        debug!("Registered {} built-in processors", self.processors.len());
    }

    /// Register a processor, replacing any previous one under that name
    pub fn register(&mut self, name: impl Into<String>, processor: Arc<dyn Processor>) {
        let name = name.into();
        debug!("Registering processor: {} ({})", name, processor.type_name());
        self.processors.insert(name, processor);
    }

    /// Remove a processor, returning it if it was registered
    pub fn remove(&mut self, name: &str) -> Option<Arc<dyn Processor>> {
        self.processors.remove(name)
    }

    /// Get a processor by name
    pub fn get(&self, name: &str) -> Option<Arc<dyn Processor>> {
        self.processors.get(name).cloned()
    }

    /// Get a processor by name, failing on unknown types
    pub fn lookup(&self, name: &str) -> Result<Arc<dyn Processor>> {
        self.get(name).ok_or_else(|| Error::UnknownProcessor {
            name: name.to_string(),
        })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.processors.contains_key(name)
    }

    /// Registered type names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.processors.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.processors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.processors.is_empty()
    }
}

impl Default for ProcessorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for ProcessorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ProcessorRegistry")
            .field("processors", &self.names())
            .finish()
    }
}
