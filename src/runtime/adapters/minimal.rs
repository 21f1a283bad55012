//! Minimal stand-in used when an adapter cannot be loaded.

use crate::runtime::ports::{Adapter, AdapterError};
use serde_json::{Value, json};

/// Capability reported by every stand-in.
pub const BASIC_PROCESSING: &str = "basic_processing";

/// Stand-in that echoes its input tagged as a minimal implementation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MinimalAdapter {
    name: String,
}

impl MinimalAdapter {
    /// Creates a stand-in for the adapter registered as `name`.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the registration name this stand-in answers for.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }
}

impl Adapter for MinimalAdapter {
    fn process(&self, input: Value) -> Result<Value, AdapterError> {
        Ok(json!({
            "adapter": self.name,
            "implementation": "minimal",
            "input": input,
        }))
    }

    fn capabilities(&self) -> Vec<String> {
        vec![BASIC_PROCESSING.to_owned()]
    }
}
