//! The contract every live adapter exposes.

use serde_json::Value;
use thiserror::Error;

/// A live adapter instance.
///
/// This is the lowest common contract: a process-like operation and a
/// capability listing. Instances are shared between threads once the
/// registry is built.
pub trait Adapter: Send + Sync {
    /// Processes one request.
    ///
    /// # Errors
    ///
    /// Returns [`AdapterError`] when the adapter cannot handle the input.
    fn process(&self, input: Value) -> Result<Value, AdapterError>;

    /// Lists what the adapter can do.
    fn capabilities(&self) -> Vec<String>;
}

/// Errors returned by adapter operations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AdapterError {
    /// The input is not acceptable to this adapter.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Processing failed.
    #[error("processing failed: {0}")]
    Failed(String),
}
