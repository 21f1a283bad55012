//! Constructible adapter classes.

use super::Adapter;
use crate::runtime::domain::ConstructorArgs;
use std::sync::Arc;
use thiserror::Error;

/// Something that can construct adapter instances from keyword arguments.
pub trait AdapterClass: Send + Sync {
    /// Returns the class name.
    fn class_name(&self) -> &str;

    /// Constructs an instance with exactly the given keyword arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ConstructionError`] when the class does not accept the
    /// arguments or its constructor fails.
    fn construct(&self, args: &ConstructorArgs) -> Result<Arc<dyn Adapter>, ConstructionError>;
}

/// Errors returned by one construction attempt.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConstructionError {
    /// The constructor does not accept a supplied keyword.
    #[error("unexpected keyword argument '{0}'")]
    UnexpectedArgument(String),

    /// The constructor requires an argument that was not supplied.
    #[error("missing required argument '{0}'")]
    MissingArgument(String),

    /// The constructor ran and failed.
    #[error("constructor failed: {0}")]
    Failed(String),

    /// The constructor panicked.
    #[error("constructor panicked: {0}")]
    Panicked(String),
}
