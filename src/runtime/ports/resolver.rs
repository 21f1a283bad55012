//! Port resolving manifest class references to constructible classes.

use super::AdapterClass;
use crate::artifact::domain::ClassReference;
use std::sync::Arc;
use thiserror::Error;

/// Resolves `module:Class` references, the runtime half of a conditional
/// import.
pub trait ClassResolver: Send + Sync {
    /// Resolves `reference`.
    ///
    /// # Errors
    ///
    /// Returns [`ImportError`] when the module or class is unavailable.
    fn resolve(&self, reference: &ClassReference) -> Result<Arc<dyn AdapterClass>, ImportError>;
}

/// Errors returned while resolving a class reference.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ImportError {
    /// No module exists at the dotted path.
    #[error("module '{0}' not found")]
    ModuleNotFound(String),

    /// The module exists but failed to load.
    #[error("module '{module}' failed to load: {message}")]
    ModuleFailed {
        /// Dotted module path.
        module: String,
        /// Loader diagnostic.
        message: String,
    },

    /// The module does not declare the class.
    #[error("module '{module}' has no class '{class}'")]
    ClassNotFound {
        /// Dotted module path.
        module: String,
        /// Requested class.
        class: String,
    },
}
