//! Storage port for generated registry artifacts.

use camino::{Utf8Path, Utf8PathBuf};
use std::sync::Arc;
use thiserror::Error;

/// Result type for artifact store operations.
pub type ArtifactStoreResult<T> = Result<T, ArtifactStoreError>;

/// Location-addressed storage for artifact text.
///
/// Locations are relative to the store's root.
pub trait ArtifactStore: Send + Sync {
    /// Reads the artifact at `location`.
    ///
    /// Returns `None` when nothing is stored there.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactStoreError::Storage`] when the location exists but
    /// cannot be read.
    fn read(&self, location: &Utf8Path) -> ArtifactStoreResult<Option<String>>;

    /// Writes `contents` to `location`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactStoreError::Storage`] when the write fails.
    fn write(&self, location: &Utf8Path, contents: &str) -> ArtifactStoreResult<()>;

    /// Copies the value at `from` to `to`.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactStoreError::NotFound`] when `from` holds nothing, or
    /// [`ArtifactStoreError::Storage`] when the copy fails.
    fn copy(&self, from: &Utf8Path, to: &Utf8Path) -> ArtifactStoreResult<()>;

    /// Reports whether `location` holds a value.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactStoreError::Storage`] when existence cannot be
    /// determined.
    fn exists(&self, location: &Utf8Path) -> ArtifactStoreResult<bool>;
}

/// Errors returned by artifact store implementations.
#[derive(Debug, Clone, Error)]
pub enum ArtifactStoreError {
    /// Nothing is stored at the location.
    #[error("no artifact stored at {0}")]
    NotFound(Utf8PathBuf),

    /// Storage-layer failure.
    #[error("artifact storage error at {location}: {source}")]
    Storage {
        /// Location being accessed.
        location: Utf8PathBuf,
        /// Underlying failure.
        source: Arc<dyn std::error::Error + Send + Sync>,
    },
}

impl ArtifactStoreError {
    /// Wraps a storage error for `location`.
    pub fn storage(
        location: impl Into<Utf8PathBuf>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Storage {
            location: location.into(),
            source: Arc::new(err),
        }
    }
}
