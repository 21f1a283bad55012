//! In-memory artifact store for tests.

use camino::{Utf8Path, Utf8PathBuf};
use std::collections::BTreeMap;
use std::sync::{Arc, RwLock};

use crate::artifact::ports::{ArtifactStore, ArtifactStoreError, ArtifactStoreResult};

/// Thread-safe in-memory artifact store.
#[derive(Debug, Clone, Default)]
pub struct InMemoryArtifactStore {
    files: Arc<RwLock<BTreeMap<Utf8PathBuf, String>>>,
}

impl InMemoryArtifactStore {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns every stored location in sorted order.
    ///
    /// # Errors
    ///
    /// Returns storage errors when lock acquisition fails.
    pub fn locations(&self) -> ArtifactStoreResult<Vec<Utf8PathBuf>> {
        let files = self.files.read().map_err(|err| {
            ArtifactStoreError::storage("", std::io::Error::other(err.to_string()))
        })?;
        Ok(files.keys().cloned().collect())
    }
}

impl ArtifactStore for InMemoryArtifactStore {
    fn read(&self, location: &Utf8Path) -> ArtifactStoreResult<Option<String>> {
        let files = self.files.read().map_err(|err| {
            ArtifactStoreError::storage(location, std::io::Error::other(err.to_string()))
        })?;
        Ok(files.get(location).cloned())
    }

    fn write(&self, location: &Utf8Path, contents: &str) -> ArtifactStoreResult<()> {
        let mut files = self.files.write().map_err(|err| {
            ArtifactStoreError::storage(location, std::io::Error::other(err.to_string()))
        })?;
        files.insert(location.to_owned(), contents.to_owned());
        Ok(())
    }

    fn copy(&self, from: &Utf8Path, to: &Utf8Path) -> ArtifactStoreResult<()> {
        let mut files = self.files.write().map_err(|err| {
            ArtifactStoreError::storage(from, std::io::Error::other(err.to_string()))
        })?;
        let contents = files
            .get(from)
            .cloned()
            .ok_or_else(|| ArtifactStoreError::NotFound(from.to_owned()))?;
        files.insert(to.to_owned(), contents);
        Ok(())
    }

    fn exists(&self, location: &Utf8Path) -> ArtifactStoreResult<bool> {
        let files = self.files.read().map_err(|err| {
            ArtifactStoreError::storage(location, std::io::Error::other(err.to_string()))
        })?;
        Ok(files.contains_key(location))
    }
}
