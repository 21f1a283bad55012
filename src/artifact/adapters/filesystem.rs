//! Capability-scoped filesystem artifact store.

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;

use crate::artifact::ports::{ArtifactStore, ArtifactStoreError, ArtifactStoreResult};

/// Artifact store confined to one directory.
///
/// All locations are resolved inside the directory handle, so a location
/// containing `..` or an absolute path is rejected by the operating system
/// layer rather than escaping the root.
#[derive(Debug)]
pub struct FsArtifactStore {
    root: Dir,
}

impl FsArtifactStore {
    /// Opens (creating if needed) the artifact directory at `root`.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactStoreError::Storage`] when the directory cannot be
    /// created or opened.
    pub fn open(root: &Utf8Path) -> ArtifactStoreResult<Self> {
        Dir::create_ambient_dir_all(root, ambient_authority())
            .map_err(|err| ArtifactStoreError::storage(root, err))?;
        let dir = Dir::open_ambient_dir(root, ambient_authority())
            .map_err(|err| ArtifactStoreError::storage(root, err))?;
        Ok(Self { root: dir })
    }

    fn ensure_parent(&self, location: &Utf8Path) -> ArtifactStoreResult<()> {
        match location.parent() {
            Some(parent) if !parent.as_str().is_empty() => self
                .root
                .create_dir_all(parent)
                .map_err(|err| ArtifactStoreError::storage(location, err)),
            _ => Ok(()),
        }
    }
}

impl ArtifactStore for FsArtifactStore {
    fn read(&self, location: &Utf8Path) -> ArtifactStoreResult<Option<String>> {
        match self.root.read_to_string(location) {
            Ok(contents) => Ok(Some(contents)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(ArtifactStoreError::storage(location, err)),
        }
    }

    fn write(&self, location: &Utf8Path, contents: &str) -> ArtifactStoreResult<()> {
        self.ensure_parent(location)?;
        self.root
            .write(location, contents)
            .map_err(|err| ArtifactStoreError::storage(location, err))
    }

    fn copy(&self, from: &Utf8Path, to: &Utf8Path) -> ArtifactStoreResult<()> {
        if !self.exists(from)? {
            return Err(ArtifactStoreError::NotFound(from.to_owned()));
        }
        self.ensure_parent(to)?;
        self.root
            .copy(from, &self.root, to)
            .map(|_bytes| ())
            .map_err(|err| ArtifactStoreError::storage(from, err))
    }

    fn exists(&self, location: &Utf8Path) -> ArtifactStoreResult<bool> {
        self.root
            .try_exists(location)
            .map_err(|err| ArtifactStoreError::storage(location, err))
    }
}
