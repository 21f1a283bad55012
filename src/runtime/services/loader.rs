//! Loading a registry from a stored artifact.

use super::AdapterRegistry;
use crate::artifact::{
    domain::{ArtifactError, ArtifactManifest},
    ports::{ArtifactStore, ArtifactStoreError},
};
use crate::runtime::ports::ClassResolver;
use camino::{Utf8Path, Utf8PathBuf};
use thiserror::Error;

/// Errors returned while loading a registry.
#[derive(Debug, Clone, Error)]
pub enum LoadError {
    /// No artifact exists at the location.
    #[error("no generated artifact at {0}")]
    Missing(Utf8PathBuf),

    /// The artifact could not be read.
    #[error(transparent)]
    Store(#[from] ArtifactStoreError),

    /// The artifact header is invalid.
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}

/// Reads the artifact at `location` and initialises a registry from it.
///
/// # Errors
///
/// Returns [`LoadError`] when the artifact is missing, unreadable or its
/// manifest header is invalid. Failures of individual adapters are recorded
/// in the registry instead.
pub fn load_registry<S, R>(
    store: &S,
    location: &Utf8Path,
    resolver: &R,
) -> Result<AdapterRegistry, LoadError>
where
    S: ArtifactStore + ?Sized,
    R: ClassResolver + ?Sized,
{
    let text = store
        .read(location)?
        .ok_or_else(|| LoadError::Missing(location.to_owned()))?;
    let manifest = ArtifactManifest::parse(&text)?;
    Ok(AdapterRegistry::initialize(&manifest, resolver))
}
