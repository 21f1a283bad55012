//! Non-destructive artifact regeneration.

use super::RegistryBuilder;
use crate::artifact::{
    domain::{ArtifactError, ArtifactManifest},
    ports::{ArtifactStore, ArtifactStoreError},
};
use crate::codegen::domain::backup_location;
use crate::discovery::domain::AdapterCatalog;
use camino::{Utf8Path, Utf8PathBuf};
use chrono::{DateTime, Utc};
use mockable::Clock;
use std::sync::Arc;
use thiserror::Error;
use tracing::info;

/// Distinct backup names tried for one regeneration before giving up.
const MAX_BACKUP_ATTEMPTS: usize = 1000;

/// Errors returned while regenerating an artifact.
#[derive(Debug, Clone, Error)]
pub enum CodegenError {
    /// The artifact could not be built.
    #[error(transparent)]
    Artifact(#[from] ArtifactError),

    /// The store failed outside the backup step.
    #[error(transparent)]
    Store(#[from] ArtifactStoreError),

    /// The previous artifact could not be backed up; it was left untouched.
    #[error("failed to back up {location} to {backup}: {source}")]
    Backup {
        /// Artifact being replaced.
        location: Utf8PathBuf,
        /// Intended backup location.
        backup: Utf8PathBuf,
        /// Underlying store failure.
        source: ArtifactStoreError,
    },

    /// Every candidate backup name is already taken.
    #[error("no free backup name for {0}")]
    BackupNamesExhausted(Utf8PathBuf),
}

/// Result of writing an artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegenerationOutcome {
    location: Utf8PathBuf,
    backup: Option<Utf8PathBuf>,
    manifest: ArtifactManifest,
}

impl RegenerationOutcome {
    /// Returns where the artifact was written.
    #[must_use]
    pub fn location(&self) -> &Utf8Path {
        &self.location
    }

    /// Returns where the previous artifact was copied, if one existed.
    #[must_use]
    pub fn backup(&self) -> Option<&Utf8Path> {
        self.backup.as_deref()
    }

    /// Returns the manifest of the written artifact.
    #[must_use]
    pub const fn manifest(&self) -> &ArtifactManifest {
        &self.manifest
    }
}

/// Builds artifacts and writes them, backing up whatever they replace.
#[derive(Clone)]
pub struct RegenerationService<S, C>
where
    S: ArtifactStore,
    C: Clock + Send + Sync,
{
    store: Arc<S>,
    clock: Arc<C>,
    builder: RegistryBuilder,
}

impl<S, C> RegenerationService<S, C>
where
    S: ArtifactStore,
    C: Clock + Send + Sync,
{
    /// Creates a regeneration service.
    #[must_use]
    pub const fn new(store: Arc<S>, clock: Arc<C>) -> Self {
        Self {
            store,
            clock,
            builder: RegistryBuilder::new(),
        }
    }

    /// Builds the artifact for `catalog` and writes it to `location`.
    ///
    /// An existing artifact is first copied to a timestamped sibling; if
    /// that copy fails nothing is written.
    ///
    /// # Errors
    ///
    /// Returns [`CodegenError::Backup`] or
    /// [`CodegenError::BackupNamesExhausted`] when the previous artifact
    /// cannot be preserved, and other [`CodegenError`] variants when building
    /// or writing fails.
    pub fn regenerate(
        &self,
        catalog: &AdapterCatalog,
        location: &Utf8Path,
    ) -> Result<RegenerationOutcome, CodegenError> {
        let generated_at = self.clock.utc();
        let artifact = self.builder.build(catalog, generated_at)?;

        let backup = if self.store.exists(location)? {
            let target = self.free_backup_location(location, generated_at)?;
            self.store
                .copy(location, &target)
                .map_err(|source| CodegenError::Backup {
                    location: location.to_owned(),
                    backup: target.clone(),
                    source,
                })?;
            Some(target)
        } else {
            None
        };

        self.store.write(location, artifact.contents())?;
        info!(
            location = %location,
            adapters = artifact.manifest().entries().len(),
            backup = backup.as_deref().map(Utf8Path::as_str),
            "wrote adapter registry"
        );

        Ok(RegenerationOutcome {
            location: location.to_owned(),
            backup,
            manifest: artifact.manifest().clone(),
        })
    }

    fn free_backup_location(
        &self,
        location: &Utf8Path,
        taken_at: DateTime<Utc>,
    ) -> Result<Utf8PathBuf, CodegenError> {
        for attempt in 0..MAX_BACKUP_ATTEMPTS {
            let candidate = backup_location(location, taken_at, attempt);
            if !self.store.exists(&candidate)? {
                return Ok(candidate);
            }
        }
        Err(CodegenError::BackupNamesExhausted(location.to_owned()))
    }
}
