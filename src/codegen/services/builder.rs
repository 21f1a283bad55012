//! Registry builder: descriptors in, rendered artifact out.

use super::render::render_registry;
use crate::artifact::domain::{ArtifactError, ArtifactManifest, ManifestEntry};
use crate::codegen::domain::GeneratedArtifact;
use crate::discovery::domain::{AdapterCatalog, AdapterDescriptor};
use chrono::{DateTime, Utc};

/// Aggregates valid descriptors into a generated registry module.
#[derive(Debug, Clone, Copy, Default)]
pub struct RegistryBuilder;

impl RegistryBuilder {
    /// Creates a builder.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Builds the artifact for every adapter in `catalog`.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError`] when rendering fails.
    pub fn build(
        &self,
        catalog: &AdapterCatalog,
        generated_at: DateTime<Utc>,
    ) -> Result<GeneratedArtifact, ArtifactError> {
        self.build_from(catalog.adapters(), generated_at)
    }

    /// Builds the artifact from `descriptors`, skipping invalid ones.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError::DuplicateEntry`] when two valid descriptors
    /// share a registration name, or another [`ArtifactError`] when
    /// rendering fails.
    pub fn build_from<'a>(
        &self,
        descriptors: impl IntoIterator<Item = &'a AdapterDescriptor>,
        generated_at: DateTime<Utc>,
    ) -> Result<GeneratedArtifact, ArtifactError> {
        let entries = descriptors.into_iter().filter_map(|descriptor| {
            descriptor.class_reference().map(|reference| {
                ManifestEntry::new(
                    descriptor.registration_name().clone(),
                    reference,
                    descriptor.category(),
                )
            })
        });
        let manifest = ArtifactManifest::new(generated_at, entries)?;
        let contents = render_registry(&manifest)?;
        Ok(GeneratedArtifact::new(manifest, contents))
    }
}
