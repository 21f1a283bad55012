//! Rendered registry artifact.

use crate::artifact::domain::ArtifactManifest;

/// A rendered registry module together with the manifest it encodes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedArtifact {
    manifest: ArtifactManifest,
    contents: String,
}

impl GeneratedArtifact {
    /// Pairs rendered text with its manifest.
    #[must_use]
    pub const fn new(manifest: ArtifactManifest, contents: String) -> Self {
        Self { manifest, contents }
    }

    /// Returns the manifest recorded in the artifact header.
    #[must_use]
    pub const fn manifest(&self) -> &ArtifactManifest {
        &self.manifest
    }

    /// Returns the full artifact text.
    #[must_use]
    pub fn contents(&self) -> &str {
        &self.contents
    }

    /// Returns the artifact text without the `generated-at` header line.
    ///
    /// Two builds from the same catalog compare equal on this view.
    #[must_use]
    pub fn contents_without_timestamp(&self) -> String {
        self.contents
            .lines()
            .filter(|line| !line.starts_with("# generated-at: "))
            .collect::<Vec<_>>()
            .join("\n")
    }
}
