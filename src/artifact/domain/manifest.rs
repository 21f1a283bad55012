//! Machine-readable manifest carried in the header of a generated registry.
//!
//! The header is the only part of the artifact the runtime reads back:
//!
//! ```text
//! # registrar-artifact: v1
//! # generated-at: 2026-01-01T00:00:00+00:00
//! # content-digest: sha256:<hex>
//! # adapter: {"name":"foo","module":"adapters.foo_adapter","class":"FooAdapter","category":"ai-model"}
//! ```

use super::{AdapterCategory, AdapterName, ArtifactError};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeSet;
use std::fmt;

/// Current artifact format version.
pub const ARTIFACT_VERSION: &str = "v1";

const VERSION_PREFIX: &str = "# registrar-artifact: ";
const GENERATED_AT_PREFIX: &str = "# generated-at: ";
const DIGEST_PREFIX: &str = "# content-digest: sha256:";
const ENTRY_PREFIX: &str = "# adapter: ";

/// Import location of an adapter class: `module:Class`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ClassReference {
    module: String,
    class: String,
}

impl ClassReference {
    /// Creates a class reference from a dotted module path and class name.
    #[must_use]
    pub fn new(module: impl Into<String>, class: impl Into<String>) -> Self {
        Self {
            module: module.into(),
            class: class.into(),
        }
    }

    /// Returns the dotted module path.
    #[must_use]
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Returns the class name.
    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }
}

impl fmt::Display for ClassReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.module, self.class)
    }
}

/// One adapter binding recorded in the artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ManifestEntry {
    name: AdapterName,
    module: String,
    class: String,
    category: AdapterCategory,
}

impl ManifestEntry {
    /// Creates a manifest entry.
    #[must_use]
    pub fn new(
        name: AdapterName,
        reference: ClassReference,
        category: AdapterCategory,
    ) -> Self {
        Self {
            name,
            module: reference.module,
            class: reference.class,
            category,
        }
    }

    /// Returns the registration name.
    #[must_use]
    pub const fn name(&self) -> &AdapterName {
        &self.name
    }

    /// Returns the dotted module path.
    #[must_use]
    pub fn module(&self) -> &str {
        &self.module
    }

    /// Returns the class name.
    #[must_use]
    pub fn class(&self) -> &str {
        &self.class
    }

    /// Returns the class reference.
    #[must_use]
    pub fn reference(&self) -> ClassReference {
        ClassReference::new(self.module.clone(), self.class.clone())
    }

    /// Returns the category label.
    #[must_use]
    pub const fn category(&self) -> AdapterCategory {
        self.category
    }
}

/// Name-sorted, duplicate-free set of adapter bindings plus generation time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactManifest {
    generated_at: DateTime<Utc>,
    entries: Vec<ManifestEntry>,
}

impl ArtifactManifest {
    /// Creates a manifest, sorting entries by name.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError::DuplicateEntry`] when two entries share a
    /// name.
    pub fn new(
        generated_at: DateTime<Utc>,
        entries: impl IntoIterator<Item = ManifestEntry>,
    ) -> Result<Self, ArtifactError> {
        let mut sorted: Vec<ManifestEntry> = entries.into_iter().collect();
        sorted.sort_by(|left, right| left.name.cmp(&right.name));

        let mut seen = BTreeSet::new();
        for entry in &sorted {
            if !seen.insert(entry.name.as_str()) {
                return Err(ArtifactError::DuplicateEntry(entry.name.clone()));
            }
        }

        Ok(Self {
            generated_at,
            entries: sorted,
        })
    }

    /// Returns the generation timestamp.
    #[must_use]
    pub const fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// Returns the entries sorted by name.
    #[must_use]
    pub fn entries(&self) -> &[ManifestEntry] {
        &self.entries
    }

    /// Returns the entry registered under `name`.
    #[must_use]
    pub fn entry(&self, name: &str) -> Option<&ManifestEntry> {
        self.entries.iter().find(|entry| entry.name.as_str() == name)
    }

    /// Returns the SHA-256 digest of the canonical entry list as lowercase
    /// hex. The timestamp is excluded so identical inputs hash identically.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError::Serialize`] when the entries cannot be
    /// serialised.
    pub fn digest(&self) -> Result<String, ArtifactError> {
        let canonical = serde_json::to_string(&self.entries)
            .map_err(|err| ArtifactError::Serialize(err.to_string()))?;
        Ok(format!("{:x}", Sha256::digest(canonical.as_bytes())))
    }

    /// Renders the header block, one line per element, each ending in `\n`.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError::Serialize`] when an entry cannot be
    /// serialised.
    pub fn header(&self) -> Result<String, ArtifactError> {
        let mut header = String::new();
        header.push_str(VERSION_PREFIX);
        header.push_str(ARTIFACT_VERSION);
        header.push('\n');
        header.push_str(GENERATED_AT_PREFIX);
        header.push_str(&self.generated_at.to_rfc3339());
        header.push('\n');
        header.push_str(DIGEST_PREFIX);
        header.push_str(&self.digest()?);
        header.push('\n');
        for entry in &self.entries {
            let line = serde_json::to_string(entry)
                .map_err(|err| ArtifactError::Serialize(err.to_string()))?;
            header.push_str(ENTRY_PREFIX);
            header.push_str(&line);
            header.push('\n');
        }
        Ok(header)
    }

    /// Parses the manifest from the header of a generated artifact.
    ///
    /// Lines outside the header prefixes are ignored, so the full artifact
    /// text can be passed as-is.
    ///
    /// # Errors
    ///
    /// Returns [`ArtifactError`] when a header line is missing or malformed,
    /// the version is unsupported, entries repeat a name, or the recorded
    /// digest does not match the entries.
    pub fn parse(text: &str) -> Result<Self, ArtifactError> {
        let mut version = None;
        let mut generated_at = None;
        let mut recorded_digest = None;
        let mut entries = Vec::new();

        for (index, line) in text.lines().enumerate() {
            let line_number = index + 1;
            if let Some(value) = line.strip_prefix(VERSION_PREFIX) {
                version = Some(value.trim().to_owned());
            } else if let Some(value) = line.strip_prefix(GENERATED_AT_PREFIX) {
                let timestamp = DateTime::parse_from_rfc3339(value.trim()).map_err(|err| {
                    ArtifactError::MalformedHeader {
                        line: line_number,
                        reason: err.to_string(),
                    }
                })?;
                generated_at = Some(timestamp.with_timezone(&Utc));
            } else if let Some(value) = line.strip_prefix(DIGEST_PREFIX) {
                recorded_digest = Some(value.trim().to_owned());
            } else if let Some(value) = line.strip_prefix(ENTRY_PREFIX) {
                let entry: ManifestEntry =
                    serde_json::from_str(value).map_err(|err| ArtifactError::MalformedHeader {
                        line: line_number,
                        reason: err.to_string(),
                    })?;
                entries.push(entry);
            }
        }

        let found_version = version.ok_or(ArtifactError::MissingHeader("registrar-artifact"))?;
        if found_version != ARTIFACT_VERSION {
            return Err(ArtifactError::UnsupportedVersion(found_version));
        }
        let timestamp = generated_at.ok_or(ArtifactError::MissingHeader("generated-at"))?;
        let recorded = recorded_digest.ok_or(ArtifactError::MissingHeader("content-digest"))?;

        let manifest = Self::new(timestamp, entries)?;
        let computed = manifest.digest()?;
        if computed != recorded {
            return Err(ArtifactError::DigestMismatch { recorded, computed });
        }
        Ok(manifest)
    }
}
