//! Error types for the generated-artifact contract.

use super::AdapterName;
use thiserror::Error;

/// Errors returned while constructing an [`AdapterName`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AdapterNameError {
    /// The name is empty after trimming.
    #[error("adapter name must not be empty")]
    Empty,

    /// The name contains characters outside `[a-z0-9_]`.
    #[error(
        "adapter name '{0}' contains invalid characters (only lowercase alphanumeric and underscores allowed)"
    )]
    InvalidCharacters(String),

    /// The name exceeds the 100-character limit.
    #[error("adapter name exceeds 100 character limit: {0}")]
    TooLong(String),
}

/// Error returned while parsing a category label.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown adapter category: {0}")]
pub struct ParseCategoryError(pub String);

/// Errors returned while rendering or parsing a generated registry artifact.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ArtifactError {
    /// Two manifest entries share a registration name.
    #[error("duplicate adapter in manifest: {0}")]
    DuplicateEntry(AdapterName),

    /// A required header line is absent.
    #[error("artifact header is missing '{0}'")]
    MissingHeader(&'static str),

    /// The artifact declares a format version this build cannot read.
    #[error("unsupported artifact version '{0}'")]
    UnsupportedVersion(String),

    /// A header line could not be interpreted.
    #[error("malformed artifact header at line {line}: {reason}")]
    MalformedHeader {
        /// One-based line number.
        line: usize,
        /// Parser diagnostic.
        reason: String,
    },

    /// The recorded digest does not match the manifest entries.
    #[error("artifact digest mismatch: header records {recorded}, entries hash to {computed}")]
    DigestMismatch {
        /// Digest found in the header.
        recorded: String,
        /// Digest computed from the parsed entries.
        computed: String,
    },

    /// The manifest could not be serialised for hashing or rendering.
    #[error("failed to serialise manifest: {0}")]
    Serialize(String),

    /// Template rendering failed.
    #[error("failed to render registry module: {0}")]
    Render(String),
}
