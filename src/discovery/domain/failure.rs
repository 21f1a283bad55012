//! Per-file discovery failures.
//!
//! Failures are recorded outcomes, not errors: each one excludes a single
//! file and the pass continues.

use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;
use std::fmt;

/// Why a file was excluded from the build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum FailureKind {
    /// The file or directory could not be read.
    Filesystem {
        /// Underlying failure.
        message: String,
    },
    /// The file is not syntactically valid.
    Parse {
        /// Parser diagnostic.
        message: String,
    },
    /// No valid registration name can be derived from the path.
    InvalidName {
        /// Validation failure.
        message: String,
    },
    /// Another file already registered the same name.
    NameCollision {
        /// The contested name.
        name: String,
        /// Source file holding the name.
        existing: Utf8PathBuf,
    },
}

impl FailureKind {
    /// Returns a stable label for grouping failures.
    #[must_use]
    pub const fn label(&self) -> &'static str {
        match self {
            Self::Filesystem { .. } => "filesystem",
            Self::Parse { .. } => "parse",
            Self::InvalidName { .. } => "invalid_name",
            Self::NameCollision { .. } => "name_collision",
        }
    }
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Filesystem { message } => write!(f, "unreadable: {message}"),
            Self::Parse { message } => write!(f, "unparseable: {message}"),
            Self::InvalidName { message } => write!(f, "invalid registration name: {message}"),
            Self::NameCollision { name, existing } => {
                write!(f, "name '{name}' already registered by {existing}")
            }
        }
    }
}

/// A file excluded from the build, with the reason.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveryFailure {
    path: Utf8PathBuf,
    #[serde(flatten)]
    kind: FailureKind,
}

impl DiscoveryFailure {
    /// Creates a failure record for `path`.
    #[must_use]
    pub fn new(path: impl Into<Utf8PathBuf>, kind: FailureKind) -> Self {
        Self {
            path: path.into(),
            kind,
        }
    }

    /// Creates a filesystem failure.
    #[must_use]
    pub fn filesystem(path: impl Into<Utf8PathBuf>, message: impl Into<String>) -> Self {
        Self::new(
            path,
            FailureKind::Filesystem {
                message: message.into(),
            },
        )
    }

    /// Returns the affected path.
    #[must_use]
    pub fn path(&self) -> &Utf8Path {
        &self.path
    }

    /// Returns the failure kind.
    #[must_use]
    pub const fn kind(&self) -> &FailureKind {
        &self.kind
    }
}

impl fmt::Display for DiscoveryFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.path, self.kind)
    }
}
