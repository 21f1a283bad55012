//! Candidate source files produced by a scan.

use camino::{Utf8Path, Utf8PathBuf};

/// A discovered source file not yet validated as an adapter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateFile {
    absolute_path: Utf8PathBuf,
    relative_path: Utf8PathBuf,
    module_path: String,
}

impl CandidateFile {
    /// Creates a candidate from its location and dotted import path.
    #[must_use]
    pub fn new(
        absolute_path: impl Into<Utf8PathBuf>,
        relative_path: impl Into<Utf8PathBuf>,
        module_path: impl Into<String>,
    ) -> Self {
        Self {
            absolute_path: absolute_path.into(),
            relative_path: relative_path.into(),
            module_path: module_path.into(),
        }
    }

    /// Returns the path as seen by the filesystem.
    #[must_use]
    pub fn absolute_path(&self) -> &Utf8Path {
        &self.absolute_path
    }

    /// Returns the path relative to the scan root.
    #[must_use]
    pub fn relative_path(&self) -> &Utf8Path {
        &self.relative_path
    }

    /// Returns the dotted module path used to import the file.
    #[must_use]
    pub fn module_path(&self) -> &str {
        &self.module_path
    }
}
