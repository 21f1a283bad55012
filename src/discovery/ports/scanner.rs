//! Port for enumerating and reading candidate source files.

use crate::discovery::domain::{CandidateFile, DiscoveryFailure};
use camino::Utf8PathBuf;
use std::sync::Arc;
use thiserror::Error;

/// Lazy, single-pass sequence of candidate files.
///
/// Entries that cannot be read are yielded as failures so the consumer can
/// record them and continue.
pub type CandidateStream<'a> = Box<dyn Iterator<Item = Result<CandidateFile, DiscoveryFailure>> + 'a>;

/// Source of candidate adapter files.
pub trait SourceScanner: Send + Sync {
    /// Starts a scan of the adapters root.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::RootUnreadable`] when the root itself cannot
    /// be read. Failures below the root are yielded by the stream instead.
    fn scan(&self) -> Result<CandidateStream<'_>, DiscoveryError>;

    /// Reads the text of a candidate yielded by [`SourceScanner::scan`].
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::Read`] when the file cannot be read as UTF-8
    /// text.
    fn read_source(&self, candidate: &CandidateFile) -> Result<String, DiscoveryError>;
}

/// Errors returned by source scanners.
#[derive(Debug, Clone, Error)]
pub enum DiscoveryError {
    /// The adapters root cannot be read; the pass cannot start.
    #[error("adapters root {root} is unreadable: {source}")]
    RootUnreadable {
        /// Configured root.
        root: Utf8PathBuf,
        /// Underlying failure.
        source: Arc<dyn std::error::Error + Send + Sync>,
    },

    /// One file could not be read.
    #[error("failed to read {path}: {source}")]
    Read {
        /// File being read.
        path: Utf8PathBuf,
        /// Underlying failure.
        source: Arc<dyn std::error::Error + Send + Sync>,
    },
}

impl DiscoveryError {
    /// Wraps a failure to open the adapters root.
    pub fn root_unreadable(
        root: impl Into<Utf8PathBuf>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::RootUnreadable {
            root: root.into(),
            source: Arc::new(err),
        }
    }

    /// Wraps a failure to read one file.
    pub fn read(
        path: impl Into<Utf8PathBuf>,
        err: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::Read {
            path: path.into(),
            source: Arc::new(err),
        }
    }
}
