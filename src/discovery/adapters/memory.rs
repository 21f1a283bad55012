//! In-memory source tree for tests.

use crate::discovery::{
    domain::{CandidateFile, DiscoveryFailure, ScanRules},
    ports::{CandidateStream, DiscoveryError, SourceScanner},
};
use camino::{Utf8Path, Utf8PathBuf};
use std::collections::{BTreeMap, BTreeSet};

/// Fixed set of source files addressed by scan-relative path.
///
/// Files are yielded in the same order a sorted directory walk would visit
/// them, and the same pruning and inclusion rules apply.
#[derive(Debug, Clone)]
pub struct InMemorySourceTree {
    root: Utf8PathBuf,
    rules: ScanRules,
    module_prefix: String,
    files: BTreeMap<Utf8PathBuf, String>,
    unreadable: BTreeSet<Utf8PathBuf>,
}

impl InMemorySourceTree {
    /// Creates an empty tree.
    #[must_use]
    pub fn new(rules: ScanRules, module_prefix: impl Into<String>) -> Self {
        Self {
            root: Utf8PathBuf::from("memory"),
            rules,
            module_prefix: module_prefix.into(),
            files: BTreeMap::new(),
            unreadable: BTreeSet::new(),
        }
    }

    /// Adds a file at the scan-relative `path`.
    #[must_use]
    pub fn with_file(mut self, path: impl Into<Utf8PathBuf>, contents: impl Into<String>) -> Self {
        self.files.insert(path.into(), contents.into());
        self
    }

    /// Adds a file that is listed by the scan but cannot be read.
    #[must_use]
    pub fn with_unreadable(mut self, path: impl Into<Utf8PathBuf>) -> Self {
        let location = path.into();
        self.files.insert(location.clone(), String::new());
        self.unreadable.insert(location);
        self
    }

    fn candidate(&self, relative: &Utf8Path) -> Option<CandidateFile> {
        let file_name = relative.file_name()?;
        if !self.rules.is_candidate_file(file_name) || self.rules.is_within_pruned_dir(relative) {
            return None;
        }
        let module_path = ScanRules::module_path(&self.module_prefix, relative)?;
        Some(CandidateFile::new(self.root.join(relative), relative, module_path))
    }
}

impl SourceScanner for InMemorySourceTree {
    fn scan(&self) -> Result<CandidateStream<'_>, DiscoveryError> {
        Ok(Box::new(
            self.files
                .keys()
                .filter_map(|relative| self.candidate(relative))
                .map(Ok::<_, DiscoveryFailure>),
        ))
    }

    fn read_source(&self, candidate: &CandidateFile) -> Result<String, DiscoveryError> {
        let relative = candidate.relative_path();
        if self.unreadable.contains(relative) {
            return Err(DiscoveryError::read(
                relative,
                std::io::Error::from(std::io::ErrorKind::PermissionDenied),
            ));
        }
        self.files.get(relative).cloned().ok_or_else(|| {
            DiscoveryError::read(relative, std::io::Error::from(std::io::ErrorKind::NotFound))
        })
    }
}
