//! Directory-walking source scanner.

use crate::discovery::{
    domain::{CandidateFile, DiscoveryFailure, ScanRules},
    ports::{CandidateStream, DiscoveryError, SourceScanner},
};
use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use std::io;
use tracing::warn;
use walkdir::{DirEntry, WalkDir};

/// Scans a directory tree for candidate adapter files.
///
/// Entries are visited depth-first and sorted by file name at every level,
/// so scan order is stable across runs and platforms. Excluded directories
/// are pruned before descent. Sources are read through a directory handle
/// on the root, so a candidate can never resolve outside it.
#[derive(Debug, Clone)]
pub struct FsSourceScanner {
    root: Utf8PathBuf,
    rules: ScanRules,
    module_prefix: String,
}

impl FsSourceScanner {
    /// Creates a scanner rooted at `root`.
    #[must_use]
    pub fn new(
        root: impl Into<Utf8PathBuf>,
        rules: ScanRules,
        module_prefix: impl Into<String>,
    ) -> Self {
        Self {
            root: root.into(),
            rules,
            module_prefix: module_prefix.into(),
        }
    }

    /// Returns the scan root.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    fn open_root(&self) -> io::Result<Dir> {
        Dir::open_ambient_dir(&self.root, ambient_authority())
    }

    fn keep_entry(&self, entry: &DirEntry) -> bool {
        if entry.depth() == 0 || !entry.file_type().is_dir() {
            return true;
        }
        entry
            .file_name()
            .to_str()
            .is_none_or(|name| !self.rules.is_pruned_dir(name))
    }

    fn candidate_from(
        &self,
        item: walkdir::Result<DirEntry>,
    ) -> Option<Result<CandidateFile, DiscoveryFailure>> {
        let entry = match item {
            Ok(entry) => entry,
            Err(err) => {
                let path = err.path().map_or_else(
                    || self.root.clone(),
                    |path| Utf8PathBuf::from(path.to_string_lossy().as_ref()),
                );
                warn!(path = %path, error = %err, "skipping unreadable entry");
                return Some(Err(DiscoveryFailure::filesystem(path, err.to_string())));
            }
        };

        if !entry.file_type().is_file() {
            return None;
        }

        let path = match Utf8PathBuf::from_path_buf(entry.into_path()) {
            Ok(path) => path,
            Err(raw) => {
                let lossy = Utf8PathBuf::from(raw.to_string_lossy().as_ref());
                warn!(path = %lossy, "skipping file with non-UTF-8 path");
                return Some(Err(DiscoveryFailure::filesystem(lossy, "path is not valid UTF-8")));
            }
        };

        let file_name = path.file_name()?;
        if !self.rules.is_candidate_file(file_name) {
            return None;
        }

        let relative = path.strip_prefix(&self.root).unwrap_or(path.as_path()).to_owned();
        let Some(module_path) = ScanRules::module_path(&self.module_prefix, &relative) else {
            return Some(Err(DiscoveryFailure::filesystem(relative, "path has no file stem")));
        };
        Some(Ok(CandidateFile::new(path, relative, module_path)))
    }
}

impl SourceScanner for FsSourceScanner {
    fn scan(&self) -> Result<CandidateStream<'_>, DiscoveryError> {
        self.open_root()
            .map_err(|err| DiscoveryError::root_unreadable(self.root.clone(), err))?;

        let entries = WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_entry(|entry| self.keep_entry(entry))
            .filter_map(|item| self.candidate_from(item));
        Ok(Box::new(entries))
    }

    fn read_source(&self, candidate: &CandidateFile) -> Result<String, DiscoveryError> {
        self.open_root()
            .and_then(|root| root.read_to_string(candidate.relative_path()))
            .map_err(|err| DiscoveryError::read(candidate.relative_path(), err))
    }
}
