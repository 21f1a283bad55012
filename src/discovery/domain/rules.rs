//! Inclusion and exclusion rules shared by source scanners.

use crate::config::ScannerConfig;
use camino::Utf8Path;

/// Infrastructure file names that are never treated as adapters.
pub const CORE_INFRASTRUCTURE_FILES: [&str; 9] = [
    "__init__.py",
    "adapter_registry.py",
    "registry.py",
    "base_adapter.py",
    "adapter_base.py",
    "adapter_factory.py",
    "adapter_loader.py",
    "setup.py",
    "conftest.py",
];

/// Compiled scanner rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanRules {
    extension: String,
    exclusion_substrings: Vec<String>,
    excluded_files: Vec<String>,
}

impl ScanRules {
    /// Builds rules from scanner configuration.
    #[must_use]
    pub fn new(config: &ScannerConfig) -> Self {
        Self {
            extension: config.extension().to_owned(),
            exclusion_substrings: config.exclusion_substrings.clone(),
            excluded_files: config.excluded_files.clone(),
        }
    }

    /// Additionally excludes `file_name`, such as a generated artifact.
    #[must_use]
    pub fn excluding_file(mut self, file_name: impl Into<String>) -> Self {
        self.excluded_files.push(file_name.into());
        self
    }

    /// Returns the source extension without a leading dot.
    #[must_use]
    pub fn extension(&self) -> &str {
        &self.extension
    }

    /// Reports whether a file named `file_name` is a candidate.
    #[must_use]
    pub fn is_candidate_file(&self, file_name: &str) -> bool {
        Utf8Path::new(file_name).extension() == Some(self.extension.as_str())
            && !CORE_INFRASTRUCTURE_FILES.contains(&file_name)
            && !self.excluded_files.iter().any(|excluded| excluded == file_name)
            && !self.matches_exclusion(file_name)
    }

    /// Reports whether a directory named `dir_name` must not be descended
    /// into.
    #[must_use]
    pub fn is_pruned_dir(&self, dir_name: &str) -> bool {
        self.matches_exclusion(dir_name)
    }

    /// Reports whether any directory component of `relative` is pruned.
    #[must_use]
    pub fn is_within_pruned_dir(&self, relative: &Utf8Path) -> bool {
        relative
            .parent()
            .into_iter()
            .flat_map(|parent| parent.components())
            .any(|component| self.is_pruned_dir(component.as_str()))
    }

    /// Derives the dotted import path of `relative` under `prefix`.
    ///
    /// Returns `None` when the path has no file stem.
    #[must_use]
    pub fn module_path(prefix: &str, relative: &Utf8Path) -> Option<String> {
        let stem = relative.file_stem()?;
        let mut segments: Vec<&str> = Vec::new();
        segments.extend(prefix.split('.').filter(|segment| !segment.is_empty()));
        if let Some(parent) = relative.parent() {
            segments.extend(parent.components().map(|component| component.as_str()));
        }
        segments.push(stem);
        Some(segments.join("."))
    }

    fn matches_exclusion(&self, name: &str) -> bool {
        self.exclusion_substrings
            .iter()
            .any(|pattern| !pattern.is_empty() && name.contains(pattern.as_str()))
    }
}
