//! Per-file adapter descriptors.

use super::{CandidateFile, Classification, ClassificationSignals};
use crate::artifact::domain::{AdapterCategory, AdapterName, ClassReference};
use camino::{Utf8Path, Utf8PathBuf};
use serde::Serialize;

/// Static-analysis result describing whether and how a file qualifies as an
/// adapter.
///
/// A descriptor carries a main class exactly when it is valid. Descriptors
/// are rebuilt on every scan and never patched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdapterDescriptor {
    registration_name: AdapterName,
    module_path: String,
    main_class: Option<String>,
    category: AdapterCategory,
    source_file: Utf8PathBuf,
    signals: ClassificationSignals,
}

impl AdapterDescriptor {
    /// Describes `candidate` using the classifier verdict.
    #[must_use]
    pub fn new(
        registration_name: AdapterName,
        candidate: &CandidateFile,
        classification: &Classification,
        category: AdapterCategory,
    ) -> Self {
        Self {
            registration_name,
            module_path: candidate.module_path().to_owned(),
            main_class: classification.main_class().map(str::to_owned),
            category,
            source_file: candidate.relative_path().to_owned(),
            signals: classification.signals(),
        }
    }

    /// Returns the registration name.
    #[must_use]
    pub const fn registration_name(&self) -> &AdapterName {
        &self.registration_name
    }

    /// Returns the dotted module path.
    #[must_use]
    pub fn module_path(&self) -> &str {
        &self.module_path
    }

    /// Returns the main implementation class, present only when valid.
    #[must_use]
    pub fn main_class(&self) -> Option<&str> {
        self.main_class.as_deref()
    }

    /// Returns the category label.
    #[must_use]
    pub const fn category(&self) -> AdapterCategory {
        self.category
    }

    /// Reports whether the file qualifies as an adapter.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.main_class.is_some()
    }

    /// Returns the scan-relative source path.
    #[must_use]
    pub fn source_file(&self) -> &Utf8Path {
        &self.source_file
    }

    /// Returns the heuristic signals recorded for the file.
    #[must_use]
    pub const fn signals(&self) -> ClassificationSignals {
        self.signals
    }

    /// Returns the import location of the main class of a valid adapter.
    #[must_use]
    pub fn class_reference(&self) -> Option<ClassReference> {
        self.main_class
            .as_ref()
            .map(|class| ClassReference::new(self.module_path.clone(), class.clone()))
    }
}
