//! Serialisable summary of a discovery pass.

use super::{AdapterCatalog, AdapterDescriptor, DiscoveryFailure};
use crate::artifact::domain::AdapterCategory;
use serde::Serialize;
use std::collections::BTreeMap;

/// Counts and details of one discovery pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiscoveryReport {
    /// Candidate files seen by the scanner.
    pub files_scanned: usize,
    /// Files accepted as adapters.
    pub valid: usize,
    /// Parsed files that did not qualify as adapters.
    pub rejected: usize,
    /// Valid adapters per category label.
    pub categories: BTreeMap<AdapterCategory, usize>,
    /// Failures per kind label.
    pub failures_by_kind: BTreeMap<&'static str, usize>,
    /// Valid descriptors in scan order.
    pub adapters: Vec<AdapterDescriptor>,
    /// Rejected descriptors in scan order.
    pub rejected_files: Vec<AdapterDescriptor>,
    /// Excluded files with reasons.
    pub failures: Vec<DiscoveryFailure>,
}

impl DiscoveryReport {
    /// Builds the report for `catalog`.
    #[must_use]
    pub fn from_catalog(catalog: &AdapterCatalog) -> Self {
        let mut categories = BTreeMap::new();
        for descriptor in catalog.adapters() {
            *categories.entry(descriptor.category()).or_insert(0) += 1;
        }

        let mut failures_by_kind = BTreeMap::new();
        for failure in catalog.failures() {
            *failures_by_kind.entry(failure.kind().label()).or_insert(0) += 1;
        }

        Self {
            files_scanned: catalog.files_scanned(),
            valid: catalog.adapters().len(),
            rejected: catalog.rejected().len(),
            categories,
            failures_by_kind,
            adapters: catalog.adapters().to_vec(),
            rejected_files: catalog.rejected().to_vec(),
            failures: catalog.failures().to_vec(),
        }
    }
}
