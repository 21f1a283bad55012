//! Aggregate result of one discovery pass.

use super::{AdapterDescriptor, DiscoveryFailure, DiscoveryReport, FailureKind};
use crate::artifact::domain::AdapterName;

/// Descriptors and failures collected by one discovery pass.
///
/// Valid descriptors are kept in scan order and their registration names are
/// unique: [`AdapterCatalog::admit`] turns a repeated name into a
/// [`FailureKind::NameCollision`] instead of replacing the earlier file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdapterCatalog {
    adapters: Vec<AdapterDescriptor>,
    rejected: Vec<AdapterDescriptor>,
    failures: Vec<DiscoveryFailure>,
    files_scanned: usize,
}

impl AdapterCatalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a descriptor to the catalog.
    ///
    /// Invalid descriptors are kept for reporting only.
    ///
    /// # Errors
    ///
    /// Returns a [`FailureKind::NameCollision`] failure, without recording
    /// it, when a valid descriptor reuses a name already admitted.
    pub fn admit(&mut self, descriptor: AdapterDescriptor) -> Result<(), DiscoveryFailure> {
        if !descriptor.is_valid() {
            self.rejected.push(descriptor);
            return Ok(());
        }

        if let Some(existing) = self.get(descriptor.registration_name().as_str()) {
            return Err(DiscoveryFailure::new(
                descriptor.source_file(),
                FailureKind::NameCollision {
                    name: descriptor.registration_name().to_string(),
                    existing: existing.source_file().to_owned(),
                },
            ));
        }

        self.adapters.push(descriptor);
        Ok(())
    }

    /// Records a file excluded from the build.
    pub fn record_failure(&mut self, failure: DiscoveryFailure) {
        self.failures.push(failure);
    }

    /// Counts one candidate file as scanned.
    pub const fn record_scanned(&mut self) {
        self.files_scanned += 1;
    }

    /// Returns the valid descriptors in scan order.
    #[must_use]
    pub fn adapters(&self) -> &[AdapterDescriptor] {
        &self.adapters
    }

    /// Returns descriptors of files that did not qualify as adapters.
    #[must_use]
    pub fn rejected(&self) -> &[AdapterDescriptor] {
        &self.rejected
    }

    /// Returns the recorded failures.
    #[must_use]
    pub fn failures(&self) -> &[DiscoveryFailure] {
        &self.failures
    }

    /// Returns the number of candidate files seen.
    #[must_use]
    pub const fn files_scanned(&self) -> usize {
        self.files_scanned
    }

    /// Returns the valid descriptor registered under `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&AdapterDescriptor> {
        self.adapters
            .iter()
            .find(|descriptor| descriptor.registration_name().as_str() == name)
    }

    /// Returns the registration names of valid descriptors in scan order.
    pub fn names(&self) -> impl Iterator<Item = &AdapterName> {
        self.adapters.iter().map(AdapterDescriptor::registration_name)
    }

    /// Summarises the pass.
    #[must_use]
    pub fn report(&self) -> DiscoveryReport {
        DiscoveryReport::from_catalog(self)
    }
}
