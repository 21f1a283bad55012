//! Registry initialisation and the read-only facade.

use super::SafeInstantiator;
use crate::artifact::domain::{ArtifactManifest, ManifestEntry};
use crate::runtime::adapters::MinimalAdapter;
use crate::runtime::domain::{
    EntryStatus, FailureRecord, FailureStage, RegistryCounts, RegistryEntry, RegistryReport,
};
use crate::runtime::ports::{Adapter, ClassResolver};
use std::collections::BTreeMap;
use std::sync::Arc;
use tracing::{info, warn};

/// Live map from registration name to adapter instance.
///
/// Every name declared by the manifest has an entry. Entries whose class
/// could not be imported or constructed hold a [`MinimalAdapter`]. The map is
/// built once and never mutated, so shared references may be read from any
/// thread.
#[derive(Debug, Clone, Default)]
pub struct AdapterRegistry {
    entries: BTreeMap<String, RegistryEntry>,
}

impl AdapterRegistry {
    /// Resolves and constructs every adapter declared by `manifest`.
    ///
    /// Per-adapter failures are recorded on the entry and never returned.
    #[must_use]
    pub fn initialize<R>(manifest: &ArtifactManifest, resolver: &R) -> Self
    where
        R: ClassResolver + ?Sized,
    {
        let instantiator = SafeInstantiator::new();
        let entries: BTreeMap<_, _> = manifest
            .entries()
            .iter()
            .map(|declared| {
                let entry = load_entry(declared, resolver, instantiator);
                (declared.name().as_str().to_owned(), entry)
            })
            .collect();
        let registry = Self { entries };

        let counts = registry.counts();
        info!(
            total = counts.total,
            registered = counts.registered,
            failed = counts.failed,
            "adapter registry initialised"
        );
        registry
    }

    /// Returns the instance registered as `name`.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<Arc<dyn Adapter>> {
        self.entries.get(name).map(RegistryEntry::instance)
    }

    /// Returns every registered name in sorted order, failed ones included.
    #[must_use]
    pub fn list(&self) -> Vec<&str> {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Returns the registry totals.
    #[must_use]
    pub fn counts(&self) -> RegistryCounts {
        let failed = self
            .entries
            .values()
            .filter(|entry| entry.status() == EntryStatus::Failed)
            .count();
        RegistryCounts {
            total: self.entries.len(),
            registered: self.entries.len() - failed,
            failed,
        }
    }

    /// Returns the full entry for `name`.
    #[must_use]
    pub fn entry(&self, name: &str) -> Option<&RegistryEntry> {
        self.entries.get(name)
    }

    /// Returns every entry in name order.
    pub fn entries(&self) -> impl Iterator<Item = &RegistryEntry> {
        self.entries.values()
    }

    /// Returns the names of entries holding the minimal stand-in.
    #[must_use]
    pub fn failed(&self) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|(_, entry)| entry.status() == EntryStatus::Failed)
            .map(|(name, _)| name.as_str())
            .collect()
    }

    /// Summarises the registry.
    #[must_use]
    pub fn report(&self) -> RegistryReport {
        RegistryReport::from_entries(self.entries.values())
    }
}

fn load_entry<R>(
    declared: &ManifestEntry,
    resolver: &R,
    instantiator: SafeInstantiator,
) -> RegistryEntry
where
    R: ClassResolver + ?Sized,
{
    let name = declared.name().as_str();
    let stand_in = || -> Arc<dyn Adapter> { Arc::new(MinimalAdapter::new(name)) };

    let class = match resolver.resolve(&declared.reference()) {
        Ok(class) => class,
        Err(error) => {
            warn!(
                adapter = name,
                stage = FailureStage::Import.as_str(),
                module = declared.module(),
                %error,
                "adapter import failed"
            );
            let failure = FailureRecord::new(FailureStage::Import, error.to_string());
            return RegistryEntry::failed(declared, stand_in(), failure);
        }
    };

    instantiator.instantiate(name, class.as_ref()).map_or_else(
        |exhausted| {
            let failure = FailureRecord::new(FailureStage::Construction, exhausted.to_string());
            RegistryEntry::failed(declared, stand_in(), failure)
        },
        |built| RegistryEntry::registered(declared, built.instance(), built.strategy()),
    )
}

/// Returns the instance registered as `name` in `registry`.
#[must_use]
pub fn get_adapter(registry: &AdapterRegistry, name: &str) -> Option<Arc<dyn Adapter>> {
    registry.get(name)
}

/// Returns every name registered in `registry`.
#[must_use]
pub fn list_adapters(registry: &AdapterRegistry) -> Vec<&str> {
    registry.list()
}

/// Returns the totals of `registry`.
#[must_use]
pub fn adapter_counts(registry: &AdapterRegistry) -> RegistryCounts {
    registry.counts()
}
