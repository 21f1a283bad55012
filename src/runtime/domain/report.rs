//! Registry counts and the serialisable registry report.

use super::{EntryStatus, RegistryEntry};
use crate::artifact::domain::AdapterCategory;
use serde::Serialize;
use std::collections::BTreeMap;

/// Totals answered by the registry facade.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RegistryCounts {
    /// Names declared by the artifact.
    pub total: usize,
    /// Entries holding a constructed adapter.
    pub registered: usize,
    /// Entries holding the minimal stand-in.
    pub failed: usize,
}

/// Summary of an initialised registry.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RegistryReport {
    /// Names declared by the artifact.
    pub total: usize,
    /// Entries holding a constructed adapter.
    pub registered: usize,
    /// Entries holding the minimal stand-in.
    pub failed: usize,
    /// Failed names in sorted order.
    pub failed_names: Vec<String>,
    /// Entries per category label.
    pub categories: BTreeMap<AdapterCategory, usize>,
    /// Registered entries as a percentage of the total, `100.0` when empty.
    pub registration_rate: f64,
}

impl RegistryReport {
    /// Builds the report for `entries`.
    #[must_use]
    pub fn from_entries<'a>(entries: impl IntoIterator<Item = &'a RegistryEntry>) -> Self {
        let mut counts = RegistryCounts::default();
        let mut failed_names = Vec::new();
        let mut categories = BTreeMap::new();

        for entry in entries {
            counts.total += 1;
            *categories.entry(entry.category()).or_insert(0) += 1;
            match entry.status() {
                EntryStatus::Registered => counts.registered += 1,
                EntryStatus::Failed => {
                    counts.failed += 1;
                    failed_names.push(entry.name().as_str().to_owned());
                }
            }
        }
        failed_names.sort();

        Self {
            total: counts.total,
            registered: counts.registered,
            failed: counts.failed,
            failed_names,
            categories,
            registration_rate: percentage(counts.registered, counts.total),
        }
    }

    /// Returns the counts carried by the report.
    #[must_use]
    pub const fn counts(&self) -> RegistryCounts {
        RegistryCounts {
            total: self.total,
            registered: self.registered,
            failed: self.failed,
        }
    }
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "registry sizes are far below the f64 mantissa and the rate is display-only"
)]
fn percentage(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        return 100.0;
    }
    part as f64 * 100.0 / whole as f64
}
