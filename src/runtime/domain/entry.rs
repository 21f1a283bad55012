//! Registry entries and their failure records.

use super::ConstructionStrategy;
use crate::artifact::domain::{AdapterCategory, AdapterName, ClassReference, ManifestEntry};
use crate::runtime::ports::Adapter;
use serde::Serialize;
use std::fmt;
use std::sync::Arc;

/// Whether an entry holds the real adapter or the minimal stand-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryStatus {
    /// The adapter class was constructed.
    Registered,
    /// The entry holds the minimal stand-in.
    Failed,
}

/// Stage at which an adapter failed to load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureStage {
    /// The class reference could not be resolved.
    Import,
    /// Every construction strategy failed.
    Construction,
}

impl FailureStage {
    /// Returns the stage label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Import => "import",
            Self::Construction => "construction",
        }
    }
}

/// Why an entry fell back to the minimal stand-in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FailureRecord {
    stage: FailureStage,
    message: String,
}

impl FailureRecord {
    /// Creates a failure record.
    #[must_use]
    pub fn new(stage: FailureStage, message: impl Into<String>) -> Self {
        Self {
            stage,
            message: message.into(),
        }
    }

    /// Returns the failing stage.
    #[must_use]
    pub const fn stage(&self) -> FailureStage {
        self.stage
    }

    /// Returns the diagnostic.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

/// One adapter in the live registry. Created once at initialisation.
#[derive(Clone)]
pub struct RegistryEntry {
    name: AdapterName,
    class_reference: ClassReference,
    category: AdapterCategory,
    instance: Arc<dyn Adapter>,
    strategy: Option<ConstructionStrategy>,
    failure: Option<FailureRecord>,
}

impl RegistryEntry {
    /// Creates an entry for a successfully constructed adapter.
    #[must_use]
    pub fn registered(
        entry: &ManifestEntry,
        instance: Arc<dyn Adapter>,
        strategy: ConstructionStrategy,
    ) -> Self {
        Self {
            name: entry.name().clone(),
            class_reference: entry.reference(),
            category: entry.category(),
            instance,
            strategy: Some(strategy),
            failure: None,
        }
    }

    /// Creates an entry holding a stand-in after `failure`.
    #[must_use]
    pub fn failed(entry: &ManifestEntry, instance: Arc<dyn Adapter>, failure: FailureRecord) -> Self {
        Self {
            name: entry.name().clone(),
            class_reference: entry.reference(),
            category: entry.category(),
            instance,
            strategy: None,
            failure: Some(failure),
        }
    }

    /// Returns the registration name.
    #[must_use]
    pub const fn name(&self) -> &AdapterName {
        &self.name
    }

    /// Returns the class reference from the artifact.
    #[must_use]
    pub const fn class_reference(&self) -> &ClassReference {
        &self.class_reference
    }

    /// Returns the category label.
    #[must_use]
    pub const fn category(&self) -> AdapterCategory {
        self.category
    }

    /// Returns the live instance.
    #[must_use]
    pub fn instance(&self) -> Arc<dyn Adapter> {
        Arc::clone(&self.instance)
    }

    /// Returns the entry status.
    #[must_use]
    pub const fn status(&self) -> EntryStatus {
        if self.failure.is_some() {
            EntryStatus::Failed
        } else {
            EntryStatus::Registered
        }
    }

    /// Returns the strategy that constructed the adapter.
    #[must_use]
    pub const fn strategy(&self) -> Option<ConstructionStrategy> {
        self.strategy
    }

    /// Returns the failure that caused the fallback, if any.
    #[must_use]
    pub const fn failure(&self) -> Option<&FailureRecord> {
        self.failure.as_ref()
    }
}

impl fmt::Debug for RegistryEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegistryEntry")
            .field("name", &self.name)
            .field("class_reference", &self.class_reference)
            .field("category", &self.category)
            .field("status", &self.status())
            .field("strategy", &self.strategy)
            .field("failure", &self.failure)
            .finish_non_exhaustive()
    }
}
