//! Unit tests for the adapter runtime.

mod registry_tests;

use crate::artifact::domain::{
    AdapterCategory, AdapterName, ArtifactManifest, ClassReference, ManifestEntry,
};
use crate::runtime::adapters::FnAdapterClass;
use crate::runtime::domain::ConstructorArgs;
use crate::runtime::ports::{Adapter, AdapterClass, AdapterError, ConstructionError};
use chrono::{TimeZone, Utc};
use serde_json::{Value, json};
use std::sync::Arc;

/// Adapter that answers with its own label.
struct LabelAdapter(String);

impl Adapter for LabelAdapter {
    fn process(&self, input: Value) -> Result<Value, AdapterError> {
        Ok(json!({ "handled_by": self.0, "input": input }))
    }

    fn capabilities(&self) -> Vec<String> {
        vec![format!("{}_processing", self.0)]
    }
}

/// Class whose constructor accepts exactly `accepted` and needs `required`.
pub(super) fn keyword_class(
    name: &str,
    accepted: &'static [&'static str],
    required: &'static [&'static str],
) -> Arc<dyn AdapterClass> {
    let label = name.to_owned();
    Arc::new(FnAdapterClass::new(name, move |args: &ConstructorArgs| {
        let mut supplied = args.names();
        if let Some(unexpected) = supplied.find(|arg| !accepted.iter().any(|known| known == arg)) {
            return Err(ConstructionError::UnexpectedArgument(unexpected.to_owned()));
        }
        if let Some(missing) = required.iter().find(|arg| !args.contains(arg)) {
            return Err(ConstructionError::MissingArgument((*missing).to_owned()));
        }
        Ok(Arc::new(LabelAdapter(label.clone())) as Arc<dyn Adapter>)
    }))
}

/// Class whose constructor panics unless `registry` is supplied.
pub(super) fn panicking_class(name: &str) -> Arc<dyn AdapterClass> {
    let label = name.to_owned();
    Arc::new(FnAdapterClass::new(name, move |args: &ConstructorArgs| {
        assert!(args.contains("registry"), "registry handle required");
        Ok(Arc::new(LabelAdapter(label.clone())) as Arc<dyn Adapter>)
    }))
}

pub(super) fn manifest_entry(name: &str, module: &str, class: &str) -> ManifestEntry {
    ManifestEntry::new(
        AdapterName::new(name).expect("valid name"),
        ClassReference::new(module, class),
        AdapterCategory::General,
    )
}

pub(super) fn manifest(entries: impl IntoIterator<Item = ManifestEntry>) -> ArtifactManifest {
    let generated_at = Utc
        .with_ymd_and_hms(2026, 5, 1, 12, 0, 0)
        .single()
        .expect("valid timestamp");
    ArtifactManifest::new(generated_at, entries).expect("valid manifest")
}
