//! Template rendering of the Python registry module.

use crate::artifact::domain::{ArtifactError, ArtifactManifest, ManifestEntry};
use minijinja::{Environment, UndefinedBehavior};
use serde::Serialize;

const REGISTRY_TEMPLATE: &str = include_str!("../templates/registry.py.j2");

#[derive(Serialize)]
struct RegistryContext {
    header: String,
    adapters: Vec<AdapterContext>,
}

/// Template values for one adapter. String values are pre-encoded Python
/// literals so no module or class name can break the generated syntax.
#[derive(Serialize)]
struct AdapterContext {
    binding: String,
    name: String,
    module: String,
    class_name: String,
    category: String,
}

impl AdapterContext {
    fn from_entry(entry: &ManifestEntry) -> Result<Self, ArtifactError> {
        Ok(Self {
            binding: format!("_adapter_{}", entry.name()),
            name: literal(entry.name().as_str())?,
            module: literal(entry.module())?,
            class_name: literal(entry.class())?,
            category: literal(entry.category().as_str())?,
        })
    }
}

fn literal(value: &str) -> Result<String, ArtifactError> {
    serde_json::to_string(value).map_err(|err| ArtifactError::Serialize(err.to_string()))
}

/// Renders the registry module for `manifest`.
///
/// # Errors
///
/// Returns [`ArtifactError::Serialize`] when the header cannot be encoded or
/// [`ArtifactError::Render`] when the template fails.
pub fn render_registry(manifest: &ArtifactManifest) -> Result<String, ArtifactError> {
    let header = manifest.header()?;
    let adapters = manifest
        .entries()
        .iter()
        .map(AdapterContext::from_entry)
        .collect::<Result<Vec<_>, _>>()?;
    let context = RegistryContext {
        header: header.trim_end().to_owned(),
        adapters,
    };

    let mut environment = Environment::new();
    environment.set_trim_blocks(true);
    environment.set_lstrip_blocks(true);
    environment.set_keep_trailing_newline(true);
    environment.set_undefined_behavior(UndefinedBehavior::Strict);
    environment
        .render_str(REGISTRY_TEMPLATE, context)
        .map_err(|err| ArtifactError::Render(err.to_string()))
}
