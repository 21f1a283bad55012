//! Shared world state for registry generation BDD scenarios.

use camino::{Utf8Path, Utf8PathBuf};
use eyre::{WrapErr, eyre};
use registrar::artifact::adapters::FsArtifactStore;
use registrar::codegen::services::RegenerationOutcome;
use registrar::config::RegistrarConfig;
use registrar::discovery::domain::AdapterCatalog;
use registrar::runtime::services::AdapterRegistry;
use rstest::fixture;
use tempfile::TempDir;

/// Scenario world for registry generation behaviour tests.
#[derive(Default)]
pub struct RegistryWorld {
    /// Temporary workspace holding adapters and generated output.
    pub workspace: Option<TempDir>,
    /// Configuration pointing into the workspace.
    pub config: Option<RegistrarConfig>,
    /// Catalog from the most recent discovery pass.
    pub catalog: Option<AdapterCatalog>,
    /// Outcomes of every generation, oldest first.
    pub outcomes: Vec<RegenerationOutcome>,
    /// Registry loaded for verification.
    pub registry: Option<AdapterRegistry>,
}

impl RegistryWorld {
    /// Returns the configuration, failing when no workspace was created.
    pub fn config(&self) -> Result<&RegistrarConfig, eyre::Report> {
        self.config
            .as_ref()
            .ok_or_else(|| eyre!("no adapters directory in scenario world"))
    }

    /// Returns the adapters root.
    pub fn adapters_root(&self) -> Result<&Utf8Path, eyre::Report> {
        Ok(&self.config()?.adapters_root)
    }

    /// Opens the artifact store rooted at the output directory.
    pub fn store(&self) -> Result<FsArtifactStore, eyre::Report> {
        FsArtifactStore::open(&self.config()?.artifact_dir).wrap_err("open artifact store")
    }

    /// Returns the most recent generation outcome.
    pub fn last_outcome(&self) -> Result<&RegenerationOutcome, eyre::Report> {
        self.outcomes
            .last()
            .ok_or_else(|| eyre!("the registry was never generated"))
    }

    /// Returns the loaded registry.
    pub fn registry(&self) -> Result<&AdapterRegistry, eyre::Report> {
        self.registry
            .as_ref()
            .ok_or_else(|| eyre!("the registry was never loaded"))
    }
}

/// Builds a configuration whose paths all live under `workspace`.
pub fn workspace_config(workspace: &Utf8Path) -> RegistrarConfig {
    RegistrarConfig {
        adapters_root: workspace.join("adapters"),
        artifact_dir: workspace.join("generated"),
        report_file: Some(Utf8PathBuf::from("adapter_report.json")),
        ..RegistrarConfig::default()
    }
}

/// Fixture that creates a new scenario world.
#[fixture]
pub fn world() -> RegistryWorld {
    RegistryWorld::default()
}
