//! Configuration for discovery, code generation and verification.
//!
//! The configuration is a JSON document. Every field is optional; omitted
//! fields take the defaults below. A representative file is:
//!
//! ```json
//! {
//!   "adapters_root": "src/adapters",
//!   "module_prefix": "adapters",
//!   "artifact_dir": "src",
//!   "artifact_file": "adapter_registry.py",
//!   "report_file": "adapter_report.json",
//!   "scanner": { "exclusion_substrings": ["__", "test_", "backup"] },
//!   "classifier": { "function_count_threshold": 5 },
//!   "canonicalizer": { "adapters_segment": "adapters" }
//! }
//! ```

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;

/// Top-level tool configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistrarConfig {
    /// Directory scanned for adapter sources.
    pub adapters_root: Utf8PathBuf,
    /// Dotted prefix prepended to every discovered module path. Empty means
    /// modules are imported relative to the adapters root.
    pub module_prefix: String,
    /// Directory the generated artifact is written into.
    pub artifact_dir: Utf8PathBuf,
    /// File name of the generated artifact inside `artifact_dir`.
    pub artifact_file: Utf8PathBuf,
    /// Optional file name, inside `artifact_dir`, for the JSON report.
    pub report_file: Option<Utf8PathBuf>,
    /// Source scanner rules.
    pub scanner: ScannerConfig,
    /// Adapter classifier tuning.
    pub classifier: ClassifierConfig,
    /// Registration name derivation.
    pub canonicalizer: CanonicalizerConfig,
}

impl Default for RegistrarConfig {
    fn default() -> Self {
        Self {
            adapters_root: Utf8PathBuf::from("adapters"),
            module_prefix: "adapters".to_owned(),
            artifact_dir: Utf8PathBuf::from("."),
            artifact_file: Utf8PathBuf::from("adapter_registry.py"),
            report_file: None,
            scanner: ScannerConfig::default(),
            classifier: ClassifierConfig::default(),
            canonicalizer: CanonicalizerConfig::default(),
        }
    }
}

impl RegistrarConfig {
    /// Parses a configuration document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when the JSON is malformed or contains
    /// unknown fields.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(text).map_err(|err| ConfigError::Parse(Arc::new(err)))
    }

    /// Reads and parses the configuration file at `path`.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Read`] when the file cannot be read, or
    /// [`ConfigError::Parse`] when its contents are invalid.
    pub fn load(path: &Utf8Path) -> Result<Self, ConfigError> {
        let file_name = path
            .file_name()
            .ok_or_else(|| ConfigError::Read {
                path: path.to_owned(),
                source: Arc::new(std::io::Error::other("path must include a file name")),
            })?;
        let parent = path
            .parent()
            .filter(|parent| !parent.as_str().is_empty())
            .unwrap_or_else(|| Utf8Path::new("."));
        let contents = Dir::open_ambient_dir(parent, ambient_authority())
            .and_then(|dir| dir.read_to_string(file_name))
            .map_err(|err| ConfigError::Read {
                path: path.to_owned(),
                source: Arc::new(err),
            })?;
        Self::from_json(&contents)
    }

    /// Returns the artifact location relative to `artifact_dir`.
    #[must_use]
    pub fn artifact_location(&self) -> &Utf8Path {
        &self.artifact_file
    }
}

/// Rules deciding which files are candidates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ScannerConfig {
    /// Candidate file extension. A leading dot is accepted and ignored.
    pub source_extension: String,
    /// File or directory names containing any of these substrings are
    /// skipped; matching directories are not descended into.
    pub exclusion_substrings: Vec<String>,
    /// Additional file names to always exclude, such as the generated
    /// artifact itself.
    pub excluded_files: Vec<String>,
}

impl ScannerConfig {
    /// Returns the source extension without a leading dot.
    #[must_use]
    pub fn extension(&self) -> &str {
        self.source_extension.trim_start_matches('.')
    }
}

impl Default for ScannerConfig {
    fn default() -> Self {
        Self {
            source_extension: "py".to_owned(),
            exclusion_substrings: [
                "__", ".pyc", "test_", "_test.", "backup", ".bak", "demo_", ".orig",
            ]
            .map(str::to_owned)
            .to_vec(),
            excluded_files: Vec::new(),
        }
    }
}

/// Tuning for the adapter classifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ClassifierConfig {
    /// Substrings marking a class as an adapter implementation.
    pub capability_markers: Vec<String>,
    /// Method names counted as lifecycle entry points.
    pub lifecycle_methods: Vec<String>,
    /// Substrings of import targets that name a known adapter base.
    pub framework_symbols: Vec<String>,
    /// A file declaring more functions than this counts as non-trivial.
    pub function_count_threshold: usize,
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            capability_markers: ["Adapter", "Engine", "Protocol"].map(str::to_owned).to_vec(),
            lifecycle_methods: ["process", "execute", "run", "__init__"]
                .map(str::to_owned)
                .to_vec(),
            framework_symbols: [
                "BaseAdapter",
                "AdapterBase",
                "BaseEngine",
                "base_adapter",
                "adapter_base",
                "AdapterProtocol",
            ]
            .map(str::to_owned)
            .to_vec(),
            function_count_threshold: 5,
        }
    }
}

/// Rules for deriving registration names from paths.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanonicalizerConfig {
    /// Path component marking the root of the adapter tree.
    pub adapters_segment: String,
    /// Marker tokens stripped once as a `_token` suffix or `token_` prefix.
    pub strip_tokens: Vec<String>,
}

impl Default for CanonicalizerConfig {
    fn default() -> Self {
        Self {
            adapters_segment: "adapters".to_owned(),
            strip_tokens: ["adapter", "engine"].map(str::to_owned).to_vec(),
        }
    }
}

/// Errors returned while loading configuration.
#[derive(Debug, Clone, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("failed to read config {path}: {source}")]
    Read {
        /// Path being read.
        path: Utf8PathBuf,
        /// Underlying failure.
        source: Arc<std::io::Error>,
    },

    /// The configuration document is invalid.
    #[error("failed to parse config: {0}")]
    Parse(Arc<serde_json::Error>),
}
