//! Resolves class references against adapter sources.

use super::DeclaredClass;
use crate::artifact::domain::ClassReference;
use crate::discovery::domain::CandidateFile;
use crate::discovery::ports::{DiscoveryError, SourceAnalyzer, SourceScanner};
use crate::runtime::ports::{AdapterClass, ClassResolver, ImportError};
use camino::{Utf8Path, Utf8PathBuf};
use std::io;
use std::sync::Arc;

/// Class resolver that reads and analyses adapter sources instead of
/// importing them.
///
/// A module path is mapped back to a file under `root` by removing the
/// module prefix and appending the source extension.
#[derive(Clone)]
pub struct SourceClassResolver<S, A>
where
    S: SourceScanner,
    A: SourceAnalyzer,
{
    scanner: Arc<S>,
    analyzer: Arc<A>,
    root: Utf8PathBuf,
    module_prefix: String,
    extension: String,
}

impl<S, A> SourceClassResolver<S, A>
where
    S: SourceScanner,
    A: SourceAnalyzer,
{
    /// Creates a resolver over the tree at `root` whose modules are imported
    /// under `module_prefix`.
    #[must_use]
    pub fn new(
        scanner: Arc<S>,
        analyzer: Arc<A>,
        root: impl Into<Utf8PathBuf>,
        module_prefix: impl Into<String>,
    ) -> Self {
        Self {
            scanner,
            analyzer,
            root: root.into(),
            module_prefix: module_prefix.into(),
            extension: "py".to_owned(),
        }
    }

    /// Uses `extension` for module files instead of `py`. A leading dot is
    /// ignored.
    #[must_use]
    pub fn with_extension(mut self, extension: &str) -> Self {
        self.extension = extension.trim_start_matches('.').to_owned();
        self
    }

    /// Returns the file backing `module`, relative to the root.
    #[must_use]
    pub fn module_file(&self, module: &str) -> Option<Utf8PathBuf> {
        let remainder = if self.module_prefix.is_empty() {
            module
        } else {
            module
                .strip_prefix(self.module_prefix.as_str())?
                .strip_prefix('.')?
        };
        if remainder.is_empty() || remainder.split('.').any(str::is_empty) {
            return None;
        }
        let mut relative: Utf8PathBuf = remainder.split('.').collect();
        relative.set_extension(&self.extension);
        Some(relative)
    }

    fn read_module(&self, module: &str, relative: &Utf8Path) -> Result<String, ImportError> {
        let candidate = CandidateFile::new(self.root.join(relative), relative, module);
        self.scanner
            .read_source(&candidate)
            .map_err(|error| match &error {
                DiscoveryError::Read { source, .. }
                    if source
                        .downcast_ref::<io::Error>()
                        .is_some_and(|io_error| io_error.kind() == io::ErrorKind::NotFound) =>
                {
                    ImportError::ModuleNotFound(module.to_owned())
                }
                _ => ImportError::ModuleFailed {
                    module: module.to_owned(),
                    message: error.to_string(),
                },
            })
    }
}

impl<S, A> ClassResolver for SourceClassResolver<S, A>
where
    S: SourceScanner,
    A: SourceAnalyzer,
{
    fn resolve(&self, reference: &ClassReference) -> Result<Arc<dyn AdapterClass>, ImportError> {
        let module = reference.module();
        let relative = self
            .module_file(module)
            .ok_or_else(|| ImportError::ModuleNotFound(module.to_owned()))?;
        let source = self.read_module(module, &relative)?;
        let analysis = self
            .analyzer
            .analyze(&source)
            .map_err(|error| ImportError::ModuleFailed {
                module: module.to_owned(),
                message: error.to_string(),
            })?;
        let info = analysis
            .class(reference.class())
            .ok_or_else(|| ImportError::ClassNotFound {
                module: module.to_owned(),
                class: reference.class().to_owned(),
            })?;
        Ok(Arc::new(DeclaredClass::from_info(module, info)))
    }
}
