//! Discovery pipeline orchestration.

use crate::config::RegistrarConfig;
use crate::discovery::{
    adapters::{FsSourceScanner, PythonAnalyzer},
    domain::{
        AdapterCatalog, AdapterDescriptor, CandidateFile, DiscoveryFailure, FailureKind, ScanRules,
    },
    ports::{DiscoveryError, SourceAnalyzer, SourceScanner},
    services::{AdapterClassifier, NameCanonicalizer, tag},
};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Runs scanner, analyser, classifier, canonicalizer and tagger over one
/// source tree.
///
/// The pass is synchronous and single-threaded. Every per-file problem is
/// recorded in the catalog and the pass moves on; only an unreadable root
/// stops it.
#[derive(Clone)]
pub struct DiscoveryService<S, A>
where
    S: SourceScanner,
    A: SourceAnalyzer,
{
    scanner: Arc<S>,
    analyzer: Arc<A>,
    classifier: AdapterClassifier,
    canonicalizer: NameCanonicalizer,
}

impl<S, A> DiscoveryService<S, A>
where
    S: SourceScanner,
    A: SourceAnalyzer,
{
    /// Creates a discovery service.
    #[must_use]
    pub const fn new(
        scanner: Arc<S>,
        analyzer: Arc<A>,
        classifier: AdapterClassifier,
        canonicalizer: NameCanonicalizer,
    ) -> Self {
        Self {
            scanner,
            analyzer,
            classifier,
            canonicalizer,
        }
    }

    /// Discovers adapters under the scanner's root.
    ///
    /// # Errors
    ///
    /// Returns [`DiscoveryError::RootUnreadable`] when the scan cannot start.
    pub fn discover(&self) -> Result<AdapterCatalog, DiscoveryError> {
        let mut catalog = AdapterCatalog::new();

        for item in self.scanner.scan()? {
            let outcome = item.and_then(|candidate| {
                catalog.record_scanned();
                self.describe(&candidate)
            });
            let admitted = outcome.and_then(|descriptor| match descriptor {
                Some(found) => catalog.admit(found),
                None => Ok(()),
            });
            if let Err(failure) = admitted {
                warn!(
                    path = %failure.path(),
                    kind = failure.kind().label(),
                    reason = %failure.kind(),
                    "excluding file from registry"
                );
                catalog.record_failure(failure);
            }
        }

        info!(
            scanned = catalog.files_scanned(),
            valid = catalog.adapters().len(),
            rejected = catalog.rejected().len(),
            failed = catalog.failures().len(),
            "discovery pass complete"
        );
        Ok(catalog)
    }

    /// Builds the descriptor for one candidate.
    ///
    /// Returns `Ok(None)` for a non-adapter whose path yields no usable name;
    /// such a file is neither an adapter nor worth a failure record.
    fn describe(
        &self,
        candidate: &CandidateFile,
    ) -> Result<Option<AdapterDescriptor>, DiscoveryFailure> {
        let path = candidate.relative_path();
        let source = self.scanner.read_source(candidate).map_err(|err| {
            DiscoveryFailure::new(
                path,
                FailureKind::Filesystem {
                    message: err.to_string(),
                },
            )
        })?;
        let analysis = self.analyzer.analyze(&source).map_err(|err| {
            DiscoveryFailure::new(
                path,
                FailureKind::Parse {
                    message: err.to_string(),
                },
            )
        })?;
        let classification = self.classifier.classify(&analysis);

        let name = match self.canonicalizer.canonicalize(path) {
            Ok(name) => name,
            Err(err) if classification.is_valid() => {
                return Err(DiscoveryFailure::new(
                    path,
                    FailureKind::InvalidName {
                        message: err.to_string(),
                    },
                ));
            }
            Err(err) => {
                debug!(path = %path, error = %err, "skipping non-adapter without a usable name");
                return Ok(None);
            }
        };

        let category = tag(path, Some(&source));
        debug!(
            path = %path,
            adapter = %name,
            valid = classification.is_valid(),
            class = classification.selected_class().unwrap_or_default(),
            "classified candidate"
        );
        Ok(Some(AdapterDescriptor::new(
            name,
            candidate,
            &classification,
            category,
        )))
    }
}

impl DiscoveryService<FsSourceScanner, PythonAnalyzer> {
    /// Builds the filesystem pipeline described by `config`.
    ///
    /// The generated artifact and report are excluded from the scan so a
    /// registry written inside the adapters root never discovers itself.
    #[must_use]
    pub fn from_config(config: &RegistrarConfig) -> Self {
        let mut rules = ScanRules::new(&config.scanner);
        let generated = [Some(&config.artifact_file), config.report_file.as_ref()];
        for file_name in generated.into_iter().flatten().filter_map(|path| path.file_name()) {
            rules = rules.excluding_file(file_name);
        }
        Self::new(
            Arc::new(FsSourceScanner::new(
                config.adapters_root.clone(),
                rules,
                config.module_prefix.clone(),
            )),
            Arc::new(PythonAnalyzer::new()),
            AdapterClassifier::new(config.classifier.clone()),
            NameCanonicalizer::new(config.canonicalizer.clone(), config.scanner.extension()),
        )
    }
}
