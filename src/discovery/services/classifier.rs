//! Heuristic adapter classification.

use crate::config::ClassifierConfig;
use crate::discovery::domain::{Classification, ClassificationSignals, SourceAnalysis};

/// Decides whether an analysed file implements the adapter contract.
///
/// A file qualifies when a class name carries a capability marker and at
/// least one secondary signal holds: a lifecycle method, an import of a
/// known adapter base, or more functions than the configured threshold.
/// The rule favours recall; candidate files are heterogeneous and do not
/// all subclass one base.
#[derive(Debug, Clone, Default)]
pub struct AdapterClassifier {
    config: ClassifierConfig,
}

impl AdapterClassifier {
    /// Creates a classifier with the given tuning.
    #[must_use]
    pub const fn new(config: ClassifierConfig) -> Self {
        Self { config }
    }

    /// Classifies one analysed file.
    ///
    /// The main class is the first class carrying a capability marker, else
    /// the first declared class.
    #[must_use]
    pub fn classify(&self, analysis: &SourceAnalysis) -> Classification {
        let marked = analysis.class_names().find(|name| self.has_marker(name));
        let selected = marked.or_else(|| analysis.class_names().next());

        let signals = ClassificationSignals {
            capability_marker: marked.is_some(),
            lifecycle_method: analysis
                .functions()
                .iter()
                .any(|function| self.config.lifecycle_methods.contains(function)),
            framework_import: analysis.imports().iter().any(|target| {
                self.config
                    .framework_symbols
                    .iter()
                    .any(|symbol| target.contains(symbol.as_str()))
            }),
            function_threshold: analysis.functions().len() > self.config.function_count_threshold,
        };

        Classification::new(selected.map(str::to_owned), signals)
    }

    fn has_marker(&self, class_name: &str) -> bool {
        self.config
            .capability_markers
            .iter()
            .any(|marker| class_name.contains(marker.as_str()))
    }
}
