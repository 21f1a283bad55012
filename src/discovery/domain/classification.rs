//! Outcome of the adapter heuristics for one file.

use serde::Serialize;

/// Which heuristic signals fired for a file.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ClassificationSignals {
    /// A class name contains a capability marker.
    pub capability_marker: bool,
    /// A lifecycle method is declared.
    pub lifecycle_method: bool,
    /// An import references a known adapter base.
    pub framework_import: bool,
    /// The file declares more functions than the configured threshold.
    pub function_threshold: bool,
}

impl ClassificationSignals {
    /// Reports whether the primary signal and at least one secondary signal
    /// both hold.
    #[must_use]
    pub const fn is_satisfied(self) -> bool {
        self.capability_marker
            && (self.lifecycle_method || self.framework_import || self.function_threshold)
    }
}

/// Classifier verdict: the selected class and the signals behind it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classification {
    selected_class: Option<String>,
    signals: ClassificationSignals,
}

impl Classification {
    /// Creates a verdict.
    #[must_use]
    pub const fn new(selected_class: Option<String>, signals: ClassificationSignals) -> Self {
        Self {
            selected_class,
            signals,
        }
    }

    /// Reports whether the file qualifies as an adapter.
    ///
    /// A file with no classes never qualifies.
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.selected_class.is_some() && self.signals.is_satisfied()
    }

    /// Returns the main implementation class of a valid adapter.
    #[must_use]
    pub fn main_class(&self) -> Option<&str> {
        if self.is_valid() {
            self.selected_class.as_deref()
        } else {
            None
        }
    }

    /// Returns the class the selection rule picked, regardless of validity.
    #[must_use]
    pub fn selected_class(&self) -> Option<&str> {
        self.selected_class.as_deref()
    }

    /// Returns the signals that fired.
    #[must_use]
    pub const fn signals(&self) -> ClassificationSignals {
        self.signals
    }
}
