//! Domain model for adapter discovery.
//!
//! A discovery pass turns candidate files into descriptors. Everything here
//! is pure data plus the rules that decide what a scanner yields; parsing
//! and filesystem access stay behind the ports.

mod analysis;
mod candidate;
mod catalog;
mod classification;
mod descriptor;
mod failure;
mod report;
mod rules;

pub use analysis::{ClassInfo, Parameter, ParameterKind, SourceAnalysis};
pub use candidate::CandidateFile;
pub use catalog::AdapterCatalog;
pub use classification::{Classification, ClassificationSignals};
pub use descriptor::AdapterDescriptor;
pub use failure::{DiscoveryFailure, FailureKind};
pub use report::DiscoveryReport;
pub use rules::{CORE_INFRASTRUCTURE_FILES, ScanRules};
