//! Port contracts for adapter discovery.

mod analyzer;
mod scanner;

pub use analyzer::{ParseError, SourceAnalyzer};
pub use scanner::{CandidateStream, DiscoveryError, SourceScanner};
