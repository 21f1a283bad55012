//! Discovery services: classification, naming, tagging and the pipeline
//! that runs them.

mod canonicalizer;
mod classifier;
mod discovery;
mod tagger;

pub use canonicalizer::NameCanonicalizer;
pub use classifier::AdapterClassifier;
pub use discovery::DiscoveryService;
pub use tagger::{CATEGORY_RULES, tag};
