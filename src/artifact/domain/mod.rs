//! Vocabulary shared by discovery, code generation and the runtime registry.
//!
//! The generated artifact is the only link between the build-time and
//! runtime phases, so the types that appear in it live here rather than in
//! either phase.

mod category;
mod error;
mod manifest;
mod name;

pub use category::AdapterCategory;
pub use error::{AdapterNameError, ArtifactError, ParseCategoryError};
pub use manifest::{ARTIFACT_VERSION, ArtifactManifest, ClassReference, ManifestEntry};
pub use name::AdapterName;
