//! Domain types for registry code generation.

mod artifact;
mod backup;

pub use artifact::GeneratedArtifact;
pub use backup::backup_location;
