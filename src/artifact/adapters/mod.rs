//! Artifact store implementations.

pub mod filesystem;
pub mod memory;

pub use filesystem::FsArtifactStore;
pub use memory::InMemoryArtifactStore;
