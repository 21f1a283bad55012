//! Port contracts for storing generated artifacts.

pub mod store;

pub use store::{ArtifactStore, ArtifactStoreError, ArtifactStoreResult};
