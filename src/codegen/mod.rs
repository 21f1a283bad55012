//! Build-time registry code generation.
//!
//! Turns an [`AdapterCatalog`](crate::discovery::domain::AdapterCatalog)
//! into a Python registry module and writes it through an
//! [`ArtifactStore`](crate::artifact::ports::ArtifactStore), backing up the
//! artifact it replaces.
//!
//! - Domain types in [`domain`]
//! - Orchestration services in [`services`]

pub mod domain;
pub mod services;

#[cfg(test)]
mod tests;
