//! Dry-run verification of a generated registry.
//!
//! [`SourceClassResolver`] lets the runtime registry be initialised against
//! adapter sources without executing them: each class reference is mapped
//! back to its file, analysed statically and checked against the
//! construction strategies. This module is the only place where discovery
//! and runtime meet.

mod declared;
mod resolver;

pub use declared::{DeclaredAdapter, DeclaredClass};
pub use resolver::SourceClassResolver;

#[cfg(test)]
mod tests;
