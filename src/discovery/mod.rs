//! Build-time adapter discovery.
//!
//! A discovery pass walks a source tree, parses every candidate without
//! executing it, decides which files implement the adapter contract, and
//! names and categorises them. The result is an
//! [`AdapterCatalog`](domain::AdapterCatalog) consumed by code generation.
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - Adapter implementations in [`adapters`]
//! - Orchestration services in [`services`]

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
