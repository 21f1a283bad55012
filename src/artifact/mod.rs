//! Generated registry artifact contract.
//!
//! Discovery and code generation run at build time; the adapter registry is
//! initialised at process start. The two phases share nothing but the
//! artifact written between them, and this module owns its format:
//!
//! - Domain types in [`domain`]: registration names, categories and the
//!   header manifest
//! - Port contracts in [`ports`]: where artifacts are stored
//! - Adapter implementations in [`adapters`]: filesystem and in-memory
//!   stores

pub mod adapters;
pub mod domain;
pub mod ports;

#[cfg(test)]
mod tests;
