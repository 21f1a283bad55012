//! Runtime half of the registry: loading a generated artifact into a live,
//! read-only map of adapter instances.
//!
//! This module depends only on [`crate::artifact`]. Classes are supplied by a
//! [`ports::ClassResolver`]; every declared name ends up in the registry,
//! either as the constructed adapter or as an
//! [`adapters::MinimalAdapter`] stand-in with a recorded failure.

pub mod adapters;
pub mod domain;
pub mod ports;
pub mod services;

#[cfg(test)]
mod tests;
