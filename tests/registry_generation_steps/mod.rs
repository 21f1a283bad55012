//! Step definitions for registry generation scenarios.

mod given;
mod then;
mod when;
pub mod world;
