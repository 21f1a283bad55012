//! Domain model for the live adapter registry.

mod entry;
mod report;
mod strategy;

pub use entry::{EntryStatus, FailureRecord, FailureStage, RegistryEntry};
pub use report::{RegistryCounts, RegistryReport};
pub use strategy::{ConstructionStrategy, ConstructorArgs};
