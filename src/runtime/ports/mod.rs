//! Port contracts for the adapter runtime.

mod adapter;
mod class;
mod resolver;

pub use adapter::{Adapter, AdapterError};
pub use class::{AdapterClass, ConstructionError};
pub use resolver::{ClassResolver, ImportError};
