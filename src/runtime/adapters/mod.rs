//! Adapter implementations for the runtime ports.

pub mod minimal;
pub mod static_resolver;

pub use minimal::{BASIC_PROCESSING, MinimalAdapter};
pub use static_resolver::{FnAdapterClass, StaticClassResolver};
