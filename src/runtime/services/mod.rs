//! Runtime services.

mod instantiator;
mod loader;
mod registry;

pub use instantiator::{Instantiation, SafeInstantiator, StrategiesExhausted};
pub use loader::{LoadError, load_registry};
pub use registry::{AdapterRegistry, adapter_counts, get_adapter, list_adapters};
