//! Adapter implementations for discovery ports.

mod filesystem;
mod memory;
mod python;

pub use filesystem::FsSourceScanner;
pub use memory::InMemorySourceTree;
pub use python::PythonAnalyzer;
