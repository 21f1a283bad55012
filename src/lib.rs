//! Registrar: discovery and registration of pluggable adapters.
//!
//! Registrar scans a source tree for candidate adapter modules, analyses
//! them statically (no adapter code is ever executed during discovery),
//! derives stable registration names and category labels, and generates a
//! registry module with one fault-isolated import per adapter. At startup
//! the registry is loaded into a read-only map in which every declared name
//! resolves to an instance, falling back to a minimal stand-in when an
//! adapter cannot be imported or constructed.
//!
//! # Architecture
//!
//! Each bounded context follows hexagonal architecture principles:
//!
//! - **Domain**: Pure data and rules with no infrastructure dependencies
//! - **Ports**: Abstract trait interfaces for external interactions
//! - **Adapters**: Concrete implementations of ports (filesystem, parser, memory)
//!
//! # Modules
//!
//! - [`artifact`]: Generated-artifact contract shared by build and runtime
//! - [`discovery`]: Scanner, analyser, classifier, canonicalizer and tagger
//! - [`codegen`]: Registry rendering and non-destructive regeneration
//! - [`runtime`]: Safe instantiation and the read-only registry facade
//! - [`verify`]: Dry-run resolution of registry classes from sources
//! - [`config`]: Tool configuration

pub mod artifact;
pub mod codegen;
pub mod config;
pub mod discovery;
pub mod runtime;
pub mod verify;
