//! Registry building and artifact regeneration services.

mod builder;
mod regeneration;
mod render;

pub use builder::RegistryBuilder;
pub use regeneration::{CodegenError, RegenerationOutcome, RegenerationService};
pub use render::render_registry;
