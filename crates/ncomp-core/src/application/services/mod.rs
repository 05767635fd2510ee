//! Application services - orchestrate use cases.
//!
//! [`ScaffoldService`] runs the scaffold use case; [`Renderer`] turns a
//! template into file contents.

pub mod renderer;
pub mod scaffold_service;

pub use renderer::Renderer;
pub use scaffold_service::ScaffoldService;
