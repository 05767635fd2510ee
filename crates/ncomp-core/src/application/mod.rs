//! Application layer for ncomp.
//!
//! This layer contains:
//! - **Services**: use case orchestration (`ScaffoldService`, `Renderer`)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer. Business rules live
//! in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{Renderer, ScaffoldService};

pub use ports::{
    CodeFormatter, Filesystem, ProgressReporter, ScaffoldEvent, SilentProgress, TemplateStore,
};

pub use error::ApplicationError;
