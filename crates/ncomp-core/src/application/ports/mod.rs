//! Application ports (traits) for external dependencies.
//!
//! In hexagonal architecture, ports define interfaces that the application
//! needs from the outside world. Adapters in `ncomp-adapters` implement
//! the driven ports; the CLI implements [`ProgressReporter`].

pub mod output;

pub use output::{
    CodeFormatter, Filesystem, ProgressReporter, ScaffoldEvent, SilentProgress, TemplateStore,
};
