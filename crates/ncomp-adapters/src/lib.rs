//! Infrastructure adapters for ncomp.
//!
//! This crate implements the ports defined in `ncomp-core::application::ports`.
//! It contains all I/O and the embedded template set.

pub mod filesystem;
pub mod formatter;
pub mod template_store;

// Re-export commonly used adapters
pub use filesystem::{LocalFilesystem, MemoryFilesystem};
pub use formatter::LayoutFormatter;
pub use template_store::BuiltinStore;
