//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `ncomp-adapters` crate provides implementations; the CLI provides
//! the [`ProgressReporter`].

use std::path::{Path, PathBuf};

use crate::domain::{ComponentType, FormatRules, LanguageFlavor, ScaffoldResult, Template};
use crate::error::NcompResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `ncomp_adapters::filesystem::LocalFilesystem` (production)
/// - `ncomp_adapters::filesystem::MemoryFilesystem` (testing)
#[cfg_attr(test, mockall::automock)]
pub trait Filesystem: Send + Sync {
    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;

    /// Create a single directory. Fails if it already exists or the parent
    /// is missing.
    fn create_dir(&self, path: &Path) -> NcompResult<()>;

    /// Write content to a file, replacing any previous content.
    fn write_file(&self, path: &Path, content: &str) -> NcompResult<()>;

    /// Remove a directory and all contents.
    fn remove_dir_all(&self, path: &Path) -> NcompResult<()>;
}

/// Port for template retrieval.
///
/// Implemented by `ncomp_adapters::template_store::BuiltinStore`.
#[cfg_attr(test, mockall::automock)]
pub trait TemplateStore: Send + Sync {
    /// Get the template for a (type, flavor) pair.
    fn lookup(&self, component_type: ComponentType, flavor: LanguageFlavor)
    -> NcompResult<Template>;

    /// List all available templates.
    fn list(&self) -> Vec<Template>;
}

/// Port for the formatting pass applied to rendered text.
///
/// Implemented by `ncomp_adapters::formatter::LayoutFormatter`.
#[cfg_attr(test, mockall::automock)]
pub trait CodeFormatter: Send + Sync {
    /// Reformat `text` according to `rules`.
    ///
    /// Only fails on malformed input.
    fn format(&self, text: &str, rules: &FormatRules) -> NcompResult<String>;
}

/// Progress notifications, emitted in this order on success.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScaffoldEvent {
    DirectoryCreated(PathBuf),
    ComponentWritten(PathBuf),
    IndexWritten(PathBuf),
    Completed(ScaffoldResult),
}

/// Port receiving human-readable progress.
pub trait ProgressReporter {
    fn report(&self, event: &ScaffoldEvent);
}

/// Reporter that drops every event.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentProgress;

impl ProgressReporter for SilentProgress {
    fn report(&self, _event: &ScaffoldEvent) {}
}
