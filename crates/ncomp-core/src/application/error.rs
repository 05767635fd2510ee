//! Application layer errors.
//!
//! These errors represent failures in orchestration and in the environment,
//! not business rules. Business rule errors are `DomainError` from
//! `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::error::ErrorCategory;

/// Errors that occur while scaffolding.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// The directory the component should be created in does not exist.
    #[error("parent directory {path} does not exist")]
    MissingParentDirectory { path: PathBuf },

    /// The component directory is already there.
    #[error("a component already exists at {path}")]
    AlreadyExists { path: PathBuf },

    /// The formatter rejected the rendered text.
    #[error("formatting failed: {reason}")]
    FormattingFailed { reason: String },

    /// Filesystem operation failed.
    #[error("filesystem error at {path}: {reason}")]
    FilesystemError { path: PathBuf, reason: String },
}

impl ApplicationError {
    /// Get user-actionable suggestions.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::MissingParentDirectory { path } => vec![
                format!("Create the parent directory first: mkdir -p {}", path.display()),
                "Or point --dir at an existing directory".into(),
            ],
            Self::AlreadyExists { path } => vec![
                format!("Delete {} and try again", path.display()),
                "Or choose a different component name".into(),
            ],
            Self::FormattingFailed { .. } => vec![
                "Check the [format] section of your configuration".into(),
                "The rendered template could not be formatted; please report this issue".into(),
            ],
            Self::FilesystemError { path, .. } => vec![
                format!("Failed to access: {}", path.display()),
                "Check that you have write permissions".into(),
            ],
        }
    }

    /// Get error category.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::MissingParentDirectory { .. } | Self::AlreadyExists { .. } => {
                ErrorCategory::Environment
            }
            Self::FormattingFailed { .. } => ErrorCategory::Formatting,
            Self::FilesystemError { .. } => ErrorCategory::Filesystem,
        }
    }
}
