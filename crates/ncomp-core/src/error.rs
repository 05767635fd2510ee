//! Unified error handling for ncomp core.
//!
//! Wraps domain and application errors behind one type with categories and
//! user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

/// Root error type for ncomp core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum NcompError {
    /// Business rule violations (missing name, unsupported combination).
    #[error(transparent)]
    Domain(#[from] DomainError),

    /// Environment and orchestration failures.
    #[error(transparent)]
    Application(#[from] ApplicationError),

    /// Configuration or setup errors.
    #[error("configuration error: {message}")]
    Configuration { message: String },
}

impl NcompError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(e) => e.suggestions(),
            Self::Application(e) => e.suggestions(),
            Self::Configuration { message } => vec![
                format!("Configuration issue: {message}"),
                "Check your override files and try again".into(),
            ],
        }
    }

    /// Get error category for display/styling purposes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => match e.category() {
                crate::domain::ErrorCategory::Validation => ErrorCategory::UserInput,
                crate::domain::ErrorCategory::Compatibility => ErrorCategory::Compatibility,
                crate::domain::ErrorCategory::NotFound => ErrorCategory::NotFound,
            },
            Self::Application(e) => e.category(),
            Self::Configuration { .. } => ErrorCategory::Configuration,
        }
    }

    /// Whether this is one of the failures detected before anything was
    /// written: missing name, unsupported combination, missing parent
    /// directory, or an existing component.
    pub fn is_expected(&self) -> bool {
        matches!(
            self.category(),
            ErrorCategory::UserInput | ErrorCategory::Compatibility | ErrorCategory::Environment
        )
    }
}

/// Error categories for UI display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    UserInput,
    Compatibility,
    Environment,
    Formatting,
    Filesystem,
    NotFound,
    Configuration,
}

/// Convenient result type alias.
pub type NcompResult<T> = Result<T, NcompError>;
