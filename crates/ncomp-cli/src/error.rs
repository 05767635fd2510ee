//! Error handling for the ncomp CLI.
//!
//! Provides structured errors with:
//! - User-friendly messages
//! - Actionable suggestions
//! - Proper error chaining
//! - Exit code mapping

use std::error::Error;

use owo_colors::OwoColorize;
use thiserror::Error;

use ncomp_core::error::{ErrorCategory as CoreCategory, NcompError};

/// Result type alias for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

/// CLI error types.
#[derive(Debug, Error)]
pub enum CliError {
    /// A configuration file could not be read, parsed, or serialized.
    #[error("Configuration error: {message}")]
    ConfigError {
        message: String,
        #[source]
        source: Option<Box<dyn std::error::Error + Send + Sync>>,
    },

    /// An error propagated from `ncomp-core`.
    #[error(transparent)]
    Core(#[from] NcompError),

    /// Writing to the terminal failed.
    #[error("I/O error: {message}")]
    IoError {
        message: String,
        #[source]
        source: std::io::Error,
    },
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        CliError::IoError {
            message: err.to_string(),
            source: err,
        }
    }
}

impl CliError {
    /// Get user-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::ConfigError { .. } => {
                let mut suggestions = vec![format!(
                    "Check ./{} in the current directory",
                    crate::config::LOCAL_FILE
                )];
                if let Some(global) = crate::config::AppConfig::global_path() {
                    suggestions.push(format!("Check {}", global.display()));
                }
                suggestions.push(
                    "Known keys: type, typescript, [format] indent_width, use_tabs, \
                     single_quote, semicolons"
                        .into(),
                );
                suggestions
            }

            Self::Core(core_err) => core_err.suggestions(),

            Self::IoError { message, .. } => vec![format!("I/O operation failed: {message}")],
        }
    }

    /// Get the error category for styling and exit codes.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigError { .. } => ErrorCategory::Configuration,
            Self::Core(core) => match core.category() {
                CoreCategory::UserInput | CoreCategory::Compatibility | CoreCategory::Environment => {
                    ErrorCategory::Rejected
                }
                CoreCategory::Configuration => ErrorCategory::Configuration,
                CoreCategory::Formatting | CoreCategory::Filesystem | CoreCategory::NotFound => {
                    ErrorCategory::Internal
                }
            },
            Self::IoError { .. } => ErrorCategory::Internal,
        }
    }

    /// Exit code to pass to the OS.
    ///
    /// | Category      | Code |
    /// |---------------|------|
    /// | Rejected      |  0   |
    /// | Configuration |  4   |
    /// | Internal      |  1   |
    ///
    /// Argument-parse failures exit with 2 before an error is ever built.
    pub fn exit_code(&self) -> u8 {
        match self.category() {
            ErrorCategory::Rejected => 0,
            ErrorCategory::Configuration => 4,
            ErrorCategory::Internal => 1,
        }
    }

    /// Format the error for display with colors and suggestions.
    pub fn format_colored(&self, verbose: bool) -> String {
        let mut output = String::new();

        if self.category() == ErrorCategory::Rejected {
            output.push_str(&format!("\n{} {}\n", "✗".yellow().bold(), self.headline().yellow()));
        } else {
            output.push_str(&format!(
                "\n{} {}\n\n",
                "✗".red().bold(),
                "Error:".red().bold()
            ));
            output.push_str(&format!("  {}\n", self.to_string().red()));
        }

        if verbose {
            let mut source = self.source();
            while let Some(err) = source {
                output.push_str(&format!(
                    "\n  {} {}\n",
                    "→".dimmed(),
                    err.to_string().dimmed()
                ));
                source = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            output.push_str(&format!("\n{}\n", "Suggestions:".yellow().bold()));
            for suggestion in suggestions {
                output.push_str(&format!("  {suggestion}\n"));
            }
        }

        if !verbose && self.category() != ErrorCategory::Rejected {
            output.push('\n');
            output.push_str(&format!(
                "{} {}\n",
                "\u{2139}".blue(), // ℹ
                "Use -v / --verbose for more details.".dimmed(),
            ));
        }

        output
    }

    /// Plain-text version of [`Self::format_colored`]; no ANSI codes.
    pub fn format_plain(&self, verbose: bool) -> String {
        let mut out = String::new();
        if self.category() == ErrorCategory::Rejected {
            out.push_str(&format!("\n{}\n", self.headline()));
        } else {
            out.push_str(&format!("\nError: {self}\n"));
        }

        if verbose {
            let mut src = std::error::Error::source(self);
            while let Some(err) = src {
                out.push_str(&format!("  Caused by: {err}\n"));
                src = err.source();
            }
        }

        let suggestions = self.suggestions();
        if !suggestions.is_empty() {
            out.push_str("\nSuggestions:\n");
            for s in &suggestions {
                out.push_str(&format!("  {s}\n"));
            }
        }

        if !verbose && self.category() != ErrorCategory::Rejected {
            out.push_str("\nUse -v / --verbose for more details.\n");
        }

        out
    }

    /// Log the error using tracing.
    pub fn log(&self) {
        match self.category() {
            ErrorCategory::Rejected => tracing::info!("Request rejected: {}", self),
            ErrorCategory::Configuration => tracing::error!("Configuration error: {}", self),
            ErrorCategory::Internal => tracing::error!("Internal error: {}", self),
        }

        if let Some(source) = self.source() {
            tracing::debug!("Caused by: {}", source);
        }
    }

    /// One-line apology shown for a rejected request.
    fn headline(&self) -> String {
        let text = self.to_string();
        let mut chars = text.chars();
        match chars.next() {
            Some(first) => format!("Sorry, {}{}.", first.to_lowercase(), chars.as_str()),
            None => text,
        }
    }
}

/// Error categories for classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The request was turned down before anything was written.
    Rejected,
    /// Configuration error.
    Configuration,
    /// Internal/system error.
    Internal,
}
