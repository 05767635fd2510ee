//! Output management and formatting.

use std::io::{self, IsTerminal};

use console::Term;
use ncomp_core::application::ports::{ProgressReporter, ScaffoldEvent};
use owo_colors::OwoColorize;
use serde::Serialize;
use tracing::debug;

use crate::cli::global::{GlobalArgs, OutputFormat};

/// Manages CLI output based on the global flags.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags.
    pub fn new(args: &GlobalArgs) -> Self {
        // Resolve Auto → Human (TTY) or Plain (piped/redirected).
        let resolved_format = if args.output_format == OutputFormat::Auto {
            if io::stdout().is_terminal() {
                OutputFormat::Human
            } else {
                OutputFormat::Plain
            }
        } else {
            args.output_format
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet and JSON mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.is_silent() {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.is_silent() {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.is_silent() {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// Dimmed secondary text.
    pub fn detail(&self, text: &str) -> io::Result<()> {
        if self.is_silent() {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.dimmed().to_string()
        };
        self.term.write_line(&line)
    }

    /// Pretty-printed JSON document; written even in quiet mode.
    pub fn json<T: Serialize>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }

    fn is_silent(&self) -> bool {
        self.quiet || self.resolved_format == OutputFormat::Json
    }
}

/// Prints one check-marked line per completed scaffold step.
pub struct ConsoleProgress<'a> {
    out: &'a OutputManager,
}

impl<'a> ConsoleProgress<'a> {
    pub fn new(out: &'a OutputManager) -> Self {
        Self { out }
    }
}

impl ProgressReporter for ConsoleProgress<'_> {
    fn report(&self, event: &ScaffoldEvent) {
        let written = match event {
            ScaffoldEvent::DirectoryCreated(_) => self.out.success("Directory created."),
            ScaffoldEvent::ComponentWritten(_) => {
                self.out.success("Component built and saved to disk.")
            }
            ScaffoldEvent::IndexWritten(_) => {
                self.out.success("Index file built and saved to disk.")
            }
            ScaffoldEvent::Completed(_) => Ok(()),
        };
        if let Err(e) = written {
            debug!(error = %e, "progress line not written");
        }
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
