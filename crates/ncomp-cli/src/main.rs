//! # ncomp CLI
//!
//! Scaffolds a React component directory with a component file and an
//! index file.
//!
//! ## Startup sequence
//!
//! 1. Parse CLI arguments (clap handles `--help` / `--version` early-exit).
//! 2. Initialise the tracing subscriber (logging).
//! 3. Load configuration (defaults, global file, project file).
//! 4. Build the [`OutputManager`].
//! 5. Dispatch to the appropriate command handler.
//! 6. Translate any [`CliError`] into a user-facing message and exit code.
//!
//! ## Exit codes
//!
//! | Code | Meaning                                          |
//! |------|--------------------------------------------------|
//! |  0   | Success, or a request rejected before any write  |
//! |  1   | Internal / system error                          |
//! |  2   | Invalid arguments                                |
//! |  4   | Configuration error                              |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use crate::{
    cli::{Cli, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    // Load .env before anything else; RUST_LOG may come from it. The
    // outcome is logged once the subscriber exists.
    let dotenv = dotenvy::dotenv();

    // ── 1. Parse arguments ────────────────────────────────────────────────
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help / --version also arrive here and print to stdout.
            let _ = e.print();
            return ExitCode::from(if e.use_stderr() { 2 } else { 0 });
        }
    };

    // ── 2. Initialise tracing ─────────────────────────────────────────────
    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }

    match dotenv {
        Ok(path) => debug!(path = %path.display(), "loaded .env"),
        Err(e) if e.not_found() => {}
        Err(e) => debug!(error = %e, ".env not loaded"),
    }

    debug!(
        verbose = cli.global.verbose,
        quiet = cli.global.quiet,
        no_color = cli.global.no_color,
        "CLI started"
    );

    if let Some(shell) = cli.completions {
        return match commands::completions::execute(shell) {
            Ok(()) => ExitCode::SUCCESS,
            Err(e) => handle_error(e, &cli.global),
        };
    }

    // ── 3. Load configuration ─────────────────────────────────────────────
    let config = match AppConfig::load(cli.global.config.as_deref()) {
        Ok(cfg) => cfg,
        Err(e) => return handle_error(e, &cli.global),
    };

    // ── 4. Build output manager ───────────────────────────────────────────
    let output = OutputManager::new(&cli.global);

    // ── 5. Dispatch + 6. Error handling ──────────────────────────────────
    match run(&cli, &config, &output) {
        Ok(()) => {
            info!("ncomp completed successfully");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, &cli.global),
    }
}

/// Dispatch to the correct command handler.
#[instrument(skip_all)]
fn run(cli: &Cli, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    if cli.print_config {
        commands::config::execute(config, output)
    } else {
        commands::scaffold::execute(cli, config, output)
    }
}

/// Translate a `CliError` into a user message and an exit code.
///
/// Messages go to stderr so they appear even when stdout is redirected.
/// Colour is disabled when stderr is not a TTY.
fn handle_error(err: CliError, global: &GlobalArgs) -> ExitCode {
    err.log();

    let verbose = global.verbose > 0;
    let msg = if !global.no_color && std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
