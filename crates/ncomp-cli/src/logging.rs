//! Diagnostics on stderr.
//!
//! The libraries only emit events; [`init_logging`] installs the one
//! subscriber, scoped to the three ncomp crates. `RUST_LOG` replaces the
//! whole filter when set. Otherwise `-q` gives errors only, no flag gives
//! warnings, and each `-v` lowers the threshold by one level.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use crate::cli::GlobalArgs;

const CRATES: [&str; 3] = ["ncomp", "ncomp_core", "ncomp_adapters"];

/// Install the stderr subscriber. Call once, before the first event.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(threshold(args))));

    // Progress lines go to stdout; keep stderr free of escapes when piped.
    let ansi = !args.no_color && std::io::stderr().is_terminal();

    let layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .without_time()
        .with_ansi(ansi)
        .with_writer(std::io::stderr);

    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .map_err(|e| anyhow::anyhow!("cannot install log subscriber: {e}"))
}

/// `ncomp=<level>,ncomp_core=<level>,ncomp_adapters=<level>`
fn default_filter(level: LevelFilter) -> String {
    CRATES
        .iter()
        .map(|krate| format!("{krate}={level}"))
        .collect::<Vec<_>>()
        .join(",")
}

fn threshold(args: &GlobalArgs) -> LevelFilter {
    if args.quiet {
        return LevelFilter::ERROR;
    }
    match args.verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}
