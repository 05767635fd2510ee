//! Flags accepted alongside any component arguments.
//!
//! Flattened into [`super::Cli`]; they steer logging, colour, the project
//! override file and the shape of stdout, never what gets scaffolded.

use clap::{Args, builder::FalseyValueParser};
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Log more of the scaffold run to stderr.
    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Log more detail (-v, -vv, -vvv)",
        long_help = "Log more of the scaffold run to stderr:
    -v    each step and the resolved request
    -vv   override files applied, template lookup, bytes written
    -vvv  everything, including formatter spans"
    )]
    pub verbose: u8,

    /// Only errors and rejections are printed.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        conflicts_with = "verbose",
        help = "Skip the intro and progress lines"
    )]
    pub quiet: bool,

    /// Plain output without ANSI codes. Any `NO_COLOR` value other than an
    /// empty or false-like one turns it on (<https://no-color.org>).
    #[arg(
        long = "no-color",
        global = true,
        env = "NO_COLOR",
        value_parser = FalseyValueParser::new(),
        help = "Disable colored output"
    )]
    pub no_color: bool,

    /// Read this file instead of `./.ncomp.toml`.
    #[arg(
        short = 'c',
        long = "config",
        global = true,
        value_name = "FILE",
        help = "Project override file (replaces ./.ncomp.toml)"
    )]
    pub config: Option<PathBuf>,

    #[arg(
        long = "output-format",
        global = true,
        value_enum,
        default_value = "auto",
        help = "How stdout is rendered"
    )]
    pub output_format: OutputFormat,
}

/// Rendering of stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human on a terminal, plain when piped.
    #[default]
    Auto,
    /// Coloured intro, progress and conclusion.
    Human,
    /// Same lines without colour.
    Plain,
    /// Only the created paths, as JSON.
    Json,
}
