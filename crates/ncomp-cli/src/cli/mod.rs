//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;
use std::str::FromStr;

use clap::{Parser, ValueEnum};
use ncomp_core::domain::ComponentType;

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "ncomp",
    bin_name = "ncomp",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2728} Scaffold React components",
    long_about = "ncomp creates a component directory holding the component \
                  file and an index file that re-exports it.",
    after_help = "EXAMPLES:\n\
        \x20 ncomp Widget --type functional --dir ./src\n\
        \x20 ncomp Card --ts\n\
        \x20 ncomp Button -t fnp\n\
        \x20 ncomp --print-config\n\
        \x20 ncomp --completions bash > ~/.local/share/bash-completion/completions/ncomp",
)]
pub struct Cli {
    /// Flags available on every invocation.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Component name, used for the directory, the file and the component
    /// itself.
    #[arg(value_name = "NAME", help = "Component name, e.g. Widget")]
    pub name: Option<String>,

    #[arg(
        short = 't',
        long = "type",
        value_name = "TYPE",
        value_parser = ComponentType::from_str,
        help = "Component type: class, pure-class, functional (fn), functional-with-props (fnp)"
    )]
    pub component_type: Option<ComponentType>,

    /// Directory the component directory is created in.
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "PATH",
        help = "Directory to create the component in (default: current directory)"
    )]
    pub dir: Option<PathBuf>,

    #[arg(
        long = "typescript",
        visible_alias = "ts",
        help = "Generate a TypeScript component (.tsx)"
    )]
    pub typescript: bool,

    /// Print the effective configuration and exit.
    #[arg(
        long = "print-config",
        conflicts_with = "completions",
        help = "Print the merged configuration and exit"
    )]
    pub print_config: bool,

    /// Generate shell completions and exit.
    #[arg(
        long = "completions",
        value_name = "SHELL",
        value_enum,
        help = "Generate shell completions and exit"
    )]
    pub completions: Option<Shell>,
}

/// Supported shells for completion generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}
