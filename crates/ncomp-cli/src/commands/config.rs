//! `ncomp --print-config`: show the merged configuration.

use crate::{
    cli::OutputFormat,
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Print the effective configuration as TOML, or JSON with
/// `--output-format json`.
pub fn execute(config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.json(&config.effective)?;
        return Ok(());
    }

    for line in source_comments(config) {
        output.detail(&line)?;
    }
    output.print(config.to_toml()?.trim_end())?;
    Ok(())
}

fn source_comments(config: &AppConfig) -> Vec<String> {
    if config.sources.is_empty() {
        return vec!["# built-in defaults".into()];
    }
    config
        .sources
        .iter()
        .map(|p| format!("# from {}", p.display()))
        .collect()
}
