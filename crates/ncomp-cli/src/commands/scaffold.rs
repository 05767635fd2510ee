//! The default command: scaffold one component.
//!
//! Responsibility: merge CLI arguments over the effective configuration into
//! a `ComponentRequest`, run the core scaffold service, and display results.
//! No business logic lives here.

use std::path::PathBuf;

use tracing::{debug, info, instrument};

use ncomp_adapters::{BuiltinStore, LayoutFormatter, LocalFilesystem};
use ncomp_core::{
    application::ScaffoldService,
    domain::{ComponentRequest, LanguageFlavor},
};

use crate::{
    cli::{Cli, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::{ConsoleProgress, OutputManager},
};

/// Execute the scaffold command.
///
/// 1. Build the request (flags win over configuration)
/// 2. Print the intro block
/// 3. Run `ScaffoldService` with console progress
/// 4. Print the conclusion, or the result as JSON
#[instrument(skip_all, fields(component = cli.name.as_deref().unwrap_or("")))]
pub fn execute(cli: &Cli, config: &AppConfig, output: &OutputManager) -> CliResult<()> {
    let request = build_request(cli, config);
    debug!(
        name = %request.name(),
        kind = %request.component_type(),
        flavor = %request.flavor(),
        dir = %request.target_directory().display(),
        "Request resolved"
    );

    if !request.name().trim().is_empty() {
        show_intro(&request, output)?;
    }

    let service = ScaffoldService::new(
        Box::new(BuiltinStore::new()),
        Box::new(LocalFilesystem::new()),
        Box::new(LayoutFormatter::new()),
        config.effective.format,
    );

    let progress = ConsoleProgress::new(output);
    let result = service.scaffold_with_progress(&request, &progress)?;
    info!(path = %result.directory.display(), "Scaffold completed");

    if output.format() == OutputFormat::Json {
        output.json(&result)?;
    } else {
        output.print("")?;
        output.header("Component built! \u{2728}\u{1f680}\u{1f525}\u{2728}")?;
    }

    Ok(())
}

fn build_request(cli: &Cli, config: &AppConfig) -> ComponentRequest {
    let component_type = cli
        .component_type
        .unwrap_or(config.effective.component_type);
    let flavor = if cli.typescript {
        LanguageFlavor::TypedScript
    } else {
        config.effective.flavor()
    };
    let dir = cli.dir.clone().unwrap_or_else(|| PathBuf::from("."));

    ComponentRequest::new(
        cli.name.clone().unwrap_or_default(),
        dir,
        component_type,
        flavor,
    )
}

fn show_intro(request: &ComponentRequest, output: &OutputManager) -> CliResult<()> {
    output.print("")?;
    output.header(&format!(
        "\u{2728}  Creating the {} component \u{2728}",
        request.name()
    ))?;
    output.print("")?;
    output.detail(&format!(
        "Directory:  {}",
        request.component_dir().display()
    ))?;
    output.detail(&format!(
        "Type:       {} ({})",
        request.component_type(),
        request.flavor()
    ))?;
    output.detail("=========================================")?;
    output.print("")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use ncomp_core::domain::{ComponentType, EffectiveConfig};

    fn cli(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("ncomp").chain(args.iter().copied())).unwrap()
    }

    fn config(component_type: ComponentType, typescript: bool) -> AppConfig {
        AppConfig {
            effective: EffectiveConfig {
                component_type,
                typescript,
                ..EffectiveConfig::default()
            },
            sources: Vec::new(),
        }
    }

    #[test]
    fn configuration_supplies_defaults() {
        let request = build_request(&cli(&["Widget"]), &config(ComponentType::Functional, true));
        assert_eq!(request.component_type(), ComponentType::Functional);
        assert_eq!(request.flavor(), LanguageFlavor::TypedScript);
        assert_eq!(request.target_directory(), PathBuf::from(".").as_path());
    }

    #[test]
    fn flags_override_configuration() {
        let request = build_request(
            &cli(&["Widget", "-t", "pure-class", "-d", "src"]),
            &config(ComponentType::Functional, false),
        );
        assert_eq!(request.component_type(), ComponentType::PureClass);
        assert_eq!(request.flavor(), LanguageFlavor::Script);
        assert_eq!(request.component_dir(), PathBuf::from("src/Widget"));
    }

    #[test]
    fn typescript_flag_selects_typed_flavor() {
        let request = build_request(&cli(&["Card", "--ts"]), &AppConfig::default());
        assert_eq!(request.flavor(), LanguageFlavor::TypedScript);
        assert_eq!(request.component_type(), ComponentType::Class);
    }

    #[test]
    fn missing_name_becomes_empty() {
        let request = build_request(&cli(&[]), &AppConfig::default());
        assert_eq!(request.name(), "");
    }
}
