//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config resolution; the core crate only ever sees the
//! resulting [`EffectiveConfig`].
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (applied at the call-site, not here)
//! 2. Project override: `./.ncomp.toml`, or the file given with `--config`
//! 3. Global override: `<config dir>/ncomp/config.toml`
//! 4. Built-in defaults (always present)
//!
//! Unknown keys, malformed values and an `indent_width` outside `1..=16` are
//! rejected, never ignored. Boolean keys also take the `config` crate's word
//! forms: `"yes"`/`"no"`, `"on"`/`"off"`, `"1"`/`"0"`.

use std::path::{Path, PathBuf};

use config::{Config, File, FileFormat};
use ncomp_core::{domain::EffectiveConfig, error::NcompError};
use tracing::{debug, instrument};

use crate::error::{CliError, CliResult};

/// File name of the project override, looked up in the working directory.
pub const LOCAL_FILE: &str = ".ncomp.toml";

/// Resolved configuration plus the override files that contributed to it.
#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub effective: EffectiveConfig,
    pub sources: Vec<PathBuf>,
}

impl AppConfig {
    /// Load configuration from the standard locations.
    ///
    /// `explicit` is the path passed via `--config`; it replaces the project
    /// override and must exist.
    pub fn load(explicit: Option<&Path>) -> CliResult<Self> {
        let local = match explicit {
            Some(path) if !path.is_file() => {
                return Err(CliError::ConfigError {
                    message: format!("config file {} does not exist", path.display()),
                    source: None,
                });
            }
            Some(path) => path.to_path_buf(),
            None => PathBuf::from(LOCAL_FILE),
        };
        Self::load_layers(Self::global_path().as_deref(), &local)
    }

    /// Merge defaults, then `global`, then `local`.  Missing files are
    /// skipped.
    #[instrument(skip_all, fields(global = ?global, local = %local.display()))]
    pub fn load_layers(global: Option<&Path>, local: &Path) -> CliResult<Self> {
        let defaults = Config::try_from(&EffectiveConfig::default()).map_err(config_error)?;
        let mut builder = Config::builder().add_source(defaults);
        let mut sources = Vec::new();

        for path in global.into_iter().chain(std::iter::once(local)) {
            if path.is_file() {
                debug!(path = %path.display(), "applying override file");
                builder = builder.add_source(File::from(path).format(FileFormat::Toml));
                sources.push(path.to_path_buf());
            }
        }

        let effective = builder
            .build()
            .and_then(|c| c.try_deserialize::<EffectiveConfig>())
            .map_err(config_error)?;
        effective.format.validate().map_err(|e| CliError::ConfigError {
            message: match e {
                NcompError::Configuration { message } => message,
                other => other.to_string(),
            },
            source: None,
        })?;

        debug!(?effective, "configuration resolved");
        Ok(Self { effective, sources })
    }

    /// Path to the global override file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness; `None`
    /// when no home directory can be determined.
    pub fn global_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("com", "ncomp", "ncomp")
            .map(|d| d.config_dir().join("config.toml"))
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> CliResult<String> {
        toml::to_string_pretty(&self.effective).map_err(|e| CliError::ConfigError {
            message: "failed to serialize configuration".into(),
            source: Some(Box::new(e)),
        })
    }
}

fn config_error(err: config::ConfigError) -> CliError {
    CliError::ConfigError {
        message: err.to_string(),
        source: Some(Box::new(err)),
    }
}
