//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/numerus/numerus.toml`
//! 3. Explicit config file (`--config <FILE>`)
//! 4. Environment variables: `NUMERUS_*` prefix, `__` between sections
//!    (e.g. `NUMERUS_CALCULATOR__MIN_TERMS=1`)

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File, FileFormat};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::application::services::DEFAULT_MIN_TERMS;
use crate::application::ApplicationError;

/// Expression evaluation settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CalculatorConfig {
    /// Minimum number of `+`-separated terms; 1 allows a single numeral
    pub min_terms: usize,
}

impl Default for CalculatorConfig {
    fn default() -> Self {
        Self {
            min_terms: DEFAULT_MIN_TERMS,
        }
    }
}

/// Terminal output settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct OutputConfig {
    /// Colored output (NO_COLOR still wins when set)
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self { color: true }
    }
}

/// Unified configuration for numerus.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    pub calculator: CalculatorConfig,
    pub output: OutputConfig,
}

/// Get the XDG config directory for numerus.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "numerus").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("numerus.toml"))
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}

impl Settings {
    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `config_file` - Optional explicit config file; must exist if given
    pub fn load(config_file: Option<&Path>) -> Result<Self, ApplicationError> {
        let defaults = Settings::default();
        let mut builder = Config::builder()
            .set_default("calculator.min_terms", defaults.calculator.min_terms as i64)
            .map_err(config_err)?
            .set_default("output.color", defaults.output.color)
            .map_err(config_err)?;

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                debug!("load: global config {}", global_path.display());
                builder = builder.add_source(
                    File::from(global_path)
                        .format(FileFormat::Toml)
                        .required(false),
                );
            }
        }

        if let Some(path) = config_file {
            if !path.exists() {
                return Err(ApplicationError::Config {
                    message: format!("config file not found: {}", path.display()),
                });
            }
            debug!("load: config file {}", path.display());
            builder = builder.add_source(
                File::from(path.to_path_buf())
                    .format(FileFormat::Toml)
                    .required(true),
            );
        }

        builder = builder.add_source(
            Environment::with_prefix("NUMERUS")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = builder.build().map_err(config_err)?;
        let settings: Self = config.try_deserialize().map_err(config_err)?;
        settings.check()?;
        Ok(settings)
    }

    fn check(&self) -> Result<(), ApplicationError> {
        if self.calculator.min_terms == 0 {
            return Err(ApplicationError::Config {
                message: "calculator.min_terms must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Render as TOML, the format of the config files.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize settings: {}", e),
        })
    }
}
