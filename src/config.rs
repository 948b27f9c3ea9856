//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Config file: `--config <path>`, else `$HOME/.gq.yaml` if present
//! 3. Environment variables: `GQ_*` prefix
//! 4. Command-line flags

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use tracing::debug;

use crate::application::{ApplicationError, ApplicationResult};
use crate::util::path::expand_path;

/// Name of the default config file in the home directory.
pub const DEFAULT_CONFIG_FILE: &str = ".gq.yaml";

/// Prefix for environment overrides (`GQ_QUESTION`, ...).
pub const ENV_PREFIX: &str = "GQ";

/// Unified configuration for gq.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Question used when `--question` is not given
    pub question: Option<String>,
    /// Print the raw question before the answers in stream mode
    pub echo_question: bool,
    /// Info-level logging
    pub verbose: bool,
    /// Debug-level logging
    pub debug: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            question: None,
            echo_question: true,
            verbose: false,
            debug: false,
        }
    }
}

/// Raw settings for intermediate parsing (`None` means "not specified").
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
#[serde(default)]
pub struct RawSettings {
    pub question: Option<String>,
    pub echo_question: Option<bool>,
    pub verbose: Option<bool>,
    pub debug: Option<bool>,
}

/// Values taken from the command line; they win over every other layer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOverrides {
    pub question: Option<String>,
    pub verbose: bool,
    pub debug: bool,
}

/// Get the path to the default config file (`$HOME/.gq.yaml`).
pub fn default_config_path() -> Option<PathBuf> {
    directories::BaseDirs::new().map(|dirs| dirs.home_dir().join(DEFAULT_CONFIG_FILE))
}

/// Load a config file into RawSettings; the format follows the file extension.
fn load_raw_settings(path: &Path) -> ApplicationResult<RawSettings> {
    if !path.is_file() {
        return Err(ApplicationError::Config {
            message: format!("config file not found: {}", path.display()),
        });
    }
    Config::builder()
        .add_source(File::from(path).required(true))
        .build()
        .and_then(|c| c.try_deserialize::<RawSettings>())
        .map_err(|e| ApplicationError::Config {
            message: format!("load {}: {}", path.display(), e),
        })
}

impl Settings {
    /// Merge overlay config onto self: overlay wins where specified.
    pub fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            question: overlay.question.clone().or_else(|| self.question.clone()),
            echo_question: overlay.echo_question.unwrap_or(self.echo_question),
            verbose: overlay.verbose.unwrap_or(self.verbose),
            debug: overlay.debug.unwrap_or(self.debug),
        }
    }

    /// Apply command-line flags.
    ///
    /// A given `--question` replaces any configured one, even when empty.
    /// Boolean flags can only switch logging on.
    pub fn with_overrides(mut self, cli: &CliOverrides) -> Self {
        if let Some(question) = &cli.question {
            self.question = Some(question.clone());
        }
        self.verbose |= cli.verbose;
        self.debug |= cli.debug;
        self
    }

    /// Load settings from defaults, config file and environment.
    ///
    /// # Arguments
    /// * `config_path` - Explicit config file; must exist if given
    ///
    /// Without an explicit path, `$HOME/.gq.yaml` is used when it exists.
    pub fn load(config_path: Option<&Path>) -> ApplicationResult<Self> {
        let mut current = Self::default();

        match config_path {
            Some(path) => {
                let path = expand_path(path);
                debug!("load: explicit config {}", path.display());
                current = current.merge_with(&load_raw_settings(&path)?);
            }
            None => {
                if let Some(path) = default_config_path().filter(|p| p.exists()) {
                    debug!("load: default config {}", path.display());
                    current = current.merge_with(&load_raw_settings(&path)?);
                }
            }
        }

        Self::apply_env_overrides(current)
    }

    /// Load all layers including the command line.
    pub fn resolve(config_path: Option<&Path>, cli: &CliOverrides) -> ApplicationResult<Self> {
        Ok(Self::load(config_path)?.with_overrides(cli))
    }

    /// Apply GQ_* environment variables as explicit overrides.
    fn apply_env_overrides(settings: Self) -> ApplicationResult<Self> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;
        Ok(settings.merge_with(&raw_from_env(&config)?))
    }

    /// Log level filter name matching the verbosity switches.
    pub fn log_level(&self) -> &'static str {
        match (self.verbose, self.debug) {
            (false, false) => "warn",
            (true, false) => "info",
            (false, true) => "debug",
            (true, true) => "trace",
        }
    }
}

/// Read the known keys from an environment-backed config.
fn raw_from_env(config: &Config) -> ApplicationResult<RawSettings> {
    Ok(RawSettings {
        question: optional(config.get_string("question"))?,
        echo_question: optional(config.get_bool("echo_question"))?,
        verbose: optional(config.get_bool("verbose"))?,
        debug: optional(config.get_bool("debug"))?,
    })
}

/// Missing keys are `None`; anything else that fails is a config error.
fn optional<T>(value: Result<T, ConfigError>) -> ApplicationResult<Option<T>> {
    match value {
        Ok(v) => Ok(Some(v)),
        Err(ConfigError::NotFound(_)) => Ok(None),
        Err(e) => Err(config_err(e)),
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
