//! Optional TOML settings for the demo binary.
//!
//! Command-line flags win over file values; environment variables with
//! the `FLOWSTEP_` prefix override file values (double underscore
//! separates nested keys, e.g. `FLOWSTEP_LIST__LENGTH=20`).

use std::path::{Path, PathBuf};

use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use thiserror::Error;

/// Errors raised while loading demo settings.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// The settings file does not exist.
    #[error("settings file not found: {0}")]
    NotFound(String),

    /// The settings path is not valid UTF-8.
    #[error("invalid settings path: {0}")]
    InvalidPath(String),

    /// Parsing or deserialization failed.
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Defaults for the `list` demo subcommand.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ListSettings {
    /// Number of items to iterate.
    pub length: usize,
    /// Items strictly between the bounds are skipped.
    pub skip_lower: usize,
    /// Upper bound of the skip band.
    pub skip_upper: usize,
}

impl Default for ListSettings {
    fn default() -> Self {
        Self {
            length: 10,
            skip_lower: 4,
            skip_upper: 8,
        }
    }
}

/// Demo binary settings, loadable from a TOML file.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Emit flow action messages to the log sink.
    pub verbose: bool,
    /// Tee log records to this file.
    pub log_file: Option<PathBuf>,
    /// Defaults for the `list` subcommand.
    pub list: ListSettings,
}

impl Settings {
    /// Loads settings from a TOML file, applying `FLOWSTEP_` environment
    /// overrides on top.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let path_str = path
            .to_str()
            .ok_or_else(|| SettingsError::InvalidPath(format!("{:?}", path)))?;
        if !path.exists() {
            return Err(SettingsError::NotFound(path_str.to_string()));
        }

        let settings = Config::builder()
            .add_source(File::with_name(path_str))
            .add_source(
                Environment::with_prefix("FLOWSTEP")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
