use config::{Config as ConfigLoader, Environment, File};
use serde::Deserialize;
use std::env;
use std::path::{Path, PathBuf};

use bandwidth_core::ProbeSettings;
use common::types::{ARRAY_SIZE, ITERATIONS};

use super::error::Error;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ProbeConfig {
    pub array_size: usize,
    pub iterations: usize,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    pub probe: ProbeConfig,
}

impl Config {
    /// Rejects sizings the probe cannot measure meaningfully.
    pub fn validate(&self) -> Result<(), Error> {
        if self.probe.array_size == 0 {
            return Err(Error::InvalidSetting {
                key: "probe.array_size",
                reason: "must be at least 1",
            });
        }
        if self.probe.iterations == 0 {
            return Err(Error::InvalidSetting {
                key: "probe.iterations",
                reason: "must be at least 1",
            });
        }
        Ok(())
    }

    pub fn probe_settings(&self) -> ProbeSettings {
        ProbeSettings {
            array_size: self.probe.array_size,
            iterations: self.probe.iterations,
        }
    }
}

/// Path of the optional config file, relative to the working directory.
pub fn default_config_path() -> Result<PathBuf, Error> {
    let base_path = env::current_dir().map_err(|e| {
        Error::ConfigLoadError(format!("Failed to determine current directory: {}", e))
    })?;

    Ok(base_path
        .join("crates")
        .join("executor")
        .join("Config.toml"))
}

/// Loads configuration from the default file location and environment variables.
pub fn load_config() -> Result<Config, Error> {
    load_config_from(&default_config_path()?)
}

/// Loads configuration from `config_file_path` (if present) and environment variables.
///
/// Layers, lowest precedence first: built-in defaults, the TOML file, then
/// `STREAM_`-prefixed variables such as `STREAM_PROBE__ITERATIONS`.
pub fn load_config_from(config_file_path: &Path) -> Result<Config, Error> {
    if config_file_path.exists() {
        tracing::debug!(path = %config_file_path.display(), "Loading config file");
    } else {
        tracing::debug!(
            path = %config_file_path.display(),
            "Config file not found, using defaults"
        );
    }

    let s = ConfigLoader::builder()
        .set_default("probe.array_size", ARRAY_SIZE as i64)
        .and_then(|b| b.set_default("probe.iterations", ITERATIONS as i64))
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?
        .add_source(File::from(config_file_path).required(false))
        .add_source(
            Environment::with_prefix("STREAM")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        )
        .build()
        .map_err(|e| Error::ConfigLoadError(e.to_string()))?;

    let app_config: Config = s
        .try_deserialize()
        .map_err(|e| Error::ConfigLoadError(format!("Failed to deserialize config: {}", e)))?;

    app_config.validate()?;

    Ok(app_config)
}
