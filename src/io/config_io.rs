use std::fs;
use std::path::{Path, PathBuf};

use crate::model::config::Config;

/// Error type for configuration I/O
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("could not serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Where the configuration came from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    /// Loaded from this file
    File(PathBuf),
    /// No file at this path; built-in defaults in use
    Defaults(PathBuf),
}

impl ConfigSource {
    pub fn path(&self) -> &Path {
        match self {
            ConfigSource::File(p) | ConfigSource::Defaults(p) => p,
        }
    }
}

/// Get the default config file path, respecting XDG_CONFIG_HOME
pub fn default_config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".config"));
    config_dir.join("tick").join("config.toml")
}

fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Read and parse a config file
pub fn read_config_from(path: &Path) -> Result<Config, ConfigError> {
    let text = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load configuration from `explicit` or the default path.
///
/// A missing default file yields built-in defaults. A missing explicit file
/// is an error, as is any file that fails to parse.
pub fn load_config(explicit: Option<&Path>) -> Result<(Config, ConfigSource), ConfigError> {
    if let Some(path) = explicit {
        let config = read_config_from(path)?;
        return Ok((config, ConfigSource::File(path.to_path_buf())));
    }
    let path = default_config_path();
    if !path.exists() {
        return Ok((Config::default(), ConfigSource::Defaults(path)));
    }
    let config = read_config_from(&path)?;
    Ok((config, ConfigSource::File(path)))
}

/// Render a config back to TOML
pub fn config_to_string(config: &Config) -> Result<String, ConfigError> {
    Ok(toml::to_string_pretty(config)?)
}
