use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::model::config::ClientConfig;

/// Environment variable overriding the configured API base
pub const API_BASE_ENV: &str = "TASKTRACK_API_BASE";

/// Error type for configuration loading
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

/// Get the config file path, respecting XDG_CONFIG_HOME
pub fn config_path() -> PathBuf {
    let config_dir = std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| dirs_home().join(".config"));
    config_dir.join("tasktrack").join("config.toml")
}

/// Get the user's home directory
fn dirs_home() -> PathBuf {
    std::env::var("HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("/"))
}

/// Read a config file. A missing file yields the defaults.
pub fn read_config_from(path: &Path) -> Result<ClientConfig, ConfigError> {
    if !path.exists() {
        debug!(path = %path.display(), "no config file, using defaults");
        return Ok(ClientConfig::default());
    }
    let text = fs::read_to_string(path).map_err(|e| ConfigError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    toml::from_str(&text).map_err(|e| ConfigError::ParseError {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Load the config from an explicit path (which must exist) or the
/// default location (which may not).
pub fn load_config(explicit: Option<&Path>) -> Result<ClientConfig, ConfigError> {
    match explicit {
        Some(path) if !path.exists() => Err(ConfigError::ReadError {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
        }),
        Some(path) => read_config_from(path),
        None => read_config_from(&config_path()),
    }
}

/// Pick the API base: flag, then environment, then config file
pub fn resolve_api_base(flag: Option<&str>, env: Option<&str>, config: &ClientConfig) -> String {
    flag.or(env.filter(|s| !s.trim().is_empty()))
        .map(str::to_string)
        .unwrap_or_else(|| config.api.base_url.clone())
}
