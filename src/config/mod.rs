mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use std::path::Path;
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads configuration once at startup.
///
/// The YAML file named by `CONFIG_PATH` (default `config.yaml`) is read if
/// present, then `API_URL`, `API_TIMEOUT_SECS` and `UI_LOCALE` from the
/// process environment override whatever the file set.
pub async fn load() -> Result<Config> {
    let config = load_file(env::var("CONFIG_PATH").ok().as_deref()).await?;
    apply_env_overrides(config, |key| env::var(key).ok())
}

/// Reads the YAML file at `path`. Without an explicit path a missing
/// `config.yaml` falls back to defaults; an explicit path must be readable.
pub async fn load_file(path: Option<&str>) -> Result<Config> {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);

    if path.is_none() && !Path::new(config_path).exists() {
        debug!("No {} found, using built-in defaults", config_path);
        return Ok(Config::default());
    }

    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path)
        .await
        .map_err(|e| Error::config(format!("cannot read {}: {}", config_path, e)))?;
    Config::from_yaml(&config_str)
}

impl Config {
    pub fn from_yaml(source: &str) -> Result<Self> {
        // An empty document deserializes to unit, not to an empty mapping.
        if source.trim().is_empty() {
            return Ok(Config::default());
        }
        Ok(serde_yaml::from_str(source)?)
    }
}

/// Applies environment overrides using `lookup` as the variable source.
pub fn apply_env_overrides<F>(mut config: Config, lookup: F) -> Result<Config>
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(url) = lookup("API_URL") {
        debug!("API_URL set in environment, overriding api.url");
        config.api.url = Some(url);
    }

    if let Some(raw) = lookup("API_TIMEOUT_SECS") {
        config.api.timeout_secs = raw.trim().parse().map_err(|_| {
            Error::config(format!("API_TIMEOUT_SECS must be a whole number of seconds, got '{}'", raw))
        })?;
    }

    if let Some(raw) = lookup("UI_LOCALE") {
        config.ui.locale = raw.parse().map_err(Error::config)?;
    }

    Ok(config)
}
