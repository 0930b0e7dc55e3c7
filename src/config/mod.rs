mod types;

pub use types::*;

use crate::{Error, Result};
use std::{env, path::Path};
use tracing::debug;

const DEFAULT_CONFIG_PATH: &str = "config.yaml";

/// Loads configuration from `CONFIG_PATH`, falling back to `config.yaml`.
///
/// A missing `config.yaml` is not an error when `CONFIG_PATH` is unset; the
/// built-in defaults are used instead.
pub async fn load() -> Result<Config> {
    match env::var("CONFIG_PATH") {
        Ok(path) => load_from(&path).await,
        Err(_) if Path::new(DEFAULT_CONFIG_PATH).exists() => load_from(DEFAULT_CONFIG_PATH).await,
        Err(_) => {
            debug!("No configuration file found, using defaults");
            Ok(Config::default())
        }
    }
}

pub async fn load_from(config_path: &str) -> Result<Config> {
    debug!("Loading configuration from: {}", config_path);

    let config_str = tokio::fs::read_to_string(config_path)
        .await
        .map_err(|e| Error::config(format!("Cannot read {}: {}", config_path, e)))?;

    parse(&config_str)
}

pub fn parse(config_str: &str) -> Result<Config> {
    // An empty document deserializes to null, which serde_yaml rejects for a struct.
    if config_str.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config = serde_yaml::from_str(config_str)?;

    if config.inference.endpoint.trim().is_empty() {
        return Err(Error::config("inference.endpoint must not be empty"));
    }

    Ok(config)
}
