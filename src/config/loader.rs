//! Configuration loading from disk.

use std::fs;
use std::path::Path;

use thiserror::Error;
use tracing::warn;

use crate::config::schema::PixelConfig;
use crate::config::validation::validate_config;

/// Error type for configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML for the schema.
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Load configuration from a TOML file.
///
/// Validation findings are logged as warnings, never errors: a route pattern
/// that fails to compile degrades to a never-matching rule at decision time,
/// and a missing pixel ID leaves the tracker inert.
pub fn load_config(path: &Path) -> Result<PixelConfig, ConfigError> {
    let content = fs::read_to_string(path)?;
    let config: PixelConfig = toml::from_str(&content)?;

    for warning in validate_config(&config) {
        warn!(%warning, "configuration check");
    }

    Ok(config)
}
