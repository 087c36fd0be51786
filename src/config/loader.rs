//! Config file loading

use super::RawConfig;
use std::fs;
use std::path::Path;

#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("{0}: no such file.")]
    NotFound(String),
    #[error("{path}: error parsing.")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("{path}: error parsing.")]
    Parse {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Parse the text of a JSON preferences file.
///
/// The top level must be an object; arrays and scalars are parse errors.
pub fn parse_config(content: &str) -> Result<RawConfig, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    if !value.is_object() {
        return Err(serde::de::Error::custom("config must be a JSON object"));
    }
    serde_json::from_value(value)
}

/// Read and parse the config at `path`.
pub fn try_load_config(path: &Path) -> Result<RawConfig, ConfigError> {
    let name = path.display().to_string();
    if !path.is_file() {
        return Err(ConfigError::NotFound(name));
    }

    let content = fs::read_to_string(path)
        .map_err(|source| ConfigError::Read { path: name.clone(), source })?;

    parse_config(&content).map_err(|source| ConfigError::Parse { path: name, source })
}

/// Load the optional config file.
///
/// A missing or broken file is reported on stderr and treated as absent so the
/// run continues with command-line values and defaults.
pub fn load_config(config_path: Option<&Path>) -> Option<RawConfig> {
    let path = config_path?;

    match try_load_config(path) {
        Ok(config) => {
            tracing::debug!("Loaded config {}", path.display());
            Some(config)
        }
        Err(err) => {
            eprintln!("{}", err);
            if let Some(source) = std::error::Error::source(&err) {
                tracing::debug!("Config {} rejected: {}", path.display(), source);
            }
            None
        }
    }
}
