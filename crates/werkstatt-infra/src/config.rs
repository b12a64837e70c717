//! Configuration loader for Werkstatt.
//!
//! Reads `config.toml` from the data directory (`~/.werkstatt/` by default)
//! and deserializes it into [`WerkstattConfig`]. Falls back to defaults when
//! the file is missing or malformed. An explicitly named file must exist
//! and parse.

use std::path::{Path, PathBuf};

use werkstatt_types::config::WerkstattConfig;
use werkstatt_types::error::ConfigError;

const CONFIG_FILE: &str = "config.toml";

/// Resolve the data directory from environment or platform defaults.
///
/// Priority:
/// 1. `WERKSTATT_DATA_DIR` environment variable
/// 2. `~/.werkstatt`
/// 3. `.werkstatt` in the current directory
pub fn resolve_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("WERKSTATT_DATA_DIR") {
        return PathBuf::from(dir);
    }

    if let Some(home) = dirs::home_dir() {
        return home.join(".werkstatt");
    }

    PathBuf::from(".werkstatt")
}

/// Load `{data_dir}/config.toml`, using defaults when it is absent or broken.
pub async fn load_config(data_dir: &Path) -> WerkstattConfig {
    let config_path = data_dir.join(CONFIG_FILE);

    let content = match tokio::fs::read_to_string(&config_path).await {
        Ok(content) => content,
        Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
            tracing::debug!("No config.toml found at {}, using defaults", config_path.display());
            return WerkstattConfig::default();
        }
        Err(err) => {
            tracing::warn!("Failed to read {}: {err}, using defaults", config_path.display());
            return WerkstattConfig::default();
        }
    };

    match toml::from_str::<WerkstattConfig>(&content) {
        Ok(config) => config,
        Err(err) => {
            tracing::warn!(
                "Failed to parse {}: {err}, using defaults",
                config_path.display()
            );
            WerkstattConfig::default()
        }
    }
}

/// Load an explicitly requested config file. Errors are not swallowed.
pub async fn load_config_file(path: &Path) -> Result<WerkstattConfig, ConfigError> {
    let content = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ConfigError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Load the explicit file when given, otherwise the data directory config.
pub async fn resolve_config(explicit: Option<&Path>) -> Result<WerkstattConfig, ConfigError> {
    match explicit {
        Some(path) => load_config_file(path).await,
        None => Ok(load_config(&resolve_data_dir()).await),
    }
}
