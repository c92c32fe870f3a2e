//! Configuration types.
//!
//! Configuration is optional. A `config.toml` in the Showroom config
//! directory overrides timing and the catalog source; every field has a
//! default so a partial file is fine.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

/// Runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Simulated latency and toast timing
    #[serde(default)]
    pub timing: TimingConfig,

    /// Catalog source
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Timing configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimingConfig {
    /// Cosmetic delay between "Loading products..." and the rendered list.
    pub load_latency_ms: u64,

    /// How long a toast stays visible.
    pub toast_duration_ms: u64,
}

impl TimingConfig {
    pub fn load_latency(&self) -> Duration {
        Duration::from_millis(self.load_latency_ms)
    }

    pub fn toast_duration(&self) -> Duration {
        Duration::from_millis(self.toast_duration_ms)
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            load_latency_ms: 250,
            toast_duration_ms: 1600,
        }
    }
}

/// Catalog configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// JSON catalog file. The built-in sample is used when unset.
    pub path: Option<PathBuf>,
}

impl AppConfig {
    /// Parse configuration from TOML text.
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigError> {
        toml::from_str(s).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a specific file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;
        Self::from_toml_str(&text)
    }

    /// Load `config.toml` from the config directory, or defaults if absent.
    pub fn load() -> Result<Self, ConfigError> {
        match config_path() {
            Some(path) if path.exists() => {
                tracing::info!("Loading config from {}", path.display());
                Self::load_from(&path)
            }
            _ => {
                tracing::info!("No config.toml found - using defaults");
                Ok(Self::default())
            }
        }
    }
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("showroom"))
}

/// Get the path to config.toml.
pub fn config_path() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.timing.load_latency(), Duration::from_millis(250));
        assert_eq!(config.timing.toast_duration(), Duration::from_millis(1600));
        assert!(config.catalog.path.is_none());
    }

    #[test]
    fn test_partial_toml() {
        let config = AppConfig::from_toml_str("[timing]\nload_latency_ms = 0\n").unwrap();
        assert_eq!(config.timing.load_latency_ms, 0);
        assert_eq!(config.timing.toast_duration_ms, 1600);
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(AppConfig::from_toml_str("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_invalid_toml() {
        let result = AppConfig::from_toml_str("[timing]\nload_latency_ms = \"slow\"\n");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(
            &path,
            "[timing]\ntoast_duration_ms = 500\n\n[catalog]\npath = \"/tmp/catalog.json\"\n",
        )
        .unwrap();

        let config = AppConfig::load_from(&path).unwrap();
        assert_eq!(config.timing.toast_duration_ms, 500);
        assert_eq!(
            config.catalog.path.as_deref(),
            Some(Path::new("/tmp/catalog.json"))
        );
    }

    #[test]
    fn test_load_from_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = AppConfig::load_from(&dir.path().join("missing.toml"));
        assert!(matches!(result, Err(ConfigError::Io { .. })));
    }
}
