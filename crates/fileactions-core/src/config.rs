//! Configuration types.
//!
//! The host application's options that influence how actions launch.
//! Loaded from `<config dir>/fileactions/config.toml`; every field has a
//! default so a missing file is not an error.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Runtime configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub options: OptionsConfig,
}

/// Launch options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Open editors in a new tab instead of navigating the current one.
    #[serde(default)]
    pub open_apps_in_tab: bool,

    #[serde(default)]
    pub routing: RoutingConfig,
}

/// Routing options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RoutingConfig {
    /// Add the file id to editor routes so they survive renames.
    #[serde(default)]
    pub id_based: bool,
}

impl AppConfig {
    /// Parse a TOML document.
    pub fn from_toml(source: &str) -> Result<Self, ConfigError> {
        toml::from_str(source).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let source = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;
        let config = Self::from_toml(&source)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Load `path`, falling back to defaults when the file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            tracing::info!("No config found at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load(path)
    }
}

/// Get the config directory path.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("fileactions"))
}

/// Get the path to config.toml.
pub fn config_path() -> Result<PathBuf, ConfigError> {
    config_dir()
        .map(|p| p.join("config.toml"))
        .ok_or(ConfigError::NoConfigDir)
}
