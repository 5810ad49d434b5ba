//! Error types for the command-line inspector.

use std::path::PathBuf;
use thiserror::Error;

use fileactions::{ActionError, RegistryError};
use fileactions_core::ConfigError;

/// The main error type for CLI runs.
#[derive(Debug, Error)]
pub enum CliError {
    /// A file could not be read.
    #[error("Failed to read {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    /// Scenario JSON is malformed.
    #[error("Invalid scenario: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    #[error("Registry error: {0}")]
    Registry(#[from] RegistryError),

    #[error("Action error: {0}")]
    Action(#[from] ActionError),
}

/// Result type alias using CliError.
pub type CliResult<T> = Result<T, CliError>;
