//! Error types for file actions.

use thiserror::Error;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// No config directory found.
    #[error("Config directory not found")]
    NoConfigDir,

    /// IO error.
    #[error("IO error: {0}")]
    Io(String),

    /// Parse error.
    #[error("Parse error: {0}")]
    Parse(String),
}

/// Errors raised when registering editors.
#[derive(Debug, Error)]
pub enum RegistryError {
    /// Editor refers to an app without registered metadata.
    #[error("Editor refers to unknown app '{0}'")]
    UnknownApp(String),
}

/// Errors raised when triggering actions.
#[derive(Debug, Error)]
pub enum ActionError {
    /// No action in any tier qualifies as the default.
    #[error("No default action available for {count} selected resource(s)")]
    NoDefaultAction { count: usize },

    /// The action needs a selected resource to operate on.
    #[error("Action '{action}' requires a selected resource")]
    NoResourceSelected { action: String },
}
