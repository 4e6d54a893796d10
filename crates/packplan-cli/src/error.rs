//! Error handling for the Packplan CLI.
//!
//! Settings resolution is total, so errors here come only from serializing
//! the plan and from writing to the terminal.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// Top-level CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Plan construction or conversion errors from the config crate
    #[error("configuration error: {0}")]
    Config(#[from] packplan_config::ConfigError),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// TOML serialization errors
    #[error("TOML error: {0}")]
    Toml(#[from] toml::ser::Error),

    /// I/O errors from writing output
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
