//! Error types for the rollcall roster verifier.

use std::path::PathBuf;
use thiserror::Error;

/// Roster table errors
///
/// Both variants are fatal for a verification run: without a resolved
/// identity there is nothing meaningful to check.
#[derive(Debug, Error)]
pub enum RosterError {
    #[error("Could not open roster table {path:?}: {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Identifier not found in roster table: {0}")]
    NotFound(String),
}

impl RosterError {
    /// Short notice printed in the transcript in place of the name.
    pub fn notice(&self) -> &'static str {
        match self {
            RosterError::Unreadable { .. } => "Error: Could not open file",
            RosterError::NotFound(_) => "Not found",
        }
    }
}

/// Errors surfaced by the CLI route
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("Roster error: {0}")]
    Roster(#[from] RosterError),

    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Prompt failed: {0}")]
    PromptError(String),

    #[error("Output error: {0}")]
    OutputError(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<config::ConfigError> for ApiError {
    fn from(err: config::ConfigError) -> Self {
        ApiError::ConfigError(err.to_string())
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        ApiError::OutputError(err.to_string())
    }
}

impl From<toml::ser::Error> for ApiError {
    fn from(err: toml::ser::Error) -> Self {
        ApiError::OutputError(err.to_string())
    }
}
