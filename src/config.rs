//! Configuration System
//!
//! Layered configuration for the verifier: the leaf roster the tree is
//! built from, the roster table used for name lookups, and logging.
//! Sources merge in order defaults, global file, workspace files,
//! environment (`ROLLCALL__SECTION__KEY`).

use crate::error::ApiError;
use crate::logging::LoggingConfig;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;
pub use sources::global_file::global_config_path;

/// Built-in leaf roster used when no other roster is configured
pub const DEFAULT_LEAVES: [&str; 44] = [
    "12314545", "12314515", "12303398", "12303491", "12303843", "12304096", "12306198", "12306281",
    "12307019", "12307046", "12307739", "12309172", "12309577", "12310798", "12311606", "12312213",
    "12313977", "12314061", "12314137", "12314650", "12314828", "12315072", "12315331", "12316709",
    "12316890", "12316904", "12317006", "12317054", "12318355", "12318374", "12318467", "12319271",
    "12321373", "12321523", "12321571", "12321590", "12322351", "12323015", "12323485", "12324277",
    "12325009", "12325313", "12325414", "12325642",
];

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RollcallConfig {
    /// Roster sources
    #[serde(default)]
    pub roster: RosterConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Roster configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Identifier to name table (header line, then `identifier,name` rows)
    #[serde(default = "default_table")]
    pub table: PathBuf,

    /// Leaf values the tree is built from, in order
    #[serde(default = "default_leaves")]
    pub leaves: Vec<String>,

    /// File of leaf values, one per line; replaces `leaves` when set
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub leaves_file: Option<PathBuf>,
}

fn default_table() -> PathBuf {
    PathBuf::from("roster.csv")
}

fn default_leaves() -> Vec<String> {
    DEFAULT_LEAVES.iter().map(|s| s.to_string()).collect()
}

impl Default for RosterConfig {
    fn default() -> Self {
        Self {
            table: default_table(),
            leaves: default_leaves(),
            leaves_file: None,
        }
    }
}

/// Configuration validation errors
#[derive(Debug, Clone)]
pub enum ValidationError {
    Roster(String),
    Logging(String),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::Roster(msg) => write!(f, "Roster: {}", msg),
            ValidationError::Logging(msg) => write!(f, "Logging: {}", msg),
        }
    }
}

impl std::error::Error for ValidationError {}

impl RosterConfig {
    /// Validate roster configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.table.as_os_str().is_empty() {
            return Err("Roster table path cannot be empty".to_string());
        }
        if let Some(file) = &self.leaves_file {
            if file.as_os_str().is_empty() {
                return Err("Leaves file path cannot be empty".to_string());
            }
        }
        Ok(())
    }

    /// Roster table path, relative paths resolved against the workspace root
    pub fn table_path(&self, workspace_root: &Path) -> PathBuf {
        workspace_root.join(&self.table)
    }

    /// Leaf values, read from `leaves_file` when one is configured
    ///
    /// Lines are trimmed; blank lines are skipped.
    pub fn resolve_leaves(&self, workspace_root: &Path) -> Result<Vec<String>, ApiError> {
        let Some(file) = &self.leaves_file else {
            return Ok(self.leaves.clone());
        };
        let path = workspace_root.join(file);
        let text = std::fs::read_to_string(&path).map_err(|e| {
            ApiError::ConfigError(format!(
                "Failed to read leaves file {}: {}",
                path.display(),
                e
            ))
        })?;
        Ok(text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect())
    }
}

impl RollcallConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), Vec<ValidationError>> {
        let mut errors = Vec::new();

        if let Err(e) = self.roster.validate() {
            errors.push(ValidationError::Roster(e));
        }
        if let Err(e) = self.logging.validate() {
            errors.push(ValidationError::Logging(e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Effective configuration rendered as TOML
    pub fn to_toml(&self) -> Result<String, ApiError> {
        Ok(toml::to_string_pretty(self)?)
    }
}
