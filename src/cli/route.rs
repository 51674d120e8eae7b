//! CLI route: single route table and run context. Dispatches to domain services and presentation.

use crate::cli::help::command_name;
use crate::cli::parse::{Commands, OutputFormat};
use crate::cli::presentation::{
    format_tree_json, format_tree_text, format_verify_json, format_verify_text, TreeReport,
    VerifyReport,
};
use crate::config::{ConfigLoader, RollcallConfig};
use crate::error::ApiError;
use crate::roster;
use crate::tree::{build_tree, compute_digest};
use crate::verify;
use std::io::{BufRead, IsTerminal};
use std::path::PathBuf;
use tracing::{info, warn};

/// Result of a command that ran to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// Command finished; output for stdout
    Completed(String),
    /// Identifier could not be resolved; output for stdout, run ends with exit status 1
    Rejected(String),
}

/// Runtime context for CLI execution: workspace, loaded configuration, output settings.
pub struct RunContext {
    workspace_root: PathBuf,
    config: RollcallConfig,
    color: bool,
}

impl RunContext {
    /// Create run context from workspace root and optional config path. Uses ConfigLoader only.
    pub fn new(
        workspace_root: PathBuf,
        config_path: Option<PathBuf>,
        color: bool,
    ) -> Result<Self, ApiError> {
        let config = match config_path {
            Some(ref cfg_path) => ConfigLoader::load_from_file(cfg_path)?,
            None => ConfigLoader::load(&workspace_root)?,
        };
        Ok(Self::with_config(workspace_root, config, color))
    }

    /// Create run context from an already loaded configuration.
    pub fn with_config(workspace_root: PathBuf, config: RollcallConfig, color: bool) -> Self {
        Self {
            workspace_root,
            config,
            color,
        }
    }

    /// Execute a CLI command via the single route table.
    pub fn execute(&self, command: &Commands) -> Result<RunOutcome, ApiError> {
        info!(command = command_name(command), "Executing command");
        match command {
            Commands::Verify { id, format } => {
                let identifier = match id {
                    Some(id) => normalize_identifier(id)?,
                    None => prompt_identifier()?,
                };
                self.verify(&identifier, *format)
            }
            Commands::Tree { format } => self.tree(*format).map(RunOutcome::Completed),
            Commands::Digest { value } => Ok(RunOutcome::Completed(
                compute_digest(value.as_bytes()).to_string(),
            )),
            Commands::Config => self.config.to_toml().map(RunOutcome::Completed),
        }
    }

    /// Resolve `identifier` from the roster table, then check it against the tree.
    pub fn verify(&self, identifier: &str, format: OutputFormat) -> Result<RunOutcome, ApiError> {
        let table_path = self.config.roster.table_path(&self.workspace_root);

        let name = match roster::find_name(&table_path, identifier) {
            Ok(name) => name,
            Err(err) => {
                warn!(identifier, error = %err, "Identifier rejected");
                let report = VerifyReport::rejected(identifier, &err);
                return self.render_verify(&report, format).map(RunOutcome::Rejected);
            }
        };

        let leaves = self.config.roster.resolve_leaves(&self.workspace_root)?;
        let tree = build_tree(&leaves);
        let verification = verify::verify(tree.as_ref(), identifier);
        info!(
            identifier,
            present = verification.present,
            leaves_scanned = verification.leaves_scanned,
            "Verification completed"
        );

        let report = VerifyReport::checked(identifier, name, tree.as_ref(), verification);
        self.render_verify(&report, format).map(RunOutcome::Completed)
    }

    /// Build the configured tree and describe it.
    pub fn tree(&self, format: OutputFormat) -> Result<String, ApiError> {
        let leaves = self.config.roster.resolve_leaves(&self.workspace_root)?;
        let tree = build_tree(&leaves);
        let report = TreeReport::new(tree.as_ref());
        match format {
            OutputFormat::Text => Ok(format_tree_text(&report)),
            OutputFormat::Json => format_tree_json(&report),
        }
    }

    fn render_verify(
        &self,
        report: &VerifyReport,
        format: OutputFormat,
    ) -> Result<String, ApiError> {
        match format {
            OutputFormat::Text => Ok(format_verify_text(report, self.color)),
            OutputFormat::Json => format_verify_json(report),
        }
    }
}

/// First whitespace-delimited token of `input`; blank input is an error.
fn normalize_identifier(input: &str) -> Result<String, ApiError> {
    input
        .split_whitespace()
        .next()
        .map(str::to_string)
        .ok_or_else(|| ApiError::PromptError("No registration number entered".to_string()))
}

/// Ask for the identifier; reads one line from stdin when it is not a terminal.
fn prompt_identifier() -> Result<String, ApiError> {
    let input = if std::io::stdin().is_terminal() {
        dialoguer::Input::<String>::new()
            .with_prompt("Enter Registration Number")
            .interact_text()
            .map_err(|e| ApiError::PromptError(e.to_string()))?
    } else {
        let mut line = String::new();
        std::io::stdin().lock().read_line(&mut line)?;
        line
    };

    normalize_identifier(&input)
}
