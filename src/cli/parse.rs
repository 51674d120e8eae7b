//! CLI parse: clap types for rollcall. No behavior; definitions only.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Rollcall - roster membership checks over a deterministic hash tree
#[derive(Parser, Debug)]
#[command(name = "rollcall")]
#[command(about = "Roster membership checks over a deterministic hash tree")]
pub struct Cli {
    /// Command to run (default: interactive verify)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Workspace root directory
    #[arg(long, default_value = ".", global = true)]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long, global = true)]
    pub log_format: Option<String>,

    /// Log output (stderr, stdout, file)
    #[arg(long, global = true)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long, global = true)]
    pub log_file: Option<PathBuf>,

    /// Never color the transcript
    #[arg(long, global = true)]
    pub no_color: bool,
}

impl Cli {
    /// Command to run, falling back to an interactive verify
    pub fn command(&self) -> Commands {
        self.command.clone().unwrap_or_default()
    }
}

/// Output format for report commands
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Resolve an identifier and check it against the roster tree
    Verify {
        /// Identifier to check (prompted for when omitted)
        id: Option<String>,
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Show the roster tree and its root digest
    Tree {
        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
    /// Print the digest of a value
    Digest {
        /// Value to digest
        value: String,
    },
    /// Print the effective configuration as TOML
    Config,
}

impl Default for Commands {
    fn default() -> Self {
        Commands::Verify {
            id: None,
            format: OutputFormat::Text,
        }
    }
}
