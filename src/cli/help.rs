//! Command descriptors used in logs.

use crate::cli::parse::Commands;

/// Stable command name for logs and summaries.
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Verify { id: None, .. } => "verify.interactive",
        Commands::Verify { .. } => "verify",
        Commands::Tree { .. } => "tree",
        Commands::Digest { .. } => "digest",
        Commands::Config => "config",
    }
}
