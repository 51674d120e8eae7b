//! CLI domain: parse, route, help, output, and presentation only.
//! No domain logic; a single route table dispatches to the tree, verifier and roster.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::{map_error, EXIT_FAILURE, EXIT_REJECTED};
pub use parse::{Cli, Commands, OutputFormat};
pub use presentation::{
    format_tree_json, format_tree_text, format_verify_json, format_verify_text, TreeReport,
    VerifyReport, VerifyStatus,
};
pub use route::{RunContext, RunOutcome};
