//! CLI output: error mapping and exit statuses.

use crate::error::ApiError;

/// Exit status when the identifier cannot be resolved from the roster table
pub const EXIT_REJECTED: i32 = 1;

/// Exit status for every other failure (configuration, logging, prompt, output)
pub const EXIT_FAILURE: i32 = 2;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &ApiError) -> String {
    e.to_string()
}
