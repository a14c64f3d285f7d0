//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::UsageError;

/// Map a usage error to the line printed before exiting with status 1.
pub fn map_error(e: &UsageError) -> String {
    e.to_string()
}
