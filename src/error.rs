//! Error types for the manifest engine.
//!
//! Only failures that stop a run are modelled here. Per-file problems found
//! while verifying (mismatches, missing files, unreadable files) are reported
//! and counted by [`crate::report::Reporter`] instead.

use std::path::PathBuf;
use thiserror::Error;

/// Problems with the command line or the directory argument. No traversal is
/// attempted when one of these is raised.
#[derive(Debug, Error)]
pub enum UsageError {
    #[error("No such directory: {0}")]
    NoSuchDirectory(PathBuf),

    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

/// Failures that abort a generate run.
#[derive(Debug, Error)]
pub enum FatalError {
    #[error("cannot read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0}: content read back differs from content written")]
    WriteMismatch(PathBuf),

    #[error("{0}: file name is not valid UTF-8 and cannot be listed in a manifest")]
    NonUtf8Name(PathBuf),
}

/// Configuration loading and logging setup errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0}")]
    Load(#[from] config::ConfigError),

    #[error("{0}")]
    Invalid(String),

    #[error("logging: {0}")]
    Logging(String),
}
