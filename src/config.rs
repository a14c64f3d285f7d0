//! Configuration System
//!
//! Layered configuration: built-in defaults, the user's global config file,
//! then `MD5TREE_*` environment variables. An explicit `--config` file
//! replaces the global file.

use crate::engine::EngineOptions;
use crate::error::ConfigError;
use crate::logging::LoggingConfig;
use crate::tree::hasher::DEFAULT_CHUNK_SIZE;
use crate::tree::walker::WalkerConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Md5TreeConfig {
    /// Traversal and hashing settings
    #[serde(default)]
    pub scan: ScanConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Traversal and hashing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanConfig {
    /// Bytes read per chunk while hashing
    #[serde(default = "default_chunk_size")]
    pub chunk_size: usize,

    /// Descend into symlinked directories
    #[serde(default)]
    pub follow_symlinks: bool,
}

fn default_chunk_size() -> usize {
    DEFAULT_CHUNK_SIZE
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            follow_symlinks: false,
        }
    }
}

impl Md5TreeConfig {
    /// Validate the entire configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.scan.chunk_size == 0 {
            return Err(ConfigError::Invalid(
                "scan.chunk_size must be greater than zero".to_string(),
            ));
        }
        self.logging.validate()
    }

    /// Engine settings derived from this configuration
    pub fn engine_options(&self) -> EngineOptions {
        EngineOptions {
            chunk_size: self.scan.chunk_size,
            walker: WalkerConfig {
                follow_symlinks: self.scan.follow_symlinks,
            },
        }
    }
}
