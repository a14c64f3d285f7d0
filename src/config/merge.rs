//! Merge rules: defaults applied beneath every other source.

use crate::tree::hasher::DEFAULT_CHUNK_SIZE;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError};

/// Create a Config builder with defaults applied.
pub fn builder_with_defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    Config::builder()
        .set_default("scan.chunk_size", DEFAULT_CHUNK_SIZE as i64)?
        .set_default("scan.follow_symlinks", false)?
        .set_default("logging.level", "off")?
        .set_default("logging.format", "text")?
        .set_default("logging.output", "stderr")
}
