//! Config loading facade: the single entry point for building an `Md5TreeConfig`.

use super::merge::builder_with_defaults;
use super::sources::{environment, global_file};
use super::Md5TreeConfig;
use crate::error::ConfigError;
use config::File;
use std::path::Path;
use tracing::debug;

/// Loads configuration from the standard sources
pub struct ConfigLoader;

impl ConfigLoader {
    /// Defaults, then the global config file if present, then environment.
    pub fn load() -> Result<Md5TreeConfig, ConfigError> {
        let builder = builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = environment::add_to_builder(builder);
        Self::finish(builder.build()?)
    }

    /// Defaults, then `path` (which must exist), then environment.
    pub fn load_from_file(path: &Path) -> Result<Md5TreeConfig, ConfigError> {
        debug!(config_path = %path.display(), "Loading explicit config file");
        let builder = builder_with_defaults()?.add_source(File::from(path).required(true));
        let builder = environment::add_to_builder(builder);
        Self::finish(builder.build()?)
    }

    fn finish(raw: config::Config) -> Result<Md5TreeConfig, ConfigError> {
        let config: Md5TreeConfig = raw.try_deserialize()?;
        config.validate()?;
        Ok(config)
    }
}
