//! Global config file source: $XDG_CONFIG_HOME/md5tree/config.toml

use config::builder::DefaultState;
use config::{ConfigBuilder, ConfigError, File};
use directories::BaseDirs;
use std::path::PathBuf;
use tracing::debug;

/// Path to the global config file, when a home directory can be determined.
fn global_config_path() -> Option<PathBuf> {
    BaseDirs::new().map(|dirs| dirs.config_dir().join("md5tree").join("config.toml"))
}

/// Add the global config file source to the builder if it exists.
pub fn add_to_builder(
    builder: ConfigBuilder<DefaultState>,
) -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    match global_config_path() {
        Some(path) if path.is_file() => {
            debug!(config_path = %path.display(), "Using global config file");
            Ok(builder.add_source(File::from(path).required(false)))
        }
        _ => Ok(builder),
    }
}
