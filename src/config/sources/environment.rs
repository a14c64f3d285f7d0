//! Environment source: `MD5TREE_SCAN__CHUNK_SIZE=4096` sets `scan.chunk_size`.

use config::builder::DefaultState;
use config::{ConfigBuilder, Environment};

pub const ENV_PREFIX: &str = "MD5TREE";

/// `MD5TREE_` prefix, `__` between nested keys.
pub fn source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .try_parsing(true)
}

/// Layer `MD5TREE_*` variables over whatever the builder already holds.
pub fn add_to_builder(builder: ConfigBuilder<DefaultState>) -> ConfigBuilder<DefaultState> {
    builder.add_source(source())
}
