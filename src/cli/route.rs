//! CLI route: run context for one invocation. Validates the root directory and
//! dispatches the selected mode to the engine.

use crate::config::Md5TreeConfig;
use crate::engine::{Engine, Mode};
use crate::error::UsageError;
use crate::report::{Reporter, RunAccounting};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::error;

/// Runtime context for CLI execution: the validated root and loaded config.
pub struct RunContext {
    root: PathBuf,
    config: Md5TreeConfig,
}

impl RunContext {
    /// Create a run context. The root must exist and be a directory.
    pub fn new(root: PathBuf, config: Md5TreeConfig) -> Result<Self, UsageError> {
        if !root.exists() {
            return Err(UsageError::NoSuchDirectory(root));
        }
        if !root.is_dir() {
            return Err(UsageError::NotADirectory(root));
        }
        config.validate()?;
        Ok(Self { root, config })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Run `mode` against the console streams.
    pub fn execute(&self, mode: Mode) -> RunAccounting {
        let mut reporter = Reporter::console();
        self.execute_with(mode, &mut reporter);
        reporter.finish()
    }

    /// Run `mode`, reporting through `reporter`. A fatal error is reported as
    /// an abort rather than returned.
    pub fn execute_with<O: Write, E: Write>(&self, mode: Mode, reporter: &mut Reporter<O, E>) {
        let engine = Engine::with_options(self.root.clone(), self.config.engine_options());
        if let Err(e) = engine.run(mode, reporter) {
            error!(error = %e, "Run aborted");
            reporter.abort(&e);
        }
    }
}
