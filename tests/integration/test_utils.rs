//! Shared test utilities for integration tests
//!
//! Runs the engine against in-memory streams, and the compiled binary with an
//! isolated config home.

use md5tree::engine::{Engine, Mode};
use md5tree::report::{Reporter, RunAccounting};
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

/// Captured result of one engine run
pub struct Captured {
    pub out: String,
    pub err: String,
    pub accounting: RunAccounting,
    pub aborted_with: Option<String>,
}

impl Captured {
    /// Number of lines on either stream starting with `prefix`
    pub fn lines_starting_with(&self, prefix: &str) -> usize {
        self.out
            .lines()
            .chain(self.err.lines())
            .filter(|line| line.starts_with(prefix))
            .count()
    }
}

/// Run `mode` over `root` and capture both report streams
pub fn run_mode(root: &Path, mode: Mode) -> Captured {
    let mut reporter = Reporter::new(Vec::new(), Vec::new());
    let result = Engine::new(root.to_path_buf()).run(mode, &mut reporter);
    let (out, err, accounting) = reporter.into_parts();
    Captured {
        out: String::from_utf8(out).unwrap(),
        err: String::from_utf8(err).unwrap(),
        accounting,
        aborted_with: result.err().map(|e| e.to_string()),
    }
}

/// Write `files` (name, content) under `dir`, creating it first
pub fn write_files(dir: &Path, files: &[(&str, &str)]) {
    fs::create_dir_all(dir).unwrap();
    for (name, content) in files {
        fs::write(dir.join(name), content).unwrap();
    }
}

/// Run the md5tree binary with `args`, isolated from the user's config
pub fn run_binary(config_home: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_md5tree"))
        .args(args)
        .env("XDG_CONFIG_HOME", config_home)
        .env("HOME", config_home)
        .env_remove("MD5TREE_LOG")
        .env_remove("MD5TREE_LOG_FORMAT")
        .output()
        .unwrap()
}
