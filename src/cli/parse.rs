//! CLI parse: clap types for md5tree. No behavior beyond mode selection.

use crate::engine::Mode;
use clap::Parser;
use std::path::PathBuf;

/// md5tree - generate and verify per-directory MD5 manifests
#[derive(Parser, Debug)]
#[command(name = "md5tree", version)]
#[command(about = "Generate and verify files.md5 checksum manifests across a directory tree")]
pub struct Cli {
    /// Root directory to process
    #[arg(default_value = ".")]
    pub directory: PathBuf,

    /// Create files.md5 in every directory that has files but no manifest
    #[arg(short = 'g', long, conflicts_with = "find_missing")]
    pub generate: bool,

    /// List directories that have files but no manifest
    #[arg(short = 'm', long)]
    pub find_missing: bool,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(long)]
    pub verbose: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Mode selected by the flags; verify when neither is given
    pub fn mode(&self) -> Mode {
        if self.generate {
            Mode::Generate
        } else if self.find_missing {
            Mode::FindMissing
        } else {
            Mode::Verify
        }
    }
}
