//! md5tree CLI Binary
//!
//! Command-line interface for generating and verifying `files.md5` manifests.

use clap::Parser;
use md5tree::cli::{Cli, RunContext};
use md5tree::config::{ConfigLoader, Md5TreeConfig};
use md5tree::error::UsageError;
use md5tree::logging::{init_logging, LoggingConfig};
use std::process;
use tracing::{error, info};

fn main() {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) => {
            // --help and --version are not failures
            let code = if e.use_stderr() { 1 } else { 0 };
            let _ = e.print();
            process::exit(code);
        }
    };

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", md5tree::cli::map_error(&UsageError::Config(e)));
            process::exit(1);
        }
    };

    // Initialize logging early
    let logging_config = build_logging_config(&cli, &config.logging);
    if let Err(e) = init_logging(Some(&logging_config)) {
        eprintln!("Failed to initialize logging: {}", e);
        process::exit(1);
    }

    let mode = cli.mode();
    let context = match RunContext::new(cli.directory.clone(), config) {
        Ok(ctx) => ctx,
        Err(e) => {
            error!("Invalid invocation: {}", e);
            eprintln!("{}", md5tree::cli::map_error(&e));
            process::exit(1);
        }
    };

    info!(root = %context.root().display(), %mode, "md5tree starting");
    let accounting = context.execute(mode);
    info!(
        errors = accounting.errors,
        aborted = accounting.aborted,
        "md5tree finished"
    );
    process::exit(accounting.exit_code());
}

fn load_config(cli: &Cli) -> Result<Md5TreeConfig, md5tree::error::ConfigError> {
    match cli.config {
        Some(ref path) => ConfigLoader::load_from_file(path),
        None => ConfigLoader::load(),
    }
}

/// Build logging configuration from CLI args on top of the config file.
/// Precedence: CLI flags override config file override defaults.
fn build_logging_config(cli: &Cli, base: &LoggingConfig) -> LoggingConfig {
    let mut config = base.clone();

    if cli.verbose {
        config.level = "debug".to_string();
    }
    if let Some(ref level) = cli.log_level {
        config.level = level.clone();
    }
    if let Some(ref format) = cli.log_format {
        config.format = format.clone();
    }
    if let Some(ref output) = cli.log_output {
        config.output = output.clone();
    }
    if let Some(ref file) = cli.log_file {
        config.file = Some(file.clone());
        // A log file without an explicit output means "write to that file".
        if cli.log_output.is_none() {
            config.output = "file".to_string();
        }
    }

    config
}
