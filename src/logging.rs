//! Logging System
//!
//! Diagnostic logging via `tracing`, kept apart from the report lines the
//! tool prints for the user. Off unless enabled by flag, config or
//! `MD5TREE_LOG`.

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::Mutex;
use tracing_subscriber::fmt::time::ChronoUtc;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Registry};

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: trace, debug, info, warn, error, off
    #[serde(default = "default_log_level")]
    pub level: String,

    /// Output format: json, text (default: text)
    #[serde(default = "default_format")]
    pub format: String,

    /// Output destination: stderr, file
    #[serde(default = "default_output")]
    pub output: String,

    /// Log file path (required when output is "file")
    #[serde(default)]
    pub file: Option<PathBuf>,

    /// Enable colored output (text format on stderr only)
    #[serde(default = "default_true")]
    pub color: bool,
}

fn default_log_level() -> String {
    "off".to_string()
}

fn default_format() -> String {
    "text".to_string()
}

fn default_output() -> String {
    "stderr".to_string()
}

fn default_true() -> bool {
    true
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_format(),
            output: default_output(),
            file: None,
            color: default_true(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LogOutput {
    Stderr,
    File,
}

impl LoggingConfig {
    /// Check format and output values without installing anything
    pub fn validate(&self) -> Result<(), ConfigError> {
        parse_format(&self.format)?;
        if parse_output(&self.output)? == LogOutput::File && self.file.is_none() {
            return Err(ConfigError::Logging(
                "log output 'file' requires a log file path".to_string(),
            ));
        }
        Ok(())
    }
}

/// Initialize the logging system
///
/// Priority order (highest to lowest):
/// 1. Environment variables (MD5TREE_LOG, MD5TREE_LOG_FORMAT)
/// 2. The given configuration (CLI flags already folded in)
/// 3. Defaults
pub fn init_logging(config: Option<&LoggingConfig>) -> Result<(), ConfigError> {
    let default_config = LoggingConfig::default();
    let config = config.unwrap_or(&default_config);

    let filter = build_env_filter(config)?;
    let format = determine_format(config)?;
    let output = parse_output(&config.output)?;

    let writer = match output {
        LogOutput::Stderr => BoxMakeWriter::new(std::io::stderr),
        LogOutput::File => BoxMakeWriter::new(Mutex::new(open_log_file(config)?)),
    };
    let use_color = config.color && output == LogOutput::Stderr;

    let registry = Registry::default().with(filter);
    let result = match format {
        LogFormat::Json => registry
            .with(
                fmt::layer()
                    .json()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_writer(writer),
            )
            .try_init(),
        LogFormat::Text => registry
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_timer(ChronoUtc::rfc_3339())
                    .with_ansi(use_color)
                    .with_writer(writer),
            )
            .try_init(),
    };

    result.map_err(|e| ConfigError::Logging(e.to_string()))
}

fn open_log_file(config: &LoggingConfig) -> Result<std::fs::File, ConfigError> {
    let log_file = config.file.as_ref().ok_or_else(|| {
        ConfigError::Logging("log output 'file' requires a log file path".to_string())
    })?;

    if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            ConfigError::Logging(format!("failed to create log directory: {}", e))
        })?;
    }
    std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)
        .map_err(|e| {
            ConfigError::Logging(format!("failed to open log file {:?}: {}", log_file, e))
        })
}

/// Build environment filter from config or environment variables
fn build_env_filter(config: &LoggingConfig) -> Result<EnvFilter, ConfigError> {
    if let Ok(filter) = EnvFilter::try_from_env("MD5TREE_LOG") {
        return Ok(filter);
    }

    EnvFilter::try_new(&config.level)
        .map_err(|e| ConfigError::Logging(format!("invalid log level {:?}: {}", config.level, e)))
}

/// Determine output format from config or environment
fn determine_format(config: &LoggingConfig) -> Result<LogFormat, ConfigError> {
    if let Ok(format) = std::env::var("MD5TREE_LOG_FORMAT") {
        if let Ok(format) = parse_format(&format) {
            return Ok(format);
        }
    }
    parse_format(&config.format)
}

fn parse_format(format: &str) -> Result<LogFormat, ConfigError> {
    match format {
        "text" => Ok(LogFormat::Text),
        "json" => Ok(LogFormat::Json),
        _ => Err(ConfigError::Logging(format!(
            "invalid log format: {} (must be 'json' or 'text')",
            format
        ))),
    }
}

fn parse_output(output: &str) -> Result<LogOutput, ConfigError> {
    match output {
        "stderr" => Ok(LogOutput::Stderr),
        "file" => Ok(LogOutput::File),
        _ => Err(ConfigError::Logging(format!(
            "invalid log output: {} (must be 'stderr' or 'file')",
            output
        ))),
    }
}
