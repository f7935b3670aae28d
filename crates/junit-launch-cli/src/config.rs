//! Command-line configuration for junit-launch
//!
//! This module provides the argument parser, the output format selection
//! and the logging level derived from the verbosity flags.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

/// Launch name used when `--name` is not given
pub const DEFAULT_LAUNCH_NAME: &str = "junit-launch";

/// Render a directory of JUnit XML reports as a test launch
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "junit-launch")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Directory containing the `*.xml` report files
    ///
    /// Only regular files with an exact `.xml` extension are read. Files
    /// that fail to parse are logged and skipped.
    #[arg(env = "JUNIT_LAUNCH_DIR")]
    pub directory: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Json)]
    pub format: OutputFormat,

    /// Launch name shown in the output
    #[arg(short, long)]
    pub name: Option<String>,

    /// Enable verbose logging (debug level)
    ///
    /// Logs every skipped directory entry. Logs are written to stderr so
    /// they never mix with the rendered launch.
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    ///
    /// Only errors and warnings will be logged.
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

/// How the launch is printed
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Pretty-printed JSON launch tree
    #[default]
    Json,
    /// Human-readable summary
    Text,
}

impl Config {
    /// Get the launch name, using [`DEFAULT_LAUNCH_NAME`] if not specified
    #[must_use]
    pub fn launch_name(&self) -> &str {
        self.name.as_deref().unwrap_or(DEFAULT_LAUNCH_NAME)
    }

    /// Validate the configuration and return the report directory
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - No directory was given
    /// - The directory doesn't exist or is not a directory
    pub fn validate(&self) -> Result<PathBuf, ConfigError> {
        let directory = match self.directory {
            Some(ref dir) if !dir.as_os_str().is_empty() => dir.clone(),
            _ => return Err(ConfigError::MissingDirectory),
        };
        if !directory.exists() {
            return Err(ConfigError::DirectoryNotFound(directory));
        }
        if !directory.is_dir() {
            return Err(ConfigError::NotDirectory(directory));
        }
        Ok(directory)
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No report directory given
    #[error("No report directory given (pass DIRECTORY or set JUNIT_LAUNCH_DIR)")]
    MissingDirectory,

    /// Report directory not found
    #[error("Report directory not found: {0}")]
    DirectoryNotFound(PathBuf),

    /// Report path is not a directory
    #[error("Report path is not a directory: {0}")]
    NotDirectory(PathBuf),
}
