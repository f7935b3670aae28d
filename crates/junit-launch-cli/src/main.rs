//! junit-launch: render a directory of JUnit XML reports as a test launch
//!
//! Loads every `*.xml` report in the given directory, orders the suites by
//! start time and prints the resulting launch to stdout.

use anyhow::Context;
use clap::Parser;
use tracing::{debug, warn};

use junit_launch_cli::config::{Config, OutputFormat};
use junit_launch_cli::render::{build_launch, render_json, render_text};

fn main() -> anyhow::Result<()> {
    let config = Config::parse();

    // Logs go to stderr; stdout carries the rendered launch
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(config.log_level().into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let directory = config.validate()?;
    debug!(dir = %directory.display(), "Loading JUnit reports");

    let report = junit_launch::load(&directory)
        .with_context(|| format!("failed to load reports from {}", directory.display()))?;
    if report.is_empty() {
        warn!(dir = %directory.display(), "No JUnit reports found");
    }

    let launch = build_launch(config.launch_name(), &report);
    let output = match config.format {
        OutputFormat::Json => render_json(&launch).context("failed to serialize launch")?,
        OutputFormat::Text => render_text(&launch),
    };
    println!("{output}");

    Ok(())
}
