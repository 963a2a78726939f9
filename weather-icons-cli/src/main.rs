//! Binary crate for the `weather-icons` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - Interactive configuration
//! - Plain and JSON output

use clap::Parser;
use std::io::IsTerminal;
use tracing_subscriber::EnvFilter;
use weather_icons_core::{Config, config::DEFAULT_LOG_FILTER};

mod cli;

fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    let loaded = Config::load();
    setup_logging(loaded.as_ref().ok());
    cmd.run(loaded)
}

/// Diagnostics go to stderr so stdout only carries results.
/// `RUST_LOG` wins over the configured filter.
fn setup_logging(config: Option<&Config>) {
    let directive = config.map_or(DEFAULT_LOG_FILTER, Config::log_filter);
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(directive))
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}
