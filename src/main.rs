//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `site_grader` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - Exit status
//!
//! All core functionality is implemented in the library crate.

use anyhow::{Context, Result};
use clap::Parser;
use std::process;

use site_grader::initialization::init_logger_with;
use site_grader::{run_batch, Config};

#[tokio::main]
async fn main() -> Result<()> {
    // Parse command-line arguments into Config
    let config = Config::parse();

    // Initialize logger based on config
    let log_level = config.log_level.clone();
    let log_format = config.log_format.clone();
    init_logger_with(log_level.into(), log_format).context("Failed to initialize logger")?;

    // Run the batch using the library; per-site reports and the summary
    // print as it goes, so there is nothing left to render here.
    match run_batch(config).await {
        Ok(_report) => Ok(()),
        Err(e) => {
            eprintln!("site_grader error: {:#}", e);
            process::exit(1);
        }
    }
}
