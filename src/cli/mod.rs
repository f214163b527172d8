//! Command-line interface for config-checker
//!
//! One flat command: flags name the configs and schemas to check.

use anyhow::Result;
use clap::Parser;
use std::process::ExitCode;
use tracing::Level;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod check;

/// Validate service and mirror YAML configs against JSON Schema definitions
#[derive(Parser)]
#[command(name = "config-checker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(flatten)]
    check: check::CheckArgs,

    /// Enable verbose logging (sets log level to DEBUG)
    #[arg(short, long)]
    verbose: bool,
}

pub fn run() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Wire verbose flag to the tracing log level.
    // RUST_LOG in the environment always wins; otherwise --verbose raises
    // the default from INFO to DEBUG.
    let filter = if cli.verbose {
        EnvFilter::from_default_env().add_directive(Level::DEBUG.into())
    } else {
        EnvFilter::from_default_env().add_directive(Level::INFO.into())
    };
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .try_init();

    let all_valid = check::run(cli.check)?;
    Ok(if all_valid {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}
