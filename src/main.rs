//! config-checker: validate YAML configs against JSON Schema definitions
//!
//! Loads a service config plus any number of mirror configs, checks each
//! against its JSON schema, and reports per-file results through the exit
//! code and log output. Built for CI pipelines.

use anyhow::Result;
use std::process::ExitCode;

mod cli;
mod loader;
mod validate;

fn main() -> Result<ExitCode> {
    cli::run()
}
