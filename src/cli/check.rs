//! Check implementation: load every input, validate each config, aggregate.

use anyhow::{Context, Result};
use clap::Args;
use std::path::PathBuf;

use crate::loader::{load_document, Format};
use crate::validate::validate_document;

#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Path to the service YAML config
    #[arg(long, visible_alias = "sc", value_name = "PATH", default_value = "config.yml")]
    pub service_config: PathBuf,

    /// Path to the JSON schema of the service config
    #[arg(long, visible_alias = "ss", value_name = "PATH")]
    pub service_config_json_schema: PathBuf,

    /// Paths to mirror YAML configs to check
    #[arg(long, visible_alias = "mc", value_name = "PATHS", num_args = 1..)]
    pub mirror_configs: Vec<PathBuf>,

    /// Path to the JSON schema of mirror configs; the service schema is
    /// used when absent
    #[arg(long, visible_alias = "ms", value_name = "PATH")]
    pub mirror_config_json_schema: Option<PathBuf>,
}

/// Run all validations. Returns `Ok(true)` when every config passed.
///
/// Load failures abort immediately; validation failures are logged and
/// collected so every config gets checked in one run.
pub fn run(args: CheckArgs) -> Result<bool> {
    // Stage 1: load everything before validating anything.
    let service_config = load_document(&args.service_config, Format::Yaml)?;
    let service_schema = load_document(&args.service_config_json_schema, Format::Json)?;
    let mirror_schema = args
        .mirror_config_json_schema
        .as_deref()
        .map(|path| load_document(path, Format::Json))
        .transpose()?;
    let mirror_configs = args
        .mirror_configs
        .iter()
        .map(|path| load_document(path, Format::Yaml))
        .collect::<Result<Vec<_>, _>>()?;

    // Stage 2: validate, collecting failures instead of stopping on the
    // first one.
    let mut all_valid = true;

    let result = validate_document(&service_config.data, &service_schema.data)
        .with_context(|| format!("failed to compile schema \"{}\"", service_schema.path.display()))?;
    if !result.valid {
        tracing::error!(
            "Service config \"{}\" is invalid because \"{}\"",
            service_config.path.display(),
            result.message.as_deref().unwrap_or("schema violation"),
        );
        all_valid = false;
    }

    // Mirrors are checked against their own schema when one is given.
    let mirror_schema = mirror_schema.as_ref().unwrap_or(&service_schema);
    for mirror in &mirror_configs {
        let result = validate_document(&mirror.data, &mirror_schema.data)
            .with_context(|| format!("failed to compile schema \"{}\"", mirror_schema.path.display()))?;
        if !result.valid {
            tracing::error!(
                "Mirror config \"{}\" is invalid because \"{}\"",
                mirror.path.display(),
                result.message.as_deref().unwrap_or("schema violation"),
            );
            all_valid = false;
        }
    }

    if all_valid {
        tracing::info!("All configs are valid");
    }

    Ok(all_valid)
}
