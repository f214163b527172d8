//! JSON Schema validation.
//!
//! Thin pass-through to the `jsonschema` crate; schema semantics (types,
//! required properties, enums, patterns, nesting) live entirely there.

use anyhow::{anyhow, Result};
use serde_json::Value;

/// Outcome of checking one document against one schema.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub valid: bool,
    pub message: Option<String>,
}

/// Validate `document` against `schema`, reporting the first violation.
///
/// A schema that cannot be compiled is an `Err`, distinct from a document
/// that merely fails validation.
pub fn validate_document(document: &Value, schema: &Value) -> Result<ValidationResult> {
    let validator = jsonschema::validator_for(schema)
        .map_err(|err| anyhow!("the JSON schema is invalid because \"{err}\""))?;

    match validator.validate(document) {
        Ok(()) => Ok(ValidationResult {
            valid: true,
            message: None,
        }),
        Err(err) => {
            let location = err.instance_path.to_string();
            let message = if location.is_empty() {
                err.to_string()
            } else {
                format!("{err} (at {location})")
            };
            Ok(ValidationResult {
                valid: false,
                message: Some(message),
            })
        }
    }
}
