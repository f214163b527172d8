//! Config and schema file loading.

use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Parse format, declared by the call site. Configs are YAML, schemas are
/// JSON; file contents are never sniffed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    Yaml,
    Json,
}

/// A parsed document together with the path it was read from, so later
/// error messages can name the file.
#[derive(Debug, Clone)]
pub struct Document {
    pub path: PathBuf,
    pub data: serde_json::Value,
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read \"{}\" because \"{source}\"", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("the YAML file \"{}\" is invalid because \"{source}\"", path.display())]
    InvalidYaml {
        path: PathBuf,
        source: serde_yaml::Error,
    },

    #[error("the JSON file \"{}\" is invalid because \"{source}\"", path.display())]
    InvalidJson {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// Read `path` and parse it according to `format`.
///
/// YAML is parsed through serde into a `serde_json::Value`, so both formats
/// yield the same document model downstream.
pub fn load_document(path: &Path, format: Format) -> Result<Document, LoadError> {
    let content = fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    let data = match format {
        Format::Yaml => serde_yaml::from_str(&content).map_err(|source| LoadError::InvalidYaml {
            path: path.to_path_buf(),
            source,
        })?,
        Format::Json => serde_json::from_str(&content).map_err(|source| LoadError::InvalidJson {
            path: path.to_path_buf(),
            source,
        })?,
    };

    tracing::debug!("Loaded {} as {:?}", path.display(), format);

    Ok(Document {
        path: path.to_path_buf(),
        data,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_load_yaml_document() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("config.yml");
        fs::write(&path, "name: primary\nmirrors:\n  - eu\n  - us\n").expect("write");

        let doc = load_document(&path, Format::Yaml).expect("load");
        assert_eq!(doc.path, path);
        assert_eq!(doc.data, json!({"name": "primary", "mirrors": ["eu", "us"]}));
    }

    #[test]
    fn test_load_json_document() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("schema.json");
        fs::write(&path, r#"{"type": "object", "required": ["name"]}"#).expect("write");

        let doc = load_document(&path, Format::Json).expect("load");
        assert_eq!(doc.data, json!({"type": "object", "required": ["name"]}));
    }

    #[test]
    fn test_invalid_yaml_names_path() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("broken.yml");
        fs::write(&path, "name: [unclosed\n").expect("write");

        let err = load_document(&path, Format::Yaml).expect_err("should fail");
        let message = err.to_string();
        assert!(message.contains("broken.yml"), "message should name the file: {message}");
        assert!(message.contains("is invalid because"), "message: {message}");
    }

    #[test]
    fn test_invalid_json_names_path() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("broken.json");
        fs::write(&path, "{\"type\": \"object\",}").expect("write");

        let err = load_document(&path, Format::Json).expect_err("should fail");
        assert!(err.to_string().contains("broken.json"));
    }

    #[test]
    fn test_missing_file_names_path() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("nowhere.yml");

        let err = load_document(&path, Format::Yaml).expect_err("should fail");
        assert!(matches!(err, LoadError::Read { .. }));
        assert!(err.to_string().contains("nowhere.yml"));
    }

    #[test]
    fn test_yaml_is_not_parsed_as_json() {
        let tmp = TempDir::new().expect("tmp");
        let path = tmp.path().join("config.yml");
        fs::write(&path, "name: primary\n").expect("write");

        let err = load_document(&path, Format::Json).expect_err("format is declared, not sniffed");
        assert!(matches!(err, LoadError::InvalidJson { .. }));
    }
}
