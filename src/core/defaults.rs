use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::utils::io;

/// Root configuration structure for an optional `recase.json`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RecaseConfig {
    /// File name suffixes that make a file eligible for rewriting.
    /// Matched case-sensitively against the end of the file name.
    #[serde(default = "default_extensions")]
    pub extensions: Vec<String>,
}

impl Default for RecaseConfig {
    fn default() -> Self {
        Self {
            extensions: default_extensions(),
        }
    }
}

fn default_extensions() -> Vec<String> {
    vec![".txt".to_string(), ".py".to_string(), ".cpp".to_string()]
}

/// Load configuration, falling back to built-in defaults when no file is given.
pub fn load_config(path: Option<&Path>) -> Result<RecaseConfig> {
    let Some(path) = path else {
        return Ok(RecaseConfig::default());
    };

    let display = path.display().to_string();
    let raw = io::read_file(path, &format!("read config {}", display))?;
    let config: RecaseConfig =
        serde_json::from_str(&raw).map_err(|e| Error::config_invalid_json(&display, e))?;

    validate(&config)?;
    Ok(config)
}

fn validate(config: &RecaseConfig) -> Result<()> {
    if config.extensions.is_empty() {
        return Err(Error::config_invalid_value(
            "extensions",
            None,
            "At least one extension is required",
        ));
    }

    for ext in &config.extensions {
        if ext.len() < 2 || !ext.starts_with('.') {
            return Err(Error::config_invalid_value(
                "extensions",
                Some(ext.clone()),
                "Extensions must start with '.' and name a suffix, e.g. \".txt\"",
            ));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorCode;
    use std::fs;
    use tempfile::TempDir;

    fn write_config(dir: &TempDir, body: &str) -> std::path::PathBuf {
        let path = dir.path().join("recase.json");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn defaults_cover_txt_py_cpp() {
        let config = load_config(None).unwrap();
        assert_eq!(config.extensions, vec![".txt", ".py", ".cpp"]);
    }

    #[test]
    fn empty_object_takes_defaults() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "{}");

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config, RecaseConfig::default());
    }

    #[test]
    fn extensions_can_be_overridden() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"extensions": [".md", ".rs"]}"#);

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.extensions, vec![".md", ".rs"]);
    }

    #[test]
    fn malformed_json_is_config_error() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, "{ extensions: ");

        let err = load_config(Some(&path)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalidJson);
    }

    #[test]
    fn extension_without_dot_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"extensions": ["txt"]}"#);

        let err = load_config(Some(&path)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalidValue);
        assert_eq!(err.details["value"], "txt");
    }

    #[test]
    fn empty_extension_list_is_rejected() {
        let dir = TempDir::new().unwrap();
        let path = write_config(&dir, r#"{"extensions": []}"#);

        let err = load_config(Some(&path)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ConfigInvalidValue);
    }

    #[test]
    fn missing_config_file_is_io_error() {
        let err = load_config(Some(Path::new("/nonexistent/recase.json"))).unwrap_err();
        assert_eq!(err.code, ErrorCode::InternalIoError);
    }
}
