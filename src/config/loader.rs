//! Configuration document loading.
//!
//! This module reads the network configuration document from disk and parses
//! it into [`NetworkConfig`]. A missing file maps to
//! [`FabnetError::ConfigNotFound`] so the CLI can surface it through the same
//! critical path as an unsupported tool version.

use crate::config::schema::NetworkConfig;
use crate::error::{FabnetError, Result};
use std::fs;
use std::path::Path;

/// Fabnet tool versions the validator accepts.
pub const SUPPORTED_FABNET_VERSIONS: &[&str] = &["0.1.0"];

/// Fabric platform versions the validator accepts.
pub const SUPPORTED_FABRIC_VERSIONS: &[&str] = &["1.4.3", "1.4.4"];

/// Load and parse a network configuration document.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the JSON is invalid or structurally wrong.
pub fn load_config_file(path: &Path) -> Result<NetworkConfig> {
    tracing::debug!(path = %path.display(), "loading network config");

    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            FabnetError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            FabnetError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse JSON content into a [`NetworkConfig`].
///
/// `source_path` is only used for error reporting.
pub fn parse_config(content: &str, source_path: &Path) -> Result<NetworkConfig> {
    serde_json::from_str(content).map_err(|e| FabnetError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const VALID_DOC: &str = r#"{
        "fabnetVersion": "0.1.0",
        "networkSettings": { "fabricVersion": "1.4.4" },
        "rootOrg": {
            "orderer": { "consensus": "solo", "instances": 1 }
        }
    }"#;

    #[test]
    fn loads_existing_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("network.json");
        fs::write(&path, VALID_DOC).unwrap();

        let config = load_config_file(&path).unwrap();
        assert_eq!(config.fabnet_version, "0.1.0");
    }

    #[test]
    fn missing_file_is_config_not_found() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nope.json");

        let err = load_config_file(&path).unwrap_err();
        assert!(matches!(err, FabnetError::ConfigNotFound { .. }));
    }

    #[test]
    fn invalid_json_is_parse_error() {
        let err = parse_config("{ not json", &PathBuf::from("bad.json")).unwrap_err();
        match err {
            FabnetError::ConfigParseError { path, .. } => {
                assert_eq!(path, PathBuf::from("bad.json"));
            }
            other => panic!("expected ConfigParseError, got {other:?}"),
        }
    }

    #[test]
    fn structurally_wrong_json_is_parse_error() {
        let err = parse_config(r#"{"fabnetVersion": 42}"#, &PathBuf::from("bad.json")).unwrap_err();
        assert!(matches!(err, FabnetError::ConfigParseError { .. }));
    }

    #[test]
    fn supported_version_lists_are_non_empty() {
        assert!(!SUPPORTED_FABNET_VERSIONS.is_empty());
        assert!(!SUPPORTED_FABRIC_VERSIONS.is_empty());
    }
}
