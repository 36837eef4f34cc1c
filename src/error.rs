//! Error types for fabnet operations.
//!
//! This module defines [`FabnetError`], the primary error type used throughout
//! the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `FabnetError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `FabnetError::Other`) for unexpected errors
//! - Semantic problems inside a loadable document are never errors: they are
//!   findings, produced and classified by the validation engine
//! - All errors should provide actionable messages for users

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for fabnet operations.
#[derive(Debug, Error)]
pub enum FabnetError {
    /// Configuration file not found at the given path.
    #[error("No file under path: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the configuration document.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for fabnet operations.
pub type Result<T> = std::result::Result<T, FabnetError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = FabnetError::ConfigNotFound {
            path: PathBuf::from("/foo/network.json"),
        };
        assert!(err.to_string().contains("/foo/network.json"));
        assert!(err.to_string().starts_with("No file under path"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = FabnetError::ConfigParseError {
            path: PathBuf::from("/network.json"),
            message: "expected value at line 1".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/network.json"));
        assert!(msg.contains("expected value at line 1"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied");
        let err: FabnetError = io_err.into();
        assert!(matches!(err, FabnetError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(FabnetError::ConfigNotFound {
                path: PathBuf::from("missing.json"),
            })
        }
        assert!(returns_error().is_err());
    }
}
