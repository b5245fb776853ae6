//! Error types for Specsmith operations.
//!
//! This module defines [`SpecsmithError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `SpecsmithError` for domain-specific errors that need distinct handling
//! - Use `anyhow::Error` (via `SpecsmithError::Other`) for unexpected errors
//! - Missing tools are NOT errors: the tool checker reports them through the
//!   step tracker and a boolean, never through this type

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for Specsmith operations.
#[derive(Debug, Error)]
pub enum SpecsmithError {
    /// Invalid combination of command-line arguments.
    #[error("Invalid arguments: {message}")]
    InvalidArguments { message: String },

    /// Target project directory already contains a config.
    #[error("Project already initialized: {path}")]
    AlreadyInitialized { path: PathBuf },

    /// Failed to write the project config stub.
    #[error("Failed to write config at {path}: {message}")]
    ConfigWriteError { path: PathBuf, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for Specsmith operations.
pub type Result<T> = std::result::Result<T, SpecsmithError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_arguments_displays_message() {
        let err = SpecsmithError::InvalidArguments {
            message: "cannot use both".into(),
        };
        assert!(err.to_string().contains("cannot use both"));
    }

    #[test]
    fn already_initialized_displays_path() {
        let err = SpecsmithError::AlreadyInitialized {
            path: PathBuf::from("/proj/.specsmith"),
        };
        assert!(err.to_string().contains("/proj/.specsmith"));
    }

    #[test]
    fn config_write_error_displays_path_and_message() {
        let err = SpecsmithError::ConfigWriteError {
            path: PathBuf::from("/proj/config.json"),
            message: "permission denied".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/proj/config.json"));
        assert!(msg.contains("permission denied"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: SpecsmithError = io_err.into();
        assert!(matches!(err, SpecsmithError::Io(_)));
    }

    #[test]
    fn result_type_alias_works() {
        fn returns_error() -> Result<()> {
            Err(SpecsmithError::InvalidArguments {
                message: "test".into(),
            })
        }
        assert!(returns_error().is_err());
    }
}
