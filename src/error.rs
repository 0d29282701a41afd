//! Error types for pyprov operations.
//!
//! This module defines [`ProvisionError`], the primary error type used
//! throughout the application, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - An operator declining a gate, or naming an interpreter that does not
//!   exist, is not an error: the installer finishes with an aborted outcome
//! - Use `ProvisionError` for failures that need distinct handling
//! - Use `anyhow::Error` (via `ProvisionError::Other`) for unexpected errors

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for pyprov operations.
#[derive(Debug, Error)]
pub enum ProvisionError {
    /// Configuration file not found at expected location.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// Invalid configuration structure or values.
    #[error("Invalid configuration: {message}")]
    ConfigValidationError { message: String },

    /// A prompt could not be answered (non-interactive mode without override).
    #[error("Cannot answer prompt '{key}': {message}")]
    PromptUnavailable { key: String, message: String },

    /// An installer state received an input it cannot handle.
    #[error("Unexpected input in state {state}: {input}")]
    InvalidTransition { state: String, input: String },

    /// External command failed.
    #[error("Command failed with exit code {code:?}: {command}")]
    CommandFailed { command: String, code: Option<i32> },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for pyprov operations.
pub type Result<T> = std::result::Result<T, ProvisionError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_not_found_displays_path() {
        let err = ProvisionError::ConfigNotFound {
            path: PathBuf::from("/foo/log_config.yaml"),
        };
        assert!(err.to_string().contains("/foo/log_config.yaml"));
    }

    #[test]
    fn config_parse_error_displays_path_and_message() {
        let err = ProvisionError::ConfigParseError {
            path: PathBuf::from("/pyprov.yml"),
            message: "invalid syntax".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("/pyprov.yml"));
        assert!(msg.contains("invalid syntax"));
    }

    #[test]
    fn config_validation_error_displays_message() {
        let err = ProvisionError::ConfigValidationError {
            message: "handler 'file' references undefined formatter 'x'".into(),
        };
        assert!(err.to_string().contains("undefined formatter"));
    }

    #[test]
    fn prompt_unavailable_displays_key() {
        let err = ProvisionError::PromptUnavailable {
            key: "install".into(),
            message: "no answer".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("install"));
        assert!(msg.contains("no answer"));
    }

    #[test]
    fn invalid_transition_displays_state_and_input() {
        let err = ProvisionError::InvalidTransition {
            state: "Done".into(),
            input: "Answer(\"y\")".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("Done"));
        assert!(msg.contains("Answer"));
    }

    #[test]
    fn command_failed_displays_command_and_code() {
        let err = ProvisionError::CommandFailed {
            command: "python -m venv env".into(),
            code: Some(1),
        };
        let msg = err.to_string();
        assert!(msg.contains("python -m venv env"));
        assert!(msg.contains("1"));
    }

    #[test]
    fn io_error_converts_from_std() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file missing");
        let err: ProvisionError = io_err.into();
        assert!(matches!(err, ProvisionError::Io(_)));
    }

    #[test]
    fn anyhow_error_converts() {
        let err: ProvisionError = anyhow::anyhow!("boom").into();
        assert!(matches!(err, ProvisionError::Other(_)));
        assert_eq!(err.to_string(), "boom");
    }
}
