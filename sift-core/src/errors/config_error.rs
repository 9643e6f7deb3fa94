//! Configuration errors — surfaced eagerly at batch setup, never per file.

use super::error_code::{self, SiftErrorCode};

/// Errors in configuration resolution or profile selection.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to parse {path}: {message}")]
    ParseError { path: String, message: String },

    #[error("Unknown profile: {0}")]
    UnknownProfile(String),

    #[error("Profile {profile} references unknown rule id: {rule_id}")]
    UnknownRule { profile: String, rule_id: String },

    #[error("Invalid value for {key}: {message}")]
    InvalidValue { key: String, message: String },
}

impl SiftErrorCode for ConfigError {
    fn error_code(&self) -> &'static str {
        error_code::CONFIG_ERROR
    }
}
