//! Scan errors.

use super::error_code::{self, SiftErrorCode};

/// Errors that can occur during file discovery.
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    #[error("I/O error reading {path}: {message}")]
    Io { path: String, message: String },

    #[error("Path does not exist: {path}")]
    NotFound { path: String },

    #[error("File exceeds size limit ({size} > {limit} bytes): {path}")]
    TooLarge { path: String, size: u64, limit: u64 },
}

impl SiftErrorCode for ScanError {
    fn error_code(&self) -> &'static str {
        error_code::SCAN_ERROR
    }
}
