//! Stable machine-readable error codes.
//!
//! Codes are part of the external contract: hosts match on them, so they
//! never change once shipped.

/// Trait giving every subsystem error a stable string code.
pub trait SiftErrorCode {
    fn error_code(&self) -> &'static str;
}

pub const SCAN_ERROR: &str = "SIFT_SCAN";
pub const PARSE_ERROR: &str = "SIFT_PARSE";
pub const ENCODING_ERROR: &str = "SIFT_ENCODING";
pub const RULE_ERROR: &str = "SIFT_RULE";
pub const CONFIG_ERROR: &str = "SIFT_CONFIG";
pub const EDIT_ERROR: &str = "SIFT_EDIT";
