//! Rule execution errors.

use super::error_code::{self, SiftErrorCode};

/// A fault inside one rule's `visit`, caught per rule per file.
///
/// These never abort a run; the runner records them as diagnostics and the
/// remaining rules and files proceed.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("Rule {id} panicked on {file}: {message}")]
    Panic {
        id: String,
        file: String,
        message: String,
    },
}

impl SiftErrorCode for RuleError {
    fn error_code(&self) -> &'static str {
        error_code::RULE_ERROR
    }
}
