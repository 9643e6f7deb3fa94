//! Top-level pipeline errors.

use super::error_code::SiftErrorCode;
use super::{ConfigError, EditError, ParseError, RuleError, ScanError};

/// Errors that can occur during an analysis run.
/// Aggregates subsystem errors via `From` conversions.
#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    #[error("Scan error: {0}")]
    Scan(#[from] ScanError),

    #[error("Parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("Rule error: {0}")]
    Rule(#[from] RuleError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Edit error: {0}")]
    Edit(#[from] EditError),
}

impl SiftErrorCode for PipelineError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Scan(e) => e.error_code(),
            Self::Parse(e) => e.error_code(),
            Self::Rule(e) => e.error_code(),
            Self::Config(e) => e.error_code(),
            Self::Edit(e) => e.error_code(),
        }
    }
}
