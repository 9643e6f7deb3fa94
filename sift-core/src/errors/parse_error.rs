//! Parse errors.
//!
//! Parsing is error-tolerant: syntactically invalid input still yields a
//! best-effort tree with error-marked nodes. These variants cover only the
//! catastrophic cases where no tree can be produced at all.

use super::error_code::{self, SiftErrorCode};

/// Errors that can occur while producing a syntax tree.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("File is not valid UTF-8: {path}")]
    Encoding { path: String },

    #[error("Grammar rejected by tree-sitter for {language}: {message}")]
    Grammar { language: String, message: String },

    #[error("Parser returned no tree for {path}")]
    NoTree { path: String },
}

impl SiftErrorCode for ParseError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::Encoding { .. } => error_code::ENCODING_ERROR,
            _ => error_code::PARSE_ERROR,
        }
    }
}
