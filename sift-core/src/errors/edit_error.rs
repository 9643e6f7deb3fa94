//! Edit application errors.

use super::error_code::{self, SiftErrorCode};
use crate::types::span::ByteSpan;

/// Errors applying autofix edits to a file.
///
/// Overlapping spans are a caller bug (a rule emitted a malformed edit
/// batch), not a runtime condition to guess around.
#[derive(Debug, thiserror::Error)]
pub enum EditError {
    #[error("Overlapping edits: {a} and {b}")]
    Overlap { a: ByteSpan, b: ByteSpan },

    #[error("Edit span {span} exceeds file length {len}")]
    OutOfBounds { span: ByteSpan, len: usize },

    #[error("Edit span {span} does not fall on a UTF-8 character boundary")]
    NotCharBoundary { span: ByteSpan },
}

impl SiftErrorCode for EditError {
    fn error_code(&self) -> &'static str {
        error_code::EDIT_ERROR
    }
}
