//! Language adapter trait.

use std::path::Path;

use sift_core::errors::ParseError;

use crate::scanner::Language;
use crate::tree::SyntaxTree;

/// One adapter per supported language: wraps the language's tree-sitter
/// grammar and produces the normalized `SyntaxTree`.
///
/// Parsing is error-tolerant. The only fatal failure is undecodable input;
/// syntactically invalid files yield best-effort trees with error-marked
/// nodes, because rules must tolerate partial code.
pub trait LanguageAdapter: Send + Sync {
    /// The language this adapter handles.
    fn language(&self) -> Language;

    /// File extensions this adapter handles.
    fn extensions(&self) -> &[&str];

    /// Parse source bytes into a normalized tree.
    fn parse(&self, source: &[u8], path: &Path) -> Result<SyntaxTree, ParseError>;
}
