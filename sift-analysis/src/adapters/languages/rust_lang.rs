//! Rust adapter.

use std::path::Path;

use sift_core::errors::ParseError;

use crate::adapters::traits::LanguageAdapter;
use crate::adapters::parse_with_language;
use crate::scanner::Language;
use crate::tree::SyntaxTree;

pub struct RustAdapter;

impl LanguageAdapter for RustAdapter {
    fn language(&self) -> Language {
        Language::Rust
    }

    fn extensions(&self) -> &[&str] {
        &["rs"]
    }

    fn parse(&self, source: &[u8], path: &Path) -> Result<SyntaxTree, ParseError> {
        parse_with_language(
            source,
            path,
            Language::Rust,
            tree_sitter_rust::LANGUAGE.into(),
        )
    }
}
