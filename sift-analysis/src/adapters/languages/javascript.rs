//! JavaScript adapter.

use std::path::Path;

use sift_core::errors::ParseError;

use crate::adapters::traits::LanguageAdapter;
use crate::adapters::parse_with_language;
use crate::scanner::Language;
use crate::tree::SyntaxTree;

pub struct JavaScriptAdapter;

impl LanguageAdapter for JavaScriptAdapter {
    fn language(&self) -> Language {
        Language::JavaScript
    }

    fn extensions(&self) -> &[&str] {
        &["js", "jsx", "mjs", "cjs"]
    }

    fn parse(&self, source: &[u8], path: &Path) -> Result<SyntaxTree, ParseError> {
        parse_with_language(
            source,
            path,
            Language::JavaScript,
            tree_sitter_javascript::LANGUAGE.into(),
        )
    }
}
