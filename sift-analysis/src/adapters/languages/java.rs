//! Java adapter.

use std::path::Path;

use sift_core::errors::ParseError;

use crate::adapters::traits::LanguageAdapter;
use crate::adapters::parse_with_language;
use crate::scanner::Language;
use crate::tree::SyntaxTree;

pub struct JavaAdapter;

impl LanguageAdapter for JavaAdapter {
    fn language(&self) -> Language {
        Language::Java
    }

    fn extensions(&self) -> &[&str] {
        &["java"]
    }

    fn parse(&self, source: &[u8], path: &Path) -> Result<SyntaxTree, ParseError> {
        parse_with_language(
            source,
            path,
            Language::Java,
            tree_sitter_java::LANGUAGE.into(),
        )
    }
}
