//! Python adapter.

use std::path::Path;

use sift_core::errors::ParseError;

use crate::adapters::traits::LanguageAdapter;
use crate::adapters::parse_with_language;
use crate::scanner::Language;
use crate::tree::SyntaxTree;

pub struct PythonAdapter;

impl LanguageAdapter for PythonAdapter {
    fn language(&self) -> Language {
        Language::Python
    }

    fn extensions(&self) -> &[&str] {
        &["py", "pyi"]
    }

    fn parse(&self, source: &[u8], path: &Path) -> Result<SyntaxTree, ParseError> {
        parse_with_language(
            source,
            path,
            Language::Python,
            tree_sitter_python::LANGUAGE.into(),
        )
    }
}
