//! Go adapter.

use std::path::Path;

use sift_core::errors::ParseError;

use crate::adapters::traits::LanguageAdapter;
use crate::adapters::parse_with_language;
use crate::scanner::Language;
use crate::tree::SyntaxTree;

pub struct GoAdapter;

impl LanguageAdapter for GoAdapter {
    fn language(&self) -> Language {
        Language::Go
    }

    fn extensions(&self) -> &[&str] {
        &["go"]
    }

    fn parse(&self, source: &[u8], path: &Path) -> Result<SyntaxTree, ParseError> {
        parse_with_language(source, path, Language::Go, tree_sitter_go::LANGUAGE.into())
    }
}
