//! Parser adapters — one per language, all producing the same tree shape.
//!
//! This is the only place in the engine that touches tree-sitter grammar
//! objects; everything downstream sees normalized `SyntaxTree`s only.

pub mod error_tolerant;
pub mod languages;
pub mod traits;

use std::path::Path;
use std::time::Instant;

use sift_core::errors::ParseError;
use tracing::trace;

pub use traits::LanguageAdapter;

use crate::scanner::hasher::hash_content;
use crate::scanner::Language;
use crate::tree::builder::build_tree;
use crate::tree::SyntaxTree;

use languages::{
    GoAdapter, JavaAdapter, JavaScriptAdapter, PythonAdapter, RustAdapter, TypeScriptAdapter,
};

/// The adapter for a language.
pub fn adapter_for(language: Language) -> &'static dyn LanguageAdapter {
    match language {
        Language::TypeScript => &TypeScriptAdapter,
        Language::JavaScript => &JavaScriptAdapter,
        Language::Python => &PythonAdapter,
        Language::Rust => &RustAdapter,
        Language::Go => &GoAdapter,
        Language::Java => &JavaAdapter,
    }
}

/// Parse source bytes with the adapter registered for `language`.
pub fn parse_source(
    language: Language,
    source: &[u8],
    path: &Path,
) -> Result<SyntaxTree, ParseError> {
    adapter_for(language).parse(source, path)
}

/// Shared parse path used by every adapter.
///
/// Decode failure is the one catastrophic case; grammar-level errors
/// degrade to error-marked nodes inside the tree.
pub(crate) fn parse_with_language(
    source: &[u8],
    path: &Path,
    language: Language,
    ts_language: tree_sitter::Language,
) -> Result<SyntaxTree, ParseError> {
    let text = std::str::from_utf8(source)
        .map_err(|_| ParseError::Encoding {
            path: path.display().to_string(),
        })?
        .to_string();

    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&ts_language)
        .map_err(|e| ParseError::Grammar {
            language: language.name().to_string(),
            message: e.to_string(),
        })?;

    let start = Instant::now();
    let ts_tree = parser
        .parse(text.as_bytes(), None)
        .ok_or_else(|| ParseError::NoTree {
            path: path.display().to_string(),
        })?;
    let parse_time_us = start.elapsed().as_micros() as u64;

    let tree = build_tree(
        language,
        text,
        &ts_tree,
        hash_content(source),
        parse_time_us,
    );
    trace!(
        path = %path.display(),
        nodes = tree.node_count(),
        errors = tree.error_count(),
        "parsed file"
    );
    Ok(tree)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_language_has_an_adapter_with_matching_extensions() {
        for &lang in Language::all() {
            let adapter = adapter_for(lang);
            assert_eq!(adapter.language(), lang);
            assert_eq!(adapter.extensions(), lang.extensions());
        }
    }

    #[test]
    fn non_utf8_input_is_the_only_fatal_parse_failure() {
        let err = parse_source(
            Language::Python,
            &[0xff, 0xfe, 0x00],
            Path::new("bad.py"),
        )
        .unwrap_err();
        assert!(matches!(err, ParseError::Encoding { .. }));

        // Broken syntax parses fine, with error nodes.
        let tree = parse_source(Language::Python, b"def (:\n", Path::new("broken.py")).unwrap();
        assert!(tree.has_errors());
    }
}
