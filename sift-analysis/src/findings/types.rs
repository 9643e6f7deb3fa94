//! Finding data model.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};
use sift_core::types::span::ByteSpan;

use super::edits::Edit;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Error,
}

/// One rule hit against one location.
///
/// `meta` uses a BTreeMap so serialized findings are byte-stable across
/// runs; rules put structured detail there (shadowed kind, cycle members).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Finding {
    pub rule_id: &'static str,
    pub file: PathBuf,
    pub span: ByteSpan,
    pub message: String,
    pub severity: Severity,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub autofix: Vec<Edit>,
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub meta: BTreeMap<String, serde_json::Value>,
}

impl Finding {
    pub fn new(
        rule_id: &'static str,
        file: impl Into<PathBuf>,
        span: ByteSpan,
        message: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self {
            rule_id,
            file: file.into(),
            span,
            message: message.into(),
            severity,
            autofix: Vec::new(),
            meta: BTreeMap::new(),
        }
    }

    pub fn with_fix(mut self, edit: Edit) -> Self {
        self.autofix.push(edit);
        self
    }

    pub fn with_meta(mut self, key: &str, value: serde_json::Value) -> Self {
        self.meta.insert(key.to_string(), value);
        self
    }

    /// Stable report order: file, then position, then rule id.
    pub fn sort_key(&self) -> (&PathBuf, u32, u32, &'static str) {
        (&self.file, self.span.start, self.span.end, self.rule_id)
    }
}
