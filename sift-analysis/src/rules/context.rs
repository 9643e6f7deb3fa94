//! Per-file context handed to rules.

use std::collections::HashMap;
use std::path::Path;

use crate::project::ProjectGraph;
use crate::scanner::Language;
use crate::scopes::ScopeGraph;
use crate::tree::SyntaxTree;

/// Everything a rule may look at for one file.
///
/// Artifact accessors return `None` when the rule did not declare the
/// artifact; the runner populates only what was requested, so an
/// undeclared read fails loudly in the rule rather than observing a
/// half-built artifact.
pub struct RuleContext<'a> {
    file: &'a Path,
    language: Language,
    text: Option<&'a str>,
    tree: Option<&'a SyntaxTree>,
    scopes: Option<&'a ScopeGraph>,
    project: Option<&'a ProjectGraph>,
    config: HashMap<String, serde_json::Value>,
    ancestor_depth_limit: u32,
}

impl<'a> RuleContext<'a> {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        file: &'a Path,
        language: Language,
        text: Option<&'a str>,
        tree: Option<&'a SyntaxTree>,
        scopes: Option<&'a ScopeGraph>,
        project: Option<&'a ProjectGraph>,
        config: HashMap<String, serde_json::Value>,
        ancestor_depth_limit: u32,
    ) -> Self {
        Self {
            file,
            language,
            text,
            tree,
            scopes,
            project,
            config,
            ancestor_depth_limit,
        }
    }

    pub fn file(&self) -> &Path {
        self.file
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Raw file text. `Some` only for rules that declared `raw_text`.
    pub fn text(&self) -> Option<&str> {
        self.text
    }

    /// Normalized syntax tree. `Some` only for rules that declared `syntax`.
    pub fn tree(&self) -> Option<&SyntaxTree> {
        self.tree
    }

    /// Scope graph. `Some` only for rules that declared `scopes`.
    pub fn scopes(&self) -> Option<&ScopeGraph> {
        self.scopes
    }

    /// Project graph. `Some` only for project-tier rules, and only when the
    /// run enabled project analysis.
    pub fn project(&self) -> Option<&ProjectGraph> {
        self.project
    }

    /// Per-rule configuration block from `[analysis.rule_config.<id>]`.
    pub fn config(&self) -> &HashMap<String, serde_json::Value> {
        &self.config
    }

    pub fn config_str(&self, key: &str) -> Option<&str> {
        self.config.get(key).and_then(|v| v.as_str())
    }

    pub fn config_strings(&self, key: &str) -> Option<Vec<&str>> {
        self.config
            .get(key)?
            .as_array()
            .map(|items| items.iter().filter_map(|v| v.as_str()).collect())
    }

    /// Cap for upward tree walks, from `analysis.ancestor_depth_limit`.
    pub fn ancestor_depth_limit(&self) -> u32 {
        self.ancestor_depth_limit
    }
}
