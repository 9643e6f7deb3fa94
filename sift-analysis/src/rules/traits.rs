//! The rule contract.

use serde::Serialize;

use crate::findings::Finding;
use crate::scanner::Language;

use super::context::RuleContext;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleCategory {
    Style,
    Correctness,
    Architecture,
}

/// How trustworthy a rule's autofix edits are.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum AutofixSafety {
    /// Applying the fix cannot change program behavior.
    Safe,
    /// The fix is a plausible rewrite a human should review.
    Suggestion,
    /// The rule never emits edits.
    None,
}

/// Static rule identity. One per rule, registered once.
#[derive(Debug, Clone)]
pub struct RuleMeta {
    /// Stable kebab-case id, unique across the registry.
    pub id: &'static str,
    pub category: RuleCategory,
    /// Languages the rule runs on. Empty means every language.
    pub languages: &'static [Language],
    /// Lower runs earlier within a batch; purely cosmetic for report order.
    pub priority: u8,
    pub autofix: AutofixSafety,
}

impl RuleMeta {
    pub fn applies_to(&self, language: Language) -> bool {
        self.languages.is_empty() || self.languages.contains(&language)
    }
}

/// Artifacts a rule reads. The runner unions these over the selected rule
/// set and builds exactly that much, nothing more.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Requires {
    pub raw_text: bool,
    pub syntax: bool,
    pub scopes: bool,
    pub project_graph: bool,
}

impl Requires {
    pub const RAW_TEXT: Self = Self {
        raw_text: true,
        syntax: false,
        scopes: false,
        project_graph: false,
    };

    pub const SYNTAX: Self = Self {
        raw_text: false,
        syntax: true,
        scopes: false,
        project_graph: false,
    };

    pub const SCOPES: Self = Self {
        raw_text: false,
        syntax: false,
        scopes: true,
        project_graph: false,
    };

    pub const PROJECT: Self = Self {
        raw_text: false,
        syntax: false,
        scopes: false,
        project_graph: true,
    };

    pub fn union(self, other: Self) -> Self {
        Self {
            raw_text: self.raw_text || other.raw_text,
            syntax: self.syntax || other.syntax,
            scopes: self.scopes || other.scopes,
            project_graph: self.project_graph || other.project_graph,
        }
    }

    pub fn any(self) -> bool {
        self.raw_text || self.syntax || self.scopes || self.project_graph
    }
}

/// A single analysis rule.
///
/// Implementations hold no per-file state and are shared across rayon
/// workers, hence `Send + Sync`. A rule must only read artifacts it
/// declared in `requires`; undeclared accessors return `None` in the
/// context it receives.
pub trait Rule: Send + Sync {
    fn meta(&self) -> &RuleMeta;

    fn requires(&self) -> Requires;

    /// Analyze one file (or, for project-tier rules, the file in its
    /// project context) and return findings. Panics are caught by the
    /// runner and isolated to this rule on this file.
    fn visit(&self, ctx: &RuleContext<'_>) -> Vec<Finding>;
}
