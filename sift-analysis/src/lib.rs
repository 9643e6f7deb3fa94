//! Sift analysis engine.
//!
//! Pipeline: scanner → parser adapters → normalized tree → scope graphs →
//! project graph → tiered rule runner → findings (with optional autofix
//! edits). Each stage is built only when a selected rule declares it needs
//! the artifact.

pub mod adapters;
pub mod findings;
pub mod pipeline;
pub mod project;
pub mod rules;
pub mod runner;
pub mod scanner;
pub mod scopes;
pub mod tree;

pub use findings::{apply_edits, Edit, Finding, Severity};
pub use pipeline::{AnalysisPipeline, AnalysisReport};
pub use rules::{Requires, Rule, RuleContext, RuleMeta, RuleRegistry};
pub use scanner::Language;
pub use tree::SyntaxTree;
