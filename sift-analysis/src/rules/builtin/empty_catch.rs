//! Flags exception handlers whose body does nothing.

use crate::findings::{Finding, Severity};
use crate::rules::context::RuleContext;
use crate::rules::traits::{AutofixSafety, Requires, Rule, RuleCategory, RuleMeta};
use crate::scanner::Language;
use crate::tree::{kind_tables, NodeId, SyntaxTree};

pub struct EmptyCatch;

static META: RuleMeta = RuleMeta {
    id: "empty-catch",
    category: RuleCategory::Correctness,
    languages: &[
        Language::TypeScript,
        Language::JavaScript,
        Language::Python,
        Language::Java,
    ],
    priority: 30,
    autofix: AutofixSafety::None,
};

const BODY_KINDS: &[&str] = &["statement_block", "block"];

/// A body is empty when it holds nothing but comments, or only a bare
/// `pass` (the Python spelling of an empty handler).
fn body_is_empty(tree: &SyntaxTree, body: NodeId) -> bool {
    let comments = kind_tables::comment_kinds(tree.language());
    tree.children(body).iter().all(|&child| {
        let kind = tree.kind(child);
        comments.contains(&kind) || kind == "pass_statement"
    })
}

impl Rule for EmptyCatch {
    fn meta(&self) -> &RuleMeta {
        &META
    }

    fn requires(&self) -> Requires {
        Requires::SYNTAX
    }

    fn visit(&self, ctx: &RuleContext<'_>) -> Vec<Finding> {
        let Some(tree) = ctx.tree() else {
            return Vec::new();
        };
        let catch_kinds = kind_tables::catch_kinds(ctx.language());
        let mut findings = Vec::new();
        for node in tree.walk() {
            if !catch_kinds.contains(&tree.kind(node)) {
                continue;
            }
            let Some(body) = tree.child_in_kinds(node, BODY_KINDS) else {
                continue;
            };
            if body_is_empty(tree, body) {
                findings.push(Finding::new(
                    META.id,
                    ctx.file(),
                    tree.span(node),
                    "exception handler swallows the error without handling it",
                    Severity::Warning,
                ));
            }
        }
        findings
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::adapters::parse_source;
    use crate::rules::context::RuleContext;

    use super::*;

    fn run(language: Language, source: &str, name: &str) -> Vec<Finding> {
        let tree = parse_source(language, source.as_bytes(), Path::new(name)).unwrap();
        let ctx = RuleContext::new(
            Path::new(name),
            language,
            None,
            Some(&tree),
            None,
            None,
            Default::default(),
            16,
        );
        EmptyCatch.visit(&ctx)
    }

    #[test]
    fn empty_ts_catch_is_flagged() {
        let findings = run(
            Language::TypeScript,
            "try { risky(); } catch (e) {}\n",
            "a.ts",
        );
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].rule_id, "empty-catch");
    }

    #[test]
    fn catch_with_statements_is_not_flagged() {
        let findings = run(
            Language::TypeScript,
            "try { risky(); } catch (e) { console.error(e); }\n",
            "a.ts",
        );
        assert!(findings.is_empty());
    }

    #[test]
    fn python_bare_pass_handler_is_flagged() {
        let findings = run(
            Language::Python,
            "try:\n    risky()\nexcept ValueError:\n    pass\n",
            "a.py",
        );
        assert_eq!(findings.len(), 1);
    }

    #[test]
    fn comment_only_catch_is_still_empty() {
        let findings = run(
            Language::JavaScript,
            "try { go(); } catch (e) { /* ignored on purpose */ }\n",
            "a.js",
        );
        assert_eq!(findings.len(), 1);
    }
}
