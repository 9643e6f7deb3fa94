//! Flags files participating in an import cycle.
//!
//! A cycle involves many files but is one problem, so it is reported once,
//! against the cycle's lexicographically smallest member. Every member is
//! listed in the finding's metadata.

use sift_core::types::span::ByteSpan;

use crate::findings::{Finding, Severity};
use crate::rules::context::RuleContext;
use crate::rules::traits::{AutofixSafety, Requires, Rule, RuleCategory, RuleMeta};

pub struct ImportCycle;

static META: RuleMeta = RuleMeta {
    id: "import-cycle",
    category: RuleCategory::Architecture,
    languages: &[],
    priority: 60,
    autofix: AutofixSafety::None,
};

impl Rule for ImportCycle {
    fn meta(&self) -> &RuleMeta {
        &META
    }

    fn requires(&self) -> Requires {
        Requires::PROJECT
    }

    fn visit(&self, ctx: &RuleContext<'_>) -> Vec<Finding> {
        let Some(project) = ctx.project() else {
            return Vec::new();
        };
        let mut findings = Vec::new();
        for cycle in project.cycles() {
            // Members are sorted, so the anchor is the first one.
            if cycle.first().map(|p| p.as_path()) != Some(ctx.file()) {
                continue;
            }
            let members: Vec<String> = cycle
                .iter()
                .map(|p| p.display().to_string())
                .collect();
            findings.push(
                Finding::new(
                    META.id,
                    ctx.file(),
                    ByteSpan::new(0, 0),
                    format!("file participates in an import cycle of {} modules", cycle.len()),
                    Severity::Error,
                )
                .with_meta("cycle", serde_json::json!(members)),
            );
        }
        findings
    }
}
