//! Flags whitespace before a line break, with a safe deletion fix.

use sift_core::types::span::ByteSpan;

use crate::findings::{Edit, Finding, Severity};
use crate::rules::context::RuleContext;
use crate::rules::traits::{AutofixSafety, Requires, Rule, RuleCategory, RuleMeta};

pub struct TrailingWhitespace;

static META: RuleMeta = RuleMeta {
    id: "trailing-whitespace",
    category: RuleCategory::Style,
    languages: &[],
    priority: 10,
    autofix: AutofixSafety::Safe,
};

impl Rule for TrailingWhitespace {
    fn meta(&self) -> &RuleMeta {
        &META
    }

    fn requires(&self) -> Requires {
        Requires::RAW_TEXT
    }

    fn visit(&self, ctx: &RuleContext<'_>) -> Vec<Finding> {
        let Some(text) = ctx.text() else {
            return Vec::new();
        };
        let mut findings = Vec::new();
        let mut offset = 0u32;
        for line in text.split_inclusive('\n') {
            let body = line.trim_end_matches(['\n', '\r']);
            let trimmed = body.trim_end_matches([' ', '\t']);
            if trimmed.len() < body.len() {
                let span = ByteSpan::new(
                    offset + trimmed.len() as u32,
                    offset + body.len() as u32,
                );
                findings.push(
                    Finding::new(
                        META.id,
                        ctx.file(),
                        span,
                        "trailing whitespace",
                        Severity::Warning,
                    )
                    .with_fix(Edit::delete(span)),
                );
            }
            offset += line.len() as u32;
        }
        findings
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::findings::apply_edits;
    use crate::rules::context::RuleContext;
    use crate::scanner::Language;

    use super::*;

    fn run(text: &str) -> Vec<Finding> {
        let ctx = RuleContext::new(
            Path::new("a.ts"),
            Language::TypeScript,
            Some(text),
            None,
            None,
            None,
            Default::default(),
            16,
        );
        TrailingWhitespace.visit(&ctx)
    }

    #[test]
    fn finds_spaces_and_tabs_before_newline() {
        let findings = run("clean\ndirty  \n\ttabbed\t\nlast");
        assert_eq!(findings.len(), 2);
        assert_eq!(findings[0].span, ByteSpan::new(11, 13));
        assert_eq!(findings[1].span, ByteSpan::new(21, 22));
    }

    #[test]
    fn fix_removes_exactly_the_whitespace() {
        let source = "a  \nb\t\n";
        let findings = run(source);
        let edits: Vec<_> = findings.iter().flat_map(|f| f.autofix.clone()).collect();
        assert_eq!(apply_edits(source, &edits).unwrap(), "a\nb\n");
    }

    #[test]
    fn final_line_without_newline_is_checked() {
        let findings = run("x ");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].span, ByteSpan::new(1, 2));
    }

    #[test]
    fn clean_text_yields_nothing() {
        assert!(run("a\nb\n").is_empty());
    }
}
