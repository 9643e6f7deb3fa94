//! Flags exports no analyzed file imports.

use crate::findings::{Finding, Severity};
use crate::rules::context::RuleContext;
use crate::rules::traits::{AutofixSafety, Requires, Rule, RuleCategory, RuleMeta};

pub struct UnusedExport;

static META: RuleMeta = RuleMeta {
    id: "unused-export",
    category: RuleCategory::Architecture,
    languages: &[],
    priority: 61,
    autofix: AutofixSafety::None,
};

impl Rule for UnusedExport {
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
        project
            .unused_exports()
            .into_iter()
            .filter(|(path, _)| path == ctx.file())
            .map(|(_, export)| {
                Finding::new(
                    META.id,
                    ctx.file(),
                    export.span,
                    format!("`{}` is exported but never imported", export.name),
                    Severity::Info,
                )
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use sift_core::types::span::ByteSpan;

    use crate::project::{ExportedSymbol, ImportEdge, ModuleNode, ProjectGraph};
    use crate::rules::context::RuleContext;
    use crate::scanner::Language;

    use super::*;

    #[test]
    fn only_the_dead_export_is_reported() {
        let mut graph = ProjectGraph::default();
        let lib = graph.add_module(ModuleNode {
            path: "lib.ts".into(),
            language: Language::TypeScript,
            exports: vec![
                ExportedSymbol {
                    name: "used".into(),
                    span: ByteSpan::new(0, 4),
                },
                ExportedSymbol {
                    name: "dead".into(),
                    span: ByteSpan::new(20, 24),
                },
            ],
        });
        let app = graph.add_module(ModuleNode {
            path: "app.ts".into(),
            language: Language::TypeScript,
            exports: Vec::new(),
        });
        graph.add_import(
            app,
            lib,
            ImportEdge {
                symbol: Some("used".into()),
                span: ByteSpan::new(0, 1),
            },
        );

        let ctx = RuleContext::new(
            Path::new("lib.ts"),
            Language::TypeScript,
            None,
            None,
            None,
            Some(&graph),
            Default::default(),
            16,
        );
        let findings = UnusedExport.visit(&ctx);
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].span, ByteSpan::new(20, 24));
        assert!(findings[0].message.contains("`dead`"));
    }
}
