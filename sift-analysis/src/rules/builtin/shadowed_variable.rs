//! Flags declarations that hide a declaration in an enclosing scope.

use crate::findings::{Finding, Severity};
use crate::rules::context::RuleContext;
use crate::rules::traits::{AutofixSafety, Requires, Rule, RuleCategory, RuleMeta};
use crate::scopes::{find_shadowed, ShadowInfo};

pub struct ShadowedVariable;

static META: RuleMeta = RuleMeta {
    id: "shadowed-variable",
    category: RuleCategory::Correctness,
    languages: &[],
    priority: 40,
    autofix: AutofixSafety::None,
};

impl Rule for ShadowedVariable {
    fn meta(&self) -> &RuleMeta {
        &META
    }

    fn requires(&self) -> Requires {
        Requires::SCOPES
    }

    fn visit(&self, ctx: &RuleContext<'_>) -> Vec<Finding> {
        let Some(scopes) = ctx.scopes() else {
            return Vec::new();
        };
        let mut findings = Vec::new();
        for (id, symbol) in scopes.iter_symbols() {
            let Some(ShadowInfo::Symbol { id: shadowed, kind: _ }) = find_shadowed(scopes, id)
            else {
                continue;
            };
            let outer = scopes.symbol(shadowed);
            // Same-scope redeclaration is ordinary reassignment in most of
            // the supported languages; only cross-scope hiding is reported.
            if outer.scope == symbol.scope {
                continue;
            }
            let shadow = ShadowInfo::Symbol {
                id: shadowed,
                kind: outer.kind,
            };
            findings.push(
                Finding::new(
                    META.id,
                    ctx.file(),
                    symbol.span,
                    format!(
                        "`{}` shadows a {} declared in an enclosing scope",
                        symbol.name,
                        shadow.class()
                    ),
                    Severity::Warning,
                )
                .with_meta(
                    "shadowed_kind",
                    serde_json::Value::String(shadow.class().to_string()),
                ),
            );
        }
        findings
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use crate::adapters::parse_source;
    use crate::rules::context::RuleContext;
    use crate::scanner::Language;
    use crate::scopes::build_scope_graph;

    use super::*;

    fn run(language: Language, source: &str, name: &str) -> Vec<Finding> {
        let tree = parse_source(language, source.as_bytes(), Path::new(name)).unwrap();
        let scopes = build_scope_graph(&tree);
        let ctx = RuleContext::new(
            Path::new(name),
            language,
            None,
            None,
            Some(&scopes),
            None,
            Default::default(),
            16,
        );
        ShadowedVariable.visit(&ctx)
    }

    #[test]
    fn inner_assignment_shadowing_module_variable() {
        let findings = run(Language::Python, "x = 1\ndef f():\n    x = 2\n", "a.py");
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].meta["shadowed_kind"], "variable");
        assert!(findings[0].message.contains("`x` shadows"));
    }

    #[test]
    fn parameter_shadowing_import() {
        let findings = run(
            Language::Python,
            "import os\ndef f(os):\n    return os\n",
            "a.py",
        );
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].meta["shadowed_kind"], "import");
    }

    #[test]
    fn module_reassignment_is_not_a_shadow() {
        let findings = run(Language::Python, "x = 1\nx = 2\n", "a.py");
        assert!(findings.is_empty());
    }

    #[test]
    fn throwaway_name_is_ignored() {
        let findings = run(Language::Python, "_ = 1\ndef f():\n    _ = 2\n", "a.py");
        assert!(findings.is_empty());
    }
}
