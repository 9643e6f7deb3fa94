//! Flags imported names that hide a language builtin.

use crate::findings::{Finding, Severity};
use crate::rules::context::RuleContext;
use crate::rules::traits::{AutofixSafety, Requires, Rule, RuleCategory, RuleMeta};
use crate::scopes::{find_shadowed, ShadowInfo, SymbolKind};

pub struct ImportShadowsBuiltin;

static META: RuleMeta = RuleMeta {
    id: "import-shadows-builtin",
    category: RuleCategory::Correctness,
    languages: &[],
    priority: 41,
    autofix: AutofixSafety::None,
};

impl Rule for ImportShadowsBuiltin {
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
            if symbol.kind != SymbolKind::Import {
                continue;
            }
            if let Some(ShadowInfo::Builtin { name }) = find_shadowed(scopes, id) {
                findings.push(Finding::new(
                    META.id,
                    ctx.file(),
                    symbol.span,
                    format!("import `{name}` shadows a builtin"),
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
        ImportShadowsBuiltin.visit(&ctx)
    }

    #[test]
    fn aliased_import_hiding_a_builtin() {
        let findings = run(
            Language::Python,
            "from shutil import get_terminal_size as print\n",
            "a.py",
        );
        assert_eq!(findings.len(), 1);
        assert_eq!(findings[0].message, "import `print` shadows a builtin");
    }

    #[test]
    fn harmless_import_passes() {
        let findings = run(Language::Python, "import os\n", "a.py");
        assert!(findings.is_empty());
    }

    #[test]
    fn plain_variable_hiding_builtin_is_out_of_scope_here() {
        let findings = run(Language::Python, "list = [1]\n", "a.py");
        assert!(findings.is_empty());
    }
}
