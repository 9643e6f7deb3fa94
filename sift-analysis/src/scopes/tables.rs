//! Per-language scope and declaration tables.
//!
//! The scope builder is generic; everything grammar-specific about "what
//! introduces a scope" and "what declares a name" lives here.

use sift_core::types::span::ByteSpan;

use crate::scanner::Language;
use crate::tree::{NodeId, SyntaxTree};

use super::types::{ImportRecord, ScopeKind, SymbolKind};

/// Where a declaration lands relative to the node that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// The scope active at the declaring node.
    Current,
    /// The scope enclosing a scope-introducing node (function/class names).
    Enclosing,
    /// The new scope a scope-introducing node pushed (parameters).
    Inner,
}

/// One extracted declaration: the name-bearing node and how to file it.
#[derive(Debug, Clone, Copy)]
pub struct Decl {
    pub name_node: NodeId,
    pub kind: SymbolKind,
    pub placement: Placement,
}

/// An import statement parsed into a record plus its local binding, if any.
#[derive(Debug, Clone)]
pub struct ImportParse {
    pub record: ImportRecord,
    /// Name bound in the importing file's scope (alias or imported name).
    pub binding: Option<(String, NodeId)>,
}

/// Scope introduced by a node of this kind, if any. Root kinds (module,
/// program, source_file) are deliberately absent — the builder creates the
/// module scope itself.
pub fn scope_kind_of(language: Language, kind: &str) -> Option<ScopeKind> {
    match language {
        Language::Python => match kind {
            "function_definition" | "lambda" => Some(ScopeKind::Function),
            "class_definition" => Some(ScopeKind::Class),
            _ => None,
        },
        Language::TypeScript | Language::JavaScript => match kind {
            "function_declaration"
            | "function_expression"
            | "generator_function_declaration"
            | "arrow_function"
            | "method_definition" => Some(ScopeKind::Function),
            "class_declaration" | "class" => Some(ScopeKind::Class),
            "statement_block" => Some(ScopeKind::Block),
            _ => None,
        },
        Language::Rust => match kind {
            "function_item" | "closure_expression" => Some(ScopeKind::Function),
            "impl_item" | "trait_item" => Some(ScopeKind::Class),
            "block" => Some(ScopeKind::Block),
            _ => None,
        },
        Language::Go => match kind {
            "function_declaration" | "method_declaration" | "func_literal" => {
                Some(ScopeKind::Function)
            }
            "block" => Some(ScopeKind::Block),
            _ => None,
        },
        Language::Java => match kind {
            "method_declaration" | "constructor_declaration" | "lambda_expression" => {
                Some(ScopeKind::Function)
            }
            "class_declaration" | "interface_declaration" | "enum_declaration" => {
                Some(ScopeKind::Class)
            }
            "block" => Some(ScopeKind::Block),
            _ => None,
        },
    }
}

/// Extract the declarations a node produces, if any.
pub fn declarations(tree: &SyntaxTree, node: NodeId, out: &mut Vec<Decl>) {
    match tree.language() {
        Language::Python => python_declarations(tree, node, out),
        Language::TypeScript | Language::JavaScript => js_declarations(tree, node, out),
        Language::Rust => rust_declarations(tree, node, out),
        Language::Go => go_declarations(tree, node, out),
        Language::Java => java_declarations(tree, node, out),
    }
}

/// Export convention: Go exports capitalized module-level names, everything
/// else treats a leading underscore as private.
pub fn is_exported(language: Language, name: &str) -> bool {
    match language {
        Language::Go => name.chars().next().is_some_and(|c| c.is_uppercase()),
        _ => !name.starts_with('_'),
    }
}

// ---- per-language declaration extraction ----

fn python_declarations(tree: &SyntaxTree, node: NodeId, out: &mut Vec<Decl>) {
    match tree.kind(node) {
        "function_definition" => {
            if let Some(name) = tree.child_by_kind(node, "identifier") {
                out.push(Decl {
                    name_node: name,
                    kind: SymbolKind::Function,
                    placement: Placement::Enclosing,
                });
            }
            if let Some(params) = tree.child_by_kind(node, "parameters") {
                collect_pattern_identifiers(tree, params, SymbolKind::Parameter, Placement::Inner, out);
            }
        }
        "lambda" => {
            if let Some(params) = tree.child_by_kind(node, "lambda_parameters") {
                collect_pattern_identifiers(tree, params, SymbolKind::Parameter, Placement::Inner, out);
            }
        }
        "class_definition" => {
            if let Some(name) = tree.child_by_kind(node, "identifier") {
                out.push(Decl {
                    name_node: name,
                    kind: SymbolKind::Class,
                    placement: Placement::Enclosing,
                });
            }
        }
        "assignment" | "augmented_assignment" => {
            if let Some(&target) = tree.children(node).first() {
                collect_pattern_identifiers(tree, target, SymbolKind::Variable, Placement::Current, out);
            }
        }
        "for_statement" => {
            if let Some(&target) = tree.children(node).first() {
                collect_pattern_identifiers(tree, target, SymbolKind::Variable, Placement::Current, out);
            }
        }
        "named_expression" => {
            if let Some(&target) = tree.children(node).first() {
                if tree.kind(target) == "identifier" {
                    out.push(Decl {
                        name_node: target,
                        kind: SymbolKind::Variable,
                        placement: Placement::Current,
                    });
                }
            }
        }
        _ => {}
    }
}

fn js_declarations(tree: &SyntaxTree, node: NodeId, out: &mut Vec<Decl>) {
    match tree.kind(node) {
        "function_declaration" | "generator_function_declaration" | "function_expression" => {
            if let Some(name) = tree.child_by_kind(node, "identifier") {
                out.push(Decl {
                    name_node: name,
                    kind: SymbolKind::Function,
                    placement: Placement::Enclosing,
                });
            }
            if let Some(params) = tree.child_by_kind(node, "formal_parameters") {
                collect_pattern_identifiers(tree, params, SymbolKind::Parameter, Placement::Inner, out);
            }
        }
        "arrow_function" => {
            // Either `(a, b) => …` or the single bare-identifier form `a => …`.
            if let Some(params) = tree.child_by_kind(node, "formal_parameters") {
                collect_pattern_identifiers(tree, params, SymbolKind::Parameter, Placement::Inner, out);
            } else if let Some(&first) = tree.children(node).first() {
                if tree.kind(first) == "identifier" {
                    out.push(Decl {
                        name_node: first,
                        kind: SymbolKind::Parameter,
                        placement: Placement::Inner,
                    });
                }
            }
        }
        "method_definition" => {
            if let Some(params) = tree.child_by_kind(node, "formal_parameters") {
                collect_pattern_identifiers(tree, params, SymbolKind::Parameter, Placement::Inner, out);
            }
        }
        "class_declaration" => {
            if let Some(name) = tree.child_in_kinds(node, &["identifier", "type_identifier"]) {
                out.push(Decl {
                    name_node: name,
                    kind: SymbolKind::Class,
                    placement: Placement::Enclosing,
                });
            }
        }
        "variable_declarator" => {
            if let Some(&target) = tree.children(node).first() {
                collect_pattern_identifiers(tree, target, SymbolKind::Variable, Placement::Current, out);
            }
        }
        _ => {}
    }
}

fn rust_declarations(tree: &SyntaxTree, node: NodeId, out: &mut Vec<Decl>) {
    match tree.kind(node) {
        "function_item" => {
            if let Some(name) = tree.child_by_kind(node, "identifier") {
                out.push(Decl {
                    name_node: name,
                    kind: SymbolKind::Function,
                    placement: Placement::Enclosing,
                });
            }
            if let Some(params) = tree.child_by_kind(node, "parameters") {
                collect_pattern_identifiers(tree, params, SymbolKind::Parameter, Placement::Inner, out);
            }
        }
        "closure_expression" => {
            if let Some(params) = tree.child_by_kind(node, "closure_parameters") {
                collect_pattern_identifiers(tree, params, SymbolKind::Parameter, Placement::Inner, out);
            }
        }
        "struct_item" | "enum_item" | "trait_item" | "union_item" => {
            if let Some(name) = tree.child_by_kind(node, "type_identifier") {
                out.push(Decl {
                    name_node: name,
                    kind: SymbolKind::Class,
                    placement: Placement::Current,
                });
            }
        }
        "let_declaration" => {
            if let Some(&pattern) = tree.children(node).first() {
                collect_pattern_identifiers(tree, pattern, SymbolKind::Variable, Placement::Current, out);
            }
        }
        "const_item" | "static_item" => {
            if let Some(name) = tree.child_by_kind(node, "identifier") {
                out.push(Decl {
                    name_node: name,
                    kind: SymbolKind::Variable,
                    placement: Placement::Current,
                });
            }
        }
        _ => {}
    }
}

fn go_declarations(tree: &SyntaxTree, node: NodeId, out: &mut Vec<Decl>) {
    match tree.kind(node) {
        "function_declaration" | "method_declaration" => {
            if let Some(name) = tree.child_in_kinds(node, &["identifier", "field_identifier"]) {
                out.push(Decl {
                    name_node: name,
                    kind: SymbolKind::Function,
                    placement: Placement::Enclosing,
                });
            }
            for &child in tree.children(node) {
                if tree.kind(child) == "parameter_list" {
                    collect_pattern_identifiers(tree, child, SymbolKind::Parameter, Placement::Inner, out);
                }
            }
        }
        "short_var_declaration" => {
            if let Some(&left) = tree.children(node).first() {
                collect_pattern_identifiers(tree, left, SymbolKind::Variable, Placement::Current, out);
            }
        }
        "var_spec" | "const_spec" => {
            for &child in tree.children(node) {
                if tree.kind(child) == "identifier" {
                    out.push(Decl {
                        name_node: child,
                        kind: SymbolKind::Variable,
                        placement: Placement::Current,
                    });
                }
            }
        }
        "type_spec" => {
            if let Some(name) = tree.child_by_kind(node, "type_identifier") {
                out.push(Decl {
                    name_node: name,
                    kind: SymbolKind::Class,
                    placement: Placement::Current,
                });
            }
        }
        "range_clause" => {
            if let Some(&left) = tree.children(node).first() {
                if tree.kind(left) == "expression_list" {
                    collect_pattern_identifiers(tree, left, SymbolKind::Variable, Placement::Current, out);
                }
            }
        }
        _ => {}
    }
}

fn java_declarations(tree: &SyntaxTree, node: NodeId, out: &mut Vec<Decl>) {
    match tree.kind(node) {
        "class_declaration" | "interface_declaration" | "enum_declaration" => {
            if let Some(name) = tree.child_by_kind(node, "identifier") {
                out.push(Decl {
                    name_node: name,
                    kind: SymbolKind::Class,
                    placement: Placement::Enclosing,
                });
            }
        }
        "method_declaration" | "constructor_declaration" => {
            if let Some(name) = tree.child_by_kind(node, "identifier") {
                out.push(Decl {
                    name_node: name,
                    kind: SymbolKind::Function,
                    placement: Placement::Enclosing,
                });
            }
            if let Some(params) = tree.child_by_kind(node, "formal_parameters") {
                collect_pattern_identifiers(tree, params, SymbolKind::Parameter, Placement::Inner, out);
            }
        }
        "variable_declarator" => {
            if let Some(name) = tree.child_by_kind(node, "identifier") {
                out.push(Decl {
                    name_node: name,
                    kind: SymbolKind::Variable,
                    placement: Placement::Current,
                });
            }
        }
        _ => {}
    }
}

/// Binding-pattern kinds we descend through when collecting bound names.
/// Anything else is an expression and stops the descent — identifiers on
/// the value side of a default are references, not bindings.
const PATTERN_KINDS: &[&str] = &[
    "parameters",
    "lambda_parameters",
    "formal_parameters",
    "closure_parameters",
    "parameter_list",
    "parameter_declaration",
    "variadic_parameter_declaration",
    "formal_parameter",
    "required_parameter",
    "optional_parameter",
    "parameter",
    "typed_parameter",
    "default_parameter",
    "typed_default_parameter",
    "list_splat_pattern",
    "dictionary_splat_pattern",
    "rest_pattern",
    "object_pattern",
    "array_pattern",
    "tuple_pattern",
    "tuple_struct_pattern",
    "struct_pattern",
    "list_pattern",
    "pattern_list",
    "expression_list",
    "mut_pattern",
    "ref_pattern",
];

/// Collect bound identifiers under a binding pattern, iteratively.
fn collect_pattern_identifiers(
    tree: &SyntaxTree,
    root: NodeId,
    kind: SymbolKind,
    placement: Placement,
    out: &mut Vec<Decl>,
) {
    let ident_kinds = crate::tree::kind_tables::identifier_kinds(tree.language());
    let mut stack = vec![root];
    while let Some(node) = stack.pop() {
        let node_kind = tree.kind(node);
        if ident_kinds.contains(&node_kind) {
            out.push(Decl {
                name_node: node,
                kind,
                placement,
            });
            continue;
        }
        match node_kind {
            // `x = default` binds only its pattern side; the default value
            // is an expression whose identifiers are references.
            "assignment_pattern" | "default_parameter" | "typed_default_parameter" => {
                if let Some(&first) = tree.children(node).first() {
                    stack.push(first);
                }
            }
            // `{ key: pattern }` binds the pattern side.
            "pair_pattern" => {
                if let Some(&value) = tree.children(node).get(1) {
                    stack.push(value);
                }
            }
            _ if PATTERN_KINDS.contains(&node_kind) => {
                for &child in tree.children(node).iter().rev() {
                    stack.push(child);
                }
            }
            // Anything else (attribute access, subscript, type nodes, plain
            // expressions) binds nothing and stops the descent.
            _ => {}
        }
    }
}

// ---- per-language import extraction ----

/// Parse an import-statement node into records plus local bindings.
pub fn imports_of(tree: &SyntaxTree, node: NodeId, out: &mut Vec<ImportParse>) {
    match tree.language() {
        Language::Python => python_imports(tree, node, out),
        Language::TypeScript | Language::JavaScript => js_imports(tree, node, out),
        Language::Rust => rust_imports(tree, node, out),
        Language::Go => go_imports(tree, node, out),
        Language::Java => java_imports(tree, node, out),
    }
}

fn record(
    module: &str,
    symbol: Option<&str>,
    alias: Option<&str>,
    wildcard: bool,
    span: ByteSpan,
) -> ImportRecord {
    ImportRecord {
        module: module.to_string(),
        symbol: symbol.map(str::to_string),
        alias: alias.map(str::to_string),
        wildcard,
        span,
    }
}

fn strip_quotes(text: &str) -> &str {
    text.trim_matches(|c| c == '"' || c == '\'' || c == '`')
}

fn python_imports(tree: &SyntaxTree, node: NodeId, out: &mut Vec<ImportParse>) {
    let span = tree.span(node);
    match tree.kind(node) {
        "import_statement" => {
            // `import a.b` / `import a.b as c`
            for &child in tree.children(node) {
                match tree.kind(child) {
                    "dotted_name" => {
                        let module = tree.text(child);
                        // `import a.b` binds only `a`; the binding span must
                        // cover that first segment, not the whole dotted path.
                        let bound_node = tree.children(child).first().copied().unwrap_or(child);
                        let bound = module.split('.').next().unwrap_or(module);
                        out.push(ImportParse {
                            record: record(module, None, None, false, span),
                            binding: Some((bound.to_string(), bound_node)),
                        });
                    }
                    "aliased_import" => {
                        let module = tree
                            .child_by_kind(child, "dotted_name")
                            .map(|n| tree.text(n))
                            .unwrap_or_default()
                            .to_string();
                        let alias_node = tree.child_by_kind(child, "identifier");
                        let alias = alias_node.map(|n| tree.text(n).to_string());
                        out.push(ImportParse {
                            record: record(&module, None, alias.as_deref(), false, span),
                            binding: alias.map(|a| (a, alias_node.unwrap())),
                        });
                    }
                    _ => {}
                }
            }
        }
        "import_from_statement" => {
            // `from a.b import x, y as z` / `from a.b import *`
            let Some(module_node) = tree
                .child_in_kinds(node, &["dotted_name", "relative_import"])
            else {
                return;
            };
            let module = tree.text(module_node).to_string();
            let mut saw_name = false;
            for &child in tree.children(node).iter().skip(1) {
                if child == module_node {
                    continue;
                }
                match tree.kind(child) {
                    "dotted_name" => {
                        saw_name = true;
                        let name = tree.text(child);
                        out.push(ImportParse {
                            record: record(&module, Some(name), None, false, span),
                            binding: Some((name.to_string(), child)),
                        });
                    }
                    "aliased_import" => {
                        saw_name = true;
                        let name = tree
                            .child_by_kind(child, "dotted_name")
                            .map(|n| tree.text(n))
                            .unwrap_or_default()
                            .to_string();
                        let alias_node = tree.child_by_kind(child, "identifier");
                        let alias = alias_node.map(|n| tree.text(n).to_string());
                        out.push(ImportParse {
                            record: record(&module, Some(&name), alias.as_deref(), false, span),
                            binding: alias.map(|a| (a, alias_node.unwrap())),
                        });
                    }
                    "wildcard_import" => {
                        saw_name = true;
                        out.push(ImportParse {
                            record: record(&module, None, None, true, span),
                            binding: None,
                        });
                    }
                    _ => {}
                }
            }
            if !saw_name {
                out.push(ImportParse {
                    record: record(&module, None, None, false, span),
                    binding: None,
                });
            }
        }
        _ => {}
    }
}

fn js_imports(tree: &SyntaxTree, node: NodeId, out: &mut Vec<ImportParse>) {
    let span = tree.span(node);
    let Some(source_node) = tree.child_by_kind(node, "string") else {
        return;
    };
    let module = strip_quotes(tree.text(source_node)).to_string();

    let Some(clause) = tree.child_by_kind(node, "import_clause") else {
        // Side-effect import: `import "./polyfill";`
        out.push(ImportParse {
            record: record(&module, None, None, false, span),
            binding: None,
        });
        return;
    };

    for &child in tree.children(clause) {
        match tree.kind(child) {
            "identifier" => {
                // Default import.
                let name = tree.text(child).to_string();
                out.push(ImportParse {
                    record: record(&module, Some("default"), Some(&name), false, span),
                    binding: Some((name, child)),
                });
            }
            "namespace_import" => {
                let alias_node = tree.child_by_kind(child, "identifier");
                let alias = alias_node.map(|n| tree.text(n).to_string());
                out.push(ImportParse {
                    record: record(&module, None, alias.as_deref(), true, span),
                    binding: alias.map(|a| (a, alias_node.unwrap())),
                });
            }
            "named_imports" => {
                for &spec in tree.children(child) {
                    if tree.kind(spec) != "import_specifier" {
                        continue;
                    }
                    let idents: Vec<NodeId> = tree
                        .children(spec)
                        .iter()
                        .copied()
                        .filter(|&n| tree.kind(n) == "identifier")
                        .collect();
                    let Some(&name_node) = idents.first() else {
                        continue;
                    };
                    let name = tree.text(name_node).to_string();
                    let alias_node = idents.get(1).copied();
                    let alias = alias_node.map(|n| tree.text(n).to_string());
                    let bound = alias.clone().unwrap_or_else(|| name.clone());
                    let bound_node = alias_node.unwrap_or(name_node);
                    out.push(ImportParse {
                        record: record(&module, Some(&name), alias.as_deref(), false, span),
                        binding: Some((bound, bound_node)),
                    });
                }
            }
            _ => {}
        }
    }
}

fn rust_imports(tree: &SyntaxTree, node: NodeId, out: &mut Vec<ImportParse>) {
    let span = tree.span(node);
    let Some(&arg) = tree.children(node).first() else {
        return;
    };
    let text = tree.text(arg);
    let wildcard = text.ends_with('*');
    let (path, alias) = match tree.kind(arg) {
        "use_as_clause" => {
            let path = tree
                .children(arg)
                .first()
                .map(|&n| tree.text(n))
                .unwrap_or_default();
            let alias = tree
                .child_by_kind(arg, "identifier")
                .map(|n| tree.text(n).to_string());
            (path.to_string(), alias)
        }
        _ => (text.to_string(), None),
    };
    let symbol = path
        .rsplit("::")
        .next()
        .filter(|s| *s != "*")
        .map(str::to_string);
    let bound = alias.clone().or_else(|| symbol.clone());
    out.push(ImportParse {
        record: record(&path, symbol.as_deref(), alias.as_deref(), wildcard, span),
        binding: bound.map(|b| (b, arg)),
    });
}

fn go_imports(tree: &SyntaxTree, node: NodeId, out: &mut Vec<ImportParse>) {
    let span = tree.span(node);
    let Some(path_node) = tree.child_by_kind(node, "interpreted_string_literal") else {
        return;
    };
    let module = strip_quotes(tree.text(path_node)).to_string();
    let alias_node = tree.child_by_kind(node, "package_identifier");
    let alias = alias_node.map(|n| tree.text(n).to_string());
    let bound = alias
        .clone()
        .or_else(|| module.rsplit('/').next().map(str::to_string));
    let bound_node = alias_node.unwrap_or(path_node);
    out.push(ImportParse {
        record: record(&module, None, alias.as_deref(), false, span),
        binding: bound.map(|b| (b, bound_node)),
    });
}

fn java_imports(tree: &SyntaxTree, node: NodeId, out: &mut Vec<ImportParse>) {
    let span = tree.span(node);
    let Some(path_node) = tree.child_in_kinds(node, &["scoped_identifier", "identifier"]) else {
        return;
    };
    let path = tree.text(path_node).to_string();
    let wildcard = tree.child_by_kind(node, "asterisk").is_some();
    let symbol = if wildcard {
        None
    } else {
        path.rsplit('.').next().map(str::to_string)
    };
    out.push(ImportParse {
        record: record(&path, symbol.as_deref(), None, wildcard, span),
        binding: symbol.map(|s| (s, path_node)),
    });
}
