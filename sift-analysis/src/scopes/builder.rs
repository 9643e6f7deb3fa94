//! Scope graph construction — one pre-order pass over the normalized tree.

use tracing::trace;

use crate::tree::{kind_tables, NodeId, SyntaxTree};

use super::tables::{self, Decl, Placement};
use super::types::{ScopeGraph, ScopeId, ScopeKind, Symbol, SymbolKind};

/// Build the scope graph for one file.
///
/// Deterministic: scopes and symbols come out in pre-order, so repeated
/// builds over the same tree produce identical graphs.
pub fn build_scope_graph(tree: &SyntaxTree) -> ScopeGraph {
    let mut graph = ScopeGraph::new(tree.language());
    let module = graph.push_scope(None, ScopeKind::Module, tree.span(tree.root()));
    let import_kinds = kind_tables::import_kinds(tree.language());

    // Explicit stack: (node, scope active at that node). Children pushed in
    // reverse so pop order is source order.
    let mut stack: Vec<(NodeId, ScopeId)> = vec![(tree.root(), module)];
    let mut decls: Vec<Decl> = Vec::new();
    let mut imports = Vec::new();

    while let Some((node, scope)) = stack.pop() {
        let kind = tree.kind(node);

        if import_kinds.contains(&kind) {
            imports.clear();
            tables::imports_of(tree, node, &mut imports);
            for parse in imports.drain(..) {
                if let Some((name, name_node)) = parse.binding {
                    graph.push_symbol(Symbol {
                        name,
                        kind: SymbolKind::Import,
                        scope,
                        span: tree.span(name_node),
                        node: name_node,
                    });
                }
                graph.push_import(parse.record);
            }
        }

        let inner = tables::scope_kind_of(tree.language(), kind)
            .map(|scope_kind| graph.push_scope(Some(scope), scope_kind, tree.span(node)));

        decls.clear();
        tables::declarations(tree, node, &mut decls);
        for decl in decls.drain(..) {
            let target = match decl.placement {
                Placement::Current | Placement::Enclosing => scope,
                Placement::Inner => inner.unwrap_or(scope),
            };
            graph.push_symbol(Symbol {
                name: tree.text(decl.name_node).to_string(),
                kind: decl.kind,
                scope: target,
                span: tree.span(decl.name_node),
                node: decl.name_node,
            });
        }

        let child_scope = inner.unwrap_or(scope);
        for &child in tree.children(node).iter().rev() {
            stack.push((child, child_scope));
        }
    }

    trace!(
        scopes = graph.scope_count(),
        symbols = graph.symbol_count(),
        imports = graph.imports().len(),
        "built scope graph"
    );
    graph
}
