//! Identifier resolution and shadow classification over a scope graph.

use super::builtins::lookup_builtin;
use super::types::{ScopeGraph, ScopeId, SymbolId, SymbolKind};

/// Conventional throwaway name, excluded from shadow detection.
const THROWAWAY: &str = "_";

/// Result of resolving a free identifier from a scope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    /// Resolved to a declaration; the *last* declaration of the name in the
    /// nearest scope wins (later declarations shadow earlier ones).
    Declared(SymbolId),
    /// Not declared anywhere on the chain, but a known builtin.
    Builtin(&'static str),
    /// Not declared and not a builtin. A first-class state, not an error.
    Unresolved,
}

/// Resolve `name` from `from` by walking parent links.
///
/// Conservative on malformed graphs: if the parent chain loops (possible
/// only with a corrupted build from a badly degraded tree), resolution
/// stops and reports `Unresolved` rather than guessing a scope.
pub fn resolve(graph: &ScopeGraph, from: ScopeId, name: &str) -> Resolution {
    let mut current = Some(from);
    let mut steps = 0usize;
    while let Some(scope_id) = current {
        if steps > graph.scope_count() {
            return Resolution::Unresolved;
        }
        steps += 1;
        if let Some(&found) = graph.declarations_of(scope_id, name).last() {
            return Resolution::Declared(found);
        }
        current = graph.get_scope(scope_id).parent;
    }
    match lookup_builtin(graph.language(), name) {
        Some(builtin) => Resolution::Builtin(builtin),
        None => Resolution::Unresolved,
    }
}

/// What a symbol shadows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShadowInfo {
    /// Shadows an earlier declaration; classified by that symbol's kind.
    Symbol { id: SymbolId, kind: SymbolKind },
    /// Shadows a language builtin.
    Builtin { name: &'static str },
}

impl ShadowInfo {
    /// Classification string: builtin / import / variable / function / class.
    pub fn class(&self) -> &'static str {
        match self {
            Self::Symbol { kind, .. } => kind.name(),
            Self::Builtin { .. } => "builtin",
        }
    }
}

/// Find what `symbol` shadows, if anything.
///
/// Checks, in order: an earlier declaration of the same name in the same
/// scope, then each enclosing scope, then the builtin table. The throwaway
/// name `_` never shadows.
pub fn find_shadowed(graph: &ScopeGraph, symbol: SymbolId) -> Option<ShadowInfo> {
    let sym = graph.symbol(symbol);
    if sym.name == THROWAWAY {
        return None;
    }

    // Earlier declaration in the declaring scope itself.
    let same_scope = graph.declarations_of(sym.scope, &sym.name);
    if let Some(pos) = same_scope.iter().position(|&id| id == symbol) {
        if pos > 0 {
            let earlier = same_scope[pos - 1];
            return Some(ShadowInfo::Symbol {
                id: earlier,
                kind: graph.symbol(earlier).kind,
            });
        }
    }

    // First enclosing scope containing the name.
    let mut current = graph.get_scope(sym.scope).parent;
    let mut steps = 0usize;
    while let Some(scope_id) = current {
        if steps > graph.scope_count() {
            return None;
        }
        steps += 1;
        if let Some(&found) = graph.declarations_of(scope_id, &sym.name).last() {
            return Some(ShadowInfo::Symbol {
                id: found,
                kind: graph.symbol(found).kind,
            });
        }
        current = graph.get_scope(scope_id).parent;
    }

    lookup_builtin(graph.language(), &sym.name).map(|name| ShadowInfo::Builtin { name })
}
