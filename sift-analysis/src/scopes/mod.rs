//! Scope graph — per-file nested lexical scopes with symbol tables.
//!
//! Built in one pre-order pass over the normalized tree; immutable after
//! build; discarded with the file's tree. Shadowing is a lookup concern
//! (`lookup`), not something the builder computes eagerly.

pub mod builder;
pub mod builtins;
pub mod lookup;
pub mod tables;
pub mod types;

pub use builder::build_scope_graph;
pub use lookup::{resolve, find_shadowed, Resolution, ShadowInfo};
pub use types::{
    ImportRecord, Scope, ScopeGraph, ScopeId, ScopeKind, Symbol, SymbolId, SymbolKind,
};
