//! Project-level import graph.
//!
//! Modules are nodes, imports are edges. Built at most once per run, after
//! every file's scope graph exists, and only when a selected rule asks for
//! it. Imports that match no analyzed file stay as unresolved markers
//! rather than dangling edges.

pub mod builder;
pub mod queries;
pub mod resolve;
pub mod types;

pub use builder::ProjectGraphBuilder;
pub use types::{ExportedSymbol, ImportEdge, ModuleNode, ProjectGraph, UnresolvedImport};
