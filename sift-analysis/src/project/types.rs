//! Project graph data model.

use std::path::{Path, PathBuf};

use petgraph::stable_graph::{NodeIndex, StableDiGraph};
use serde::Serialize;
use sift_core::types::collections::FxHashMap;
use sift_core::types::span::ByteSpan;

use crate::scanner::Language;

/// A module-scope symbol visible to other files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedSymbol {
    pub name: String,
    pub span: ByteSpan,
}

/// One analyzed file, as a graph node.
#[derive(Debug, Clone)]
pub struct ModuleNode {
    pub path: PathBuf,
    pub language: Language,
    pub exports: Vec<ExportedSymbol>,
}

/// One resolved import, as a directed edge importer → imported.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportEdge {
    /// Imported symbol name; `None` for whole-module and wildcard imports.
    pub symbol: Option<String>,
    /// Span of the import statement in the importing file.
    pub span: ByteSpan,
}

/// An import whose specifier matched no analyzed file.
///
/// External packages and stdlib imports land here; so do typos. Kept as
/// data instead of edges so graph queries never traverse into the unknown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UnresolvedImport {
    pub importer: PathBuf,
    pub specifier: String,
    pub span: ByteSpan,
}

/// The whole-project import graph. Immutable once built.
#[derive(Debug, Default)]
pub struct ProjectGraph {
    pub(crate) graph: StableDiGraph<ModuleNode, ImportEdge>,
    pub(crate) by_path: FxHashMap<PathBuf, NodeIndex>,
    pub(crate) unresolved: Vec<UnresolvedImport>,
}

impl ProjectGraph {
    pub(crate) fn add_module(&mut self, node: ModuleNode) -> NodeIndex {
        let path = node.path.clone();
        let idx = self.graph.add_node(node);
        self.by_path.insert(path, idx);
        idx
    }

    /// Add an edge importer → imported. Self-imports are dropped; a file
    /// importing itself is noise, not a dependency.
    pub(crate) fn add_import(&mut self, from: NodeIndex, to: NodeIndex, edge: ImportEdge) {
        if from == to {
            return;
        }
        self.graph.add_edge(from, to, edge);
    }

    pub(crate) fn push_unresolved(&mut self, unresolved: UnresolvedImport) {
        self.unresolved.push(unresolved);
    }

    pub fn module_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn import_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn node_index(&self, path: &Path) -> Option<NodeIndex> {
        self.by_path.get(path).copied()
    }

    pub fn module(&self, path: &Path) -> Option<&ModuleNode> {
        self.node_index(path).map(|idx| &self.graph[idx])
    }

    pub fn modules(&self) -> impl Iterator<Item = &ModuleNode> {
        self.graph.node_weights()
    }

    /// Imports that resolved to no analyzed file, in insertion order.
    pub fn unresolved(&self) -> &[UnresolvedImport] {
        &self.unresolved
    }
}
