//! Arena-backed syntax tree.

use sift_core::types::span::ByteSpan;
use smallvec::SmallVec;

use crate::scanner::Language;

/// Index of a node within its tree's arena. Never valid across trees.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) u32);

impl NodeId {
    pub fn index(self) -> usize {
        self.0 as usize
    }
}

/// One normalized node: grammar kind string, byte span, tree links.
#[derive(Debug, Clone)]
pub(crate) struct NodeData {
    pub kind: &'static str,
    pub span: ByteSpan,
    pub parent: Option<NodeId>,
    pub children: SmallVec<[NodeId; 4]>,
    pub is_error: bool,
}

/// A parsed file: owns the decoded source and every node.
///
/// Nodes are stored in pre-order, so arena index order is traversal order.
/// The tree is immutable once built and is shared read-only across all
/// rules analyzing the file.
#[derive(Debug)]
pub struct SyntaxTree {
    language: Language,
    source: String,
    nodes: Vec<NodeData>,
    error_count: u32,
    error_spans: Vec<ByteSpan>,
    content_hash: u64,
    parse_time_us: u64,
}

impl SyntaxTree {
    pub(crate) fn new(
        language: Language,
        source: String,
        nodes: Vec<NodeData>,
        error_count: u32,
        error_spans: Vec<ByteSpan>,
        content_hash: u64,
        parse_time_us: u64,
    ) -> Self {
        debug_assert!(!nodes.is_empty(), "a tree always has a root");
        Self {
            language,
            source,
            nodes,
            error_count,
            error_spans,
            content_hash,
            parse_time_us,
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// The root node (always index 0).
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn kind(&self, id: NodeId) -> &'static str {
        self.nodes[id.index()].kind
    }

    pub fn span(&self, id: NodeId) -> ByteSpan {
        self.nodes[id.index()].span
    }

    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.index()].parent
    }

    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.index()].children
    }

    /// True for tree-sitter ERROR and MISSING nodes.
    pub fn is_error(&self, id: NodeId) -> bool {
        self.nodes[id.index()].is_error
    }

    /// Lazily materialized text slice of the original source.
    pub fn text(&self, id: NodeId) -> &str {
        let span = self.span(id);
        &self.source[span.start as usize..span.end as usize]
    }

    /// The whole decoded source.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Number of error-marked nodes (parse degraded, analysis continues).
    pub fn error_count(&self) -> u32 {
        self.error_count
    }

    pub fn has_errors(&self) -> bool {
        self.error_count > 0
    }

    pub fn error_spans(&self) -> &[ByteSpan] {
        &self.error_spans
    }

    pub fn content_hash(&self) -> u64 {
        self.content_hash
    }

    pub fn parse_time_us(&self) -> u64 {
        self.parse_time_us
    }

    /// First child of `id` with the given kind.
    pub fn child_by_kind(&self, id: NodeId, kind: &str) -> Option<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .find(|&c| self.kind(c) == kind)
    }

    /// First child of `id` whose kind is in `kinds`.
    pub fn child_in_kinds(&self, id: NodeId, kinds: &[&str]) -> Option<NodeId> {
        self.children(id)
            .iter()
            .copied()
            .find(|&c| kinds.contains(&self.kind(c)))
    }
}
