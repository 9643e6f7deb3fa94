//! Conversion from tree-sitter trees into the arena model.

use sift_core::types::span::ByteSpan;
use smallvec::SmallVec;

use crate::scanner::Language;

use super::types::{NodeData, NodeId, SyntaxTree};

/// Build an arena `SyntaxTree` from a parsed tree-sitter tree.
///
/// Only named nodes are materialized — punctuation and keyword tokens stay
/// behind the adapter boundary. The walk still visits every node, because
/// tree-sitter recovers some malformed input with unnamed MISSING tokens
/// and those must reach `error_count`/`error_spans` even though they never
/// become arena nodes. Conversion is iterative (explicit stack), so
/// adversarially deep input cannot blow the call stack. Child spans are
/// clamped into the parent span; some grammars report out-of-range spans
/// for synthetic (MISSING) nodes, and this is the normalization point.
pub(crate) fn build_tree(
    language: Language,
    source: String,
    ts_tree: &tree_sitter::Tree,
    content_hash: u64,
    parse_time_us: u64,
) -> SyntaxTree {
    let root = ts_tree.root_node();
    let mut nodes: Vec<NodeData> = Vec::new();
    let mut error_count = 0u32;
    let mut error_spans: Vec<ByteSpan> = Vec::new();

    // Stack entries: (tree-sitter node, parent arena id).
    // Children are pushed in reverse so pop order is source order,
    // which makes arena index order equal pre-order.
    let mut stack: Vec<(tree_sitter::Node, Option<NodeId>)> = vec![(root, None)];

    while let Some((ts_node, parent)) = stack.pop() {
        let span = normalized_span(&ts_node, parent.map(|p| nodes[p.index()].span));
        let is_error = ts_node.is_error() || ts_node.is_missing();
        if is_error {
            error_count += 1;
            error_spans.push(span);
        }

        let arena_parent = if ts_node.is_named() || nodes.is_empty() {
            let id = NodeId(nodes.len() as u32);
            nodes.push(NodeData {
                kind: ts_node.kind(),
                span,
                parent,
                children: SmallVec::new(),
                is_error,
            });
            if let Some(parent) = parent {
                nodes[parent.index()].children.push(id);
            }
            Some(id)
        } else {
            // Unnamed token: accounted for above, not materialized.
            // Any descendants attach to the nearest materialized ancestor.
            parent
        };

        let count = ts_node.child_count();
        for i in (0..count).rev() {
            if let Some(child) = ts_node.child(i) {
                stack.push((child, arena_parent));
            }
        }
    }

    error_spans.sort();
    SyntaxTree::new(
        language,
        source,
        nodes,
        error_count,
        error_spans,
        content_hash,
        parse_time_us,
    )
}

/// Byte span of a tree-sitter node, clamped into the parent span.
fn normalized_span(node: &tree_sitter::Node, parent: Option<ByteSpan>) -> ByteSpan {
    let mut start = node.start_byte() as u32;
    let mut end = node.end_byte() as u32;
    if let Some(parent) = parent {
        start = start.clamp(parent.start, parent.end);
        end = end.clamp(start, parent.end);
    }
    ByteSpan::new(start, end)
}
