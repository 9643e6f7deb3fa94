//! Tree traversal: pre-order walks and bounded ancestor queries.

use super::types::{NodeId, SyntaxTree};

/// Cap on upward ancestor walks.
///
/// Context queries ("is this node inside a loop?") walk parent links at
/// most this many steps. Deeply nested or generated code therefore costs a
/// fixed amount per query instead of O(depth).
pub const MAX_ANCESTOR_DEPTH: u32 = 16;

impl SyntaxTree {
    /// Lazy pre-order walk over the whole tree.
    ///
    /// Restartable: every call starts from scratch and holds no state
    /// beyond its own cursor. Arena order is pre-order, so this is a plain
    /// index scan.
    pub fn walk(&self) -> Preorder<'_> {
        Preorder {
            tree: self,
            next: 0,
        }
    }

    /// Lazy pre-order walk of the subtree rooted at `id`.
    pub fn walk_from(&self, id: NodeId) -> SubtreePreorder<'_> {
        SubtreePreorder {
            tree: self,
            stack: vec![id],
        }
    }

    /// Upward walk from `id`, capped at `MAX_ANCESTOR_DEPTH` steps.
    pub fn ancestors(&self, id: NodeId) -> Ancestors<'_> {
        self.ancestors_within(id, MAX_ANCESTOR_DEPTH)
    }

    /// Upward walk from `id` with an explicit cap.
    pub fn ancestors_within(&self, id: NodeId, max_depth: u32) -> Ancestors<'_> {
        Ancestors {
            tree: self,
            current: Some(id),
            remaining: max_depth,
        }
    }

    /// True if `id` has an ancestor with a kind in `kinds`, within the
    /// bounded walk depth.
    pub fn is_inside(&self, id: NodeId, kinds: &[&str]) -> bool {
        self.ancestors(id).any(|a| kinds.contains(&self.kind(a)))
    }

    /// Nearest ancestor with a kind in `kinds`, within the bounded depth.
    pub fn nearest_ancestor(&self, id: NodeId, kinds: &[&str]) -> Option<NodeId> {
        self.ancestors(id).find(|&a| kinds.contains(&self.kind(a)))
    }
}

/// Pre-order iterator over a whole tree.
pub struct Preorder<'a> {
    tree: &'a SyntaxTree,
    next: usize,
}

impl Iterator for Preorder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.next < self.tree.node_count() {
            let id = NodeId(self.next as u32);
            self.next += 1;
            Some(id)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = self.tree.node_count() - self.next;
        (left, Some(left))
    }
}

/// Pre-order iterator over one subtree.
pub struct SubtreePreorder<'a> {
    tree: &'a SyntaxTree,
    stack: Vec<NodeId>,
}

impl Iterator for SubtreePreorder<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let id = self.stack.pop()?;
        for &child in self.tree.children(id).iter().rev() {
            self.stack.push(child);
        }
        Some(id)
    }
}

/// Bounded upward iterator; yields ancestors, not the start node.
pub struct Ancestors<'a> {
    tree: &'a SyntaxTree,
    current: Option<NodeId>,
    remaining: u32,
}

impl Iterator for Ancestors<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        if self.remaining == 0 {
            return None;
        }
        let parent = self.tree.parent(self.current?)?;
        self.remaining -= 1;
        self.current = Some(parent);
        Some(parent)
    }
}
