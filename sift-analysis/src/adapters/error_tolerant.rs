//! Helpers for working with error-degraded trees.

use crate::tree::{NodeId, SyntaxTree};

/// True if `id` sits inside an ERROR subtree.
///
/// Rules use this to skip nodes the parser only guessed at. The walk is
/// bounded like every other ancestor query.
pub fn is_in_error(tree: &SyntaxTree, id: NodeId) -> bool {
    tree.is_error(id) || tree.ancestors(id).any(|a| tree.is_error(a))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::parse_source;
    use crate::scanner::Language;

    #[test]
    fn nodes_under_error_subtrees_are_flagged() {
        let tree = parse_source(
            Language::JavaScript,
            b"function broken( { let x = 1; }\nlet ok = 2;\n",
            std::path::Path::new("mixed.js"),
        )
        .unwrap();
        assert!(tree.has_errors());
        let flagged = tree.walk().filter(|&id| is_in_error(&tree, id)).count();
        let clean = tree.walk().filter(|&id| !is_in_error(&tree, id)).count();
        assert!(flagged > 0, "error subtree nodes should be flagged");
        assert!(clean > 0, "clean statements should survive");
    }
}
