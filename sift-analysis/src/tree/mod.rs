//! Normalized syntax tree — arena node model shared by every language.
//!
//! Adapters convert heterogeneous tree-sitter trees into this one shape;
//! nothing downstream of the adapter boundary sees grammar-specific node
//! objects again.

pub mod builder;
pub mod kind_tables;
pub mod types;
pub mod walk;

pub use types::{NodeId, SyntaxTree};
pub use walk::{Ancestors, Preorder, MAX_ANCESTOR_DEPTH};
