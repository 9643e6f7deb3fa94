//! Collection aliases used across the workspace.
//!
//! FxHash is a non-cryptographic hasher; all keys here are trusted
//! (paths, rule ids, symbol names), so speed wins over DoS hardening.

pub use rustc_hash::{FxHashMap, FxHashSet};
pub use smallvec::SmallVec;
