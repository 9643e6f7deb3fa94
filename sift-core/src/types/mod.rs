//! Shared primitive types.

pub mod collections;
pub mod span;

pub use span::ByteSpan;
