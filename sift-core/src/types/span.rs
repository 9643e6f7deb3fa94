//! Half-open byte spans in original file coordinates.

use serde::{Deserialize, Serialize};

/// A half-open byte range `[start, end)` into a file's original byte buffer.
///
/// All locations in Sift — tree nodes, symbols, findings, edits — are byte
/// spans. Line/column rendering is a presentation concern left to consumers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub struct ByteSpan {
    pub start: u32,
    pub end: u32,
}

impl ByteSpan {
    pub fn new(start: u32, end: u32) -> Self {
        debug_assert!(start <= end, "span start must not exceed end");
        Self { start, end }
    }

    pub fn len(&self) -> u32 {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// True if `other` lies entirely within this span.
    pub fn contains(&self, other: &ByteSpan) -> bool {
        self.start <= other.start && other.end <= self.end
    }

    pub fn contains_offset(&self, offset: u32) -> bool {
        self.start <= offset && offset < self.end
    }

    /// True if the two half-open ranges share at least one byte.
    /// Empty spans never overlap anything.
    pub fn overlaps(&self, other: &ByteSpan) -> bool {
        !self.is_empty() && !other.is_empty() && self.start < other.end && other.start < self.end
    }
}

impl std::fmt::Display for ByteSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}..{}", self.start, self.end)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_inclusive_of_boundaries() {
        let outer = ByteSpan::new(10, 20);
        assert!(outer.contains(&ByteSpan::new(10, 20)));
        assert!(outer.contains(&ByteSpan::new(12, 18)));
        assert!(!outer.contains(&ByteSpan::new(9, 15)));
        assert!(!outer.contains(&ByteSpan::new(15, 21)));
    }

    #[test]
    fn adjacent_spans_do_not_overlap() {
        let a = ByteSpan::new(0, 5);
        let b = ByteSpan::new(5, 10);
        assert!(!a.overlaps(&b));
        assert!(!b.overlaps(&a));
        assert!(a.overlaps(&ByteSpan::new(4, 6)));
    }

    #[test]
    fn empty_span_overlaps_nothing() {
        let empty = ByteSpan::new(5, 5);
        assert!(!empty.overlaps(&ByteSpan::new(0, 10)));
        assert!(!ByteSpan::new(0, 10).overlaps(&empty));
    }
}
