//! Span algebra properties.

use proptest::prelude::*;
use sift_core::types::span::ByteSpan;

fn span() -> impl Strategy<Value = ByteSpan> {
    (0u32..512, 0u32..64).prop_map(|(start, len)| ByteSpan::new(start, start + len))
}

proptest! {
    #[test]
    fn overlap_is_symmetric(a in span(), b in span()) {
        prop_assert_eq!(a.overlaps(&b), b.overlaps(&a));
    }

    #[test]
    fn containment_of_nonempty_implies_overlap(a in span(), b in span()) {
        if a.contains(&b) && !b.is_empty() {
            prop_assert!(a.overlaps(&b));
        }
    }

    #[test]
    fn empty_spans_overlap_nothing(offset in 0u32..512, b in span()) {
        let empty = ByteSpan::new(offset, offset);
        prop_assert!(empty.is_empty());
        prop_assert!(!empty.overlaps(&b));
        prop_assert!(!b.overlaps(&empty));
    }

    #[test]
    fn contains_is_transitive(a in span(), b in span(), c in span()) {
        if a.contains(&b) && b.contains(&c) {
            prop_assert!(a.contains(&c));
        }
    }

    #[test]
    fn len_matches_covered_offsets(s in span()) {
        let covered = (0u32..1024).filter(|&o| s.contains_offset(o)).count() as u32;
        prop_assert_eq!(covered, s.len());
    }
}
