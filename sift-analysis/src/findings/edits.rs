//! Edit application.
//!
//! Edits are applied in descending start order so earlier spans stay valid
//! without offset bookkeeping. Overlap is a caller error, not something to
//! silently resolve.

use serde::{Deserialize, Serialize};
use sift_core::errors::EditError;
use sift_core::types::span::ByteSpan;

/// One replacement: bytes in `span` become `replacement`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Edit {
    pub span: ByteSpan,
    pub replacement: String,
}

impl Edit {
    pub fn new(span: ByteSpan, replacement: impl Into<String>) -> Self {
        Self {
            span,
            replacement: replacement.into(),
        }
    }

    /// Pure deletion of `span`.
    pub fn delete(span: ByteSpan) -> Self {
        Self::new(span, "")
    }
}

/// Apply `edits` to `source`, returning the rewritten text.
///
/// Edits may arrive in any order. Any overlap (including a non-empty span
/// touching an insertion point inside it) rejects the whole batch.
pub fn apply_edits(source: &str, edits: &[Edit]) -> Result<String, EditError> {
    if edits.is_empty() {
        return Ok(source.to_string());
    }

    let mut ordered: Vec<&Edit> = edits.iter().collect();
    ordered.sort_by(|a, b| {
        (b.span.start, b.span.end).cmp(&(a.span.start, a.span.end))
    });

    // After the descending sort, overlap shows up between neighbours:
    // the later edit in text order must start at or after the earlier
    // edit's end.
    for pair in ordered.windows(2) {
        let (later, earlier) = (&pair[0], &pair[1]);
        if earlier.span.end > later.span.start {
            return Err(EditError::Overlap {
                a: earlier.span,
                b: later.span,
            });
        }
    }

    let len = source.len();
    let mut out = source.to_string();
    for edit in ordered {
        let span = edit.span;
        if span.end as usize > len || span.start > span.end {
            return Err(EditError::OutOfBounds { span, len });
        }
        if !out.is_char_boundary(span.start as usize) || !out.is_char_boundary(span.end as usize) {
            return Err(EditError::NotCharBoundary { span });
        }
        out.replace_range(span.start as usize..span.end as usize, &edit.replacement);
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn applies_in_descending_order_without_offset_drift() {
        let source = "let aa = 1;\nlet bb = 2;\n";
        let edits = vec![
            Edit::new(ByteSpan::new(4, 6), "first"),
            Edit::new(ByteSpan::new(16, 18), "second"),
        ];
        let out = apply_edits(source, &edits).unwrap();
        assert_eq!(out, "let first = 1;\nlet second = 2;\n");
    }

    #[test]
    fn overlapping_edits_rejected() {
        let edits = vec![
            Edit::new(ByteSpan::new(0, 4), "x"),
            Edit::new(ByteSpan::new(3, 6), "y"),
        ];
        let err = apply_edits("abcdefgh", &edits).unwrap_err();
        assert!(matches!(err, EditError::Overlap { .. }));
    }

    #[test]
    fn adjacent_edits_allowed() {
        let edits = vec![
            Edit::new(ByteSpan::new(0, 2), "A"),
            Edit::new(ByteSpan::new(2, 4), "B"),
        ];
        assert_eq!(apply_edits("abcd", &edits).unwrap(), "AB");
    }

    #[test]
    fn out_of_bounds_rejected() {
        let edits = vec![Edit::delete(ByteSpan::new(4, 9))];
        let err = apply_edits("abc", &edits).unwrap_err();
        assert!(matches!(err, EditError::OutOfBounds { len: 3, .. }));
    }

    #[test]
    fn multibyte_boundary_rejected() {
        // 'é' is two bytes; splitting it is invalid.
        let edits = vec![Edit::delete(ByteSpan::new(1, 2))];
        let err = apply_edits("é!", &edits).unwrap_err();
        assert!(matches!(err, EditError::NotCharBoundary { .. }));
    }

    #[test]
    fn empty_edit_list_is_identity() {
        assert_eq!(apply_edits("unchanged", &[]).unwrap(), "unchanged");
    }
}
