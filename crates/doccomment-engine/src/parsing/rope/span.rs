use serde::Serialize;

/// A byte range `[start, end)` into a comment block's rope.
///
/// Block nodes keep the span of the source lines they were assembled from, so
/// callers can map rendered output back to the original comment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Span {
    /// Inclusive start byte offset.
    pub start: usize,
    /// Exclusive end byte offset.
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Returns the length in bytes. Uses saturating subtraction for safety.
    #[must_use]
    pub fn len(self) -> usize {
        self.end.saturating_sub(self.start)
    }

    /// Returns true if the span is empty (start >= end).
    #[must_use]
    pub fn is_empty(self) -> bool {
        self.len() == 0
    }

    /// Smallest span covering both `self` and `other`.
    #[must_use]
    pub fn cover(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cover_joins_disjoint_spans() {
        let a = Span::new(2, 5);
        let b = Span::new(10, 12);
        assert_eq!(a.cover(b), Span::new(2, 12));
        assert_eq!(b.cover(a), Span::new(2, 12));
    }

    #[test]
    fn inverted_span_is_empty() {
        assert!(Span::new(5, 3).is_empty());
        assert_eq!(Span::new(5, 3).len(), 0);
    }
}
