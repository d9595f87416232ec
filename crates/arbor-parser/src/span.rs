//! Byte ranges into the source text.

use std::ops::Range;

/// A half-open byte range `start..end` into the source text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a new span from a byte range
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end,
        }
    }

    /// Get the start offset of the span
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the end offset of the span
    pub fn end(&self) -> usize {
        self.end
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Create a union of two spans (encompassing both)
    pub fn union(&self, other: Span) -> Span {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }

    /// Returns the empty span positioned at this span's end.
    pub fn end_point(&self) -> Span {
        Self::new(self.end..self.end)
    }

    pub fn to_range(&self) -> Range<usize> {
        self.start..self.end
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_union() {
        let a = Span::new(4..6);
        let b = Span::new(1..3);

        assert_eq!(a.union(b), Span::new(1..6));
        assert_eq!(a.union(b).len(), 5);
    }

    #[test]
    fn test_span_end_point() {
        let span = Span::new(2..9).end_point();
        assert!(span.is_empty());
        assert_eq!(span.start(), 9);
    }
}
