//! Span module - Source location tracking.
//!
//! A [`Span`] pairs a byte range in the source text with the human-readable
//! line and column of its first character.
//!
//! # Examples
//!
//! ```
//! use pl0c_util::span::Span;
//!
//! let span = Span::new(10, 13, 2, 5);
//! assert_eq!(span.len(), 3);
//! assert_eq!(span.line, 2);
//! ```

use std::fmt;

/// Source location span
///
/// Byte offsets are half-open (`start..end`). `line` and `column` describe
/// where `start` sits and are both 1-based.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in characters)
    pub column: u32,
}

impl Span {
    /// Create a new span
    ///
    /// # Examples
    ///
    /// ```
    /// use pl0c_util::span::Span;
    ///
    /// let span = Span::new(10, 20, 1, 5);
    /// assert_eq!(span.start, 10);
    /// assert_eq!(span.end, 20);
    /// ```
    #[inline]
    pub const fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Create an empty span at a byte offset
    ///
    /// # Examples
    ///
    /// ```
    /// use pl0c_util::span::Span;
    ///
    /// let point = Span::point(7, 2, 3);
    /// assert_eq!(point.start, point.end);
    /// assert!(point.is_empty());
    /// ```
    #[inline]
    pub const fn point(offset: usize, line: u32, column: u32) -> Self {
        Self::new(offset, offset, line, column)
    }

    /// Returns true if this span is empty (start == end)
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Extend this span up to the end of `other`
    ///
    /// The location (line and column) of `self` is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use pl0c_util::span::Span;
    ///
    /// let colon = Span::new(4, 5, 1, 5);
    /// let equals = Span::new(5, 6, 1, 6);
    /// let assign = colon.to(equals);
    /// assert_eq!((assign.start, assign.end), (4, 6));
    /// assert_eq!(assign.column, 5);
    /// ```
    #[inline]
    pub fn to(self, other: Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
            line: self.line,
            column: self.column,
        }
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_new() {
        let span = Span::new(3, 8, 2, 4);
        assert_eq!(span.start, 3);
        assert_eq!(span.end, 8);
        assert_eq!(span.line, 2);
        assert_eq!(span.column, 4);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_span_point() {
        let span = Span::point(12, 3, 1);
        assert!(span.is_empty());
        assert_eq!(span.len(), 0);
    }

    #[test]
    fn test_span_to_keeps_start_location() {
        let first = Span::new(0, 1, 1, 1);
        let second = Span::new(1, 2, 1, 2);
        let merged = first.to(second);
        assert_eq!(merged, Span::new(0, 2, 1, 1));
    }

    #[test]
    fn test_span_display() {
        assert_eq!(Span::new(0, 1, 7, 3).to_string(), "7:3");
    }
}
