//! Span module - Source location tracking.
//!
//! This module provides types for representing source code locations as
//! byte offsets plus the 1-based line and column of the first byte.
//!
//! # Examples
//!
//! ```
//! use cmmc_util::span::Span;
//!
//! let span = Span::new(10, 20, 1, 5);
//! assert_eq!(span.len(), 10);
//! ```

mod source_map;

pub use source_map::SourceFile;

/// Source location span
///
/// A `Span` represents a half-open byte range `start..end` in a source
/// buffer, together with the line and column where it starts.
///
/// # Examples
///
/// ```
/// use cmmc_util::span::Span;
///
/// let span = Span::new(4, 7, 2, 1);
/// assert_eq!(span.line, 2);
/// assert_eq!(span.len(), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    /// Start byte offset in source
    pub start: usize,
    /// End byte offset in source (exclusive)
    pub end: usize,
    /// Line number (1-based)
    pub line: u32,
    /// Column number (1-based, in bytes)
    pub column: u32,
}

impl Span {
    /// Dummy span for testing
    ///
    /// # Examples
    ///
    /// ```
    /// use cmmc_util::span::Span;
    ///
    /// assert_eq!(Span::DUMMY.start, 0);
    /// assert_eq!(Span::DUMMY.end, 0);
    /// ```
    pub const DUMMY: Span = Span {
        start: 0,
        end: 0,
        line: 0,
        column: 0,
    };

    /// Create a new span
    ///
    /// # Arguments
    ///
    /// * `start` - Start byte offset
    /// * `end` - End byte offset
    /// * `line` - Line number (1-based)
    /// * `column` - Column number (1-based)
    #[inline]
    pub fn new(start: usize, end: usize, line: u32, column: u32) -> Self {
        Self {
            start,
            end,
            line,
            column,
        }
    }

    /// Returns true if this span is empty (start == end)
    ///
    /// # Examples
    ///
    /// ```
    /// use cmmc_util::span::Span;
    ///
    /// assert!(Span::new(10, 10, 1, 5).is_empty());
    /// assert!(!Span::new(10, 20, 1, 5).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Returns the length of the span in bytes
    #[inline]
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}
