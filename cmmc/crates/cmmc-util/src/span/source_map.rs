//! Source files and line tables.
//!
//! A [`SourceFile`] owns the raw bytes of one program together with the
//! byte offset of every line start, so spans can be turned back into lines
//! for diagnostics. Content is kept as bytes because cmm input is not
//! required to be valid UTF-8.

use std::sync::Arc;

use crate::error::{SourceMapError, SourceMapResult};

/// A source file with its content and metadata
///
/// # Examples
///
/// ```
/// use cmmc_util::span::SourceFile;
///
/// let file = SourceFile::new("<stdin>", "int x;\nx = 1;\n");
/// assert_eq!(file.name(), "<stdin>");
/// assert_eq!(file.line_count(), 3);
/// ```
#[derive(Clone)]
pub struct SourceFile {
    /// File name (path or display name)
    name: String,
    /// File content
    content: Arc<[u8]>,
    /// Precomputed line start offsets
    line_starts: Arc<[usize]>,
}

impl SourceFile {
    /// Create a new source file
    ///
    /// # Arguments
    ///
    /// * `name` - File name or display name such as `<stdin>`
    /// * `content` - Raw file content
    pub fn new(name: impl Into<String>, content: impl AsRef<[u8]>) -> Self {
        let content: Arc<[u8]> = Arc::from(content.as_ref());
        let line_starts = Self::line_starts(&content);
        Self {
            name: name.into(),
            content,
            line_starts,
        }
    }

    /// Compute line start offsets from content
    fn line_starts(content: &[u8]) -> Arc<[usize]> {
        let mut line_starts = vec![0];
        line_starts.extend(
            content
                .iter()
                .enumerate()
                .filter(|(_, &b)| b == b'\n')
                .map(|(i, _)| i + 1),
        );
        line_starts.into()
    }

    /// Get the file name
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the file content
    #[inline]
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// Get the total number of lines
    ///
    /// A trailing newline opens a final, empty line.
    #[inline]
    pub fn line_count(&self) -> usize {
        self.line_starts.len()
    }

    /// Get the byte offset where a line starts (0-indexed line number)
    ///
    /// Returns `None` if the line number is out of bounds.
    #[inline]
    pub fn line_start(&self, line: usize) -> Option<usize> {
        self.line_starts.get(line).copied()
    }

    /// Get a specific source line (1-indexed) without its line terminator
    ///
    /// # Examples
    ///
    /// ```
    /// use cmmc_util::span::SourceFile;
    ///
    /// let file = SourceFile::new("t.cmm", "line1\r\nline2\nline3");
    /// assert_eq!(file.line_at(1), Some(&b"line1"[..]));
    /// assert_eq!(file.line_at(3), Some(&b"line3"[..]));
    /// assert_eq!(file.line_at(4), None);
    /// ```
    pub fn line_at(&self, line: usize) -> Option<&[u8]> {
        if line == 0 {
            return None;
        }
        let start = self.line_start(line - 1)?;
        let end = self.line_start(line).unwrap_or(self.content.len());

        let mut text = &self.content[start..end];
        while let [rest @ .., b'\n' | b'\r'] = text {
            text = rest;
        }
        Some(text)
    }

    /// Like [`SourceFile::line_at`], but reports an out-of-range line as an error
    pub fn checked_line(&self, line: usize) -> SourceMapResult<&[u8]> {
        self.line_at(line).ok_or(SourceMapError::InvalidLineNumber {
            line,
            max_lines: self.line_count(),
        })
    }
}

impl std::fmt::Debug for SourceFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceFile")
            .field("name", &self.name)
            .field("len", &self.content.len())
            .field("line_count", &self.line_count())
            .finish()
    }
}
