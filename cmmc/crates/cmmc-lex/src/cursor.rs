//! Byte cursor for traversing source code.
//!
//! This module provides the `Cursor` struct which maintains position state
//! while walking the source one byte at a time. cmm source is treated as
//! raw bytes: the grammar is pure ASCII, and any other byte is either part
//! of a string literal or comment, or an illegal character.

/// A cursor for traversing source code byte by byte.
///
/// The cursor tracks the current byte offset together with the 1-based
/// line and column. The line advances by one for every `\n` consumed.
///
/// # Example
///
/// ```
/// use cmmc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new(b"int x;");
///
/// assert_eq!(cursor.current(), Some(b'i'));
/// cursor.advance();
/// assert_eq!(cursor.current(), Some(b'n'));
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'src> {
    /// The source bytes being traversed.
    source: &'src [u8],

    /// Current byte position in the source.
    position: usize,

    /// Current line number (1-based).
    line: u32,

    /// Current column number (1-based, in bytes).
    column: u32,
}

impl<'src> Cursor<'src> {
    /// Creates a new cursor at the start of `source`.
    pub fn new(source: &'src [u8]) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Returns the byte at the cursor, or `None` at the end of the source.
    #[inline]
    pub fn current(&self) -> Option<u8> {
        self.peek(0)
    }

    /// Returns the byte `offset` positions ahead of the cursor.
    ///
    /// # Example
    ///
    /// ```
    /// use cmmc_lex::cursor::Cursor;
    ///
    /// let cursor = Cursor::new(b"<=");
    /// assert_eq!(cursor.peek(0), Some(b'<'));
    /// assert_eq!(cursor.peek(1), Some(b'='));
    /// assert_eq!(cursor.peek(2), None);
    /// ```
    #[inline]
    pub fn peek(&self, offset: usize) -> Option<u8> {
        self.source.get(self.position + offset).copied()
    }

    /// Returns true if the current byte satisfies `pred`.
    #[inline]
    pub fn current_is(&self, pred: impl FnOnce(u8) -> bool) -> bool {
        self.current().is_some_and(pred)
    }

    /// Advances the cursor past the current byte.
    ///
    /// Updates line and column tracking. Does nothing if already at end.
    #[inline]
    pub fn advance(&mut self) {
        let Some(b) = self.current() else {
            return;
        };
        self.position += 1;
        if b == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
    }

    /// Advances the cursor by up to `count` bytes.
    pub fn advance_n(&mut self, count: usize) {
        for _ in 0..count {
            if self.is_at_end() {
                break;
            }
            self.advance();
        }
    }

    /// Advances while the current byte satisfies `pred`.
    ///
    /// # Example
    ///
    /// ```
    /// use cmmc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(b"123abc");
    /// cursor.advance_while(|b| b.is_ascii_digit());
    /// assert_eq!(cursor.position(), 3);
    /// ```
    pub fn advance_while(&mut self, mut pred: impl FnMut(u8) -> bool) {
        while let Some(b) = self.current() {
            if !pred(b) {
                break;
            }
            self.advance();
        }
    }

    /// Returns true if the cursor is at the end of the source.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Matches and consumes the expected byte if present.
    ///
    /// # Example
    ///
    /// ```
    /// use cmmc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(b"&&");
    /// assert!(cursor.match_byte(b'&'));
    /// assert!(cursor.match_byte(b'&'));
    /// assert!(!cursor.match_byte(b'&'));
    /// ```
    pub fn match_byte(&mut self, expected: u8) -> bool {
        if self.current() == Some(expected) {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Returns the current line number (1-based).
    #[inline]
    pub fn line(&self) -> u32 {
        self.line
    }

    /// Returns the current column number (1-based).
    #[inline]
    pub fn column(&self) -> u32 {
        self.column
    }

    /// Returns the current byte position in the source.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns the source bytes from `start` up to the current position.
    pub fn slice_from(&self, start: usize) -> &'src [u8] {
        &self.source[start..self.position]
    }

    /// Returns the full source.
    pub fn source(&self) -> &'src [u8] {
        self.source
    }

    /// Creates a snapshot of the current cursor state.
    ///
    /// Used to back off when a longer lexeme turns out not to match.
    pub fn snapshot(&self) -> CursorSnapshot {
        CursorSnapshot {
            position: self.position,
            line: self.line,
            column: self.column,
        }
    }

    /// Restores the cursor to a previously saved snapshot.
    ///
    /// # Example
    ///
    /// ```
    /// use cmmc_lex::cursor::Cursor;
    ///
    /// let mut cursor = Cursor::new(b"1.x");
    /// cursor.advance();
    /// let snapshot = cursor.snapshot();
    /// cursor.advance();
    /// cursor.restore(snapshot);
    /// assert_eq!(cursor.current(), Some(b'.'));
    /// ```
    pub fn restore(&mut self, snapshot: CursorSnapshot) {
        self.position = snapshot.position;
        self.line = snapshot.line;
        self.column = snapshot.column;
    }
}

/// A snapshot of cursor state that can be restored later.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CursorSnapshot {
    /// Byte position in source.
    pub position: usize,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
}
