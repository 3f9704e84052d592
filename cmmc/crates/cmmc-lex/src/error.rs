//! Lexical errors.
//!
//! The lexer has exactly one failure: a character that cannot start or
//! extend any token. The error's `Display` form is the diagnostic line
//! written to standard output, without its trailing newline.

use std::fmt;
use std::io::{self, Write};

use cmmc_util::Span;
use thiserror::Error;

/// The offending character of a lexical error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum IllegalChar {
    /// A complete UTF-8 scalar value
    Char(char),
    /// A byte that does not start a valid UTF-8 sequence
    Byte(u8),
}

impl IllegalChar {
    /// Number of source bytes the character occupies.
    pub fn len(&self) -> usize {
        match self {
            IllegalChar::Char(c) => c.len_utf8(),
            IllegalChar::Byte(_) => 1,
        }
    }

    /// Always false; an illegal character occupies at least one byte.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Writes the character exactly as it appeared in the source.
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        match self {
            IllegalChar::Char(c) => {
                let mut buf = [0u8; 4];
                out.write_all(c.encode_utf8(&mut buf).as_bytes())
            },
            IllegalChar::Byte(b) => out.write_all(&[*b]),
        }
    }
}

/// Raw bytes are shown as U+FFFD; use [`IllegalChar::write_to`] for the
/// exact source form.
impl fmt::Display for IllegalChar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IllegalChar::Char(c) => write!(f, "{}", c),
            IllegalChar::Byte(_) => write!(f, "{}", char::REPLACEMENT_CHARACTER),
        }
    }
}

/// Error produced by the lexer.
///
/// # Example
///
/// ```
/// use cmmc_lex::tokenize;
///
/// let err = tokenize(b"@").unwrap_err();
/// assert_eq!(err.to_string(), "Lexical error: '@' in line number 1");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum LexError {
    /// A character that matches no token-start rule and extends no token
    #[error("Lexical error: '{ch}' in line number {line}")]
    IllegalCharacter {
        /// The offending character
        ch: IllegalChar,
        /// 1-based line of the character
        line: u32,
        /// Location of the character in the source
        span: Span,
    },
}

impl LexError {
    /// The offending character.
    pub fn ch(&self) -> IllegalChar {
        match self {
            LexError::IllegalCharacter { ch, .. } => *ch,
        }
    }

    /// 1-based line of the offending character.
    pub fn line(&self) -> u32 {
        match self {
            LexError::IllegalCharacter { line, .. } => *line,
        }
    }

    /// Location of the offending character.
    pub fn span(&self) -> Span {
        match self {
            LexError::IllegalCharacter { span, .. } => *span,
        }
    }

    /// Writes the diagnostic line, newline included, with the offending
    /// character's original bytes.
    ///
    /// # Example
    ///
    /// ```
    /// use cmmc_lex::tokenize;
    ///
    /// let err = tokenize(b"int x;\n\xff").unwrap_err();
    /// let mut out = Vec::new();
    /// err.write_to(&mut out).unwrap();
    /// assert_eq!(out, b"Lexical error: '\xff' in line number 2\n");
    /// ```
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        out.write_all(b"Lexical error: '")?;
        self.ch().write_to(out)?;
        writeln!(out, "' in line number {}", self.line())
    }
}
