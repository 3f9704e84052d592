//! Token record serialization.
//!
//! A record is the textual form of one significant token:
//!
//! - `<class,value>` for token classes, e.g. `<id,x>` or `<relop,<=>`
//! - `<lexeme>` for reserved words and symbols, e.g. `<while>` or `<;>`
//!
//! For string literals the value is the lexeme without its quotes, with
//! escapes left as written. Records are written as raw bytes so that
//! non-UTF-8 input round-trips exactly.

use std::fmt;
use std::io::{self, Write};

use crate::error::LexError;
use crate::token::{Token, TokenKind};
use crate::Lexer;

/// How records are laid out in the output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Layout {
    /// One record per line.
    #[default]
    Lines,
    /// Records replace their lexemes in place: whitespace is echoed, comments
    /// are dropped, and the line structure of the source is kept.
    Inline,
}

impl Layout {
    /// The name used on the command line and in configuration files.
    pub const fn name(&self) -> &'static str {
        match self {
            Layout::Lines => "lines",
            Layout::Inline => "inline",
        }
    }
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The record of one significant token.
///
/// # Example
///
/// ```
/// use cmmc_lex::{tokenize, TokenRecord};
///
/// let tokens = tokenize(b"x <= 10").unwrap();
/// let records: Vec<String> = tokens
///     .iter()
///     .filter_map(TokenRecord::from_token)
///     .map(|r| r.to_string())
///     .collect();
/// assert_eq!(records, ["<id,x>", "<relop,<=>", "<integernum,10>"]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TokenRecord<'src> {
    class: Option<&'static str>,
    value: &'src [u8],
}

impl<'src> TokenRecord<'src> {
    /// Builds the record of `token`, or `None` for trivia and end of input.
    pub fn from_token(token: &Token<'src>) -> Option<Self> {
        if token.kind.is_trivia() || token.kind == TokenKind::Eof {
            return None;
        }
        Some(Self {
            class: token.kind.record_class(),
            value: token.value(),
        })
    }

    /// Writes the record, without any separator.
    pub fn write_to(&self, out: &mut impl Write) -> io::Result<()> {
        out.write_all(b"<")?;
        if let Some(class) = self.class {
            out.write_all(class.as_bytes())?;
            out.write_all(b",")?;
        }
        out.write_all(self.value)?;
        out.write_all(b">")
    }
}

/// Lossy for non-UTF-8 values; use [`TokenRecord::write_to`] for exact bytes.
impl fmt::Display for TokenRecord<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = String::from_utf8_lossy(self.value);
        match self.class {
            Some(class) => write!(f, "<{},{}>", class, value),
            None => write!(f, "<{}>", value),
        }
    }
}

/// Writes token records and the error line to an output stream.
///
/// # Example
///
/// ```
/// use cmmc_lex::{Layout, Lexer, TokenWriter};
/// use cmmc_util::Handler;
///
/// let mut handler = Handler::new();
/// let mut lexer = Lexer::new("int x; # decl\nx = @;", &mut handler);
/// let mut writer = TokenWriter::new(Vec::new(), Layout::Inline);
///
/// let err = writer.drain(&mut lexer).unwrap();
/// assert!(err.is_some());
/// assert_eq!(
///     writer.into_inner(),
///     b"<int> <id,x><;> \n<id,x> <assign,=> Lexical error: '@' in line number 2\n"
/// );
/// ```
#[derive(Debug)]
pub struct TokenWriter<W: Write> {
    out: W,
    layout: Layout,
    records: usize,
}

impl<W: Write> TokenWriter<W> {
    /// Creates a writer with the given layout.
    pub fn new(out: W, layout: Layout) -> Self {
        Self {
            out,
            layout,
            records: 0,
        }
    }

    /// Writes whatever `token` contributes to the output in this layout.
    ///
    /// In the `Lines` layout trivia contribute nothing; in the `Inline`
    /// layout whitespace is echoed as is.
    pub fn write_lexeme(&mut self, token: &Token<'_>) -> io::Result<()> {
        if let Some(record) = TokenRecord::from_token(token) {
            record.write_to(&mut self.out)?;
            if self.layout == Layout::Lines {
                self.out.write_all(b"\n")?;
            }
            self.records += 1;
        } else if self.layout == Layout::Inline && token.kind == TokenKind::Whitespace {
            self.out.write_all(token.lexeme)?;
        }
        Ok(())
    }

    /// Writes the lexical error line, newline included.
    ///
    /// In the `Lines` layout every record already ends with a newline, so
    /// the error is on a line of its own; in the `Inline` layout it follows
    /// what was written so far.
    pub fn write_error(&mut self, err: &LexError) -> io::Result<()> {
        err.write_to(&mut self.out)
    }

    /// Runs `lexer` to completion, writing every lexeme and, on failure,
    /// the error line.
    ///
    /// Returns the lexical error, if any. I/O errors are returned as `Err`.
    pub fn drain(&mut self, lexer: &mut Lexer<'_, '_>) -> io::Result<Option<LexError>> {
        loop {
            match lexer.next_lexeme() {
                Ok(token) if token.is_eof() => return Ok(None),
                Ok(token) => self.write_lexeme(&token)?,
                Err(err) => {
                    self.write_error(&err)?;
                    return Ok(Some(err));
                },
            }
        }
    }

    /// Number of records written so far.
    pub fn records(&self) -> usize {
        self.records
    }

    /// Flushes the underlying stream.
    pub fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }

    /// Consumes the writer, returning the underlying stream.
    pub fn into_inner(self) -> W {
        self.out
    }
}
