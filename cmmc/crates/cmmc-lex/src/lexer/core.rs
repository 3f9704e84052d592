//! Core lexer implementation.
//!
//! This module contains the main Lexer struct, its scan states and the
//! dispatch on the first byte of each lexeme.

use std::iter::FusedIterator;

use cmmc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
use tracing::{debug, trace};

use crate::charset::{decode_char, is_digit, is_letter, is_whitespace};
use crate::cursor::Cursor;
use crate::error::{IllegalChar, LexError};
use crate::token::{Token, TokenKind};

/// What the lexer is doing, or did last.
///
/// The scanning states name the rule that matched the current lexeme;
/// `Error` and `Done` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ScanState {
    /// A run of whitespace
    Whitespace,
    /// An identifier or reserved word
    IdentifierOrKeyword,
    /// An integer or real literal
    Number,
    /// An operator or punctuation symbol
    Operator,
    /// A `#` comment
    Comment,
    /// A string literal
    StringLiteral,
    /// An illegal character was found; no further tokens are scanned
    Error,
    /// The whole input was consumed
    Done,
}

impl ScanState {
    /// Returns true once scanning has stopped.
    pub const fn is_terminal(&self) -> bool {
        matches!(self, ScanState::Error | ScanState::Done)
    }
}

/// Lexer for the cmm language.
///
/// The lexer borrows the whole source for `'src` and the diagnostic
/// handler for `'h`; tokens only borrow the source, so they outlive the
/// handler borrow.
///
/// # Example
///
/// ```
/// use cmmc_lex::{Lexer, TokenKind};
/// use cmmc_util::Handler;
///
/// let mut handler = Handler::new();
/// let mut lexer = Lexer::new("int x;", &mut handler);
///
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Int);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Id);
/// assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Semicolon);
/// assert!(lexer.next_token().unwrap().is_eof());
/// ```
pub struct Lexer<'src, 'h> {
    /// Byte cursor for source traversal.
    pub(crate) cursor: Cursor<'src>,

    /// Error handler for reporting lexical errors.
    handler: &'h mut Handler,

    /// Starting position of the current lexeme (byte offset).
    pub(crate) token_start: usize,

    /// Line number where the current lexeme starts (1-based).
    token_start_line: u32,

    /// Column number where the current lexeme starts (1-based).
    token_start_column: u32,

    state: ScanState,

    /// The error that stopped scanning, replayed on later calls.
    error: Option<LexError>,
}

impl<'src, 'h> Lexer<'src, 'h> {
    /// Creates a new lexer over `source`.
    pub fn new<S>(source: &'src S, handler: &'h mut Handler) -> Self
    where
        S: AsRef<[u8]> + ?Sized,
    {
        Self {
            cursor: Cursor::new(source.as_ref()),
            handler,
            token_start: 0,
            token_start_line: 1,
            token_start_column: 1,
            state: ScanState::Whitespace,
            error: None,
        }
    }

    /// Returns the next significant token, skipping whitespace and comments.
    ///
    /// Returns a `TokenKind::Eof` token at the end of input. After an
    /// error, every further call returns the same error.
    pub fn next_token(&mut self) -> Result<Token<'src>, LexError> {
        loop {
            let token = self.next_lexeme()?;
            if !token.kind.is_trivia() {
                return Ok(token);
            }
        }
    }

    /// Returns the next lexeme, including whitespace and comment trivia.
    ///
    /// Concatenating the lexemes of every token up to `Eof` reproduces the
    /// source exactly.
    pub fn next_lexeme(&mut self) -> Result<Token<'src>, LexError> {
        if let Some(err) = &self.error {
            return Err(err.clone());
        }

        self.token_start = self.cursor.position();
        self.token_start_line = self.cursor.line();
        self.token_start_column = self.cursor.column();

        let Some(first) = self.cursor.current() else {
            self.state = ScanState::Done;
            return Ok(self.finish(TokenKind::Eof));
        };

        let kind = match first {
            b if is_whitespace(b) => {
                self.state = ScanState::Whitespace;
                self.lex_whitespace()
            },
            b'#' => {
                self.state = ScanState::Comment;
                self.lex_comment()
            },
            b if is_letter(b) => {
                self.state = ScanState::IdentifierOrKeyword;
                self.lex_identifier()
            },
            b if is_digit(b) => {
                self.state = ScanState::Number;
                self.lex_number()
            },
            b'"' => {
                self.state = ScanState::StringLiteral;
                match self.lex_string() {
                    Some(kind) => kind,
                    None => return Err(self.illegal_character()),
                }
            },
            _ => {
                self.state = ScanState::Operator;
                match self.lex_operator() {
                    Some(kind) => kind,
                    None => return Err(self.illegal_character()),
                }
            },
        };

        let token = self.finish(kind);
        trace!(kind = %token.kind, line = token.span.line, "lexeme");
        Ok(token)
    }

    fn finish(&self, kind: TokenKind) -> Token<'src> {
        let span = Span::new(
            self.token_start,
            self.cursor.position(),
            self.token_start_line,
            self.token_start_column,
        );
        Token::new(kind, self.cursor.slice_from(self.token_start), span)
    }

    /// Reports the character at the start of the current lexeme as illegal
    /// and stops scanning.
    fn illegal_character(&mut self) -> LexError {
        let rest = &self.cursor.source()[self.token_start..];
        let ch = decode_char(rest).unwrap_or(IllegalChar::Byte(0));
        let span = Span::new(
            self.token_start,
            self.token_start + ch.len(),
            self.token_start_line,
            self.token_start_column,
        );

        let mut diagnostic = DiagnosticBuilder::error(format!("illegal character '{}'", ch))
            .code(DiagnosticCode::E0101)
            .span(span);
        if let Some(help) = illegal_char_help(ch) {
            diagnostic = diagnostic.help(help);
        }
        diagnostic.emit(self.handler);

        debug!(line = span.line, column = span.column, "illegal character {:?}", ch);

        let err = LexError::IllegalCharacter {
            ch,
            line: self.token_start_line,
            span,
        };
        self.state = ScanState::Error;
        self.error = Some(err.clone());
        err
    }

    /// Returns the current scan state.
    pub fn state(&self) -> ScanState {
        self.state
    }

    /// Returns the current line number (1-based).
    pub fn line(&self) -> u32 {
        self.cursor.line()
    }

    /// Returns the current byte position in the source.
    pub fn position(&self) -> usize {
        self.cursor.position()
    }
}

fn illegal_char_help(ch: IllegalChar) -> Option<&'static str> {
    match ch {
        IllegalChar::Char('&') => Some("logical and is written `&&`"),
        IllegalChar::Char('|') => Some("logical or is written `||`"),
        IllegalChar::Char('"') => Some(
            "string literals end on the same line and only allow the escapes \\n, \\t and \\\"",
        ),
        IllegalChar::Char('_') => Some("identifiers must start with a letter"),
        IllegalChar::Char('.') => Some("a real literal needs digits on both sides of '.'"),
        _ => None,
    }
}

/// Yields significant tokens until end of input or the first error.
///
/// The `Eof` token itself is not yielded.
impl<'src, 'h> Iterator for Lexer<'src, 'h> {
    type Item = Result<Token<'src>, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.state.is_terminal() {
            return None;
        }
        match self.next_token() {
            Ok(token) if token.is_eof() => None,
            result => Some(result),
        }
    }
}

impl FusedIterator for Lexer<'_, '_> {}
