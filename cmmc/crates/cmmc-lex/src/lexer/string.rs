//! String literal lexing.
//!
//! This module handles lexing of double-quoted string literals.

use crate::token::TokenKind;
use crate::Lexer;

impl<'src, 'h> Lexer<'src, 'h> {
    /// Lexes a string literal.
    ///
    /// A string runs from `"` to the next unescaped `"` on the same line.
    /// The only escapes are `\n`, `\t` and `\"`; they are kept in the
    /// lexeme as written. Any other byte except a newline, including
    /// non-ASCII bytes, is taken as is.
    ///
    /// # Returns
    ///
    /// `Some(TokenKind::Str)`, or `None` with the cursor back on the
    /// opening quote if the literal is unterminated, crosses a newline, or
    /// contains an unsupported escape.
    pub(crate) fn lex_string(&mut self) -> Option<TokenKind> {
        let snapshot = self.cursor.snapshot();
        self.cursor.advance();

        loop {
            match self.cursor.current() {
                Some(b'"') => {
                    self.cursor.advance();
                    return Some(TokenKind::Str);
                },
                Some(b'\\') => match self.cursor.peek(1) {
                    Some(b'n' | b't' | b'"') => self.cursor.advance_n(2),
                    _ => break,
                },
                Some(b'\n') | None => break,
                Some(_) => self.cursor.advance(),
            }
        }

        self.cursor.restore(snapshot);
        None
    }
}
