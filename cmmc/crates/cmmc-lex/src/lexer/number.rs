//! Number literal lexing.
//!
//! This module handles lexing of `integernum` and `realnum` literals.

use crate::charset::is_digit;
use crate::token::TokenKind;
use crate::Lexer;

impl<'src, 'h> Lexer<'src, 'h> {
    /// Lexes a number literal.
    ///
    /// # Number Formats
    ///
    /// - Integer: `0`, `42`, `007`
    /// - Real with fraction: `3.14`, `2.5e-3`, `1.0E+10`
    /// - Real with exponent only: `1e10`, `6E-2`
    ///
    /// A `.` or exponent marker that is not followed by digits is not part
    /// of the literal; the scanner backs off to the longest complete
    /// number, so `12.` is `12` followed by `.`, and `1e` is `1`
    /// followed by the identifier `e`.
    pub(crate) fn lex_number(&mut self) -> TokenKind {
        self.cursor.advance_while(is_digit);
        let mut kind = TokenKind::IntegerNum;

        if self.cursor.current() == Some(b'.') && self.cursor.peek(1).is_some_and(is_digit) {
            self.cursor.advance();
            self.cursor.advance_while(is_digit);
            kind = TokenKind::RealNum;
        }

        if matches!(self.cursor.current(), Some(b'e' | b'E')) {
            let snapshot = self.cursor.snapshot();
            self.cursor.advance();
            if matches!(self.cursor.current(), Some(b'+' | b'-')) {
                self.cursor.advance();
            }
            if self.cursor.current_is(is_digit) {
                self.cursor.advance_while(is_digit);
                kind = TokenKind::RealNum;
            } else {
                self.cursor.restore(snapshot);
            }
        }

        kind
    }
}
