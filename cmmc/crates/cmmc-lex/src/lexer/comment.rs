//! Comment and whitespace lexing.
//!
//! Both are trivia: they are scanned as lexemes so the source can be
//! reproduced, but [`Lexer::next_token`] skips them.

use crate::charset::is_whitespace;
use crate::token::TokenKind;
use crate::Lexer;

impl<'src, 'h> Lexer<'src, 'h> {
    /// Lexes a line comment, from `#` up to but not including the next
    /// newline or the end of input.
    pub(crate) fn lex_comment(&mut self) -> TokenKind {
        self.cursor.advance();
        self.cursor.advance_while(|b| b != b'\n');
        TokenKind::Comment
    }

    /// Lexes a maximal run of whitespace.
    pub(crate) fn lex_whitespace(&mut self) -> TokenKind {
        self.cursor.advance_while(is_whitespace);
        TokenKind::Whitespace
    }
}
