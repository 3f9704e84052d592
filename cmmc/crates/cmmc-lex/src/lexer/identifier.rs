//! Identifier and reserved word lexing.

use crate::charset::is_ident_continue;
use crate::token::{keyword_from_ident, TokenKind};
use crate::Lexer;

impl<'src, 'h> Lexer<'src, 'h> {
    /// Lexes an identifier or reserved word.
    ///
    /// The whole identifier-shaped lexeme is consumed first and then looked
    /// up, so `int` is a reserved word while `integer` and `int_1` are
    /// identifiers.
    pub(crate) fn lex_identifier(&mut self) -> TokenKind {
        self.cursor.advance();
        self.cursor.advance_while(is_ident_continue);

        let text = self.cursor.slice_from(self.token_start);
        keyword_from_ident(text).unwrap_or(TokenKind::Id)
    }
}
