//! Operator and punctuation lexing.
//!
//! Every operator and symbol of cmm is one or two bytes long. Two-byte
//! operators are matched greedily: `<=` is one `relop`, never `<` then `=`.

use crate::token::TokenKind;
use crate::Lexer;

impl<'src, 'h> Lexer<'src, 'h> {
    /// Lexes an operator or punctuation symbol.
    ///
    /// Returns `None`, leaving the cursor in place, when the current byte
    /// starts no operator or symbol. A lone `&` or `|` starts nothing.
    pub(crate) fn lex_operator(&mut self) -> Option<TokenKind> {
        let kind = match self.cursor.current()? {
            b'(' => TokenKind::LParen,
            b')' => TokenKind::RParen,
            b'{' => TokenKind::LBrace,
            b'}' => TokenKind::RBrace,
            b',' => TokenKind::Comma,
            b';' => TokenKind::Semicolon,
            b':' => TokenKind::Colon,
            b'+' | b'-' => TokenKind::Addop,
            b'*' | b'/' => TokenKind::Mulop,
            b'!' => TokenKind::Not,
            b'=' => return Some(self.lex_equals()),
            b'<' => return Some(self.lex_less()),
            b'>' => return Some(self.lex_greater()),
            b'&' => return self.lex_doubled(b'&', TokenKind::And),
            b'|' => return self.lex_doubled(b'|', TokenKind::Or),
            _ => return None,
        };
        self.cursor.advance();
        Some(kind)
    }

    /// `==` or `=`
    fn lex_equals(&mut self) -> TokenKind {
        self.cursor.advance();
        if self.cursor.match_byte(b'=') {
            TokenKind::Relop
        } else {
            TokenKind::Assign
        }
    }

    /// `<`, `<=` or `<>`
    fn lex_less(&mut self) -> TokenKind {
        self.cursor.advance();
        if !self.cursor.match_byte(b'=') {
            self.cursor.match_byte(b'>');
        }
        TokenKind::Relop
    }

    /// `>` or `>=`
    fn lex_greater(&mut self) -> TokenKind {
        self.cursor.advance();
        self.cursor.match_byte(b'=');
        TokenKind::Relop
    }

    fn lex_doubled(&mut self, byte: u8, kind: TokenKind) -> Option<TokenKind> {
        if self.cursor.peek(1) != Some(byte) {
            return None;
        }
        self.cursor.advance_n(2);
        Some(kind)
    }
}
