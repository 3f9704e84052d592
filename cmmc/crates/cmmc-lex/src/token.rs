//! Token definitions for the cmm language.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact bytes it was scanned
//! from and its [`Span`]. Operator classes (`relop`, `addop`, ...) are a
//! single kind each; the lexeme tells which operator it is.

use std::borrow::Cow;
use std::fmt;

use cmmc_util::Span;

/// The kind of a lexical token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    // Reserved words
    /// `int`
    Int,
    /// `float`
    Float,
    /// `void`
    Void,
    /// `write`
    Write,
    /// `read`
    Read,
    /// `while`
    While,
    /// `do`
    Do,
    /// `if`
    If,
    /// `then`
    Then,
    /// `else`
    Else,
    /// `return`
    Return,

    // Symbols
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `,`
    Comma,
    /// `;`
    Semicolon,
    /// `:`
    Colon,

    // Token classes
    /// Identifier: a letter followed by letters, digits or `_`
    Id,
    /// Integer literal: `digit+`
    IntegerNum,
    /// Real literal: digits with a fraction and/or an exponent
    RealNum,
    /// String literal, quotes included in the lexeme
    Str,
    /// `==`, `<>`, `<`, `<=`, `>`, `>=`
    Relop,
    /// `+`, `-`
    Addop,
    /// `*`, `/`
    Mulop,
    /// `=`
    Assign,
    /// `&&`
    And,
    /// `||`
    Or,
    /// `!`
    Not,

    // Trivia
    /// A run of spaces, tabs, carriage returns and newlines
    Whitespace,
    /// `#` up to the end of the line
    Comment,

    /// End of input
    Eof,
}

/// Reserved words, in the order they are documented.
pub const KEYWORDS: [(&str, TokenKind); 11] = [
    ("int", TokenKind::Int),
    ("float", TokenKind::Float),
    ("void", TokenKind::Void),
    ("write", TokenKind::Write),
    ("read", TokenKind::Read),
    ("while", TokenKind::While),
    ("do", TokenKind::Do),
    ("if", TokenKind::If),
    ("then", TokenKind::Then),
    ("else", TokenKind::Else),
    ("return", TokenKind::Return),
];

/// Looks up a fully scanned identifier-shaped lexeme in the reserved word
/// table.
///
/// # Example
///
/// ```
/// use cmmc_lex::{keyword_from_ident, TokenKind};
///
/// assert_eq!(keyword_from_ident(b"while"), Some(TokenKind::While));
/// assert_eq!(keyword_from_ident(b"whilex"), None);
/// assert_eq!(keyword_from_ident(b"While"), None);
/// ```
pub fn keyword_from_ident(ident: &[u8]) -> Option<TokenKind> {
    KEYWORDS
        .iter()
        .find(|(word, _)| word.as_bytes() == ident)
        .map(|&(_, kind)| kind)
}

impl TokenKind {
    /// The class name used in `<class,lexeme>` records.
    ///
    /// Reserved words and symbols have no class; their record is just
    /// `<lexeme>`. Trivia and `Eof` have no record at all.
    pub const fn record_class(&self) -> Option<&'static str> {
        match self {
            TokenKind::Id => Some("id"),
            TokenKind::IntegerNum => Some("integernum"),
            TokenKind::RealNum => Some("realnum"),
            TokenKind::Str => Some("str"),
            TokenKind::Relop => Some("relop"),
            TokenKind::Addop => Some("addop"),
            TokenKind::Mulop => Some("mulop"),
            TokenKind::Assign => Some("assign"),
            TokenKind::And => Some("and"),
            TokenKind::Or => Some("or"),
            TokenKind::Not => Some("not"),
            _ => None,
        }
    }

    /// Returns true for reserved words.
    pub fn is_keyword(&self) -> bool {
        KEYWORDS.iter().any(|(_, kind)| kind == self)
    }

    /// Returns true for whitespace and comments.
    pub const fn is_trivia(&self) -> bool {
        matches!(self, TokenKind::Whitespace | TokenKind::Comment)
    }

    /// A short human-readable name, used in logs and debug output.
    pub const fn name(&self) -> &'static str {
        match self {
            TokenKind::Int => "int",
            TokenKind::Float => "float",
            TokenKind::Void => "void",
            TokenKind::Write => "write",
            TokenKind::Read => "read",
            TokenKind::While => "while",
            TokenKind::Do => "do",
            TokenKind::If => "if",
            TokenKind::Then => "then",
            TokenKind::Else => "else",
            TokenKind::Return => "return",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::Comma => ",",
            TokenKind::Semicolon => ";",
            TokenKind::Colon => ":",
            TokenKind::Id => "id",
            TokenKind::IntegerNum => "integernum",
            TokenKind::RealNum => "realnum",
            TokenKind::Str => "str",
            TokenKind::Relop => "relop",
            TokenKind::Addop => "addop",
            TokenKind::Mulop => "mulop",
            TokenKind::Assign => "assign",
            TokenKind::And => "and",
            TokenKind::Or => "or",
            TokenKind::Not => "not",
            TokenKind::Whitespace => "whitespace",
            TokenKind::Comment => "comment",
            TokenKind::Eof => "end of input",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A scanned token.
///
/// `lexeme` borrows the exact source bytes; string literal lexemes keep
/// their quotes so that lexemes and trivia concatenate back to the source.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    /// What was scanned
    pub kind: TokenKind,
    /// The exact bytes matched
    pub lexeme: &'src [u8],
    /// Where it was matched
    pub span: Span,
}

impl<'src> Token<'src> {
    /// Creates a token.
    pub fn new(kind: TokenKind, lexeme: &'src [u8], span: Span) -> Self {
        Self { kind, lexeme, span }
    }

    /// The value shown in records: the lexeme, minus the quotes for strings.
    ///
    /// # Example
    ///
    /// ```
    /// use cmmc_lex::tokenize;
    ///
    /// let tokens = tokenize(br#"write("hi\n");"#).unwrap();
    /// assert_eq!(tokens[2].lexeme, br#""hi\n""#);
    /// assert_eq!(tokens[2].value(), br"hi\n");
    /// ```
    pub fn value(&self) -> &'src [u8] {
        match (self.kind, self.lexeme) {
            (TokenKind::Str, [b'"', inner @ .., b'"']) => inner,
            _ => self.lexeme,
        }
    }

    /// The lexeme as text, replacing invalid UTF-8 sequences.
    pub fn text(&self) -> Cow<'src, str> {
        String::from_utf8_lossy(self.lexeme)
    }

    /// 1-based line of the first byte of this token.
    pub fn line(&self) -> u32 {
        self.span.line
    }

    /// Returns true if this is the end-of-input marker.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::Eof
    }
}
