//! cmmc-lex - Lexical Analyzer for the cmm Language
//!
//! This crate provides the lexer (tokenizer) for cmm, a small C-like
//! teaching language. It turns a source buffer into a stream of classified
//! tokens, or stops at the first character no token rule accepts.
//!
//! # Example Usage
//!
//! ```
//! use cmmc_util::Handler;
//! use cmmc_lex::{Lexer, TokenKind};
//!
//! let source = "while (i < 10) do i = i + 1;";
//! let mut handler = Handler::new();
//! let mut lexer = Lexer::new(source, &mut handler);
//!
//! // Iterate through tokens
//! for token in &mut lexer {
//!     let token = token.unwrap();
//!     println!("{} {}", token.kind, token.text());
//! }
//!
//! // Or get tokens one at a time
//! let mut lexer = Lexer::new(source, &mut handler);
//! assert_eq!(lexer.next_token().unwrap().kind, TokenKind::While);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token type definitions and the reserved word table
//! - [`lexer`] - Main lexer implementation
//! - [`cursor`] - Byte cursor for source traversal
//! - [`charset`] - Byte classes of the grammar
//! - [`render`] - Token record serialization
//! - [`error`] - The lexical error
//!
//! # Token Categories
//!
//! ## Reserved words
//!
//! `int`, `float`, `void`, `write`, `read`, `while`, `do`, `if`, `then`,
//! `else`, `return`
//!
//! ## Identifiers
//!
//! A letter followed by letters, digits and underscores: `[a-zA-Z][a-zA-Z0-9_]*`
//!
//! ## Literals
//!
//! - **integernum**: `42`, `007`
//! - **realnum**: `3.14`, `1e10`, `2.5E-3`
//! - **str**: `"hello\n"`, with `\n`, `\t` and `\"` as the only escapes
//!
//! ## Operators
//!
//! - **relop**: `==`, `<>`, `<`, `<=`, `>`, `>=`
//! - **addop**: `+`, `-`
//! - **mulop**: `*`, `/`
//! - **assign**: `=`
//! - **and**, **or**, **not**: `&&`, `||`, `!`
//!
//! ## Symbols
//!
//! `(`, `)`, `{`, `}`, `,`, `;`, `:`
//!
//! ## Trivia
//!
//! Spaces, tabs, carriage returns, newlines, and `#` comments running to
//! the end of the line.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod charset;
pub mod cursor;
pub mod error;
pub mod lexer;
pub mod render;
pub mod token;

#[cfg(test)]
mod edge_cases;

use cmmc_util::Handler;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use error::{IllegalChar, LexError};
pub use lexer::{Lexer, ScanState};
pub use render::{Layout, TokenRecord, TokenWriter};
pub use token::{keyword_from_ident, Token, TokenKind, KEYWORDS};

/// Lexes a whole source buffer into its significant tokens.
///
/// Whitespace, comments and the end-of-input marker are not included.
/// Diagnostics are collected in a throwaway handler; use [`Lexer`]
/// directly to keep them.
///
/// # Example
///
/// ```
/// use cmmc_lex::{tokenize, TokenKind};
///
/// let tokens = tokenize(b"x = 3.5; # set x").unwrap();
/// let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
/// assert_eq!(
///     kinds,
///     [TokenKind::Id, TokenKind::Assign, TokenKind::RealNum, TokenKind::Semicolon]
/// );
/// ```
pub fn tokenize(source: &[u8]) -> Result<Vec<Token<'_>>, LexError> {
    let mut handler = Handler::new();
    Lexer::new(source, &mut handler).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source.as_bytes())
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    #[test]
    fn test_factorial_program() {
        let source = r#"
            # iterative factorial
            int fact(int n) {
                int r;
                r = 1;
                while (n > 1) do {
                    r = r * n;
                    n = n - 1;
                }
                return r;
            }
        "#;
        let kinds = kinds(source);

        assert_eq!(kinds[0], TokenKind::Int);
        assert_eq!(kinds[1], TokenKind::Id);
        assert!(kinds.contains(&TokenKind::While));
        assert!(kinds.contains(&TokenKind::Do));
        assert!(kinds.contains(&TokenKind::Return));
        assert!(kinds.contains(&TokenKind::Mulop));
        assert_eq!(kinds.iter().filter(|k| **k == TokenKind::Semicolon).count(), 5);
        assert_eq!(kinds.last(), Some(&TokenKind::RBrace));
    }

    #[test]
    fn test_io_program() {
        let source = r#"
            void main() {
                float x;
                read(x);
                if (x >= 0.5 && !(x == 1.0E3)) then write("big\n");
                else write("small\t\"x\"\n");
            }
        "#;
        let tokens = tokenize(source.as_bytes()).unwrap();
        let strings: Vec<_> = tokens
            .iter()
            .filter(|t| t.kind == TokenKind::Str)
            .map(|t| t.value())
            .collect();

        assert_eq!(strings, [&br"big\n"[..], &br#"small\t\"x\"\n"#[..]]);
        assert!(tokens.iter().any(|t| t.kind == TokenKind::And));
        assert!(tokens.iter().any(|t| t.kind == TokenKind::Not));
        assert!(tokens
            .iter()
            .any(|t| t.kind == TokenKind::RealNum && t.lexeme == b"1.0E3"));
    }

    #[test]
    fn test_lines_are_tracked_across_program() {
        let tokens = tokenize(b"int a;\n\n# c\nfloat b;\n").unwrap();
        let lines: Vec<_> = tokens.iter().map(Token::line).collect();
        assert_eq!(lines, [1, 1, 1, 4, 4, 4]);
    }

    #[test]
    fn test_error_stops_scanning() {
        let err = tokenize(b"int a;\nint b;\nint @c;\n$").unwrap_err();
        assert_eq!(err.to_string(), "Lexical error: '@' in line number 3");
    }

    #[test]
    fn test_str_source() {
        let mut handler = Handler::new();
        let tokens: Result<Vec<_>, _> = Lexer::new("return 0;", &mut handler).collect();
        assert_eq!(tokens.unwrap().len(), 3);
    }
}
