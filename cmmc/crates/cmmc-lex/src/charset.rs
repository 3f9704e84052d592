//! Byte classes of the cmm lexical grammar.
//!
//! cmm is an ASCII language: every byte outside these classes can only
//! appear inside a string literal or a comment.

use crate::error::IllegalChar;

/// `letter`: ASCII `[A-Za-z]`. Identifiers must start with one.
///
/// # Example
///
/// ```
/// use cmmc_lex::charset::is_letter;
///
/// assert!(is_letter(b'q'));
/// assert!(!is_letter(b'_'));
/// assert!(!is_letter(b'7'));
/// ```
#[inline]
pub fn is_letter(b: u8) -> bool {
    b.is_ascii_alphabetic()
}

/// `digit`: ASCII `[0-9]`.
#[inline]
pub fn is_digit(b: u8) -> bool {
    b.is_ascii_digit()
}

/// Bytes that may follow the first letter of an identifier.
///
/// # Example
///
/// ```
/// use cmmc_lex::charset::is_ident_continue;
///
/// assert!(is_ident_continue(b'_'));
/// assert!(is_ident_continue(b'0'));
/// assert!(!is_ident_continue(b'-'));
/// ```
#[inline]
pub fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}

/// Insignificant whitespace: space, tab, carriage return, newline.
#[inline]
pub fn is_whitespace(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// Decodes the character that starts `bytes`, for error reporting.
///
/// Returns the whole UTF-8 scalar when the leading bytes form one,
/// otherwise just the first raw byte.
///
/// # Example
///
/// ```
/// use cmmc_lex::charset::decode_char;
/// use cmmc_lex::IllegalChar;
///
/// assert_eq!(decode_char(b"@x"), Some(IllegalChar::Char('@')));
/// assert_eq!(decode_char("é!".as_bytes()), Some(IllegalChar::Char('é')));
/// assert_eq!(decode_char(&[0xff, b'a']), Some(IllegalChar::Byte(0xff)));
/// assert_eq!(decode_char(b""), None);
/// ```
pub fn decode_char(bytes: &[u8]) -> Option<IllegalChar> {
    let lead = *bytes.first()?;
    let width = match lead {
        0x00..=0x7f => 1,
        0xc2..=0xdf => 2,
        0xe0..=0xef => 3,
        0xf0..=0xf4 => 4,
        _ => return Some(IllegalChar::Byte(lead)),
    };

    bytes
        .get(..width)
        .and_then(|head| std::str::from_utf8(head).ok())
        .and_then(|s| s.chars().next())
        .map(IllegalChar::Char)
        .or(Some(IllegalChar::Byte(lead)))
}
