//! Lexer module.
//!
//! This module organizes the lexer implementation into smaller, focused components:
//! - `core` - Main Lexer struct, scan states and dispatch
//! - `identifier` - Identifier and reserved word lexing
//! - `number` - Integer and real literal lexing
//! - `string` - String literal lexing
//! - `operator` - Operator and punctuation lexing
//! - `comment` - Comment and whitespace runs

mod comment;
mod core;
mod identifier;
mod number;
mod operator;
mod string;

pub use core::{Lexer, ScanState};
