//! cmmc-util - Core Utilities and Foundation Types
//!
//! Shared building blocks for the cmm toolchain:
//!
//! - [`span`] - byte spans with line/column information, and source files
//!   with precomputed line tables
//! - [`diagnostic`] - error diagnostics, codes, snippets and the collecting
//!   [`Handler`]
//! - [`error`] - error types for the operations above
//!
//! # Example
//!
//! ```
//! use cmmc_util::{DiagnosticBuilder, DiagnosticCode, Handler, Span};
//!
//! let mut handler = Handler::new();
//! DiagnosticBuilder::error("illegal character '@'")
//!     .code(DiagnosticCode::E0101)
//!     .span(Span::new(0, 1, 1, 1))
//!     .emit(&mut handler);
//!
//! assert!(handler.has_errors());
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;
pub mod span;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, SourceSnippet};
pub use error::{DiagnosticError, DiagnosticResult, SourceMapError, SourceMapResult};
pub use span::{SourceFile, Span};

static_assertions::assert_impl_all!(Span: Copy, Send, Sync);
static_assertions::assert_impl_all!(Diagnostic: Clone, Send, Sync);
