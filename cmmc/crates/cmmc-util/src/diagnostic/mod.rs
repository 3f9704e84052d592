//! Diagnostic module - Error reporting infrastructure.
//!
//! This module provides types for creating, collecting and rendering
//! error diagnostics with help messages and source snippets.
//!
//! # Examples
//!
//! ```
//! use cmmc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//! use cmmc_util::Span;
//!
//! let mut handler = Handler::new();
//! DiagnosticBuilder::error("illegal character '@'")
//!     .code(DiagnosticCode::E0101)
//!     .span(Span::new(0, 1, 1, 1))
//!     .help("cmm has no '@' operator")
//!     .emit(&mut handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! ```

mod builder;
mod codes;

pub use builder::{DiagnosticBuilder, SourceSnippet};
pub use codes::DiagnosticCode;

use std::io::Write;

use crate::error::DiagnosticResult;
use crate::span::{SourceFile, Span};

/// An error diagnostic with its location
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Main diagnostic message
    pub message: String,
    /// Source location
    pub span: Span,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl Diagnostic {
    /// The headline, e.g. `error[E0101]: illegal character '@'`
    pub fn headline(&self) -> String {
        match self.code {
            Some(code) => format!("error[{}]: {}", code, self.message),
            None => format!("error: {}", self.message),
        }
    }

    /// Render the diagnostic in human-readable form
    ///
    /// When `file` is given, the location and a snippet of the offending
    /// line are rendered below the headline.
    ///
    /// # Examples
    ///
    /// ```
    /// use cmmc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
    /// use cmmc_util::{SourceFile, Span};
    ///
    /// let file = SourceFile::new("<stdin>", "int x;\nx = @;\n");
    /// let diag = DiagnosticBuilder::error("illegal character '@'")
    ///     .code(DiagnosticCode::E0101)
    ///     .span(Span::new(11, 12, 2, 5))
    ///     .build();
    ///
    /// let mut out = Vec::new();
    /// diag.render(Some(&file), &mut out).unwrap();
    /// let text = String::from_utf8(out).unwrap();
    /// assert!(text.starts_with("error[E0101]: illegal character '@'\n --> <stdin>:2:5\n"));
    /// assert!(text.contains("  2 | x = @;"));
    /// ```
    pub fn render(&self, file: Option<&SourceFile>, out: &mut impl Write) -> DiagnosticResult<()> {
        writeln!(out, "{}", self.headline())?;

        if let Some(file) = file.filter(|_| self.span != Span::DUMMY) {
            writeln!(out, " --> {}:{}:{}", file.name(), self.span.line, self.span.column)?;
            let snippet = SourceSnippet::from_span(file, self.span)?;
            writeln!(out, "{}", snippet.format())?;
        }
        for help in &self.helps {
            writeln!(out, "  = help: {}", help)?;
        }
        Ok(())
    }
}

/// Handler for collecting diagnostics
///
/// # Examples
///
/// ```
/// use cmmc_util::diagnostic::{DiagnosticBuilder, Handler};
///
/// let mut handler = Handler::new();
/// assert!(!handler.has_errors());
/// DiagnosticBuilder::error("unexpected byte").emit(&mut handler);
/// assert_eq!(handler.error_count(), 1);
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: Vec<Diagnostic>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&mut self, diagnostic: Diagnostic) {
        self.diagnostics.push(diagnostic);
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        !self.diagnostics.is_empty()
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.diagnostics.len()
    }

    /// The first error reported, if any
    pub fn first_error(&self) -> Option<&Diagnostic> {
        self.diagnostics.first()
    }

    /// Get all diagnostics in emission order
    pub fn diagnostics(&self) -> &[Diagnostic] {
        &self.diagnostics
    }
}
