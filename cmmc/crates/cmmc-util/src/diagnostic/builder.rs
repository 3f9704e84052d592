//! Diagnostic builder for fluent diagnostic construction.
//!
//! This module provides the [`DiagnosticBuilder`] type for constructing
//! diagnostics with a fluent API, and the [`SourceSnippet`] shown under a
//! rendered diagnostic.

use super::{Diagnostic, DiagnosticCode, Handler};
use crate::error::SourceMapResult;
use crate::span::{SourceFile, Span};

/// A source code snippet for display in diagnostics
///
/// Contains the source line affected by the diagnostic. Columns here count
/// displayed characters, not bytes.
///
/// # Examples
///
/// ```
/// use cmmc_util::diagnostic::SourceSnippet;
///
/// let snippet = SourceSnippet {
///     line: "int x = @;".to_string(),
///     line_number: 3,
///     start_column: 9,
///     end_column: 10,
/// };
/// assert_eq!(snippet.format(), "  3 | int x = @;\n    |         ^");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceSnippet {
    /// The source line content
    pub line: String,
    /// Line number (1-based)
    pub line_number: usize,
    /// Character column where the issue starts (1-based)
    pub start_column: usize,
    /// Character column where the issue ends (1-based, exclusive)
    pub end_column: usize,
}

impl SourceSnippet {
    /// Build a snippet for `span` by looking its line up in `file`
    ///
    /// Non-UTF-8 bytes in the line are shown with the replacement character.
    pub fn from_span(file: &SourceFile, span: Span) -> SourceMapResult<Self> {
        let line_number = span.line as usize;
        let bytes = file.checked_line(line_number)?;

        // span columns count bytes
        let start = (span.column as usize).saturating_sub(1).min(bytes.len());
        let end = (start + span.len()).min(bytes.len());
        let start_column = char_count(&bytes[..start]) + 1;
        let end_column = start_column + char_count(&bytes[start..end]).max(1);

        Ok(Self {
            line: String::from_utf8_lossy(bytes).into_owned(),
            line_number,
            start_column,
            end_column,
        })
    }

    /// Format the snippet for display
    ///
    /// Returns the source line prefixed by its number, and a caret line
    /// underneath pointing at the highlighted range. Tabs before the range
    /// are repeated in the caret line so the caret stays aligned.
    pub fn format(&self) -> String {
        let width = self.line_number.to_string().len().max(3);
        let underline_len = self.end_column.saturating_sub(self.start_column).max(1);
        let padding: String = self
            .line
            .chars()
            .chain(std::iter::repeat(' '))
            .take(self.start_column.saturating_sub(1))
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();

        let mut result = format!("{:>width$} | {}\n", self.line_number, self.line);
        result.push_str(&format!("{:>width$} | ", ""));
        result.push_str(&padding);
        result.push_str(&"^".repeat(underline_len));
        result
    }
}

fn char_count(bytes: &[u8]) -> usize {
    String::from_utf8_lossy(bytes).chars().count()
}

/// Builder for constructing diagnostics with a fluent API
///
/// # Examples
///
/// ```
/// use cmmc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode};
/// use cmmc_util::Span;
///
/// let diag = DiagnosticBuilder::error("illegal character '$'")
///     .code(DiagnosticCode::E0101)
///     .span(Span::new(0, 1, 1, 1))
///     .help("remove the character")
///     .build();
/// assert_eq!(diag.helps, ["remove the character"]);
/// ```
#[must_use = "a diagnostic builder does nothing until built or emitted"]
pub struct DiagnosticBuilder {
    message: String,
    span: Span,
    code: Option<DiagnosticCode>,
    helps: Vec<String>,
}

impl DiagnosticBuilder {
    /// Create an error builder
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            span: Span::DUMMY,
            code: None,
            helps: Vec::new(),
        }
    }

    /// Set the diagnostic code
    pub fn code(mut self, code: DiagnosticCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Set the source span
    pub fn span(mut self, span: Span) -> Self {
        self.span = span;
        self
    }

    /// Add a help suggestion to the diagnostic
    pub fn help(mut self, help: impl Into<String>) -> Self {
        self.helps.push(help.into());
        self
    }

    /// Finish building the diagnostic
    pub fn build(self) -> Diagnostic {
        Diagnostic {
            message: self.message,
            span: self.span,
            code: self.code,
            helps: self.helps,
        }
    }

    /// Build the diagnostic and hand it to `handler`
    pub fn emit(self, handler: &mut Handler) {
        handler.emit_diagnostic(self.build());
    }
}
