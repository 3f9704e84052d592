//! Core error types for cmmc-util crate
//!
//! This module defines error types used throughout the util crate.

use thiserror::Error;

/// Error type for source file operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SourceMapError {
    /// Invalid line number
    #[error("Invalid line number: {line} (file has {max_lines} lines)")]
    InvalidLineNumber { line: usize, max_lines: usize },
}

/// Error type for diagnostic operations
#[derive(Debug, Error)]
pub enum DiagnosticError {
    /// Failed to write a rendered diagnostic
    #[error("Failed to write diagnostic: {0}")]
    Write(#[from] std::io::Error),

    /// The diagnostic points outside its source
    #[error("Diagnostic has no source line: {0}")]
    Source(#[from] SourceMapError),
}

/// Result type alias for source file operations
pub type SourceMapResult<T> = std::result::Result<T, SourceMapError>;

/// Result type alias for diagnostic operations
pub type DiagnosticResult<T> = std::result::Result<T, DiagnosticError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_source_map_error_display() {
        let err = SourceMapError::InvalidLineNumber { line: 9, max_lines: 3 };
        assert_eq!(err.to_string(), "Invalid line number: 9 (file has 3 lines)");
    }

    #[test]
    fn test_diagnostic_error_from_source() {
        let err: DiagnosticError = SourceMapError::InvalidLineNumber { line: 4, max_lines: 2 }.into();
        assert!(matches!(err, DiagnosticError::Source(_)));
        assert_eq!(
            err.to_string(),
            "Diagnostic has no source line: Invalid line number: 4 (file has 2 lines)"
        );
    }
}
