//! A single lexing run.
//!
//! A [`Session`] owns everything one invocation needs: the effective
//! settings and the whole source buffer. Nothing is shared between
//! sessions.

use std::io::{self, BufWriter, Read, Write};

use cmmc_lex::{LexError, Lexer, TokenWriter};
use cmmc_util::{Handler, SourceFile};
use tracing::{debug, info_span};

use crate::config::Settings;
use crate::error::{DriverError, Result};

/// Name given to standard input in diagnostics.
pub const STDIN_NAME: &str = "<stdin>";

/// How a run ended, when it ran to completion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Every byte was consumed.
    Success {
        /// Number of token records written
        records: usize,
    },
    /// Scanning stopped at an illegal character; the error line has been
    /// written.
    LexicalError(LexError),
}

impl Outcome {
    /// The record count, or the lexical error as a [`DriverError`].
    pub fn into_result(self) -> Result<usize> {
        match self {
            Outcome::Success { records } => Ok(records),
            Outcome::LexicalError(err) => Err(DriverError::Lexical(err)),
        }
    }
}

/// One lexing run over one source.
#[derive(Debug)]
pub struct Session {
    settings: Settings,
    source: SourceFile,
}

impl Session {
    /// Creates a session over an already loaded source.
    pub fn new(settings: Settings, source: SourceFile) -> Self {
        Self { settings, source }
    }

    /// Creates a session, reading the source from the configured input
    /// file or from standard input.
    pub fn from_settings(settings: Settings) -> Result<Self> {
        let source = match &settings.input {
            Some(path) => {
                let bytes = std::fs::read(path).map_err(|source| DriverError::Input {
                    path: path.clone(),
                    source,
                })?;
                SourceFile::new(path.display().to_string(), bytes)
            },
            None => {
                let mut bytes = Vec::new();
                io::stdin().lock().read_to_end(&mut bytes)?;
                SourceFile::new(STDIN_NAME, bytes)
            },
        };
        debug!(name = source.name(), bytes = source.content().len(), "source loaded");
        Ok(Self::new(settings, source))
    }

    /// Lexes the source, writing records to `out`.
    ///
    /// With `verbose` set, the diagnostic for a lexical error is also
    /// rendered with a source snippet to `diagnostics`. Output is buffered
    /// and flushed before returning, on the error path as well.
    ///
    /// # Example
    ///
    /// ```
    /// use cmmc_drv::{Outcome, Session, Settings};
    /// use cmmc_util::SourceFile;
    ///
    /// let session = Session::new(Settings::default(), SourceFile::new("t.cmm", "int x;"));
    /// let mut out = Vec::new();
    /// let outcome = session.run(&mut out, std::io::sink()).unwrap();
    ///
    /// assert_eq!(outcome, Outcome::Success { records: 3 });
    /// assert_eq!(out, b"<int>\n<id,x>\n<;>\n");
    /// ```
    pub fn run<W: Write, E: Write>(&self, out: W, mut diagnostics: E) -> Result<Outcome> {
        let _span = info_span!(
            "lex",
            source = self.source.name(),
            layout = %self.settings.layout
        )
        .entered();

        let mut handler = Handler::new();
        let mut writer = TokenWriter::new(BufWriter::new(out), self.settings.layout);
        let mut lexer = Lexer::new(self.source.content(), &mut handler);
        let failure = writer.drain(&mut lexer)?;
        writer.flush()?;

        let records = writer.records();
        let Some(err) = failure else {
            debug!(records, "lexing finished");
            return Ok(Outcome::Success { records });
        };

        debug!(records, line = err.line(), "lexing stopped at illegal character");
        if self.settings.verbose {
            for diagnostic in handler.diagnostics() {
                diagnostic.render(Some(&self.source), &mut diagnostics)?;
            }
            diagnostics.flush()?;
        }
        Ok(Outcome::LexicalError(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cmmc_lex::Layout;

    fn run(source: &[u8], settings: Settings) -> (Outcome, String, String) {
        let session = Session::new(settings, SourceFile::new("test.cmm", source));
        let mut out = Vec::new();
        let mut diagnostics = Vec::new();
        let outcome = session.run(&mut out, &mut diagnostics).unwrap();
        (
            outcome,
            String::from_utf8(out).unwrap(),
            String::from_utf8(diagnostics).unwrap(),
        )
    }

    #[test]
    fn test_empty_source() {
        let (outcome, out, _) = run(b"", Settings::default());
        assert_eq!(outcome, Outcome::Success { records: 0 });
        assert!(out.is_empty());
    }

    #[test]
    fn test_lexical_error_outcome() {
        let (outcome, out, diagnostics) = run(b"int x;\nx = 1;\nx = @;", Settings::default());
        assert!(matches!(outcome, Outcome::LexicalError(ref err) if err.line() == 3));
        assert!(out.ends_with("<assign,=>\nLexical error: '@' in line number 3\n"));
        assert!(diagnostics.is_empty());
    }

    #[test]
    fn test_verbose_renders_snippet() {
        let settings = Settings {
            verbose: true,
            ..Settings::default()
        };
        let (_, _, diagnostics) = run(b"x = 1;\ny = a & b;\n", settings);
        assert_eq!(
            diagnostics,
            "error[E0101]: illegal character '&'\n --> test.cmm:2:7\n  2 | y = a & b;\n    |       ^\n  = help: logical and is written `&&`\n"
        );
    }

    #[test]
    fn test_verbose_caret_counts_characters() {
        let settings = Settings {
            verbose: true,
            ..Settings::default()
        };
        let (_, _, diagnostics) = run("write(\"é\"); x = @;\n".as_bytes(), settings);
        assert_eq!(
            diagnostics,
            format!(
                "error[E0101]: illegal character '@'\n --> test.cmm:1:18\n  1 | write(\"é\"); x = @;\n    | {}^\n",
                " ".repeat(16)
            )
        );
    }

    #[test]
    fn test_inline_layout() {
        let settings = Settings {
            layout: Layout::Inline,
            ..Settings::default()
        };
        let (outcome, out, _) = run(b"read(x); # in\nwrite(x);\n", settings);
        assert_eq!(outcome, Outcome::Success { records: 10 });
        assert_eq!(out, "<read><(><id,x><)><;> \n<write><(><id,x><)><;>\n");
    }

    #[test]
    fn test_into_result() {
        assert_eq!(Outcome::Success { records: 2 }.into_result().unwrap(), 2);
        let err = cmmc_lex::tokenize(b"$").unwrap_err();
        let err = Outcome::LexicalError(err).into_result().unwrap_err();
        assert!(err.is_reported());
    }

    #[test]
    fn test_missing_input_file() {
        let settings = Settings {
            input: Some("/nonexistent/prog.cmm".into()),
            ..Settings::default()
        };
        let err = Session::from_settings(settings).unwrap_err();
        assert!(matches!(err, DriverError::Input { .. }));
    }
}
