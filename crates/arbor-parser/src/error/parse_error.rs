//! The ParseError type returned by the tokenizer and parser.

use std::fmt;

use crate::error::{Diagnostic, ErrorCode};

/// Error type returned by [`tokenize`](crate::tokenize) and
/// [`parse`](crate::parse).
///
/// Parsing is all-or-nothing and stops at the first problem, so a
/// `ParseError` holds exactly one diagnostic.
#[derive(Debug, Clone)]
pub struct ParseError {
    diagnostic: Diagnostic,
}

impl ParseError {
    /// The diagnostic describing the failure.
    pub fn diagnostic(&self) -> &Diagnostic {
        &self.diagnostic
    }

    /// Unwrap into the underlying diagnostic.
    pub fn into_diagnostic(self) -> Diagnostic {
        self.diagnostic
    }

    /// Error code of the diagnostic.
    pub fn code(&self) -> Option<ErrorCode> {
        self.diagnostic.code()
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.diagnostic.fmt(f)
    }
}

impl std::error::Error for ParseError {}

impl From<Diagnostic> for ParseError {
    fn from(diagnostic: Diagnostic) -> Self {
        Self { diagnostic }
    }
}
