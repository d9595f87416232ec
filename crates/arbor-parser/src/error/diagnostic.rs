//! The core diagnostic type for the Arbor error system.

use std::fmt;

use crate::{
    error::{error_code::ErrorCode, label::Label},
    span::Span,
    tokens::TokenKind,
};

/// The token kinds behind an E102 error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TokenMismatch {
    expected: TokenKind,
    found: Option<TokenKind>,
}

impl TokenMismatch {
    /// Create a mismatch; `found` is `None` at end of input.
    pub fn new(expected: TokenKind, found: Option<TokenKind>) -> Self {
        Self { expected, found }
    }

    /// The kind the grammar required.
    pub fn expected(&self) -> TokenKind {
        self.expected
    }

    /// The kind actually present, or `None` when input ended.
    pub fn found(&self) -> Option<TokenKind> {
        self.found
    }
}

/// A rich error message with source location information.
///
/// # Example
///
/// ```text
/// error[E101]: unclosed bracket
///   |
/// 1 | [DP [D the]
///   | ^ this `[` is never closed
///   |
///   = help: add a matching `]`
/// ```
#[derive(Debug, Clone)]
pub struct Diagnostic {
    code: Option<ErrorCode>,
    message: String,
    labels: Vec<Label>,
    help: Option<String>,
    mismatch: Option<TokenMismatch>,
}

impl Diagnostic {
    /// Create an error diagnostic.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            code: None,
            message: message.into(),
            labels: Vec::new(),
            help: None,
            mismatch: None,
        }
    }

    /// Get the error code, if any.
    pub fn code(&self) -> Option<ErrorCode> {
        self.code
    }

    /// Get the primary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Get all labels attached to this diagnostic.
    pub fn labels(&self) -> &[Label] {
        &self.labels
    }

    /// Get the help text, if any.
    pub fn help(&self) -> Option<&str> {
        self.help.as_deref()
    }

    /// Expected and found token kinds, for E102 diagnostics.
    pub fn mismatch(&self) -> Option<TokenMismatch> {
        self.mismatch
    }

    /// Span of the first primary label, if any.
    pub fn primary_span(&self) -> Option<Span> {
        self.labels
            .iter()
            .find(|label| label.is_primary())
            .map(Label::span)
    }

    /// Set the error code.
    pub fn with_code(mut self, code: ErrorCode) -> Self {
        self.code = Some(code);
        self
    }

    /// Add a primary label to this diagnostic.
    pub fn with_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::primary(span, message));
        self
    }

    /// Add a secondary label to this diagnostic.
    pub fn with_secondary_label(mut self, span: Span, message: impl Into<String>) -> Self {
        self.labels.push(Label::secondary(span, message));
        self
    }

    /// Set the help text.
    pub fn with_help(mut self, help: impl Into<String>) -> Self {
        self.help = Some(help.into());
        self
    }

    /// Record the token kinds of a mismatch.
    pub fn with_mismatch(mut self, mismatch: TokenMismatch) -> Self {
        self.mismatch = Some(mismatch);
        self
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // "error[E001]: message" or "error: message"
        write!(f, "error")?;
        if let Some(code) = self.code {
            write!(f, "[{}]", code)?;
        }
        write!(f, ": {}", self.message)
    }
}

impl std::error::Error for Diagnostic {}
