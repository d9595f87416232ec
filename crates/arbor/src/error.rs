//! Error types for Arbor operations.
//!
//! This module provides the main error type [`ArborError`] which wraps
//! the error conditions that can occur while turning notation into a diagram.

use std::io;

use thiserror::Error;

use arbor_parser::error::ParseError;

/// The main error type for Arbor operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant carries the structured parser diagnostic together with
/// the source text it refers to, so callers can render rich reports.
#[derive(Debug, Error)]
pub enum ArborError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for ArborError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl ArborError {
    /// Create a new `Parse` error with the associated source code.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
