//! Error codes for the Arbor diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E0xx` - Tokenizer errors
//! - `E1xx` - Parser errors

use std::fmt;

/// Error codes for categorizing diagnostic errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Tokenizer Errors (E0xx)
    // =========================================================================
    /// Unterminated quote.
    ///
    /// A quoted symbol was opened with `"` but the input ended before the
    /// closing `"`.
    E001,

    // =========================================================================
    // Parser Errors (E1xx)
    // =========================================================================
    /// Unexpected end of input.
    ///
    /// The token stream ended while a construct was still incomplete, for
    /// example an empty source or a `[` with no label after it.
    E100,

    /// Unclosed bracket.
    ///
    /// An `[` never received its matching `]`.
    E101,

    /// Expected a different token kind.
    ///
    /// A specific token kind was required at this position, such as a label
    /// symbol after `[` or a `]` after a feature.
    E102,

    /// Extra trailing input.
    ///
    /// Tokens remain after one complete tree. The notation holds exactly one
    /// tree; wrap siblings in a parent node.
    E103,

    /// Unrecognized leading token.
    ///
    /// The first token cannot begin a tree. A tree starts with `[` or a bare
    /// label symbol.
    E104,

    /// Nesting too deep.
    ///
    /// Brackets are nested beyond the supported depth.
    E105,

    /// Empty feature name.
    ///
    /// A feature group holds a sign with no name, such as `[+]`.
    E106,

    /// Empty label.
    ///
    /// A symbol such as `#wh` carries an identifier suffix but no label
    /// before the `#`.
    E107,
}

impl ErrorCode {
    /// Returns the numeric code as a string (e.g., "E001").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "E001",
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E104 => "E104",
            ErrorCode::E105 => "E105",
            ErrorCode::E106 => "E106",
            ErrorCode::E107 => "E107",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E001 => "unterminated quote",
            ErrorCode::E100 => "unexpected end of input",
            ErrorCode::E101 => "unclosed bracket",
            ErrorCode::E102 => "unexpected token kind",
            ErrorCode::E103 => "extra trailing input",
            ErrorCode::E104 => "unrecognized leading token",
            ErrorCode::E105 => "nesting too deep",
            ErrorCode::E106 => "empty feature name",
            ErrorCode::E107 => "empty label",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
