//! Error and diagnostic system for the Arbor parser.
//!
//! Every failure of the tokenizer or parser is reported as a [`Diagnostic`]
//! carrying an [`ErrorCode`], one or more labeled source spans and optional
//! help text. Diagnostics are wrapped in [`ParseError`] when returned from
//! [`parse`](crate::parse).
//!
//! # Example
//!
//! ```
//! # use arbor_parser::error::{Diagnostic, ErrorCode};
//! # use arbor_parser::Span;
//!
//! let diag = Diagnostic::error("unclosed bracket")
//!     .with_code(ErrorCode::E101)
//!     .with_label(Span::new(0..1), "this `[` is never closed")
//!     .with_secondary_label(Span::new(11..11), "input ends here")
//!     .with_help("add a matching `]`");
//!
//! assert_eq!(diag.to_string(), "error[E101]: unclosed bracket");
//! ```

mod diagnostic;
mod error_code;
mod label;
mod parse_error;

pub use diagnostic::{Diagnostic, TokenMismatch};
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
