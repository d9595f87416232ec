//! # Arbor Parser
//!
//! Parser for the Arbor bracket notation for linguistic syntax trees. This
//! crate turns source text such as
//!
//! ```text
//! [CP[+WH] [DP#wh who] [C' [C did] [TP [DP you] [VP [V see] [DP t#wh]]]]]
//! ```
//!
//! into an [`arbor_core::tree::Node`].
//!
//! ## Usage
//!
//! ```
//! # use arbor_parser::{parse, error::ParseError};
//! fn main() -> Result<(), ParseError> {
//!     let tree = parse("[DP [D the] [NP dog]]")?;
//!     assert_eq!(tree.label(), "DP");
//!     assert_eq!(tree.children().len(), 2);
//!     Ok(())
//! }
//! ```

pub mod error;

mod lexer;
mod parser;
mod span;
mod tokens;

pub use lexer::tokenize;
pub use parser::MAX_DEPTH;
pub use span::Span;
pub use tokens::{PositionedToken, Token, TokenKind};

use log::{debug, trace};

use arbor_core::tree::Node;

use error::ParseError;

/// Parse source text into a syntax tree.
///
/// Runs the two parsing stages:
///
/// 1. **Tokenize** - Convert source text to bracket, symbol and quoted tokens
/// 2. **Parse** - Build the tree, resolving feature groups against child nodes
///
/// Parsing is all-or-nothing: either the whole source is exactly one tree, or
/// a [`ParseError`] describes the first problem found.
///
/// # Errors
///
/// Returns a [`ParseError`] whose diagnostic carries one of the codes listed
/// in [`error::ErrorCode`].
pub fn parse(source: &str) -> Result<Node, ParseError> {
    let tokens = lexer::tokenize(source)?;
    debug!(tokens_count = tokens.len(); "Source tokenized");

    let tree = parser::build_tree(&tokens)?;
    trace!(tree:?; "Parsed tree");

    Ok(tree)
}
