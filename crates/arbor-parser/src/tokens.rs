//! Tokens of the bracket notation.

use std::fmt;

use crate::span::Span;

/// Token types for the bracket notation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token<'src> {
    /// A run of characters without whitespace or brackets
    Symbol(&'src str),
    /// The text between a pair of double quotes, quotes excluded
    Quoted(&'src str),
    LeftBracket,  // [
    RightBracket, // ]
}

impl Token<'_> {
    /// Returns the kind of this token, without its text.
    pub fn kind(&self) -> TokenKind {
        match self {
            Token::Symbol(_) => TokenKind::Symbol,
            Token::Quoted(_) => TokenKind::Quoted,
            Token::LeftBracket => TokenKind::LeftBracket,
            Token::RightBracket => TokenKind::RightBracket,
        }
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Symbol(s) => write!(f, "{s}"),
            Token::Quoted(s) => write!(f, "\"{s}\""),
            Token::LeftBracket => write!(f, "["),
            Token::RightBracket => write!(f, "]"),
        }
    }
}

/// Token kinds, used to describe what the parser expected or found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Symbol,
    Quoted,
    LeftBracket,
    RightBracket,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TokenKind::Symbol => write!(f, "symbol"),
            TokenKind::Quoted => write!(f, "quoted symbol"),
            TokenKind::LeftBracket => write!(f, "`[`"),
            TokenKind::RightBracket => write!(f, "`]`"),
        }
    }
}

/// A token with its source span
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionedToken<'src> {
    pub token: Token<'src>,
    pub span: Span,
}

impl<'src> PositionedToken<'src> {
    pub fn new(token: Token<'src>, span: Span) -> Self {
        Self { token, span }
    }
}

impl fmt::Display for PositionedToken<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.token.fmt(f)
    }
}
