//! Parser for bracket notation tokens.
//!
//! This module turns the token stream from the [`lexer`](super::lexer) into a
//! [`Node`] tree. The public entry point is [`build_tree`].
//!
//! Grammar:
//!
//! ```text
//! Node         ::= '[' LabelSym (FeatureGroup | Node | LeafSym)* ']' | LabelSym
//! LabelSym     ::= symbol                  // may carry a "#id" suffix, label non-empty
//! FeatureGroup ::= '[' SignedSym ']'       // SignedSym starts with '+' or '-'
//! LeafSym      ::= LabelSym | quoted-symbol
//! ```
//!
//! The only ambiguity is an `[` inside a node body, which opens either a
//! feature group or a child node. It is settled by a one-token lookahead
//! with an explicit checkpoint/reset of the token stream, see
//! [`feature_group`].

use winnow::{
    Parser as _,
    error::{ContextError, ErrMode},
    stream::{Stream, TokenSlice},
    token::any,
};

use arbor_core::tree::{Feature, Node, Sign};

use crate::{
    error::{Diagnostic, ErrorCode, TokenMismatch},
    span::Span,
    tokens::{PositionedToken, Token, TokenKind},
};

/// Maximum bracket nesting accepted by the parser.
pub const MAX_DEPTH: usize = 256;

/// Context type for parser errors
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Context {
    /// Classification of the failure
    Code(ErrorCode),
    /// Token kind required at the failure position
    Expected(TokenKind),
    /// Remaining token count (`eof_offset()`) at the `[` the failure belongs to
    ///
    /// Used to locate the bracket as `tokens.len() - offset`.
    OpenerOffset(usize),
}

type Input<'src> = TokenSlice<'src, PositionedToken<'src>>;
type IResult<O> = std::result::Result<O, ErrMode<ContextError<Context>>>;

/// Create a Cut error classified by `code`.
///
/// The input must still point at the offending token (or end of input), so
/// the error can be located from the remaining token count.
fn failure(code: ErrorCode) -> ErrMode<ContextError<Context>> {
    let mut e = ContextError::new();
    e.push(Context::Code(code));
    ErrMode::Cut(e)
}

/// Create a Cut error that also records the `[` it belongs to.
fn failure_at_opener(code: ErrorCode, opener_offset: usize) -> ErrMode<ContextError<Context>> {
    let mut e = ContextError::new();
    e.push(Context::Code(code));
    e.push(Context::OpenerOffset(opener_offset));
    ErrMode::Cut(e)
}

/// Create an E102 error naming the token kind that was required.
fn expected(kind: TokenKind) -> ErrMode<ContextError<Context>> {
    let mut e = ContextError::new();
    e.push(Context::Code(ErrorCode::E102));
    e.push(Context::Expected(kind));
    ErrMode::Cut(e)
}

/// Peek the next token without consuming it
fn peek<'src>(input: &Input<'src>) -> Option<&'src Token<'src>> {
    input.peek_token().map(|t| &t.token)
}

/// Parse an `[`
fn left_bracket<'src>(input: &mut Input<'src>) -> IResult<Span> {
    any.verify_map(|token: &PositionedToken<'_>| match token.token {
        Token::LeftBracket => Some(token.span),
        _ => None,
    })
    .parse_next(input)
}

/// Parse a `]`
fn right_bracket<'src>(input: &mut Input<'src>) -> IResult<Span> {
    any.verify_map(|token: &PositionedToken<'_>| match token.token {
        Token::RightBracket => Some(token.span),
        _ => None,
    })
    .parse_next(input)
}

/// Parse a plain symbol
fn symbol<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    any.verify_map(|token: &PositionedToken<'src>| match token.token {
        Token::Symbol(text) => Some(text),
        _ => None,
    })
    .parse_next(input)
}

/// Parse a quoted symbol
fn quoted<'src>(input: &mut Input<'src>) -> IResult<&'src str> {
    any.verify_map(|token: &PositionedToken<'src>| match token.token {
        Token::Quoted(text) => Some(text),
        _ => None,
    })
    .parse_next(input)
}

/// Parse a plain symbol as a node.
///
/// A symbol that is only a `#id` suffix leaves the label empty and is
/// rejected with E107. Quoted leaves may still be empty.
fn label<'src>(input: &mut Input<'src>) -> IResult<Node> {
    match peek(input) {
        Some(Token::Symbol(text)) if text.starts_with('#') => Err(failure(ErrorCode::E107)),
        _ => symbol.map(labeled_node).parse_next(input),
    }
}

/// Build a childless node from label text, splitting off a `#id` suffix at
/// the first `#`. An empty suffix is no identifier.
pub(crate) fn labeled_node(text: &str) -> Node {
    match text.split_once('#') {
        Some((label, id)) if !id.is_empty() => Node::new(label).with_id(id),
        Some((label, _)) => Node::new(label),
        None => Node::new(text),
    }
}

/// Try to parse a feature group `[+NAME]` / `[-NAME]`.
///
/// Tentatively consumes the `[`. If the next token is a symbol starting with
/// `+` or `-` the parser commits to a feature group; otherwise the stream is
/// reset to before the `[` and `None` is returned so the caller parses a
/// child node instead.
fn feature_group<'src>(input: &mut Input<'src>) -> IResult<Option<Feature>> {
    let checkpoint = input.checkpoint();
    let opener = input.eof_offset();
    left_bracket.parse_next(input)?;

    let signed = match peek(input) {
        Some(Token::Symbol(text)) => text
            .chars()
            .next()
            .and_then(Sign::from_char)
            .map(|sign| (sign, &text[1..])),
        _ => None,
    };

    let Some((sign, name)) = signed else {
        input.reset(&checkpoint);
        return Ok(None);
    };

    if name.is_empty() {
        return Err(failure(ErrorCode::E106));
    }
    symbol.parse_next(input)?;

    match peek(input) {
        Some(Token::RightBracket) => {
            right_bracket.parse_next(input)?;
            Ok(Some(Feature::new(sign, name)))
        }
        Some(_) => Err(expected(TokenKind::RightBracket)),
        None => Err(failure_at_opener(ErrorCode::E101, opener)),
    }
}

/// Parse `[ LabelSym body* ]`
fn bracketed_node<'src>(input: &mut Input<'src>, depth: usize) -> IResult<Node> {
    let opener = input.eof_offset();
    if depth > MAX_DEPTH {
        return Err(failure_at_opener(ErrorCode::E105, opener));
    }
    left_bracket.parse_next(input)?;

    let mut node = match peek(input) {
        Some(Token::Symbol(_)) => label(input)?,
        Some(_) => return Err(expected(TokenKind::Symbol)),
        None => return Err(failure(ErrorCode::E100)),
    };

    loop {
        match peek(input) {
            Some(Token::RightBracket) => {
                right_bracket.parse_next(input)?;
                return Ok(node);
            }
            Some(Token::LeftBracket) => {
                node = match feature_group(input)? {
                    Some(feature) => node.with_feature(feature),
                    None => node.with_child(bracketed_node(input, depth + 1)?),
                };
            }
            Some(Token::Symbol(_)) => node = node.with_child(label(input)?),
            Some(Token::Quoted(_)) => {
                node = node.with_child(labeled_node(quoted.parse_next(input)?));
            }
            None => return Err(failure_at_opener(ErrorCode::E101, opener)),
        }
    }
}

/// Parse a complete node: bracketed, or a bare label symbol
fn node<'src>(input: &mut Input<'src>) -> IResult<Node> {
    match peek(input) {
        Some(Token::LeftBracket) => bracketed_node(input, 1),
        Some(Token::Symbol(_)) => label(input),
        Some(_) => Err(failure(ErrorCode::E104)),
        None => Err(failure(ErrorCode::E100)),
    }
}

/// Convert parser errors into a [`Diagnostic`].
///
/// The failure position is recovered from the remaining token count; an
/// [`Context::OpenerOffset`] locates the bracket an error belongs to.
fn convert_error(
    error: ErrMode<ContextError<Context>>,
    tokens: &[PositionedToken],
    current_remaining: usize,
) -> Diagnostic {
    let context: Vec<Context> = match &error {
        ErrMode::Backtrack(e) | ErrMode::Cut(e) => e.context().cloned().collect(),
        ErrMode::Incomplete(_) => Vec::new(),
    };

    let code = context
        .iter()
        .find_map(|ctx| match ctx {
            Context::Code(code) => Some(*code),
            _ => None,
        })
        .unwrap_or(ErrorCode::E104);
    let expected_kind = context.iter().find_map(|ctx| match ctx {
        Context::Expected(kind) => Some(*kind),
        _ => None,
    });
    let opener_span = context
        .iter()
        .find_map(|ctx| match ctx {
            Context::OpenerOffset(n) => tokens.get(tokens.len() - n),
            _ => None,
        })
        .map(|t| t.span);

    let position = tokens.len() - current_remaining;
    let found = tokens.get(position);
    let end_of_input = tokens.last().map(|t| t.span.end_point()).unwrap_or_default();
    let found_span = found.map(|t| t.span).unwrap_or(end_of_input);

    let diag = Diagnostic::error(code.description()).with_code(code);
    match code {
        ErrorCode::E100 => diag
            .with_label(end_of_input, "input ends here")
            .with_help("a tree is `[Label ...]` or a single label"),
        ErrorCode::E101 => diag
            .with_label(
                opener_span.unwrap_or(found_span),
                "this `[` is never closed",
            )
            .with_secondary_label(end_of_input, "input ends here")
            .with_help("add a matching `]`"),
        ErrorCode::E102 => {
            let message = match (expected_kind, found) {
                (Some(kind), Some(token)) => match token.token {
                    Token::Symbol(_) | Token::Quoted(_) => {
                        format!("expected {kind}, found {} `{}`", token.token.kind(), token)
                    }
                    Token::LeftBracket | Token::RightBracket => {
                        format!("expected {kind}, found {}", token.token.kind())
                    }
                },
                (Some(kind), None) => format!("expected {kind}, found end of input"),
                (None, _) => code.description().to_string(),
            };
            let diag = Diagnostic::error(message)
                .with_code(code)
                .with_label(found_span, "unexpected token");
            match expected_kind {
                Some(kind) => {
                    diag.with_mismatch(TokenMismatch::new(kind, found.map(|t| t.token.kind())))
                }
                None => diag,
            }
        }
        ErrorCode::E103 => {
            let trailing = tokens[position..]
                .iter()
                .map(|t| t.span)
                .reduce(|a, b| a.union(b))
                .unwrap_or(found_span);
            diag.with_label(trailing, "not part of the tree")
                .with_help("the notation holds exactly one tree; wrap siblings in a parent node")
        }
        ErrorCode::E104 => diag
            .with_label(found_span, "cannot start a tree")
            .with_help("start with `[` or a bare label"),
        ErrorCode::E105 => diag
            .with_label(opener_span.unwrap_or(found_span), "nested too deeply")
            .with_help(format!("trees may nest at most {MAX_DEPTH} brackets deep")),
        ErrorCode::E106 => diag
            .with_label(found_span, "sign without a feature name")
            .with_help("write features as `[+NAME]` or `[-NAME]`"),
        ErrorCode::E107 => diag
            .with_label(found_span, "identifier without a label")
            .with_help("write the label before the `#`, as in `DP#wh`"),
        ErrorCode::E001 => diag.with_label(found_span, code.description()),
    }
}

/// Build a tree from tokens.
///
/// The whole token stream must form exactly one node.
pub fn build_tree(tokens: &[PositionedToken<'_>]) -> Result<Node, Diagnostic> {
    let mut token_slice = TokenSlice::new(tokens);

    let result = match node(&mut token_slice) {
        Ok(_) if token_slice.eof_offset() > 0 => Err(failure(ErrorCode::E103)),
        other => other,
    };

    result.map_err(|e| convert_error(e, tokens, token_slice.eof_offset()))
}
