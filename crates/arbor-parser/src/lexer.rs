//! Lexical analyzer for the bracket notation.
//!
//! The lexer converts source text into a flat stream of [`Token`]s. Nesting
//! is not tracked here; it is resolved by the [`parser`](super::parser).
//!
//! Rules:
//! - whitespace separates tokens and produces none
//! - `[` and `]` are always single-character tokens
//! - a `"` at a token boundary starts a quoted symbol that runs verbatim to
//!   the next `"`
//! - any other maximal run without whitespace or brackets is a symbol

use winnow::{
    Parser as _,
    combinator::{alt, cut_err, preceded, terminated},
    error::{ContextError, ErrMode},
    stream::{LocatingSlice, Location, Stream},
    token::take_while,
};

use crate::{
    error::{Diagnostic, ErrorCode, ParseError},
    span::Span,
    tokens::{PositionedToken, Token},
};

/// Byte offset of an opening `"`, attached to the error when the quote is
/// never closed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QuoteStart(usize);

type Input<'a> = LocatingSlice<&'a str>;
type IResult<O> = Result<O, ErrMode<ContextError<QuoteStart>>>;

fn is_symbol_char(c: char) -> bool {
    !c.is_whitespace() && c != '[' && c != ']'
}

/// Parse a quoted symbol: `"..."`, quotes excluded from the value.
///
/// Commits after the opening quote so a missing closing quote is reported
/// instead of backtracking into a plain symbol.
fn quoted_symbol<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    let start_pos = input.current_token_start();

    preceded(
        '"',
        cut_err(terminated(take_while(0.., |c: char| c != '"'), '"'))
            .context(QuoteStart(start_pos)),
    )
    .map(Token::Quoted)
    .parse_next(input)
}

/// Parse a bracket token
fn bracket<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    alt((
        '['.value(Token::LeftBracket),
        ']'.value(Token::RightBracket),
    ))
    .parse_next(input)
}

/// Parse a plain symbol
fn symbol<'a>(input: &mut Input<'a>) -> IResult<Token<'a>> {
    take_while(1.., is_symbol_char)
        .map(Token::Symbol)
        .parse_next(input)
}

/// Skip any run of whitespace
fn skip_whitespace(input: &mut Input<'_>) {
    let len = input
        .find(|c: char| !c.is_whitespace())
        .unwrap_or_else(|| input.eof_offset());
    input.next_slice(len);
}

/// Parse a single token with position tracking
fn positioned_token<'a>(input: &mut Input<'a>) -> IResult<PositionedToken<'a>> {
    let start_pos = input.current_token_start();

    let token = alt((
        quoted_symbol, // Must come before symbol
        bracket,
        symbol,
    ))
    .parse_next(input)?;

    let end_pos = input.current_token_start();

    Ok(PositionedToken::new(token, Span::new(start_pos..end_pos)))
}

/// Convert a failed token into an E001 diagnostic.
///
/// Every non-whitespace character starts a bracket or a symbol, so a token
/// only fails when a quoted symbol runs to the end of input.
fn unterminated_quote(err: ErrMode<ContextError<QuoteStart>>, error_pos: usize) -> Diagnostic {
    let start = match &err {
        ErrMode::Backtrack(ctx) | ErrMode::Cut(ctx) => {
            ctx.context().next().map(|&QuoteStart(start)| start)
        }
        ErrMode::Incomplete(_) => None,
    }
    .unwrap_or(error_pos);

    Diagnostic::error(ErrorCode::E001.description())
        .with_code(ErrorCode::E001)
        .with_label(
            Span::new(start..error_pos.max(start)),
            "this quote is never closed",
        )
        .with_help("add a closing `\"`")
}

/// Tokenize the source text.
///
/// # Errors
///
/// Returns a [`ParseError`] with an E001 diagnostic when a quoted symbol is
/// never closed.
///
/// # Example
///
/// ```
/// # use arbor_parser::{tokenize, Token};
/// let tokens = tokenize(r#"[NP "the dog"]"#).unwrap();
/// assert_eq!(tokens[2].token, Token::Quoted("the dog"));
/// ```
pub fn tokenize(source: &str) -> Result<Vec<PositionedToken<'_>>, ParseError> {
    let mut input = LocatingSlice::new(source);
    let mut tokens = Vec::new();

    loop {
        skip_whitespace(&mut input);
        if input.is_empty() {
            break;
        }

        match positioned_token(&mut input) {
            Ok(token) => tokens.push(token),
            Err(e) => {
                let error_pos = input.current_token_start();
                return Err(unterminated_quote(e, error_pos).into());
            }
        }
    }

    Ok(tokens)
}
