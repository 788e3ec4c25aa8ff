use std::fmt;

use logos::Logos;
use tracing::trace;

use crate::error::{SyntaxError, syntax_error::SyntaxResult};

/// Represents a lexical token of an arithmetic expression.
///
/// The token set is closed: every stage of the pipeline matches on it
/// exhaustively.
#[derive(Logos, Debug, PartialEq, Clone, Copy)]
#[logos(error = SyntaxError)]
pub enum Token {
    /// Numeric literal tokens, such as `3.14`, `.5`, `2.` or `42`.
    ///
    /// The regex deliberately accepts any run of digits and dots so that
    /// `1.2.3` is reported as one malformed number rather than as two
    /// adjacent literals.
    #[regex(r"[0-9.]+", parse_number)]
    Number(f64),
    /// `+`, `-`, `*` or `/`. The lexer never produces [`Operator::Negate`].
    #[token("+", |_| Operator::Add)]
    #[token("-", |_| Operator::Sub)]
    #[token("*", |_| Operator::Mul)]
    #[token("/", |_| Operator::Div)]
    Operator(Operator),
    /// `(` or `)`.
    #[token("(", |_| Paren::Open)]
    #[token(")", |_| Paren::Close)]
    Paren(Paren),
}

/// Arithmetic operators, including the unary-minus marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    /// `+`
    Add,
    /// `-` between two operands.
    Sub,
    /// `*`
    Mul,
    /// `/`
    Div,
    /// `-` applied to a single operand. Only the parser produces this.
    Negate,
}

/// Parenthesis direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paren {
    /// `(`
    Open,
    /// `)`
    Close,
}

/// A token together with the byte offset where it starts.
pub type Spanned = (Token, usize);

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Paren(Paren::Open) => write!(f, "("),
            Self::Paren(Paren::Close) => write!(f, ")"),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Converts a cleaned expression into tokens, left to right, in one pass.
///
/// Whitespace is not skipped here; [`crate::interpreter::validator::clean`]
/// removes it beforehand. Any character outside the token set yields
/// [`SyntaxError::UnexpectedToken`], so the lexer stays safe when used on
/// unvalidated input.
///
/// # Errors
/// - [`SyntaxError::MalformedNumber`] for a digit/dot run that is not a
///   valid number (e.g. `1.2.3` or `.`).
/// - [`SyntaxError::UnexpectedToken`] for any other unrecognized input.
///
/// # Example
/// ```
/// use reckon::interpreter::lexer::{Operator, Token, tokenize};
///
/// let tokens = tokenize("1.5*2").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Number(1.5), 0),
///                 (Token::Operator(Operator::Mul), 3),
///                 (Token::Number(2.0), 4)]);
/// ```
pub fn tokenize(source: &str) -> SyntaxResult<Vec<Spanned>> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    while let Some(token) = lexer.next() {
        let position = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, position)),
            Err(SyntaxError::UnexpectedToken { .. }) => {
                return Err(SyntaxError::UnexpectedToken { token: lexer.slice().to_string(),
                                                          position });
            },
            Err(e) => return Err(e),
        }
    }

    trace!(count = tokens.len(), "tokenized expression");
    Ok(tokens)
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Ok(f64)`: The parsed value when the slice holds at most one dot and
///   at least one digit.
/// - `Err(SyntaxError::MalformedNumber)`: Otherwise.
fn parse_number(lex: &logos::Lexer<Token>) -> Result<f64, SyntaxError> {
    let literal = lex.slice();
    let malformed = || SyntaxError::MalformedNumber { literal:  literal.to_string(),
                                                      position: lex.span().start, };

    if literal.matches('.').count() > 1 {
        return Err(malformed());
    }
    literal.parse().map_err(|_| malformed())
}
