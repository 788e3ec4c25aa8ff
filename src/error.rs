/// Syntax errors.
///
/// Defines all error types that can occur while validating, tokenizing, or
/// reordering an expression into postfix form. Syntax errors are detected
/// before any arithmetic is performed.
pub mod syntax_error;
/// Evaluation errors.
///
/// Contains the error types raised while the postfix sequence is reduced on
/// the evaluation stack, such as operator arity mismatches and division by
/// zero.
pub mod eval_error;

pub use eval_error::EvalError;
pub use syntax_error::SyntaxError;
use thiserror::Error;

/// The single failure outcome of [`crate::evaluate`].
///
/// Any stage of the pipeline may fail; the first failure aborts the whole
/// evaluation and is wrapped here unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvaluationError {
    /// The input was rejected before evaluation started.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The postfix sequence could not be reduced to a single value.
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Flat classification of every way an evaluation can fail.
///
/// Useful when the caller only cares about *which* failure happened and not
/// about the position or text attached to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Input contains a character outside the permitted set.
    InvalidCharacter,
    /// A run of digits and dots could not be read as a number, usually
    /// because it has more than one decimal point.
    MalformedNumber,
    /// The lexer met a character it does not recognize.
    UnexpectedToken,
    /// Mismatched or unclosed parentheses.
    UnbalancedParentheses,
    /// Operator/operand arity mismatch found while evaluating.
    MalformedExpression,
    /// Binary `/` with a zero right operand.
    DivisionByZero,
}

impl EvaluationError {
    /// Returns the flat [`ErrorKind`] of this error.
    ///
    /// # Example
    /// ```
    /// use reckon::{ErrorKind, evaluate};
    ///
    /// let err = evaluate("5/0").unwrap_err();
    /// assert_eq!(err.kind(), ErrorKind::DivisionByZero);
    /// ```
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Syntax(e) => e.kind(),
            Self::Eval(e) => e.kind(),
        }
    }
}
