use thiserror::Error;

use crate::error::ErrorKind;

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur while reducing a postfix sequence.
pub enum EvalError {
    /// The operators and operands do not pair up: an operator found too few
    /// values on the stack, or the stack did not end with exactly one value.
    #[error("malformed expression: {details}")]
    MalformedExpression {
        /// What went wrong.
        details: String,
    },
    /// Attempted division by zero.
    #[error("division by zero")]
    DivisionByZero,
}

impl EvalError {
    /// Returns the flat [`ErrorKind`] of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::MalformedExpression { .. } => ErrorKind::MalformedExpression,
            Self::DivisionByZero => ErrorKind::DivisionByZero,
        }
    }
}
