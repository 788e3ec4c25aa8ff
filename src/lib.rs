//! # reckon
//!
//! reckon is a small arithmetic expression evaluator written in Rust.
//! It accepts digits, decimal points, `+ - * /`, parentheses and unary
//! minus, and produces an `f64` or a well-defined error.
//!
//! The pipeline runs in strict order, and the first failing stage aborts
//! the evaluation:
//!
//! ```text
//! text -> validator -> lexer -> parser (shunting-yard) -> evaluator (RPN) -> f64
//! ```
//!
//! Every call is independent and keeps all of its state on the call frame,
//! so [`evaluate`] may be called from any number of threads at once.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc, clippy::float_cmp)]

use tracing::debug;

/// Provides the error types for every stage of the pipeline.
///
/// Syntax errors come from validation, lexing and parsing; evaluation
/// errors come from the stack machine. Both are wrapped by
/// [`EvaluationError`], the single failure outcome of [`evaluate`].
///
/// # Responsibilities
/// - Defines one variant per failure mode, with positions where they apply.
/// - Offers a flat [`ErrorKind`] for callers that only need the category.
pub mod error;
/// Orchestrates the stages of expression evaluation.
///
/// This module holds the validator, lexer, parser and evaluator. Each stage
/// is usable on its own; [`evaluate`] chains them.
///
/// # Responsibilities
/// - Turns text into tokens, tokens into postfix order, and postfix order
///   into a number.
/// - Keeps every intermediate sequence local to one call.
pub mod interpreter;

pub use error::{ErrorKind, EvaluationError};
use interpreter::{
    evaluator::eval_rpn,
    lexer::{Token, tokenize},
    parser::to_rpn,
    validator::clean,
};

/// Evaluates an arithmetic expression.
///
/// The input is validated, stripped of whitespace and of one trailing
/// operator, tokenized, reordered into postfix form, and evaluated. The
/// first failure aborts the evaluation; there are no partial results.
///
/// # Errors
/// Returns an [`EvaluationError`] if the input contains invalid characters,
/// a malformed number, unbalanced parentheses, an operator without enough
/// operands, or a division by zero.
///
/// # Examples
/// ```
/// use reckon::{ErrorKind, evaluate};
///
/// assert_eq!(evaluate("2+3*4").unwrap(), 14.0);
/// assert_eq!(evaluate("4*-3").unwrap(), -12.0);
///
/// // A trailing operator is ignored.
/// assert_eq!(evaluate("7 - ").unwrap(), 7.0);
///
/// assert_eq!(evaluate("(1+2").unwrap_err().kind(), ErrorKind::UnbalancedParentheses);
/// ```
pub fn evaluate(expression: &str) -> Result<f64, EvaluationError> {
    let result = compile(expression).and_then(|rpn| eval_rpn(&rpn).map_err(EvaluationError::from));

    if let Err(e) = &result {
        debug!(expression, kind = ?e.kind(), error = %e, "evaluation failed");
    }
    result
}

/// Validates, tokenizes and parses an expression without evaluating it.
///
/// # Errors
/// Returns an [`EvaluationError::Syntax`] on invalid characters, malformed
/// numbers or unbalanced parentheses.
///
/// # Example
/// ```
/// use reckon::{compile, interpreter::rpn_to_string};
///
/// assert_eq!(rpn_to_string(&compile("2-3-4").unwrap()), "2 3 - 4 -");
/// ```
pub fn compile(expression: &str) -> Result<Vec<Token>, EvaluationError> {
    let cleaned = clean(expression)?;
    let tokens = tokenize(&cleaned)?;
    Ok(to_rpn(&tokens)?)
}
