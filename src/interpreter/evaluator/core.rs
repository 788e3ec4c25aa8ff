use tracing::trace;

use crate::{
    error::{EvalError, eval_error::EvalResult},
    interpreter::{
        evaluator::{binary::eval_binary, unary::eval_unary},
        lexer::{Operator, Token},
    },
};

/// The evaluation stack.
///
/// Lives for a single call of [`eval_rpn`]; nothing is shared between
/// evaluations.
#[derive(Debug, Default)]
pub struct Stack {
    values: Vec<f64>,
}

impl Stack {
    /// Creates an empty stack with room for `capacity` values.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self { values: Vec::with_capacity(capacity), }
    }

    /// Pushes an operand or an intermediate result.
    pub fn push(&mut self, value: f64) {
        self.values.push(value);
    }

    /// Pops one operand for `op`.
    ///
    /// # Errors
    /// [`EvalError::MalformedExpression`] when the stack is empty.
    pub fn pop_operand(&mut self, op: Operator) -> EvalResult<f64> {
        self.values
            .pop()
            .ok_or_else(|| EvalError::MalformedExpression { details: format!("operator '{op}' is missing an operand") })
    }

    /// Consumes the stack and returns its single remaining value.
    ///
    /// # Errors
    /// [`EvalError::MalformedExpression`] unless exactly one value is left.
    pub fn into_result(self) -> EvalResult<f64> {
        match self.values.as_slice() {
            [value] => Ok(*value),
            [] => Err(EvalError::MalformedExpression { details: "nothing to evaluate".to_string(), }),
            values => {
                Err(EvalError::MalformedExpression { details: format!("{} values left without an operator",
                                                                      values.len()), })
            },
        }
    }
}

/// Evaluates a postfix token sequence.
///
/// Numbers are pushed onto a stack; each operator pops its operands, applies
/// itself, and pushes the result. When the sequence is exhausted exactly one
/// value must remain.
///
/// # Parameters
/// - `rpn`: Postfix sequence, as produced by
///   [`to_rpn`](crate::interpreter::parser::to_rpn).
///
/// # Errors
/// - [`EvalError::MalformedExpression`] when an operator finds too few
///   operands, when the sequence is empty, when more than one value is left,
///   or when a parenthesis is present.
/// - [`EvalError::DivisionByZero`] for `/` with a zero right operand.
///
/// # Example
/// ```
/// use reckon::interpreter::{
///     evaluator::eval_rpn,
///     lexer::{Operator, Token},
/// };
///
/// // 7 2 - neg  ==  -(7 - 2)
/// let rpn = [Token::Number(7.0),
///            Token::Number(2.0),
///            Token::Operator(Operator::Sub),
///            Token::Operator(Operator::Negate)];
/// assert_eq!(eval_rpn(&rpn).unwrap(), -5.0);
/// ```
pub fn eval_rpn(rpn: &[Token]) -> EvalResult<f64> {
    let mut stack = Stack::with_capacity(rpn.len());

    for token in rpn {
        match *token {
            Token::Number(n) => stack.push(n),
            Token::Operator(op) if op.arity() == 1 => {
                let operand = stack.pop_operand(op)?;
                stack.push(eval_unary(op, operand)?);
            },
            Token::Operator(op) => {
                let right = stack.pop_operand(op)?;
                let left = stack.pop_operand(op)?;
                stack.push(eval_binary(op, left, right)?);
            },
            Token::Paren(_) => {
                return Err(EvalError::MalformedExpression { details: "parenthesis in postfix sequence".to_string(), });
            },
        }
    }

    let result = stack.into_result()?;
    trace!(result, "evaluated postfix sequence");
    Ok(result)
}
