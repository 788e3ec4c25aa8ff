use crate::{
    error::{EvalError, eval_error::EvalResult},
    interpreter::lexer::Operator,
};

/// Evaluates a binary arithmetic operation with IEEE-754 semantics.
///
/// Division by zero is checked before dividing instead of letting an
/// infinity propagate. Both `0.0` and `-0.0` count as zero.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand (pushed first).
/// - `right`: Right operand (pushed last).
///
/// # Errors
/// - [`EvalError::DivisionByZero`] for `/` with a zero right operand.
/// - [`EvalError::MalformedExpression`] if `op` is [`Operator::Negate`].
///
/// # Example
/// ```
/// use reckon::{
///     error::EvalError,
///     interpreter::{evaluator::binary::eval_binary, lexer::Operator},
/// };
///
/// assert_eq!(eval_binary(Operator::Sub, 2.0, 3.0).unwrap(), -1.0);
/// assert_eq!(eval_binary(Operator::Div, 5.0, 0.0), Err(EvalError::DivisionByZero));
/// ```
pub fn eval_binary(op: Operator, left: f64, right: f64) -> EvalResult<f64> {
    match op {
        Operator::Add => Ok(left + right),
        Operator::Sub => Ok(left - right),
        Operator::Mul => Ok(left * right),
        Operator::Div => {
            if right == 0.0 {
                return Err(EvalError::DivisionByZero);
            }
            Ok(left / right)
        },
        Operator::Negate => {
            Err(EvalError::MalformedExpression { details: format!("'{op}' is not a binary operator"), })
        },
    }
}
