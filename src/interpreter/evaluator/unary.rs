use crate::{
    error::{EvalError, eval_error::EvalResult},
    interpreter::lexer::Operator,
};

/// Applies a unary operator to a single operand.
///
/// [`Operator::Negate`] is the only unary operator.
///
/// # Errors
/// [`EvalError::MalformedExpression`] if `op` is a binary operator.
///
/// # Example
/// ```
/// use reckon::interpreter::{evaluator::unary::eval_unary, lexer::Operator};
///
/// assert_eq!(eval_unary(Operator::Negate, 4.0).unwrap(), -4.0);
/// ```
pub fn eval_unary(op: Operator, value: f64) -> EvalResult<f64> {
    match op {
        Operator::Negate => Ok(-value),
        Operator::Add | Operator::Sub | Operator::Mul | Operator::Div => {
            Err(EvalError::MalformedExpression { details: format!("'{op}' is not a unary operator"), })
        },
    }
}
