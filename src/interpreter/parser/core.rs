use tracing::trace;

use crate::{
    error::{SyntaxError, syntax_error::SyntaxResult},
    interpreter::{
        lexer::{Operator, Paren, Spanned, Token},
        parser::operator::is_unary_position,
    },
};

/// Reorders an infix token sequence into postfix (RPN) order.
///
/// This is Dijkstra's shunting-yard algorithm. Numbers go straight to the
/// output; operators wait on a stack until an operator of lower binding
/// strength (or a closing parenthesis, or the end of input) releases them.
///
/// A `-` is reclassified as [`Operator::Negate`] before any precedence
/// comparison when it appears first, after another operator, or after `(`.
///
/// Operator arity is not checked here. Sequences such as `1**2` or `*3`
/// parse successfully and fail later in the evaluator.
///
/// # Parameters
/// - `tokens`: Token stream with byte offsets, as produced by
///   [`tokenize`](crate::interpreter::lexer::tokenize).
///
/// # Returns
/// The postfix sequence. It never contains parentheses. An empty input
/// produces an empty output.
///
/// # Errors
/// [`SyntaxError::UnbalancedParentheses`] for a `)` with no open partner or
/// a `(` that is never closed.
///
/// # Example
/// ```
/// use reckon::interpreter::{lexer::tokenize, parser::to_rpn, rpn_to_string};
///
/// let rpn = to_rpn(&tokenize("2+3*4").unwrap()).unwrap();
/// assert_eq!(rpn_to_string(&rpn), "2 3 4 * +");
///
/// let rpn = to_rpn(&tokenize("-(2+3)").unwrap()).unwrap();
/// assert_eq!(rpn_to_string(&rpn), "2 3 + neg");
/// ```
pub fn to_rpn(tokens: &[Spanned]) -> SyntaxResult<Vec<Token>> {
    let mut output = Vec::with_capacity(tokens.len());
    let mut stack: Vec<Spanned> = Vec::new();

    for (index, &(token, position)) in tokens.iter().enumerate() {
        match token {
            Token::Number(_) => output.push(token),
            Token::Operator(op) => {
                let previous = index.checked_sub(1).map(|i| &tokens[i].0);
                let op = if op == Operator::Sub && is_unary_position(previous) {
                    Operator::Negate
                } else {
                    op
                };

                while let Some(&(Token::Operator(top), _)) = stack.last()
                      && op.yields_to(top)
                {
                    output.push(Token::Operator(top));
                    stack.pop();
                }
                stack.push((Token::Operator(op), position));
            },
            Token::Paren(Paren::Open) => stack.push((token, position)),
            Token::Paren(Paren::Close) => close_group(&mut stack, &mut output, position)?,
        }
    }

    while let Some((token, position)) = stack.pop() {
        if let Token::Paren(_) = token {
            return Err(SyntaxError::UnbalancedParentheses { position });
        }
        output.push(token);
    }

    trace!(rpn = %crate::interpreter::rpn_to_string(&output), "resolved precedence");
    Ok(output)
}

/// Pops operators to the output until the matching `(` is found.
///
/// The `(` itself is discarded.
fn close_group(stack: &mut Vec<Spanned>,
               output: &mut Vec<Token>,
               position: usize)
               -> SyntaxResult<()> {
    while let Some((token, _)) = stack.pop() {
        match token {
            Token::Paren(Paren::Open) => return Ok(()),
            _ => output.push(token),
        }
    }
    Err(SyntaxError::UnbalancedParentheses { position })
}
