/// The evaluator module reduces postfix sequences to a number.
///
/// It walks the postfix sequence with a value stack, applies each operator
/// to its operands, and reports arity mismatches and division by zero.
///
/// # Responsibilities
/// - Evaluates numbers, negation and the four binary operations.
/// - Requires exactly one value to remain once the sequence is consumed.
pub mod evaluator;
/// The lexer module tokenizes cleaned expressions.
///
/// The lexer reads the expression text and produces numbers, operators and
/// parentheses, each tagged with its byte offset. This is the first stage
/// after validation.
///
/// # Responsibilities
/// - Reads maximal runs of digits and dots as a single number.
/// - Reports malformed numbers and unrecognized characters.
pub mod lexer;
/// The parser module reorders infix tokens into postfix order.
///
/// The parser applies operator precedence, associativity and parentheses
/// to the token stream, and decides which minus signs are negations.
///
/// # Responsibilities
/// - Classifies unary minus by its lexical context.
/// - Resolves precedence with the shunting-yard algorithm.
/// - Detects unbalanced parentheses.
pub mod parser;
/// The validator module checks the raw input before tokenizing.
///
/// # Responsibilities
/// - Rejects characters outside the permitted set.
/// - Strips whitespace and a single trailing operator.
pub mod validator;

use lexer::Token;

/// Renders a postfix sequence as space-separated tokens.
///
/// # Example
/// ```
/// use reckon::{compile, interpreter::rpn_to_string};
///
/// let rpn = compile("(2+3)*4").unwrap();
/// assert_eq!(rpn_to_string(&rpn), "2 3 + 4 *");
/// ```
#[must_use]
pub fn rpn_to_string(rpn: &[Token]) -> String {
    rpn.iter()
       .map(ToString::to_string)
       .collect::<Vec<_>>()
       .join(" ")
}
