/// Shunting-yard conversion from infix tokens to postfix order.
///
/// Handles unary-minus detection, precedence and associativity, and
/// parenthesis matching.
pub mod core;

/// Operator properties: precedence, associativity and arity.
pub mod operator;

pub use self::core::to_rpn;
