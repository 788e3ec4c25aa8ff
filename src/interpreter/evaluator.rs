/// Stack machine that reduces a postfix sequence to a single value.
pub mod core;

/// Binary operator evaluation logic.
///
/// Implements the four arithmetic operations, with the explicit
/// division-by-zero check.
pub mod binary;

/// Unary operator evaluation logic.
pub mod unary;

pub use self::core::eval_rpn;
