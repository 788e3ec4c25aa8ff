use tracing::trace;

use crate::error::{SyntaxError, syntax_error::SyntaxResult};

/// Returns `true` for the characters an expression may contain.
#[must_use]
pub fn is_permitted(c: char) -> bool {
    c.is_ascii_digit() || matches!(c, '.' | '+' | '-' | '*' | '/' | '(' | ')') || c.is_whitespace()
}

/// Returns `true` for the four binary operator characters.
#[must_use]
pub const fn is_operator_char(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/')
}

/// Validates raw input and prepares it for the lexer.
///
/// Three steps, in order:
/// 1. Reject the input if any character is outside the permitted set.
/// 2. Strip all whitespace.
/// 3. Drop a single trailing operator character, if present. This mirrors
///    interactive input where the user pressed `=` right after an operator.
///
/// Only one trailing operator is dropped, and a leading stray operator is
/// left in place; both surface later as a malformed expression.
///
/// # Errors
/// [`SyntaxError::InvalidCharacter`] with the first offending character and
/// its byte offset in `input`.
///
/// # Example
/// ```
/// use reckon::interpreter::validator::clean;
///
/// assert_eq!(clean(" 1 + 2 * ").unwrap(), "1+2");
/// assert!(clean("2+a").is_err());
/// ```
pub fn clean(input: &str) -> SyntaxResult<String> {
    if let Some((position, character)) = input.char_indices().find(|&(_, c)| !is_permitted(c)) {
        return Err(SyntaxError::InvalidCharacter { character, position });
    }

    let mut cleaned: String = input.chars().filter(|c| !c.is_whitespace()).collect();
    if cleaned.ends_with(is_operator_char) {
        cleaned.pop();
    }

    trace!(%cleaned, "validated input");
    Ok(cleaned)
}
