use thiserror::Error;

use crate::error::ErrorKind;

/// Result type used by the validator, lexer and parser.
pub type SyntaxResult<T> = Result<T, SyntaxError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
/// Represents all errors that can occur before evaluation starts.
///
/// Positions are byte offsets. For [`SyntaxError::InvalidCharacter`] the
/// offset refers to the raw input; for every other variant it refers to the
/// cleaned string handed to the lexer.
pub enum SyntaxError {
    /// The input contains a character outside digits, `.`, `+`, `-`, `*`,
    /// `/`, `(`, `)` and whitespace.
    #[error("invalid characters: '{character}' at position {position}")]
    InvalidCharacter {
        /// The offending character.
        character: char,
        /// Where it was found.
        position:  usize,
    },
    /// A numeric literal could not be read as a number, usually because it
    /// contains more than one decimal point.
    #[error("malformed number: '{literal}' at position {position}")]
    MalformedNumber {
        /// The full run of digits and dots.
        literal:  String,
        /// Where the literal starts.
        position: usize,
    },
    /// The lexer found text it has no token for.
    #[error("unexpected token: '{token}' at position {position}")]
    UnexpectedToken {
        /// The unrecognized text.
        token:    String,
        /// Where it was found.
        position: usize,
    },
    /// A `)` without a matching `(`, or a `(` that is never closed.
    #[error("unbalanced parentheses at position {position}")]
    UnbalancedParentheses {
        /// Position of the unmatched parenthesis.
        position: usize,
    },
}

impl SyntaxError {
    /// Returns the flat [`ErrorKind`] of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidCharacter { .. } => ErrorKind::InvalidCharacter,
            Self::MalformedNumber { .. } => ErrorKind::MalformedNumber,
            Self::UnexpectedToken { .. } => ErrorKind::UnexpectedToken,
            Self::UnbalancedParentheses { .. } => ErrorKind::UnbalancedParentheses,
        }
    }
}

/// Lexer-internal placeholder, not meant to be constructed by callers.
///
/// `logos` yields this value for unrecognized input; [`tokenize`] always
/// replaces it with an `UnexpectedToken` carrying the offending text and its
/// position, so it never escapes the lexer.
///
/// [`tokenize`]: crate::interpreter::lexer::tokenize
impl Default for SyntaxError {
    fn default() -> Self {
        Self::UnexpectedToken { token:    String::new(),
                                position: 0, }
    }
}
