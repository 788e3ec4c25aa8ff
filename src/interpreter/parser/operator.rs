use crate::interpreter::lexer::{Operator, Paren, Token};

/// Direction in which operators of equal precedence group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Associativity {
    /// `a - b - c` groups as `(a - b) - c`.
    Left,
    /// `- - a` groups as `-(-a)`.
    Right,
}

impl Operator {
    /// Binding strength of the operator. Higher binds tighter.
    ///
    /// | operator  | precedence |
    /// |-----------|------------|
    /// | `+` `-`   | 1          |
    /// | `*` `/`   | 2          |
    /// | unary `-` | 3          |
    #[must_use]
    pub const fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Negate => 3,
        }
    }

    /// All binary operators are left-associative; negation is
    /// right-associative.
    #[must_use]
    pub const fn associativity(self) -> Associativity {
        match self {
            Self::Negate => Associativity::Right,
            Self::Add | Self::Sub | Self::Mul | Self::Div => Associativity::Left,
        }
    }

    /// Number of operands the operator consumes.
    #[must_use]
    pub const fn arity(self) -> usize {
        match self {
            Self::Negate => 1,
            Self::Add | Self::Sub | Self::Mul | Self::Div => 2,
        }
    }

    /// Textual form used when rendering postfix sequences.
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Negate => "neg",
        }
    }

    /// Whether `self`, about to be pushed, must first let `top` go to the
    /// output queue.
    #[must_use]
    pub const fn yields_to(self, top: Self) -> bool {
        match self.associativity() {
            Associativity::Left => self.precedence() <= top.precedence(),
            Associativity::Right => self.precedence() < top.precedence(),
        }
    }
}

/// Decides whether a `-` is negation rather than subtraction.
///
/// A minus is unary when it starts the expression, or directly follows
/// another operator or an opening parenthesis.
#[must_use]
pub const fn is_unary_position(previous: Option<&Token>) -> bool {
    matches!(previous,
             None | Some(Token::Operator(_) | Token::Paren(Paren::Open)))
}
