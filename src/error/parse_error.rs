use std::fmt;

use crate::source::Position;

/// The grammar rules a token sequence can violate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A function name was declared twice. The first declaration is kept.
    DuplicateFunctionDeclaration {
        /// The function name.
        name: String,
    },
    /// An `if` or `while` condition was missing or not parenthesized.
    InvalidCondition,
    /// A malformed expression or a token that cannot start any construct.
    InvalidExpression,
    /// A malformed `fun` declaration.
    InvalidFunctionDeclaration,
    /// A malformed `type name` pair in a parameter list.
    InvalidFunctionParamDeclaration,
    /// A type keyword was required but not found.
    InvalidType,
    /// A `var`/`const` declaration without a name.
    InvalidVariableDeclaration,
    /// The right operand of a binary operator is missing.
    MissingExpression,
    /// A `(` without its matching `)`.
    UnmatchedParenthesis,
    /// An `if`/`while` body without its `{` or `}`.
    InvalidBlock,
}

/// A parse error together with the position of the token where it was
/// detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    pub kind:     ParseErrorKind,
    pub position: Position,
}

impl ParseError {
    #[must_use]
    pub const fn new(kind: ParseErrorKind, position: Position) -> Self {
        Self { kind, position }
    }
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateFunctionDeclaration { name } => {
                write!(f, "Function '{name}' is already declared.")
            },
            Self::InvalidCondition => write!(f, "Invalid condition."),
            Self::InvalidExpression => write!(f, "Invalid expression."),
            Self::InvalidFunctionDeclaration => write!(f, "Invalid function declaration."),
            Self::InvalidFunctionParamDeclaration => {
                write!(f, "Invalid function parameter declaration.")
            },
            Self::InvalidType => write!(f, "Expected a type."),
            Self::InvalidVariableDeclaration => write!(f, "Invalid variable declaration."),
            Self::MissingExpression => write!(f, "Missing expression."),
            Self::UnmatchedParenthesis => write!(f, "Unmatched parenthesis."),
            Self::InvalidBlock => write!(f, "Expected a block enclosed in '{{' and '}}'."),
        }
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error at line: {}, column: {}: {}", self.position.line, self.position.column, self.kind)
    }
}

impl std::error::Error for ParseError {}
