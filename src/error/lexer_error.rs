use std::fmt;

use crate::source::Position;

/// The different ways a token can be malformed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LexerErrorKind {
    /// A comment ran past the configured maximum length.
    CommentLengthOverflow {
        /// The configured limit, in characters.
        max: usize,
    },
    /// A double literal had more fractional digits than allowed.
    DoublePrecisionOverflow {
        /// The configured limit, in digits.
        max: usize,
    },
    /// An identifier ran past the configured maximum length.
    IdentifierLengthOverflow {
        /// The configured limit, in characters.
        max: usize,
    },
    /// An identifier consisting only of underscores.
    InvalidIdentifier {
        /// The identifier as written.
        identifier: String,
    },
    /// An unknown escape sequence inside a string literal.
    InvalidStringChar {
        /// The character following the backslash.
        character: char,
    },
    /// An integer literal (or the integer part of a double) exceeded the
    /// configured maximum value.
    NumberOverflow {
        /// The configured limit.
        max: i64,
    },
    /// A string literal ran past the configured maximum length.
    StringLengthOverflow {
        /// The configured limit, in characters.
        max: usize,
    },
    /// A string literal reached a newline or the end of input before its
    /// closing quote.
    UnclosedQuoteString,
    /// A character that does not start any token.
    UnexpectedChar {
        /// The offending character.
        character: char,
    },
}

/// A lexical error together with the position where it was detected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexerError {
    pub kind:     LexerErrorKind,
    pub position: Position,
}

impl LexerError {
    #[must_use]
    pub const fn new(kind: LexerErrorKind, position: Position) -> Self {
        Self { kind, position }
    }
}

impl fmt::Display for LexerErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CommentLengthOverflow { max } => {
                write!(f, "Comment exceeds the maximum length of {max} characters.")
            },
            Self::DoublePrecisionOverflow { max } => {
                write!(f, "Double literal exceeds the maximum precision of {max} digits.")
            },
            Self::IdentifierLengthOverflow { max } => {
                write!(f, "Identifier exceeds the maximum length of {max} characters.")
            },
            Self::InvalidIdentifier { identifier } => write!(f,
                                                             "Invalid identifier '{identifier}': \
                                                              identifiers cannot consist only of \
                                                              underscores."),
            Self::InvalidStringChar { character } => {
                write!(f, "Invalid escape sequence '\\{}' in string.", character.escape_debug())
            },
            Self::NumberOverflow { max } => {
                write!(f, "Number literal exceeds the maximum value of {max}.")
            },
            Self::StringLengthOverflow { max } => {
                write!(f, "String exceeds the maximum length of {max} characters.")
            },
            Self::UnclosedQuoteString => write!(f, "String literal is missing its closing quote."),
            Self::UnexpectedChar { character } => {
                write!(f, "Unexpected character '{}'.", character.escape_debug())
            },
        }
    }
}

impl fmt::Display for LexerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Error at line: {}, column: {}: {}", self.position.line, self.position.column, self.kind)
    }
}

impl std::error::Error for LexerError {}
