use logos::{Lexer as Scanner, Logos};

use crate::{
    ast::{ComparisonOperator, LiteralValue, MultiplicativeOperator, UnaryOperator},
    error::LexerErrorKind,
    interpreter::lexer::core::ScanState,
    source::Position,
    util::num::{accumulate_digits, int_to_double},
};

/// Reserved words.
///
/// `true`, `false` and `null` are not keywords; they lex as literals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    Return,
    If,
    Else,
    While,
    Bool,
    Int,
    Double,
    String,
    Var,
    Const,
    Fun,
    As,
}

/// Punctuation and assignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Special {
    LeftParenthesis,
    RightParenthesis,
    LeftBrace,
    RightBrace,
    Comma,
    /// `?`, the nullable-type marker.
    QuestionMark,
    /// `=`
    Assign,
}

/// The kind of a token and its payload.
///
/// `-` always lexes as [`TokenKind::UnaryOp`] with [`UnaryOperator::Minus`];
/// the parser accepts it as subtraction inside additive chains. `+` is the
/// only [`TokenKind::AdditiveOp`].
#[derive(Logos, Debug, Clone, PartialEq)]
#[logos(extras = ScanState)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum TokenKind {
    /// Produced once the source is exhausted, and on every call after that.
    EndOfInput,
    /// `// ...` up to the end of the line, without the leading slashes.
    #[regex(r"//[^\n]*", comment, allow_greedy = true)]
    Comment(String),
    /// Number, string, boolean and `null` literals.
    #[regex(r"0|[1-9][0-9]*", integer)]
    #[regex(r"(0|[1-9][0-9]*)\.[0-9]*", double)]
    #[token("\"", string)]
    #[token("true", |_| LiteralValue::Boolean(true))]
    #[token("false", |_| LiteralValue::Boolean(false))]
    #[token("null", |_| LiteralValue::Null)]
    Literal(LiteralValue),
    #[token("return", |_| Keyword::Return)]
    #[token("if", |_| Keyword::If)]
    #[token("else", |_| Keyword::Else)]
    #[token("while", |_| Keyword::While)]
    #[token("bool", |_| Keyword::Bool)]
    #[token("int", |_| Keyword::Int)]
    #[token("double", |_| Keyword::Double)]
    #[token("string", |_| Keyword::String)]
    #[token("var", |_| Keyword::Var)]
    #[token("const", |_| Keyword::Const)]
    #[token("fun", |_| Keyword::Fun)]
    #[token("as", |_| Keyword::As)]
    Keyword(Keyword),
    /// Variable or function names such as `x`, `_count2` or `zażółć`. Any
    /// Unicode letter may start a name.
    #[regex(r"[\p{L}_][\p{L}\p{Nd}_]*", identifier)]
    Identifier(String),
    /// `+`
    #[token("+")]
    AdditiveOp,
    #[token("*", |_| MultiplicativeOperator::Multiply)]
    #[token("/", |_| MultiplicativeOperator::Divide)]
    #[token("%", |_| MultiplicativeOperator::Modulo)]
    MultiplicativeOp(MultiplicativeOperator),
    #[token("==", |_| ComparisonOperator::Equal)]
    #[token("!=", |_| ComparisonOperator::NotEqual)]
    #[token("<", |_| ComparisonOperator::Less)]
    #[token("<=", |_| ComparisonOperator::LessOrEqual)]
    #[token(">", |_| ComparisonOperator::Greater)]
    #[token(">=", |_| ComparisonOperator::GreaterOrEqual)]
    ComparisonOp(ComparisonOperator),
    #[token("!", |_| UnaryOperator::Not)]
    #[token("-", |_| UnaryOperator::Minus)]
    UnaryOp(UnaryOperator),
    #[token("(", |_| Special::LeftParenthesis)]
    #[token(")", |_| Special::RightParenthesis)]
    #[token("{", |_| Special::LeftBrace)]
    #[token("}", |_| Special::RightBrace)]
    #[token(",", |_| Special::Comma)]
    #[token("?", |_| Special::QuestionMark)]
    #[token("=", |_| Special::Assign)]
    Special(Special),
    /// `?:`
    #[token("?:")]
    NullSafetyOp,
    /// `&&`
    #[token("&&")]
    Conjunction,
    /// `||`
    #[token("||")]
    Disjunction,
    /// `->`
    #[token("->")]
    FunctionArrow,
}

/// A token and the position of its first character.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    pub kind:     TokenKind,
    pub position: Position,
}

impl Token {
    #[must_use]
    pub const fn new(kind: TokenKind, position: Position) -> Self {
        Self { kind, position }
    }
}

fn comment(lex: &mut Scanner<TokenKind>) -> String {
    let start = lex.span().start;
    let max = lex.extras.config.max_comment_length;
    let text = &lex.slice()[2..];

    if text.chars().count() > max {
        lex.extras.report(start, LexerErrorKind::CommentLengthOverflow { max });
        return text.chars().take(max).collect();
    }
    text.to_string()
}

fn integer(lex: &mut Scanner<TokenKind>) -> LiteralValue {
    let start = lex.span().start;
    let max = lex.extras.config.max_integer_value;
    let (value, overflowed) = accumulate_digits(lex.slice(), max);

    if overflowed {
        lex.extras.report(start, LexerErrorKind::NumberOverflow { max });
    }
    LiteralValue::Integer(value)
}

fn double(lex: &mut Scanner<TokenKind>) -> LiteralValue {
    let start = lex.span().start;
    let config = lex.extras.config;
    let (whole, fraction) = lex.slice().split_once('.').unwrap_or((lex.slice(), ""));

    let (whole, overflowed) = accumulate_digits(whole, config.max_integer_value);
    if overflowed {
        lex.extras.report(start,
                          LexerErrorKind::NumberOverflow { max: config.max_integer_value });
    }
    if fraction.len() > config.max_double_precision {
        lex.extras.report(start,
                          LexerErrorKind::DoublePrecisionOverflow { max: config.max_double_precision });
    }

    let fraction = if fraction.is_empty() {
        0.0
    } else {
        format!("0.{fraction}").parse::<f64>().unwrap_or(0.0)
    };
    LiteralValue::Double(int_to_double(whole) + fraction)
}

/// Scans the body of a string literal that starts right after the opening
/// quote, handling escapes and stopping at the closing quote, a newline, or
/// the end of input.
fn string(lex: &mut Scanner<TokenKind>) -> LiteralValue {
    let start = lex.span().start;
    let body_start = lex.span().end;
    let max = lex.extras.config.max_string_length;

    let mut value = String::new();
    let mut length = 0;
    let mut length_reported = false;
    let mut closed = false;
    let mut consumed = None;
    let mut problems = vec![];

    let mut chars = lex.remainder().char_indices();
    while let Some((index, ch)) = chars.next() {
        let decoded = match ch {
            '"' => {
                closed = true;
                consumed = Some(index + 1);
                break;
            },
            '\n' => {
                consumed = Some(index);
                break;
            },
            '\\' => match chars.next() {
                Some((newline_index, '\n')) => {
                    consumed = Some(newline_index);
                    break;
                },
                Some((escape_index, escaped)) => match unescape(escaped) {
                    Some(decoded) => decoded,
                    None => {
                        problems.push((body_start + escape_index,
                                       LexerErrorKind::InvalidStringChar { character: escaped }));
                        continue;
                    },
                },
                None => break,
            },
            other => other,
        };

        if length < max {
            value.push(decoded);
            length += 1;
        } else if !length_reported {
            problems.push((start, LexerErrorKind::StringLengthOverflow { max }));
            length_reported = true;
        }
    }

    let consumed = consumed.unwrap_or(lex.remainder().len());
    lex.bump(consumed);

    if !closed {
        lex.extras.report(start, LexerErrorKind::UnclosedQuoteString);
    }
    for (at, kind) in problems {
        lex.extras.report(at, kind);
    }

    LiteralValue::String(value)
}

const fn unescape(ch: char) -> Option<char> {
    match ch {
        'n' => Some('\n'),
        't' => Some('\t'),
        'r' => Some('\r'),
        'b' => Some('\u{8}'),
        '\\' => Some('\\'),
        '"' => Some('"'),
        _ => None,
    }
}

fn identifier(lex: &mut Scanner<TokenKind>) -> String {
    let start = lex.span().start;
    let max = lex.extras.config.max_identifier_length;
    let name = lex.slice();

    if name.chars().all(|c| c == '_') {
        lex.extras.report(start,
                          LexerErrorKind::InvalidIdentifier { identifier: name.to_string() });
    }
    if name.chars().count() > max {
        lex.extras.report(start, LexerErrorKind::IdentifierLengthOverflow { max });
        return name.chars().take(max).collect();
    }
    name.to_string()
}
