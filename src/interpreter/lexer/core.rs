use logos::Logos;
use tracing::trace;

use crate::{
    error::{ErrorHandler, LexerError, LexerErrorKind},
    interpreter::lexer::token::{Token, TokenKind},
    source::{Position, SourceCursor},
};

/// Limits enforced while scanning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LexerConfig {
    pub max_identifier_length: usize,
    pub max_integer_value:     i64,
    /// Maximum number of digits after the decimal point of a double literal.
    pub max_double_precision:  usize,
    pub max_string_length:     usize,
    pub max_comment_length:    usize,
}

impl Default for LexerConfig {
    fn default() -> Self {
        Self { max_identifier_length: 255,
               max_integer_value:     i64::MAX,
               max_double_precision:  6,
               max_string_length:     1000,
               max_comment_length:    1000, }
    }
}

/// State shared with the token callbacks.
///
/// Callbacks cannot reach the error handler, so they record each problem with
/// the byte offset it belongs to and the [`Lexer`] forwards them once the
/// token is complete.
#[derive(Debug)]
pub struct ScanState {
    pub config: LexerConfig,
    problems:   Vec<(usize, LexerErrorKind)>,
}

impl ScanState {
    pub(crate) fn report(&mut self, at: usize, kind: LexerErrorKind) {
        self.problems.push((at, kind));
    }
}

/// Turns source text into [`Token`]s on demand.
///
/// Every lexical error is reported to the [`ErrorHandler`] at the point of
/// detection; scanning always continues, so a malformed source still yields a
/// token stream that ends with [`TokenKind::EndOfInput`].
pub struct Lexer<'src, 'h> {
    scanner: logos::Lexer<'src, TokenKind>,
    cursor:  SourceCursor<'src>,
    handler: &'h mut dyn ErrorHandler,
}

impl<'src, 'h> Lexer<'src, 'h> {
    pub fn new(source: &'src str, config: LexerConfig, handler: &'h mut dyn ErrorHandler) -> Self {
        let state = ScanState { config,
                                problems: Vec::new() };
        Self { scanner: TokenKind::lexer_with_extras(source, state),
               cursor: SourceCursor::new(source),
               handler }
    }

    /// Produces the next token.
    ///
    /// Once the source is exhausted every call returns
    /// [`TokenKind::EndOfInput`] positioned just past the last character.
    /// Characters that start no token are reported as
    /// [`LexerErrorKind::UnexpectedChar`] and skipped.
    ///
    /// # Example
    /// ```
    /// use nulla::{
    ///     error::Diagnostics,
    ///     interpreter::lexer::{
    ///         core::{Lexer, LexerConfig},
    ///         token::{Keyword, TokenKind},
    ///     },
    ///     source::Position,
    /// };
    ///
    /// let mut diagnostics = Diagnostics::default();
    /// let mut lexer = Lexer::new("var x", LexerConfig::default(), &mut diagnostics);
    ///
    /// let token = lexer.next_token();
    /// assert_eq!(token.kind, TokenKind::Keyword(Keyword::Var));
    /// assert_eq!(token.position, Position::new(1, 1, 0));
    /// ```
    pub fn next_token(&mut self) -> Token {
        loop {
            let Some(scanned) = self.scanner.next() else {
                let end = self.scanner.source().len();
                let token = Token::new(TokenKind::EndOfInput, self.cursor.advance_to(end));
                trace!(position = %token.position, "end of input");
                return token;
            };

            let position = self.cursor.advance_to(self.scanner.span().start);
            self.flush_problems();

            match scanned {
                Ok(kind) => {
                    let token = Token::new(kind, position);
                    trace!(kind = ?token.kind, position = %token.position, "scanned token");
                    return token;
                },
                Err(()) => {
                    let character = self.scanner.slice().chars().next().unwrap_or('\u{fffd}');
                    self.report(LexerErrorKind::UnexpectedChar { character }, position);
                },
            }
        }
    }

    /// Scans the whole source. The returned vector always ends with the
    /// [`TokenKind::EndOfInput`] token.
    pub fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();
        loop {
            let token = self.next_token();
            let done = token.kind == TokenKind::EndOfInput;
            tokens.push(token);
            if done {
                return tokens;
            }
        }
    }

    /// The handler this lexer reports to. The parser reports through it as
    /// well.
    pub fn handler(&mut self) -> &mut dyn ErrorHandler {
        &mut *self.handler
    }

    /// Forwards the problems recorded by the token callbacks, in source order.
    fn flush_problems(&mut self) {
        let mut problems = std::mem::take(&mut self.scanner.extras.problems);
        problems.sort_by_key(|(at, _)| *at);

        for (at, kind) in problems {
            let position = self.cursor.advance_to(at);
            self.report(kind, position);
        }
    }

    fn report(&mut self, kind: LexerErrorKind, position: Position) {
        trace!(%kind, %position, "lexer error");
        self.handler.on_lexer_error(LexerError::new(kind, position));
    }
}
