use tracing::{debug, trace};

use crate::{
    ast::Program,
    error::{ParseError, ParseErrorKind},
    interpreter::lexer::{
        core::Lexer,
        token::{Token, TokenKind},
    },
};

/// Outcome of a parsing routine for a construct introduced by a keyword.
///
/// `Absent` means the current token does not start the construct and nothing
/// was consumed. `Malformed` means the construct was recognized, tokens were
/// consumed, and the problem has already been reported.
#[derive(Debug, Clone, PartialEq)]
pub enum Attempt<T> {
    Absent,
    Parsed(T),
    Malformed,
}

/// Recursive-descent parser with one token of lookahead.
///
/// Errors are reported to the lexer's
/// [`ErrorHandler`](crate::error::ErrorHandler) and parsing continues where it
/// can. The parser does not resynchronize: when the top-level loop
/// meets a token that starts neither a function nor a statement, that token is
/// reported and parsing ends.
pub struct Parser<'src, 'h> {
    lexer: Lexer<'src, 'h>,
    pub(in crate::interpreter::parser) token: Token,
}

impl<'src, 'h> Parser<'src, 'h> {
    /// Creates a parser and primes it with the first token.
    pub fn new(mut lexer: Lexer<'src, 'h>) -> Self {
        let token = Self::next_significant(&mut lexer);
        Self { lexer, token }
    }

    /// Parses the whole source into a [`Program`].
    ///
    /// Alternates between function declarations and statements until neither
    /// can be parsed. Duplicate function names are reported and the first
    /// declaration wins.
    ///
    /// # Example
    /// ```
    /// use nulla::{
    ///     error::Diagnostics,
    ///     interpreter::{
    ///         lexer::core::{Lexer, LexerConfig},
    ///         parser::core::Parser,
    ///     },
    /// };
    ///
    /// let mut diagnostics = Diagnostics::default();
    /// let lexer = Lexer::new("fun f() {} var int x = 1", LexerConfig::default(), &mut diagnostics);
    /// let program = Parser::new(lexer).parse();
    ///
    /// assert!(program.functions.contains_key("f"));
    /// assert_eq!(program.statements.len(), 1);
    /// assert!(diagnostics.is_empty());
    /// ```
    pub fn parse(mut self) -> Program {
        let mut program = Program::default();

        loop {
            match self.parse_function_declaration() {
                Attempt::Parsed(function) => {
                    if program.functions.contains_key(&function.name) {
                        self.report(ParseErrorKind::DuplicateFunctionDeclaration { name: function.name });
                    } else {
                        debug!(function = %function.name,
                               parameters = function.parameters.len(),
                               "parsed function declaration");
                        program.functions.insert(function.name.clone(), function);
                    }
                    continue;
                },
                Attempt::Malformed => continue,
                Attempt::Absent => {},
            }

            match self.parse_statement() {
                Attempt::Parsed(statement) => program.statements.push(statement),
                Attempt::Malformed => {},
                Attempt::Absent => break,
            }
        }

        if self.token.kind != TokenKind::EndOfInput {
            self.report(ParseErrorKind::InvalidExpression);
        }

        trace!(statements = program.statements.len(),
               functions = program.functions.len(),
               "parsing finished");
        program
    }

    /// Moves to the next token that is not a comment.
    pub(in crate::interpreter::parser) fn advance(&mut self) {
        self.token = Self::next_significant(&mut self.lexer);
    }

    /// Reports an error at the current token.
    pub(in crate::interpreter::parser) fn report(&mut self, kind: ParseErrorKind) {
        let error = ParseError::new(kind, self.token.position);
        trace!(%error, "parse error");
        self.lexer.handler().on_parser_error(error);
    }

    fn next_significant(lexer: &mut Lexer<'src, 'h>) -> Token {
        loop {
            let token = lexer.next_token();
            if !matches!(token.kind, TokenKind::Comment(_)) {
                return token;
            }
        }
    }
}
