use crate::error::{LexerError, ParseError, RuntimeError};

/// Receives every error the lexer, parser and interpreter detect.
///
/// Each stage reports synchronously, at the point of detection, and keeps
/// going (lexer, parser) or unwinds (interpreter). Deciding whether to print,
/// collect, or abort is entirely up to the implementation.
pub trait ErrorHandler {
    fn on_lexer_error(&mut self, error: LexerError);

    fn on_parser_error(&mut self, error: ParseError);

    fn on_interpreter_error(&mut self, error: RuntimeError);

    /// Number of errors reported so far, across all stages.
    fn error_count(&self) -> usize;
}

/// An [`ErrorHandler`] that stores every report for later inspection.
///
/// # Example
/// ```
/// use nulla::{
///     error::{Diagnostics, ErrorHandler},
///     interpreter::lexer::core::{Lexer, LexerConfig},
/// };
///
/// let mut diagnostics = Diagnostics::default();
/// let tokens = Lexer::new("var x = #", LexerConfig::default(), &mut diagnostics).tokenize();
///
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(diagnostics.error_count(), 1);
/// ```
#[derive(Debug, Default, Clone)]
pub struct Diagnostics {
    pub lexer:   Vec<LexerError>,
    pub parser:  Vec<ParseError>,
    pub runtime: Vec<RuntimeError>,
}

impl Diagnostics {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.error_count() == 0
    }
}

impl ErrorHandler for Diagnostics {
    fn on_lexer_error(&mut self, error: LexerError) {
        self.lexer.push(error);
    }

    fn on_parser_error(&mut self, error: ParseError) {
        self.parser.push(error);
    }

    fn on_interpreter_error(&mut self, error: RuntimeError) {
        self.runtime.push(error);
    }

    fn error_count(&self) -> usize {
        self.lexer.len() + self.parser.len() + self.runtime.len()
    }
}
