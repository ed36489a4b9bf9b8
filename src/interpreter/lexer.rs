/// The positioned lexer and its configuration.
///
/// [`Lexer`](core::Lexer) drives the token scanner, turns byte spans into
/// line/column positions, forwards every lexical problem to the error handler,
/// and hands out one token at a time.
pub mod core;
/// Token definitions.
///
/// Declares [`TokenKind`](token::TokenKind), the `logos` scanner that picks
/// the token family from the leading characters, together with the callbacks
/// that validate literals, identifiers and comments against the configured
/// limits.
pub mod token;
