use crate::{
    ast::{Primitive, Type},
    interpreter::{
        lexer::token::{Keyword, Special, TokenKind},
        parser::core::Parser,
    },
};

impl Parser<'_, '_> {
    /// Consumes the current token if it is the given punctuation.
    pub(in crate::interpreter::parser) fn eat_special(&mut self, special: Special) -> bool {
        self.eat(&TokenKind::Special(special))
    }

    /// Consumes the current token if it is the given keyword.
    pub(in crate::interpreter::parser) fn eat_keyword(&mut self, keyword: Keyword) -> bool {
        self.eat(&TokenKind::Keyword(keyword))
    }

    pub(in crate::interpreter::parser) fn eat(&mut self, kind: &TokenKind) -> bool {
        if self.token.kind == *kind {
            self.advance();
            true
        } else {
            false
        }
    }

    /// Consumes an identifier and returns its name.
    pub(in crate::interpreter::parser) fn take_identifier(&mut self) -> Option<String> {
        if let TokenKind::Identifier(name) = &self.token.kind {
            let name = name.clone();
            self.advance();
            Some(name)
        } else {
            None
        }
    }

    /// Parses `int`, `double`, `string` or `bool`, optionally followed by `?`.
    ///
    /// Returns `None` without consuming anything when the current token is not
    /// a type keyword; callers decide which error that is.
    pub(in crate::interpreter::parser) fn parse_type(&mut self) -> Option<Type> {
        let primitive = match self.token.kind {
            TokenKind::Keyword(Keyword::Int) => Primitive::Int,
            TokenKind::Keyword(Keyword::Double) => Primitive::Double,
            TokenKind::Keyword(Keyword::String) => Primitive::String,
            TokenKind::Keyword(Keyword::Bool) => Primitive::Bool,
            _ => return None,
        };
        self.advance();

        let nullable = self.eat_special(Special::QuestionMark);
        Some(Type::new(primitive, nullable))
    }
}
