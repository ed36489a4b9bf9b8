use crate::{
    ast::Expr,
    error::ParseErrorKind,
    interpreter::{
        lexer::token::{Keyword, Special, TokenKind},
        parser::core::Parser,
    },
};

impl Parser<'_, '_> {
    /// Parses an operand with an optional `as <type>` suffix.
    pub(in crate::interpreter::parser) fn parse_as(&mut self) -> Option<Expr> {
        let operand = self.parse_unary()?;
        if !self.eat_keyword(Keyword::As) {
            return Some(operand);
        }

        let Some(target) = self.parse_type() else {
            self.report(ParseErrorKind::InvalidType);
            return None;
        };
        Some(Expr::As { left: Box::new(operand),
                        target })
    }

    /// Parses an optional `!` or `-` followed by a simple expression. Prefix
    /// operators do not stack; `--x` needs parentheses.
    fn parse_unary(&mut self) -> Option<Expr> {
        let TokenKind::UnaryOp(operator) = self.token.kind else {
            return self.parse_simple();
        };
        self.advance();

        let Some(operand) = self.parse_simple() else {
            self.report(ParseErrorKind::MissingExpression);
            return None;
        };
        Some(Expr::Unary { operator,
                           operand: Box::new(operand) })
    }

    /// Parses a literal, an identifier, a call, or a parenthesized
    /// expression.
    fn parse_simple(&mut self) -> Option<Expr> {
        match &self.token.kind {
            TokenKind::Literal(value) => {
                let value = value.clone();
                self.advance();
                Some(Expr::Literal(value))
            },
            TokenKind::Identifier(_) => {
                let name = self.take_identifier()?;
                if self.eat_special(Special::LeftParenthesis) {
                    let arguments = self.parse_arguments();
                    if !self.eat_special(Special::RightParenthesis) {
                        self.report(ParseErrorKind::UnmatchedParenthesis);
                        return None;
                    }
                    Some(Expr::FunctionCall { name, arguments })
                } else {
                    Some(Expr::Identifier(name))
                }
            },
            TokenKind::Special(Special::LeftParenthesis) => {
                self.advance();
                let inner = self.parse_expression();
                if inner.is_none() {
                    self.report(ParseErrorKind::MissingExpression);
                }
                if !self.eat_special(Special::RightParenthesis) {
                    self.report(ParseErrorKind::UnmatchedParenthesis);
                    return None;
                }
                inner
            },
            _ => None,
        }
    }

    /// Parses call arguments: zero or more comma-separated expressions.
    fn parse_arguments(&mut self) -> Vec<Expr> {
        let mut arguments = Vec::new();
        let Some(first) = self.parse_expression() else {
            return arguments;
        };
        arguments.push(first);

        while self.eat_special(Special::Comma) {
            match self.parse_expression() {
                Some(argument) => arguments.push(argument),
                None => self.report(ParseErrorKind::MissingExpression),
            }
        }
        arguments
    }
}
