use crate::{
    ast::{Expr, FunctionDecl, Parameter, Statement, Type},
    error::ParseErrorKind,
    interpreter::{
        lexer::token::{Keyword, Special, TokenKind},
        parser::core::{Attempt, Parser},
    },
};

impl Parser<'_, '_> {
    /// Parses a function declaration.
    ///
    /// Grammar:
    /// ```text
    ///     fun <name> ( [<type> <name> {, <type> <name>}] ) [-> <type>] { <statements> }
    /// ```
    /// Without an arrow the return type is `void`.
    ///
    /// # Returns
    /// `Absent` unless the current token is `fun`; `Malformed` when the name
    /// or the return type is missing. Missing parentheses or braces are
    /// reported but the declaration is still produced.
    pub(in crate::interpreter::parser) fn parse_function_declaration(&mut self)
                                                                     -> Attempt<FunctionDecl> {
        if !self.eat_keyword(Keyword::Fun) {
            return Attempt::Absent;
        }

        let name = self.take_identifier();
        if name.is_none() {
            self.report(ParseErrorKind::InvalidFunctionDeclaration);
        }

        if !self.eat_special(Special::LeftParenthesis) {
            self.report(ParseErrorKind::InvalidFunctionDeclaration);
        }
        let parameters = self.parse_parameters();
        if !self.eat_special(Special::RightParenthesis) {
            self.report(ParseErrorKind::InvalidFunctionDeclaration);
        }

        let return_type = if self.eat(&TokenKind::FunctionArrow) {
            let declared = self.parse_type();
            if declared.is_none() {
                self.report(ParseErrorKind::InvalidType);
            }
            declared
        } else {
            Some(Type::VOID)
        };

        let body = self.parse_block(&ParseErrorKind::InvalidFunctionDeclaration);

        match (name, return_type) {
            (Some(name), Some(return_type)) => Attempt::Parsed(FunctionDecl { name,
                                                                              parameters,
                                                                              return_type,
                                                                              body }),
            _ => Attempt::Malformed,
        }
    }

    /// Parses a comma-separated list of `type name` pairs. An empty list is
    /// allowed. Malformed pairs are reported and left out.
    fn parse_parameters(&mut self) -> Vec<Parameter> {
        let mut parameters = Vec::new();
        if self.token.kind == TokenKind::Special(Special::RightParenthesis) {
            return parameters;
        }

        loop {
            let ty = self.parse_type();
            if ty.is_none() {
                self.report(ParseErrorKind::InvalidType);
            }
            let name = self.take_identifier();
            if name.is_none() {
                self.report(ParseErrorKind::InvalidFunctionParamDeclaration);
            }

            if let (Some(ty), Some(name)) = (ty, name) {
                parameters.push(Parameter { name, ty });
            }

            if !self.eat_special(Special::Comma) {
                return parameters;
            }
        }
    }

    /// Parses `{ <statements> }`, reporting `error` for a missing brace.
    pub(in crate::interpreter::parser) fn parse_block(&mut self,
                                                      error: &ParseErrorKind)
                                                      -> Vec<Statement> {
        if !self.eat_special(Special::LeftBrace) {
            self.report(error.clone());
        }

        let mut body = Vec::new();
        loop {
            match self.parse_statement() {
                Attempt::Parsed(statement) => body.push(statement),
                Attempt::Malformed => {},
                Attempt::Absent => break,
            }
        }

        if !self.eat_special(Special::RightBrace) {
            self.report(error.clone());
        }
        body
    }

    /// Parses a single statement.
    ///
    /// Tries, in order: `if`, `while`, `return`, `var`/`const` declarations,
    /// and expression statements (including assignment).
    pub(in crate::interpreter::parser) fn parse_statement(&mut self) -> Attempt<Statement> {
        match self.token.kind {
            TokenKind::Keyword(Keyword::If) => self.parse_if(),
            TokenKind::Keyword(Keyword::While) => self.parse_while(),
            TokenKind::Keyword(Keyword::Return) => {
                self.advance();
                Attempt::Parsed(Statement::Return(self.parse_expression()))
            },
            TokenKind::Keyword(Keyword::Var) => self.parse_variable_declaration(false),
            TokenKind::Keyword(Keyword::Const) => self.parse_variable_declaration(true),
            _ => self.parse_expression_statement(),
        }
    }

    fn parse_if(&mut self) -> Attempt<Statement> {
        self.advance();
        let condition = self.parse_condition();
        let body = self.parse_block(&ParseErrorKind::InvalidBlock);
        let else_body = self.eat_keyword(Keyword::Else)
                            .then(|| self.parse_block(&ParseErrorKind::InvalidBlock));

        match condition {
            Some(condition) => Attempt::Parsed(Statement::If { condition,
                                                               body,
                                                               else_body }),
            None => Attempt::Malformed,
        }
    }

    fn parse_while(&mut self) -> Attempt<Statement> {
        self.advance();
        let condition = self.parse_condition();
        let body = self.parse_block(&ParseErrorKind::InvalidBlock);

        match condition {
            Some(condition) => Attempt::Parsed(Statement::While { condition, body }),
            None => Attempt::Malformed,
        }
    }

    /// Parses `( <expression> )` after `if` or `while`.
    fn parse_condition(&mut self) -> Option<Expr> {
        if !self.eat_special(Special::LeftParenthesis) {
            self.report(ParseErrorKind::InvalidCondition);
        }
        let condition = self.parse_expression();
        if condition.is_none() {
            self.report(ParseErrorKind::InvalidCondition);
        }
        if !self.eat_special(Special::RightParenthesis) {
            self.report(ParseErrorKind::InvalidCondition);
        }
        condition
    }

    /// Parses `var|const <type> <name> [= <expression>]`.
    fn parse_variable_declaration(&mut self, immutable: bool) -> Attempt<Statement> {
        self.advance();

        let Some(ty) = self.parse_type() else {
            self.report(ParseErrorKind::InvalidType);
            return Attempt::Malformed;
        };
        let Some(name) = self.take_identifier() else {
            self.report(ParseErrorKind::InvalidVariableDeclaration);
            return Attempt::Malformed;
        };

        let initial_value = if self.eat_special(Special::Assign) {
            let value = self.parse_expression();
            if value.is_none() {
                self.report(ParseErrorKind::MissingExpression);
                return Attempt::Malformed;
            }
            value
        } else {
            None
        };

        Attempt::Parsed(Statement::VariableDeclaration { immutable,
                                                         name,
                                                         ty,
                                                         initial_value })
    }

    /// Parses `<expression> [= <expression>]`.
    ///
    /// Only a bare identifier can be assigned to; any other target is
    /// reported as an invalid expression.
    fn parse_expression_statement(&mut self) -> Attempt<Statement> {
        let Some(expression) = self.parse_expression() else {
            return Attempt::Absent;
        };
        if !self.eat_special(Special::Assign) {
            return Attempt::Parsed(Statement::Expression { expression,
                                                           assigned: None });
        }

        if !matches!(expression, Expr::Identifier(_)) {
            self.report(ParseErrorKind::InvalidExpression);
        }
        let Some(value) = self.parse_expression() else {
            self.report(ParseErrorKind::MissingExpression);
            return Attempt::Malformed;
        };

        if matches!(expression, Expr::Identifier(_)) {
            Attempt::Parsed(Statement::Expression { expression,
                                                    assigned: Some(value) })
        } else {
            Attempt::Malformed
        }
    }
}
