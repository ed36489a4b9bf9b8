use crate::{
    ast::{AdditiveOperator, Expr, UnaryOperator},
    error::ParseErrorKind,
    interpreter::{lexer::token::TokenKind, parser::core::Parser},
};

impl Parser<'_, '_> {
    /// Parses a full expression.
    ///
    /// This is the entry point for expression parsing. It begins at the
    /// lowest-precedence level, disjunction, and descends through the
    /// precedence hierarchy:
    ///
    /// ```text
    ///     disjunction    := conjunction { "||" conjunction }
    ///     conjunction    := comparison { "&&" comparison }
    ///     comparison     := null_safety [ comparison_op null_safety ]
    ///     null_safety    := additive [ "?:" disjunction ]
    ///     additive       := multiplicative { ("+" | "-") multiplicative }
    ///     multiplicative := as { ("*" | "/" | "%") as }
    /// ```
    ///
    /// # Returns
    /// `None` when the current token cannot start an expression.
    pub(in crate::interpreter::parser) fn parse_expression(&mut self) -> Option<Expr> {
        self.parse_disjunction()
    }

    fn parse_disjunction(&mut self) -> Option<Expr> {
        let left = self.parse_conjunction()?;
        let mut right = Vec::new();

        while self.eat(&TokenKind::Disjunction) {
            let Some(operand) = self.parse_conjunction() else {
                self.report(ParseErrorKind::MissingExpression);
                break;
            };
            right.push(operand);
        }

        Some(if right.is_empty() {
                 left
             } else {
                 Expr::Disjunction { left: Box::new(left),
                                     right }
             })
    }

    fn parse_conjunction(&mut self) -> Option<Expr> {
        let left = self.parse_comparison()?;
        let mut right = Vec::new();

        while self.eat(&TokenKind::Conjunction) {
            let Some(operand) = self.parse_comparison() else {
                self.report(ParseErrorKind::MissingExpression);
                break;
            };
            right.push(operand);
        }

        Some(if right.is_empty() {
                 left
             } else {
                 Expr::Conjunction { left: Box::new(left),
                                     right }
             })
    }

    /// Comparisons do not chain: `a < b < c` stops after `a < b`.
    fn parse_comparison(&mut self) -> Option<Expr> {
        let left = self.parse_null_safety()?;
        let TokenKind::ComparisonOp(operator) = self.token.kind else {
            return Some(left);
        };
        self.advance();

        let Some(right) = self.parse_null_safety() else {
            self.report(ParseErrorKind::MissingExpression);
            return None;
        };
        Some(Expr::Comparison { left: Box::new(left),
                                operator,
                                right: Box::new(right) })
    }

    /// The right side of `?:` is a full expression, so `a ?: b || c` reads as
    /// `a ?: (b || c)`.
    fn parse_null_safety(&mut self) -> Option<Expr> {
        let left = self.parse_additive()?;
        if !self.eat(&TokenKind::NullSafetyOp) {
            return Some(left);
        }

        let Some(right) = self.parse_disjunction() else {
            self.report(ParseErrorKind::MissingExpression);
            return None;
        };
        Some(Expr::NullSafety { left:  Box::new(left),
                                right: Box::new(right), })
    }

    /// `-` arrives from the lexer as a unary minus; between operands it is
    /// subtraction.
    fn parse_additive(&mut self) -> Option<Expr> {
        let left = self.parse_multiplicative()?;
        let mut right = Vec::new();

        loop {
            let operator = match self.token.kind {
                TokenKind::AdditiveOp => AdditiveOperator::Plus,
                TokenKind::UnaryOp(UnaryOperator::Minus) => AdditiveOperator::Minus,
                _ => break,
            };
            self.advance();

            let Some(operand) = self.parse_multiplicative() else {
                self.report(ParseErrorKind::MissingExpression);
                break;
            };
            right.push((operator, operand));
        }

        Some(if right.is_empty() {
                 left
             } else {
                 Expr::Additive { left: Box::new(left),
                                  right }
             })
    }

    fn parse_multiplicative(&mut self) -> Option<Expr> {
        let left = self.parse_as()?;
        let mut right = Vec::new();

        while let TokenKind::MultiplicativeOp(operator) = self.token.kind {
            self.advance();

            let Some(operand) = self.parse_as() else {
                self.report(ParseErrorKind::MissingExpression);
                break;
            };
            right.push((operator, operand));
        }

        Some(if right.is_empty() {
                 left
             } else {
                 Expr::Multiplicative { left: Box::new(left),
                                        right }
             })
    }
}
