//! Expression parsing for the Macchiato language
//!
//! Precedence, loosest to tightest: assignment, logical or, logical and,
//! equality, comparison, additive, multiplicative, unary, primary.
//! Assignment is right-associative; binary operators are left-associative.

use super::Parser;
use crate::ast::{
    AssignExpr, BinaryExpr, BinaryOp, Expr, LiteralExpr, Located, LocatedExpr, UnaryExpr, UnaryOp,
};
use crate::error::{ErrorKind, MacchiatoError, SourceLocation, Span};
use crate::lexer::TokenType;

impl Parser {
    /// Parse an expression with operator precedence
    pub(super) fn expression(&mut self) -> Result<LocatedExpr, MacchiatoError> {
        self.assignment()
    }

    fn assignment(&mut self) -> Result<LocatedExpr, MacchiatoError> {
        let expr = self.logical_or()?;

        if self.match_token(&TokenType::Equal) {
            // Only a name denotes a storage location
            if !matches!(expr.node, Expr::Identifier(_)) {
                return Err(MacchiatoError::new(
                    ErrorKind::InvalidAssignmentTarget,
                    format!("cannot assign to `{}`", expr),
                )
                .with_span(expr.span.clone())
                .with_help("only a variable name can appear left of `=`"));
            }

            let value = self.assignment()?; // right associative
            let span = Span::new(expr.span.start.clone(), value.span.end.clone());
            return Ok(Located::new(
                Expr::Assign(AssignExpr {
                    target: Box::new(expr),
                    value: Box::new(value),
                }),
                span,
            ));
        }

        Ok(expr)
    }

    fn logical_or(&mut self) -> Result<LocatedExpr, MacchiatoError> {
        self.parse_binary_expression(Self::logical_and, &[TokenType::OrOr], |token_type| {
            match token_type {
                TokenType::OrOr => BinaryOp::Or,
                _ => unreachable!(),
            }
        })
    }

    fn logical_and(&mut self) -> Result<LocatedExpr, MacchiatoError> {
        self.parse_binary_expression(Self::equality, &[TokenType::AndAnd], |token_type| {
            match token_type {
                TokenType::AndAnd => BinaryOp::And,
                _ => unreachable!(),
            }
        })
    }

    fn equality(&mut self) -> Result<LocatedExpr, MacchiatoError> {
        self.parse_binary_expression(
            Self::comparison,
            &[TokenType::NotEqual, TokenType::EqualEqual],
            |token_type| match token_type {
                TokenType::EqualEqual => BinaryOp::Equal,
                TokenType::NotEqual => BinaryOp::NotEqual,
                _ => unreachable!(),
            },
        )
    }

    fn comparison(&mut self) -> Result<LocatedExpr, MacchiatoError> {
        self.parse_binary_expression(
            Self::term,
            &[
                TokenType::Greater,
                TokenType::GreaterEqual,
                TokenType::Less,
                TokenType::LessEqual,
            ],
            |token_type| match token_type {
                TokenType::Greater => BinaryOp::Greater,
                TokenType::GreaterEqual => BinaryOp::GreaterEqual,
                TokenType::Less => BinaryOp::Less,
                TokenType::LessEqual => BinaryOp::LessEqual,
                _ => unreachable!(),
            },
        )
    }

    fn term(&mut self) -> Result<LocatedExpr, MacchiatoError> {
        self.parse_binary_expression(
            Self::factor,
            &[TokenType::Minus, TokenType::Plus],
            |token_type| match token_type {
                TokenType::Minus => BinaryOp::Subtract,
                TokenType::Plus => BinaryOp::Add,
                _ => unreachable!(),
            },
        )
    }

    fn factor(&mut self) -> Result<LocatedExpr, MacchiatoError> {
        self.parse_binary_expression(
            Self::unary,
            &[TokenType::Slash, TokenType::Star, TokenType::Percent],
            |token_type| match token_type {
                TokenType::Slash => BinaryOp::Divide,
                TokenType::Star => BinaryOp::Multiply,
                TokenType::Percent => BinaryOp::Modulo,
                _ => unreachable!(),
            },
        )
    }

    fn unary(&mut self) -> Result<LocatedExpr, MacchiatoError> {
        let operator = if self.match_token(&TokenType::Minus) {
            Some(UnaryOp::Neg)
        } else if self.match_token(&TokenType::Bang) {
            Some(UnaryOp::Not)
        } else {
            None
        };

        if let Some(operator) = operator {
            let start = SourceLocation::new(self.previous().line, self.previous().column);
            let operand = Box::new(self.unary()?); // right associative
            let end = operand.span.end.clone();
            return Ok(Located::new(
                Expr::Unary(UnaryExpr { operator, operand }),
                Span::new(start, end),
            ));
        }

        self.primary()
    }

    fn primary(&mut self) -> Result<LocatedExpr, MacchiatoError> {
        if self.match_token(&TokenType::True) {
            let token = self.previous();
            return Ok(self.located_expr(Expr::Literal(LiteralExpr::Bool(true)), token));
        }

        if self.match_token(&TokenType::False) {
            let token = self.previous();
            return Ok(self.located_expr(Expr::Literal(LiteralExpr::Bool(false)), token));
        }

        if let TokenType::IntLiteral(value) = &self.peek().token_type {
            let value = *value;
            self.advance();
            let token = self.previous();
            return Ok(self.located_expr(Expr::Literal(LiteralExpr::Int(value)), token));
        }

        if let TokenType::StringLiteral(value) = &self.peek().token_type {
            let value = value.clone();
            self.advance();
            let token = self.previous();
            return Ok(self.located_expr(Expr::Literal(LiteralExpr::Str(value)), token));
        }

        if let TokenType::Identifier(name) = &self.peek().token_type {
            let name = name.clone();
            self.advance();
            let token = self.previous();
            return Ok(self.located_expr(Expr::Identifier(name), token));
        }

        if self.match_token(&TokenType::LeftParen) {
            let expr = self.expression()?;
            self.consume(&TokenType::RightParen, "')' after expression")?;
            // Parenthesization is structural; the inner span stands
            return Ok(expr);
        }

        Err(self.unexpected_token("expression"))
    }

    fn parse_binary_expression<F, M>(
        &mut self,
        next: F,
        operators: &[TokenType],
        map_operator: M,
    ) -> Result<LocatedExpr, MacchiatoError>
    where
        F: Fn(&mut Self) -> Result<LocatedExpr, MacchiatoError>,
        M: Fn(&TokenType) -> BinaryOp,
    {
        let mut expr = next(self)?;

        loop {
            let found = operators.iter().any(|token_type| self.check(token_type));
            if !found {
                break;
            }

            self.advance();
            let operator = map_operator(&self.previous().token_type);
            let right = next(self)?;
            let span = Span::new(expr.span.start.clone(), right.span.end.clone());
            expr = Located::new(
                Expr::Binary(BinaryExpr {
                    left: Box::new(expr),
                    operator,
                    right: Box::new(right),
                }),
                span,
            );
        }

        Ok(expr)
    }
}
