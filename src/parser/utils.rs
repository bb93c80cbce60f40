//! Parser utility functions for token manipulation

use super::Parser;
use crate::ast::{Expr, Located, LocatedExpr};
use crate::error::{MacchiatoError, SourceLocation, Span};
use crate::lexer::{Token, TokenType};

impl Parser {
    /// Create a Located expression with span from a single token
    pub(super) fn located_expr(&self, expr: Expr, token: &Token) -> LocatedExpr {
        Located::new(
            expr,
            Span::single(SourceLocation::new(token.line, token.column)),
        )
    }

    /// Check if the current token matches a type (without consuming)
    pub(super) fn check(&self, token_type: &TokenType) -> bool {
        if self.is_at_end() {
            false
        } else {
            std::mem::discriminant(&self.peek().token_type) == std::mem::discriminant(token_type)
        }
    }

    /// Advance to the next token
    pub(super) fn advance(&mut self) -> &Token {
        if !self.is_at_end() {
            self.current += 1;
        }
        self.previous()
    }

    /// Check if we're at the end of tokens
    pub(super) fn is_at_end(&self) -> bool {
        self.peek().token_type == TokenType::Eof
    }

    /// Peek at the current token
    pub(super) fn peek(&self) -> &Token {
        &self.tokens[self.current]
    }

    /// Get the previous token
    pub(super) fn previous(&self) -> &Token {
        &self.tokens[self.current - 1]
    }

    /// Consume a token of the expected type or return an error
    pub(super) fn consume(
        &mut self,
        token_type: &TokenType,
        message: &str,
    ) -> Result<&Token, MacchiatoError> {
        if self.check(token_type) {
            Ok(self.advance())
        } else {
            Err(self.unexpected_token(message))
        }
    }

    /// Match and consume a token type
    pub(super) fn match_token(&mut self, token_type: &TokenType) -> bool {
        if self.check(token_type) {
            self.advance();
            true
        } else {
            false
        }
    }
}
