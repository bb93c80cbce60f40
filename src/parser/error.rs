//! Parser error construction and recovery

use super::Parser;
use crate::error::{ErrorKind, MacchiatoError, SourceLocation, Span};
use crate::lexer::TokenType;

impl Parser {
    /// Synchronize parser after an error to a known good state
    pub(super) fn synchronize(&mut self) {
        while !self.is_at_end() {
            // Statement boundaries are the safe points
            match self.peek().token_type {
                TokenType::Newline | TokenType::Semicolon => {
                    self.advance();
                    return;
                }
                _ => {}
            }

            self.advance();
        }
    }

    /// Create an error with the given kind and message at the current token
    pub(super) fn error(&self, kind: ErrorKind, message: String) -> MacchiatoError {
        let token = self.peek();
        MacchiatoError::new(kind, message)
            .with_span(Span::single(SourceLocation::new(token.line, token.column)))
    }

    /// Create a syntax error with the given message
    pub(super) fn syntax_error(&self, message: String) -> MacchiatoError {
        self.error(ErrorKind::SyntaxError, message)
    }

    /// Create an unexpected token error
    pub(super) fn unexpected_token(&self, expected: &str) -> MacchiatoError {
        let token = self.peek();
        if token.token_type == TokenType::Eof {
            self.error(
                ErrorKind::UnexpectedEof,
                format!("Expected {}, found EOF", expected),
            )
        } else {
            self.error(
                ErrorKind::UnexpectedToken,
                format!("Expected {}, found {:?}", expected, token.token_type),
            )
        }
    }
}
