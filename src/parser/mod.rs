//! Parser for the Macchiato language
//!
//! A recursive descent parser that turns the token stream into an AST. It
//! is the only construction site for tree nodes: every node is built
//! bottom-up with a span copied from the tokens it covers, and nothing
//! mutates a node afterwards.
//!
//! Statements are expressions separated by newlines or semicolons. On a
//! syntax error the parser enters panic mode, records the error, and
//! synchronizes to the next statement boundary so one mistake does not
//! cascade into a wall of diagnostics.

mod error;
mod expressions;
mod utils;

use crate::ast::{LocatedExpr, Program};
use crate::error::{ErrorCollection, MacchiatoError};
use crate::lexer::{Token, TokenType};

pub struct Parser {
    pub(super) tokens: Vec<Token>,
    pub(super) current: usize,
    errors: ErrorCollection,
    panic_mode: bool,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        // Comments are trivia to the parser even when the lexer kept them
        let tokens = tokens
            .into_iter()
            .filter(|token| {
                !matches!(
                    token.token_type,
                    TokenType::LineComment(_, _) | TokenType::BlockComment(_, _)
                )
            })
            .collect();

        Self {
            tokens,
            current: 0,
            errors: ErrorCollection::new(),
            panic_mode: false,
        }
    }

    pub fn parse(&mut self) -> Result<Program, MacchiatoError> {
        let (program, errors) = self.parse_with_recovery();
        match errors.errors().first() {
            Some(error) => Err(error.clone()),
            None => Ok(program),
        }
    }

    /// Parse with error recovery, returning both the program and any errors
    /// found
    pub fn parse_with_recovery(&mut self) -> (Program, ErrorCollection) {
        let mut statements = Vec::new();

        while !self.is_at_end() {
            if self.check(&TokenType::Newline) || self.check(&TokenType::Semicolon) {
                self.advance();
                continue;
            }

            self.panic_mode = false;

            match self.statement() {
                Ok(statement) => statements.push(statement),
                Err(err) => {
                    self.errors.add_error(err);
                    self.panic_mode = true;
                    self.synchronize();
                }
            }
        }

        let program = Program { statements };
        let errors = std::mem::take(&mut self.errors);
        (program, errors)
    }

    fn statement(&mut self) -> Result<LocatedExpr, MacchiatoError> {
        let expr = self.expression()?;

        // A statement ends at a newline, a semicolon, or the end of input
        if self.check(&TokenType::Newline) || self.check(&TokenType::Semicolon) {
            self.advance();
            Ok(expr)
        } else if self.is_at_end() {
            Ok(expr)
        } else {
            Err(self.unexpected_token("newline or ';' after expression"))
        }
    }
}
