//! Lexer for the Macchiato language
//!
//! Produces a flat token stream with 1-based line/column positions recorded
//! at the first character of every token. The parser copies these positions
//! into the AST, which is where all later diagnostics get their locations
//! from.

use crate::config::Config;
use crate::error::{ErrorKind, MacchiatoError, SourceLocation, Span};

#[derive(Debug, Clone, PartialEq)]
pub enum TokenType {
    // Keywords
    True,
    False,

    // Identifiers and literals
    Identifier(String),
    IntLiteral(i64),
    StringLiteral(String),

    // Operators
    Plus,
    Minus,
    Star,
    Slash,
    Percent,
    Equal,
    EqualEqual,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    AndAnd,
    OrOr,
    Bang,

    // Delimiters
    LeftParen,
    RightParen,
    Semicolon,

    // Comments (content, preceding whitespace)
    LineComment(String, String),
    BlockComment(String, String),

    // Special
    Newline,
    Eof,
}

#[derive(Debug, Clone)]
pub struct Token {
    pub token_type: TokenType,
    pub line: usize,
    pub column: usize,
}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    config: Config,
}

impl Lexer {
    pub fn new(input: String) -> Self {
        Self::with_config(input, Config::default())
    }

    pub fn with_config(input: String, config: Config) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 1,
            column: 1,
            config,
        }
    }

    pub fn tokenize(&mut self) -> Result<Vec<Token>, MacchiatoError> {
        let mut tokens = Vec::new();

        while !self.is_at_end() {
            let whitespace = self.collect_whitespace();
            if self.is_at_end() {
                break;
            }

            let mut token = self.next_token()?;
            match &mut token.token_type {
                TokenType::LineComment(_, ws) | TokenType::BlockComment(_, ws) => {
                    *ws = whitespace;
                    if self.config.preserve_comments {
                        tokens.push(token);
                    }
                }
                _ => {
                    tokens.push(token);
                }
            }
        }

        tokens.push(Token {
            token_type: TokenType::Eof,
            line: self.line,
            column: self.column,
        });

        Ok(tokens)
    }

    fn next_token(&mut self) -> Result<Token, MacchiatoError> {
        let start_line = self.line;
        let start_column = self.column;

        let ch = match self.advance() {
            Some(ch) => ch,
            None => {
                return Err(self.error_at(ErrorKind::UnexpectedEof, "no more input", start_line, start_column))
            }
        };

        let token_type = match ch {
            '(' => TokenType::LeftParen,
            ')' => TokenType::RightParen,
            ';' => TokenType::Semicolon,
            '+' => TokenType::Plus,
            '-' => TokenType::Minus,
            '*' => TokenType::Star,
            '/' => {
                if self.peek() == Some('/') {
                    self.advance(); // consume second '/'
                    let comment = self.read_line_comment();
                    TokenType::LineComment(comment, String::new())
                } else if self.peek() == Some('*') {
                    self.advance(); // consume '*'
                    let comment = self.read_block_comment(start_line, start_column)?;
                    TokenType::BlockComment(comment, String::new())
                } else {
                    TokenType::Slash
                }
            }
            '%' => TokenType::Percent,
            '=' => {
                if self.peek() == Some('=') {
                    self.advance();
                    TokenType::EqualEqual
                } else {
                    TokenType::Equal
                }
            }
            '!' => {
                if self.peek() == Some('=') {
                    self.advance();
                    TokenType::NotEqual
                } else {
                    TokenType::Bang
                }
            }
            '<' => {
                if self.peek() == Some('=') {
                    self.advance();
                    TokenType::LessEqual
                } else {
                    TokenType::Less
                }
            }
            '>' => {
                if self.peek() == Some('=') {
                    self.advance();
                    TokenType::GreaterEqual
                } else {
                    TokenType::Greater
                }
            }
            '&' => {
                if self.peek() == Some('&') {
                    self.advance();
                    TokenType::AndAnd
                } else {
                    return Err(self.error_at(
                        ErrorKind::InvalidCharacter,
                        "'&' is not a token; did you mean '&&'?",
                        start_line,
                        start_column,
                    ));
                }
            }
            '|' => {
                if self.peek() == Some('|') {
                    self.advance();
                    TokenType::OrOr
                } else {
                    return Err(self.error_at(
                        ErrorKind::InvalidCharacter,
                        "'|' is not a token; did you mean '||'?",
                        start_line,
                        start_column,
                    ));
                }
            }
            '\n' => {
                self.line += 1;
                self.column = 1;
                TokenType::Newline
            }
            '"' => {
                let string_value = self.read_string(start_line, start_column)?;
                TokenType::StringLiteral(string_value)
            }
            _ if ch.is_ascii_digit() => {
                let number = self.read_number(ch, start_line, start_column)?;
                TokenType::IntLiteral(number)
            }
            _ if ch.is_ascii_alphabetic() || ch == '_' => {
                let identifier = self.read_identifier(ch);
                self.keyword_or_identifier(identifier)
            }
            _ => {
                return Err(self.error_at(
                    ErrorKind::InvalidCharacter,
                    format!("unexpected character {:?}", ch),
                    start_line,
                    start_column,
                ));
            }
        };

        Ok(Token {
            token_type,
            line: start_line,
            column: start_column,
        })
    }

    fn keyword_or_identifier(&self, text: String) -> TokenType {
        match text.as_str() {
            "true" => TokenType::True,
            "false" => TokenType::False,
            _ => TokenType::Identifier(text),
        }
    }

    fn read_string(
        &mut self,
        start_line: usize,
        start_column: usize,
    ) -> Result<String, MacchiatoError> {
        let value = self.read_while(|ch| ch != '"' && ch != '\n');

        if self.peek() == Some('"') {
            self.advance(); // consume closing quote
            Ok(value)
        } else {
            Err(self.error_at(
                ErrorKind::UnterminatedString,
                "string literal is missing its closing '\"'",
                start_line,
                start_column,
            ))
        }
    }

    fn read_number(
        &mut self,
        first_digit: char,
        start_line: usize,
        start_column: usize,
    ) -> Result<i64, MacchiatoError> {
        let mut value = String::from(first_digit);
        value.push_str(&self.read_while(|c| c.is_ascii_digit()));
        value.parse().map_err(|_| {
            self.error_at(
                ErrorKind::NumberTooLarge,
                format!("integer literal `{}` does not fit in 64 bits", value),
                start_line,
                start_column,
            )
        })
    }

    fn read_identifier(&mut self, first_char: char) -> String {
        let mut value = String::from(first_char);
        value.push_str(&self.read_while(|c| c.is_ascii_alphanumeric() || c == '_'));
        value
    }

    fn read_line_comment(&mut self) -> String {
        self.read_while(|ch| ch != '\n')
    }

    fn read_block_comment(
        &mut self,
        start_line: usize,
        start_column: usize,
    ) -> Result<String, MacchiatoError> {
        let mut comment = String::new();

        while !self.is_at_end() {
            if self.peek() == Some('*') && self.peek_next() == Some('/') {
                self.advance(); // consume '*'
                self.advance(); // consume '/'
                return Ok(comment);
            }

            if let Some(ch) = self.advance() {
                if ch == '\n' {
                    self.line += 1;
                    self.column = 1;
                }
                comment.push(ch);
            }
        }

        Err(self.error_at(
            ErrorKind::UnterminatedComment,
            "block comment is missing its closing '*/'",
            start_line,
            start_column,
        ))
    }

    fn collect_whitespace(&mut self) -> String {
        self.read_while(|ch| matches!(ch, ' ' | '\r' | '\t'))
    }

    fn error_at(
        &self,
        kind: ErrorKind,
        message: impl Into<String>,
        line: usize,
        column: usize,
    ) -> MacchiatoError {
        MacchiatoError::new(kind, message)
            .with_span(Span::single(SourceLocation::new(line, column)))
    }

    fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    fn advance(&mut self) -> Option<char> {
        if self.is_at_end() {
            None
        } else {
            let ch = self.input[self.position];
            self.position += 1;
            self.column += 1;
            Some(ch)
        }
    }

    fn peek(&self) -> Option<char> {
        if self.is_at_end() {
            None
        } else {
            Some(self.input[self.position])
        }
    }

    fn peek_next(&self) -> Option<char> {
        if self.position + 1 >= self.input.len() {
            None
        } else {
            Some(self.input[self.position + 1])
        }
    }

    fn read_while<F>(&mut self, mut predicate: F) -> String
    where
        F: FnMut(char) -> bool,
    {
        let mut value = String::new();

        while let Some(ch) = self.peek() {
            if !predicate(ch) {
                break;
            }
            if let Some(ch) = self.advance() {
                if ch == '\n' {
                    self.line += 1;
                    self.column = 1;
                }
                value.push(ch);
            }
        }

        value
    }
}
