pub mod ast;
pub mod config;
pub mod debug;
pub mod error;
pub mod interpreter;
pub mod lexer;
pub mod parser;
pub mod resolver;
pub mod type_checker;
pub mod types;

#[cfg(test)]
mod tests;

pub use ast::*;
pub use config::*;
pub use lexer::{Lexer, Token, TokenType};
pub use parser::Parser;
pub use types::Ty;
