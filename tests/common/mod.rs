#![allow(dead_code)]

use macchiato::ast::{Expr, Located, LocatedExpr, Program};
use macchiato::config::Config;
use macchiato::error::{MacchiatoError, SourceLocation, Span};
use macchiato::interpreter::{EvalError, Interpreter, Value};
use macchiato::lexer::Lexer;
use macchiato::parser::Parser;

/// Parse source into a program, surfacing the first error
pub fn parse_source(code: &str) -> Result<Program, MacchiatoError> {
    let tokens = Lexer::with_config(code.to_string(), Config::default()).tokenize()?;
    Parser::new(tokens).parse()
}

/// Parse source that the test expects to be well-formed
pub fn parse_ok(code: &str) -> Program {
    parse_source(code).expect("program should parse")
}

/// Parse a single-statement source and return that statement
pub fn parse_expr(code: &str) -> LocatedExpr {
    let mut program = parse_ok(code);
    assert_eq!(program.statements.len(), 1, "expected a single statement");
    program.statements.remove(0)
}

/// Evaluate a source program without running the static passes first
pub fn eval_source(code: &str) -> Result<Vec<Value>, EvalError> {
    let program = parse_ok(code);
    Interpreter::new().run(&program)
}

/// Build a located expression at a fixed dummy position
pub fn loc(expr: Expr) -> LocatedExpr {
    Located::new(expr, Span::single(SourceLocation::new(1, 1)))
}

/// Build a located expression at an explicit position
pub fn loc_at(expr: Expr, line: usize, column: usize) -> LocatedExpr {
    Located::new(expr, Span::single(SourceLocation::new(line, column)))
}
