use crate::config::Config;
use crate::error::ErrorKind;
use crate::interpreter::{Interpreter, Value};
use crate::lexer::{Lexer, TokenType};
use crate::parser::Parser;
use crate::resolver::Resolver;
use crate::type_checker::TypeChecker;

#[test]
fn lexer_records_token_positions() {
    let mut lexer = Lexer::new("x = 5\n-x".to_string());
    let tokens = lexer.tokenize().expect("tokenize should succeed");

    let positions: Vec<(usize, usize)> = tokens.iter().map(|t| (t.line, t.column)).collect();
    assert_eq!(
        positions,
        vec![(1, 1), (1, 3), (1, 5), (1, 6), (2, 1), (2, 2), (2, 3)]
    );
    assert_eq!(tokens[0].token_type, TokenType::Identifier("x".to_string()));
    assert_eq!(tokens[1].token_type, TokenType::Equal);
    assert_eq!(tokens[2].token_type, TokenType::IntLiteral(5));
    assert_eq!(tokens[3].token_type, TokenType::Newline);
    assert_eq!(tokens[4].token_type, TokenType::Minus);
    assert_eq!(tokens[6].token_type, TokenType::Eof);
}

#[test]
fn lexer_rejects_unknown_characters() {
    let mut lexer = Lexer::new("x = @".to_string());
    let err = lexer.tokenize().expect_err("'@' is not a token");
    let span = err.context.span.expect("error should carry a span");
    assert_eq!((span.start.line, span.start.column), (1, 5));
}

#[test]
fn lexer_rejects_oversized_int_literal() {
    let mut lexer = Lexer::new("x = 99999999999999999999".to_string());
    let err = lexer.tokenize().expect_err("literal does not fit in 64 bits");
    assert_eq!(err.kind, ErrorKind::NumberTooLarge);
    let span = err.context.span.expect("error should carry a span");
    assert_eq!((span.start.line, span.start.column), (1, 5));
}

#[test]
fn lexer_rejects_unterminated_string() {
    let mut lexer = Lexer::new("s = \"oops".to_string());
    assert!(lexer.tokenize().is_err());
}

#[test]
fn comments_are_dropped_by_default() {
    let mut lexer = Lexer::new("1 // trailing\n/* block */ 2".to_string());
    let tokens = lexer.tokenize().expect("tokenize should succeed");
    let kinds: Vec<_> = tokens.iter().map(|t| &t.token_type).collect();
    assert!(!kinds
        .iter()
        .any(|t| matches!(t, TokenType::LineComment(_, _) | TokenType::BlockComment(_, _))));
}

#[test]
fn comments_are_kept_when_configured() {
    let config = Config {
        preserve_comments: true,
        ..Config::default()
    };
    let mut lexer = Lexer::with_config("1 // trailing".to_string(), config);
    let tokens = lexer.tokenize().expect("tokenize should succeed");
    assert!(tokens
        .iter()
        .any(|t| matches!(t.token_type, TokenType::LineComment(_, _))));
}

#[test]
fn debug_gate_opens_once_enabled() {
    crate::debug::enable_debug();
    assert!(crate::debug::is_debug_enabled());
}

#[test]
fn full_pipeline_evaluates_program() {
    let source = "x = 2 + 3\ny = x * 2\ny";

    let tokens = Lexer::new(source.to_string())
        .tokenize()
        .expect("tokenize should succeed");
    let program = Parser::new(tokens).parse().expect("parse should succeed");

    Resolver::new()
        .resolve_program(&program)
        .expect("resolution should succeed");
    TypeChecker::new()
        .check_program(&program)
        .expect("type checking should succeed");

    let values = Interpreter::new()
        .run(&program)
        .expect("evaluation should succeed");
    assert_eq!(values, vec![Value::Int(5), Value::Int(10), Value::Int(10)]);
}
