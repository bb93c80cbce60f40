//! Diagnostic rendering against source text

mod common;

use common::parse_source;
use macchiato::error::{ErrorFormatter, ErrorKind, MacchiatoError, SourceLocation, Span};

#[test]
fn display_includes_location_kind_and_message() {
    let err = parse_source("1 = 2").expect_err("a literal is not assignable");

    let rendered = err.to_string();
    assert!(rendered.starts_with("1:1: invalid assignment target:"));
    assert!(rendered.contains("help: only a variable name can appear left of `=`"));
}

#[test]
fn formatter_points_into_the_source_line() {
    let source = "1 = 2";
    let err = parse_source(source).expect_err("a literal is not assignable");

    let formatted = ErrorFormatter::new(&err, source)
        .with_filename("demo.mac")
        .with_color(false)
        .format();

    assert_eq!(
        formatted,
        "demo.mac:1:1: invalid assignment target: cannot assign to `1`\n\
         1 | 1 = 2\n    \
         | ^\n\
         help: only a variable name can appear left of `=`"
    );
}

#[test]
fn formatter_survives_out_of_range_spans() {
    let err = MacchiatoError::new(ErrorKind::SyntaxError, "synthetic")
        .with_span(Span::single(SourceLocation::new(99, 1)));

    let formatted = ErrorFormatter::new(&err, "one line").with_color(false).format();
    assert_eq!(formatted, "99:1: syntax error: synthetic\n");
}

#[test]
fn notes_are_appended() {
    let err = MacchiatoError::new(ErrorKind::TypeMismatch, "expected `Int`, found `Bool`")
        .with_note("a variable's type is fixed by its first assignment");

    assert_eq!(
        err.to_string(),
        "type mismatch: expected `Int`, found `Bool`\n\
         note: a variable's type is fixed by its first assignment"
    );
}
