//! Evaluation semantics: environments, chained assignment, short-circuits,
//! and located runtime errors

mod common;

use common::{eval_source, parse_ok};
use macchiato::error::SourceLocation;
use macchiato::interpreter::{EvalError, Interpreter, Value};

#[test]
fn statements_evaluate_in_order() {
    let values = eval_source("x = 2 + 3\ny = x * 2\ny - 1").expect("evaluation should succeed");
    assert_eq!(
        values,
        vec![Value::Int(5), Value::Int(10), Value::Int(9)]
    );
}

#[test]
fn assignment_yields_the_assigned_value() {
    let values = eval_source("x = y = 7\nx + y").expect("evaluation should succeed");
    assert_eq!(values, vec![Value::Int(7), Value::Int(14)]);
}

#[test]
fn environment_tracks_reassignment() {
    let program = parse_ok("x = 1\nx = x + 41");
    let mut interpreter = Interpreter::new();
    interpreter.run(&program).expect("evaluation should succeed");

    assert_eq!(interpreter.lookup("x"), Some(&Value::Int(42)));
}

#[test]
fn logical_operators_short_circuit() {
    // The right operand would divide by zero; it must never be evaluated
    let values =
        eval_source("ok = false\nok && 1 / 0 == 0").expect("`&&` must not evaluate the right side");
    assert_eq!(values[1], Value::Bool(false));

    let values =
        eval_source("ok = true\nok || 1 / 0 == 0").expect("`||` must not evaluate the right side");
    assert_eq!(values[1], Value::Bool(true));
}

#[test]
fn division_by_zero_is_located() {
    let err = eval_source("x = 10\nx / (x - 10)").expect_err("divisor is zero");
    assert_eq!(
        err,
        EvalError::DivisionByZero {
            location: SourceLocation::new(2, 6),
        }
    );
}

#[test]
fn extreme_quotient_is_a_located_error() {
    // i64::MIN, built up without overflowing on the way there
    let err = eval_source("x = 0 - 9223372036854775807 - 1\nx / -1")
        .expect_err("the quotient exceeds i64::MAX");
    assert_eq!(
        err,
        EvalError::ArithmeticOverflow {
            location: SourceLocation::new(2, 1),
        }
    );

    let err = eval_source("x = 0 - 9223372036854775807 - 1\nx % -1")
        .expect_err("the intermediate quotient exceeds i64::MAX");
    assert!(matches!(err, EvalError::ArithmeticOverflow { .. }));
}

#[test]
fn addition_overflow_is_a_located_error() {
    let err = eval_source("9223372036854775807 + 1").expect_err("the sum exceeds i64::MAX");
    assert_eq!(
        err,
        EvalError::ArithmeticOverflow {
            location: SourceLocation::new(1, 1),
        }
    );
}

#[test]
fn negating_the_minimum_int_is_an_error() {
    let err = eval_source("x = 0 - 9223372036854775807 - 1\n-x")
        .expect_err("i64::MIN has no positive counterpart");
    assert!(matches!(err, EvalError::ArithmeticOverflow { .. }));
}

#[test]
fn string_concatenation() {
    let values = eval_source("s = \"mac\" + \"chiato\"\ns").expect("evaluation should succeed");
    assert_eq!(values[1], Value::Str("macchiato".to_string()));
}

#[test]
fn negation_and_not() {
    let values = eval_source("-5").expect("evaluation should succeed");
    assert_eq!(values, vec![Value::Int(-5)]);

    let values = eval_source("!true").expect("evaluation should succeed");
    assert_eq!(values, vec![Value::Bool(false)]);
}

#[test]
fn comparison_and_equality() {
    let values = eval_source("1 < 2\n2 <= 1\n\"a\" == \"a\"\n1 != 1")
        .expect("evaluation should succeed");
    assert_eq!(
        values,
        vec![
            Value::Bool(true),
            Value::Bool(false),
            Value::Bool(true),
            Value::Bool(false)
        ]
    );
}

#[test]
fn undefined_variable_is_a_runtime_error() {
    let err = eval_source("ghost + 1").expect_err("ghost was never assigned");
    assert!(matches!(
        err,
        EvalError::UndefinedVariable { ref name, .. } if name == "ghost"
    ));
}

#[test]
fn mismatched_operands_fail_loudly() {
    let err = eval_source("1 + true").expect_err("Int plus Bool has no meaning");
    assert!(matches!(err, EvalError::TypeError { .. }));
}
