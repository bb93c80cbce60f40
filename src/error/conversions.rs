//! Conversions from per-pass error types into `MacchiatoError`

use super::{ErrorKind, MacchiatoError, Span};
use crate::interpreter::EvalError;
use crate::resolver::ResolveError;
use crate::type_checker::TypeCheckError;

impl From<ResolveError> for MacchiatoError {
    fn from(err: ResolveError) -> Self {
        match err {
            ResolveError::UndefinedVariable { name, location } => MacchiatoError::new(
                ErrorKind::UndefinedVariable,
                format!("variable `{}` is not defined", name),
            )
            .with_span(Span::single(location))
            .with_help("assign to the variable before reading it"),
            ResolveError::InvalidAssignmentTarget { location } => MacchiatoError::new(
                ErrorKind::InvalidAssignmentTarget,
                "assignment target is not a variable name",
            )
            .with_span(Span::single(location)),
        }
    }
}

impl From<TypeCheckError> for MacchiatoError {
    fn from(err: TypeCheckError) -> Self {
        match err {
            TypeCheckError::TypeMismatch {
                expected,
                actual,
                location,
            } => MacchiatoError::new(
                ErrorKind::TypeMismatch,
                format!("expected `{}`, found `{}`", expected, actual),
            )
            .with_span(Span::single(location))
            .with_note("a variable's type is fixed by its first assignment"),
            TypeCheckError::BinaryOperatorNotSupported {
                operator,
                left_type,
                right_type,
                location,
            } => MacchiatoError::new(
                ErrorKind::UnsupportedOperator,
                format!(
                    "operator `{}` is not supported for `{}` and `{}`",
                    operator, left_type, right_type
                ),
            )
            .with_span(Span::single(location)),
            TypeCheckError::UnaryOperatorNotSupported {
                operator,
                operand_type,
                location,
            } => MacchiatoError::new(
                ErrorKind::UnsupportedOperator,
                format!(
                    "operator `{}` is not supported for `{}`",
                    operator, operand_type
                ),
            )
            .with_span(Span::single(location)),
            TypeCheckError::VariableNotFound { name, location } => MacchiatoError::new(
                ErrorKind::UndefinedVariable,
                format!("variable `{}` has no known type", name),
            )
            .with_span(Span::single(location)),
            TypeCheckError::InvalidAssignmentTarget { location } => MacchiatoError::new(
                ErrorKind::InvalidAssignmentTarget,
                "assignment target is not a variable name",
            )
            .with_span(Span::single(location)),
        }
    }
}

impl From<EvalError> for MacchiatoError {
    fn from(err: EvalError) -> Self {
        match err {
            EvalError::UndefinedVariable { name, location } => MacchiatoError::new(
                ErrorKind::UndefinedVariable,
                format!("variable `{}` is not defined", name),
            )
            .with_span(Span::single(location)),
            EvalError::DivisionByZero { location } => {
                MacchiatoError::new(ErrorKind::DivisionByZero, "division by zero")
                    .with_span(Span::single(location))
            }
            EvalError::ArithmeticOverflow { location } => MacchiatoError::new(
                ErrorKind::ArithmeticOverflow,
                "result does not fit in a 64-bit integer",
            )
            .with_span(Span::single(location)),
            EvalError::TypeError { message, location } => {
                MacchiatoError::new(ErrorKind::RuntimeError, message)
                    .with_span(Span::single(location))
            }
            EvalError::InvalidAssignmentTarget { location } => MacchiatoError::new(
                ErrorKind::InvalidAssignmentTarget,
                "assignment target is not a variable name",
            )
            .with_span(Span::single(location)),
        }
    }
}
