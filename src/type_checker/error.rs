//! Type checking error types

use crate::ast::{BinaryOp, UnaryOp};
use crate::error::SourceLocation;
use crate::types::Ty;
use std::fmt;

/// Type checking errors with detailed information
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeCheckError {
    TypeMismatch {
        expected: Ty,
        actual: Ty,
        location: SourceLocation,
    },
    BinaryOperatorNotSupported {
        operator: BinaryOp,
        left_type: Ty,
        right_type: Ty,
        location: SourceLocation,
    },
    UnaryOperatorNotSupported {
        operator: UnaryOp,
        operand_type: Ty,
        location: SourceLocation,
    },
    VariableNotFound {
        name: String,
        location: SourceLocation,
    },
    InvalidAssignmentTarget {
        location: SourceLocation,
    },
}

impl TypeCheckError {
    pub fn location(&self) -> &SourceLocation {
        match self {
            TypeCheckError::TypeMismatch { location, .. }
            | TypeCheckError::BinaryOperatorNotSupported { location, .. }
            | TypeCheckError::UnaryOperatorNotSupported { location, .. }
            | TypeCheckError::VariableNotFound { location, .. }
            | TypeCheckError::InvalidAssignmentTarget { location } => location,
        }
    }
}

impl fmt::Display for TypeCheckError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeCheckError::TypeMismatch {
                expected,
                actual,
                location,
            } => write!(
                f,
                "{}: expected `{}`, found `{}`",
                location, expected, actual
            ),
            TypeCheckError::BinaryOperatorNotSupported {
                operator,
                left_type,
                right_type,
                location,
            } => write!(
                f,
                "{}: operator `{}` is not supported for `{}` and `{}`",
                location, operator, left_type, right_type
            ),
            TypeCheckError::UnaryOperatorNotSupported {
                operator,
                operand_type,
                location,
            } => write!(
                f,
                "{}: operator `{}` is not supported for `{}`",
                location, operator, operand_type
            ),
            TypeCheckError::VariableNotFound { name, location } => {
                write!(f, "{}: variable `{}` has no known type", location, name)
            }
            TypeCheckError::InvalidAssignmentTarget { location } => {
                write!(f, "{}: assignment target is not a variable name", location)
            }
        }
    }
}
