//! Tree-walking interpreter for Macchiato programs
//!
//! Evaluates each statement in order against a single variable environment.
//! Assignment evaluates its value side first (through the named value
//! dispatcher), then stores the result under the target name and yields it,
//! so `x = y = 1` chains naturally. `&&` and `||` short-circuit: the right
//! operand is only dispatched into when the left one did not already decide
//! the answer.

use crate::ast::{
    AssignExpr, BinaryExpr, BinaryOp, Expr, ExprVisitor, LiteralExpr, LocatedExpr, Program,
    UnaryExpr, UnaryOp,
};
use crate::error::SourceLocation;
use std::collections::HashMap;
use std::fmt;

/// A runtime value
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Value {
    Int(i64),
    Bool(bool),
    Str(String),
}

impl Value {
    /// The human-facing name of the value's type, for error messages
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "Int",
            Value::Bool(_) => "Bool",
            Value::Str(_) => "Str",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(value) => write!(f, "{}", value),
            Value::Bool(value) => write!(f, "{}", value),
            Value::Str(value) => f.write_str(value),
        }
    }
}

/// Evaluation errors with the location of the offending node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EvalError {
    UndefinedVariable {
        name: String,
        location: SourceLocation,
    },
    DivisionByZero {
        location: SourceLocation,
    },
    ArithmeticOverflow {
        location: SourceLocation,
    },
    TypeError {
        message: String,
        location: SourceLocation,
    },
    InvalidAssignmentTarget {
        location: SourceLocation,
    },
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::UndefinedVariable { name, location } => {
                write!(f, "{}: variable `{}` is not defined", location, name)
            }
            EvalError::DivisionByZero { location } => {
                write!(f, "{}: division by zero", location)
            }
            EvalError::ArithmeticOverflow { location } => {
                write!(f, "{}: arithmetic overflow", location)
            }
            EvalError::TypeError { message, location } => {
                write!(f, "{}: {}", location, message)
            }
            EvalError::InvalidAssignmentTarget { location } => {
                write!(f, "{}: assignment target is not a variable name", location)
            }
        }
    }
}

/// Evaluation pass
#[derive(Debug, Default)]
pub struct Interpreter {
    env: HashMap<String, Value>,
}

impl Interpreter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Evaluate all statements in order, yielding one value per statement
    pub fn run(&mut self, program: &Program) -> Result<Vec<Value>, EvalError> {
        let mut results = Vec::with_capacity(program.statements.len());

        for statement in &program.statements {
            results.push(statement.accept(self)?);
        }

        Ok(results)
    }

    pub fn eval_expr(&mut self, expr: &LocatedExpr) -> Result<Value, EvalError> {
        expr.accept(self)
    }

    /// Current value of a variable, if assigned
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.env.get(name)
    }

    fn int_operands(
        &self,
        left: Value,
        right: Value,
        operator: BinaryOp,
        location: &SourceLocation,
    ) -> Result<(i64, i64), EvalError> {
        match (left, right) {
            (Value::Int(l), Value::Int(r)) => Ok((l, r)),
            (left, right) => Err(EvalError::TypeError {
                message: format!(
                    "operator `{}` needs Int operands, found {} and {}",
                    operator,
                    left.type_name(),
                    right.type_name()
                ),
                location: location.clone(),
            }),
        }
    }

    // Integer arithmetic goes through the checked operations so that
    // overflow surfaces as a located error instead of a panic
    fn checked_int(
        &self,
        result: Option<i64>,
        location: &SourceLocation,
    ) -> Result<Value, EvalError> {
        match result {
            Some(value) => Ok(Value::Int(value)),
            None => Err(EvalError::ArithmeticOverflow {
                location: location.clone(),
            }),
        }
    }
}

impl<'ast> ExprVisitor<'ast> for Interpreter {
    type Output = Result<Value, EvalError>;

    fn visit_literal(&mut self, literal: &'ast LiteralExpr, _expr: &'ast LocatedExpr) -> Self::Output {
        Ok(match literal {
            LiteralExpr::Int(value) => Value::Int(*value),
            LiteralExpr::Bool(value) => Value::Bool(*value),
            LiteralExpr::Str(value) => Value::Str(value.clone()),
        })
    }

    fn visit_identifier(&mut self, name: &'ast str, expr: &'ast LocatedExpr) -> Self::Output {
        match self.env.get(name) {
            Some(value) => Ok(value.clone()),
            None => Err(EvalError::UndefinedVariable {
                name: name.to_string(),
                location: expr.span.start.clone(),
            }),
        }
    }

    fn visit_unary(&mut self, unary: &'ast UnaryExpr, expr: &'ast LocatedExpr) -> Self::Output {
        let operand = unary.operand.accept(self)?;

        match (unary.operator, operand) {
            (UnaryOp::Neg, Value::Int(value)) => {
                self.checked_int(value.checked_neg(), &expr.span.start)
            }
            (UnaryOp::Not, Value::Bool(value)) => Ok(Value::Bool(!value)),
            (operator, operand) => Err(EvalError::TypeError {
                message: format!(
                    "operator `{}` cannot be applied to {}",
                    operator,
                    operand.type_name()
                ),
                location: expr.span.start.clone(),
            }),
        }
    }

    fn visit_binary(&mut self, binary: &'ast BinaryExpr, expr: &'ast LocatedExpr) -> Self::Output {
        let location = &expr.span.start;
        let left = binary.left.accept(self)?;

        // Logical operators decide before touching the right operand
        match (binary.operator, &left) {
            (BinaryOp::And, Value::Bool(false)) => return Ok(Value::Bool(false)),
            (BinaryOp::Or, Value::Bool(true)) => return Ok(Value::Bool(true)),
            _ => {}
        }

        let right = binary.right.accept(self)?;

        match binary.operator {
            BinaryOp::Add => match (left, right) {
                (Value::Int(l), Value::Int(r)) => self.checked_int(l.checked_add(r), location),
                (Value::Str(l), Value::Str(r)) => Ok(Value::Str(l + &r)),
                (left, right) => Err(EvalError::TypeError {
                    message: format!(
                        "operator `+` needs two Ints or two Strs, found {} and {}",
                        left.type_name(),
                        right.type_name()
                    ),
                    location: location.clone(),
                }),
            },
            BinaryOp::Subtract => {
                let (l, r) = self.int_operands(left, right, binary.operator, location)?;
                self.checked_int(l.checked_sub(r), location)
            }
            BinaryOp::Multiply => {
                let (l, r) = self.int_operands(left, right, binary.operator, location)?;
                self.checked_int(l.checked_mul(r), location)
            }
            BinaryOp::Divide => {
                let (l, r) = self.int_operands(left, right, binary.operator, location)?;
                if r == 0 {
                    return Err(EvalError::DivisionByZero {
                        location: binary.right.span.start.clone(),
                    });
                }
                // i64::MIN / -1 has no representable quotient
                self.checked_int(l.checked_div(r), location)
            }
            BinaryOp::Modulo => {
                let (l, r) = self.int_operands(left, right, binary.operator, location)?;
                if r == 0 {
                    return Err(EvalError::DivisionByZero {
                        location: binary.right.span.start.clone(),
                    });
                }
                self.checked_int(l.checked_rem(r), location)
            }
            BinaryOp::Less => {
                let (l, r) = self.int_operands(left, right, binary.operator, location)?;
                Ok(Value::Bool(l < r))
            }
            BinaryOp::LessEqual => {
                let (l, r) = self.int_operands(left, right, binary.operator, location)?;
                Ok(Value::Bool(l <= r))
            }
            BinaryOp::Greater => {
                let (l, r) = self.int_operands(left, right, binary.operator, location)?;
                Ok(Value::Bool(l > r))
            }
            BinaryOp::GreaterEqual => {
                let (l, r) = self.int_operands(left, right, binary.operator, location)?;
                Ok(Value::Bool(l >= r))
            }
            BinaryOp::Equal => Ok(Value::Bool(left == right)),
            BinaryOp::NotEqual => Ok(Value::Bool(left != right)),
            BinaryOp::And | BinaryOp::Or => match (left, right) {
                (Value::Bool(_), Value::Bool(r)) => Ok(Value::Bool(r)),
                (left, right) => Err(EvalError::TypeError {
                    message: format!(
                        "operator `{}` needs Bool operands, found {} and {}",
                        binary.operator,
                        left.type_name(),
                        right.type_name()
                    ),
                    location: location.clone(),
                }),
            },
        }
    }

    fn visit_assign(&mut self, assign: &'ast AssignExpr, _expr: &'ast LocatedExpr) -> Self::Output {
        // Compute the value first, then store through the target
        let value = assign.accept_value(self)?;

        match &assign.target.node {
            Expr::Identifier(name) => {
                self.env.insert(name.clone(), value.clone());
                Ok(value)
            }
            _ => Err(EvalError::InvalidAssignmentTarget {
                location: assign.target.span.start.clone(),
            }),
        }
    }
}
