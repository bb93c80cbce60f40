//! Type checker for Macchiato programs
//!
//! Infers a [`Ty`] for every expression and enforces assignability: a
//! variable's type is fixed by its first assignment, and later assignments
//! must match. The checker never writes into the tree; inferred types are
//! recorded in a [`NodeMap`] side table keyed by node identity, so other
//! passes can traverse the same tree concurrently.
//!
//! For an assignment the value side is checked first. The target is not
//! dispatched into at all: it denotes a storage location, not a computation,
//! so its name is looked up (or introduced) directly.

pub mod error;

pub use error::TypeCheckError;

use crate::ast::{
    AssignExpr, BinaryExpr, BinaryOp, Expr, ExprVisitor, LiteralExpr, LocatedExpr, NodeMap,
    Program, UnaryExpr, UnaryOp,
};
use crate::types::Ty;
use std::collections::HashMap;

/// Type inference pass with a per-node result table
#[derive(Debug, Default)]
pub struct TypeChecker<'ast> {
    env: HashMap<String, Ty>,
    types: NodeMap<'ast, Ty>,
}

impl<'ast> TypeChecker<'ast> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Check all statements, collecting every error instead of stopping at
    /// the first
    pub fn check_program(&mut self, program: &'ast Program) -> Result<(), Vec<TypeCheckError>> {
        let mut errors = Vec::new();

        for statement in &program.statements {
            if let Err(error) = self.check_expr(statement) {
                errors.push(error);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Infer an expression's type and record it in the side table
    pub fn check_expr(&mut self, expr: &'ast LocatedExpr) -> Result<Ty, TypeCheckError> {
        let ty = expr.accept(self)?;
        self.types.insert(expr, ty);
        Ok(ty)
    }

    /// Inferred types recorded so far, keyed by node identity
    pub fn types(&self) -> &NodeMap<'ast, Ty> {
        &self.types
    }

    pub fn into_types(self) -> NodeMap<'ast, Ty> {
        self.types
    }
}

impl<'ast> ExprVisitor<'ast> for TypeChecker<'ast> {
    type Output = Result<Ty, TypeCheckError>;

    fn visit_literal(&mut self, literal: &'ast LiteralExpr, _expr: &'ast LocatedExpr) -> Self::Output {
        Ok(match literal {
            LiteralExpr::Int(_) => Ty::Int,
            LiteralExpr::Bool(_) => Ty::Bool,
            LiteralExpr::Str(_) => Ty::Str,
        })
    }

    fn visit_identifier(&mut self, name: &'ast str, expr: &'ast LocatedExpr) -> Self::Output {
        match self.env.get(name) {
            Some(ty) => Ok(*ty),
            None => Err(TypeCheckError::VariableNotFound {
                name: name.to_string(),
                location: expr.span.start.clone(),
            }),
        }
    }

    fn visit_unary(&mut self, unary: &'ast UnaryExpr, expr: &'ast LocatedExpr) -> Self::Output {
        let operand_type = self.check_expr(&unary.operand)?;

        match (unary.operator, operand_type) {
            (UnaryOp::Neg, Ty::Int) => Ok(Ty::Int),
            (UnaryOp::Not, Ty::Bool) => Ok(Ty::Bool),
            _ => Err(TypeCheckError::UnaryOperatorNotSupported {
                operator: unary.operator,
                operand_type,
                location: expr.span.start.clone(),
            }),
        }
    }

    fn visit_binary(&mut self, binary: &'ast BinaryExpr, expr: &'ast LocatedExpr) -> Self::Output {
        let left_type = self.check_expr(&binary.left)?;
        let right_type = self.check_expr(&binary.right)?;

        let unsupported = || TypeCheckError::BinaryOperatorNotSupported {
            operator: binary.operator,
            left_type,
            right_type,
            location: expr.span.start.clone(),
        };

        match binary.operator {
            BinaryOp::Add => match (left_type, right_type) {
                (Ty::Int, Ty::Int) => Ok(Ty::Int),
                // `+` doubles as string concatenation
                (Ty::Str, Ty::Str) => Ok(Ty::Str),
                _ => Err(unsupported()),
            },
            BinaryOp::Subtract | BinaryOp::Multiply | BinaryOp::Divide | BinaryOp::Modulo => {
                match (left_type, right_type) {
                    (Ty::Int, Ty::Int) => Ok(Ty::Int),
                    _ => Err(unsupported()),
                }
            }
            BinaryOp::Less | BinaryOp::LessEqual | BinaryOp::Greater | BinaryOp::GreaterEqual => {
                match (left_type, right_type) {
                    (Ty::Int, Ty::Int) => Ok(Ty::Bool),
                    _ => Err(unsupported()),
                }
            }
            BinaryOp::Equal | BinaryOp::NotEqual => {
                if left_type == right_type {
                    Ok(Ty::Bool)
                } else {
                    Err(unsupported())
                }
            }
            BinaryOp::And | BinaryOp::Or => match (left_type, right_type) {
                (Ty::Bool, Ty::Bool) => Ok(Ty::Bool),
                _ => Err(unsupported()),
            },
        }
    }

    fn visit_assign(&mut self, assign: &'ast AssignExpr, _expr: &'ast LocatedExpr) -> Self::Output {
        // The value's type must be known before assignability can be judged
        let value_type = self.check_expr(&assign.value)?;

        match &assign.target.node {
            Expr::Identifier(name) => {
                match self.env.get(name) {
                    Some(declared) => {
                        if *declared != value_type {
                            return Err(TypeCheckError::TypeMismatch {
                                expected: *declared,
                                actual: value_type,
                                location: assign.value.span.start.clone(),
                            });
                        }
                    }
                    None => {
                        // First assignment fixes the variable's type
                        self.env.insert(name.clone(), value_type);
                    }
                }
                self.types.insert(&assign.target, value_type);
                Ok(value_type)
            }
            _ => Err(TypeCheckError::InvalidAssignmentTarget {
                location: assign.target.span.start.clone(),
            }),
        }
    }
}
