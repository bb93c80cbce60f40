//! Definition resolution for Macchiato programs
//!
//! Checks that every identifier that is *read* refers to a variable that was
//! assigned earlier in the program. Assignment is where the asymmetry shows:
//! the value side is resolved under the ordinary rule first, then the target
//! name is introduced as a definition, with no prior-definition requirement
//! of its own. Hence the pass descends through `accept_value` but never
//! plainly dispatches into the target.

use crate::ast::{
    AssignExpr, BinaryExpr, Expr, ExprVisitor, LiteralExpr, LocatedExpr, Program, UnaryExpr,
};
use crate::error::SourceLocation;
use std::collections::HashSet;
use std::fmt;

/// Resolution errors with the location of the offending node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolveError {
    UndefinedVariable {
        name: String,
        location: SourceLocation,
    },
    InvalidAssignmentTarget {
        location: SourceLocation,
    },
}

impl fmt::Display for ResolveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolveError::UndefinedVariable { name, location } => {
                write!(f, "{}: variable `{}` is not defined", location, name)
            }
            ResolveError::InvalidAssignmentTarget { location } => {
                write!(f, "{}: assignment target is not a variable name", location)
            }
        }
    }
}

/// Definition analysis pass
#[derive(Debug, Default)]
pub struct Resolver {
    defined: HashSet<String>,
}

impl Resolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve all statements, collecting every error instead of stopping at
    /// the first
    pub fn resolve_program(&mut self, program: &Program) -> Result<(), Vec<ResolveError>> {
        let mut errors = Vec::new();

        for statement in &program.statements {
            if let Err(error) = statement.accept(self) {
                errors.push(error);
            }
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }

    /// Whether a name has been defined by an earlier assignment
    pub fn is_defined(&self, name: &str) -> bool {
        self.defined.contains(name)
    }
}

impl<'ast> ExprVisitor<'ast> for Resolver {
    type Output = Result<(), ResolveError>;

    fn visit_literal(&mut self, _literal: &'ast LiteralExpr, _expr: &'ast LocatedExpr) -> Self::Output {
        Ok(())
    }

    fn visit_identifier(&mut self, name: &'ast str, expr: &'ast LocatedExpr) -> Self::Output {
        if self.defined.contains(name) {
            Ok(())
        } else {
            Err(ResolveError::UndefinedVariable {
                name: name.to_string(),
                location: expr.span.start.clone(),
            })
        }
    }

    fn visit_unary(&mut self, unary: &'ast UnaryExpr, _expr: &'ast LocatedExpr) -> Self::Output {
        unary.operand.accept(self)
    }

    fn visit_binary(&mut self, binary: &'ast BinaryExpr, _expr: &'ast LocatedExpr) -> Self::Output {
        binary.left.accept(self)?;
        binary.right.accept(self)
    }

    fn visit_assign(&mut self, assign: &'ast AssignExpr, _expr: &'ast LocatedExpr) -> Self::Output {
        // Ordinary rule for the value side, then the target becomes defined
        assign.accept_value(self)?;

        match &assign.target.node {
            Expr::Identifier(name) => {
                self.defined.insert(name.clone());
                Ok(())
            }
            _ => Err(ResolveError::InvalidAssignmentTarget {
                location: assign.target.span.start.clone(),
            }),
        }
    }
}
