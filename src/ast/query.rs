//! Closure-driven traversal helpers and structural queries
//!
//! These complement the visitor protocol for the common case where a pass
//! only needs to look at every node, without per-variant behavior.

use super::{Expr, LocatedExpr};
use std::collections::HashSet;

/// Extension trait for walking an expression tree with a closure
pub trait ExprExt {
    /// Walk the expression tree in pre-order
    ///
    /// Calls the visitor on the current node before its children. Return
    /// `Err` to stop early.
    fn walk<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&LocatedExpr) -> Result<(), E>;

    /// Walk the expression tree in post-order
    ///
    /// Calls the visitor on children before the current node. Useful for
    /// bottom-up analysis.
    fn walk_post<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&LocatedExpr) -> Result<(), E>;
}

impl ExprExt for LocatedExpr {
    fn walk<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&LocatedExpr) -> Result<(), E>,
    {
        visitor(self)?;

        match &self.node {
            Expr::Unary(unary) => {
                unary.operand.walk(visitor)?;
            }
            Expr::Binary(binary) => {
                binary.left.walk(visitor)?;
                binary.right.walk(visitor)?;
            }
            Expr::Assign(assign) => {
                assign.target.walk(visitor)?;
                assign.value.walk(visitor)?;
            }
            Expr::Literal(_) | Expr::Identifier(_) => {
                // Leaf nodes, nothing to descend into
            }
        }
        Ok(())
    }

    fn walk_post<F, E>(&self, visitor: &mut F) -> Result<(), E>
    where
        F: FnMut(&LocatedExpr) -> Result<(), E>,
    {
        match &self.node {
            Expr::Unary(unary) => {
                unary.operand.walk_post(visitor)?;
            }
            Expr::Binary(binary) => {
                binary.left.walk_post(visitor)?;
                binary.right.walk_post(visitor)?;
            }
            Expr::Assign(assign) => {
                assign.target.walk_post(visitor)?;
                assign.value.walk_post(visitor)?;
            }
            Expr::Literal(_) | Expr::Identifier(_) => {
                // Leaf nodes, nothing to descend into
            }
        }

        visitor(self)
    }
}

/// Query API for common read-only AST inspections
pub struct AstQuery;

impl AstQuery {
    /// Check if an expression contains any assignment
    pub fn contains_assignments(expr: &LocatedExpr) -> bool {
        let mut found = false;
        let _ = expr.walk(&mut |e| {
            if matches!(e.node, Expr::Assign(_)) {
                found = true;
                return Err(());
            }
            Ok::<(), ()>(())
        });
        found
    }

    /// Get all identifiers referenced in an expression
    pub fn collect_identifiers(expr: &LocatedExpr) -> HashSet<String> {
        let mut ids = HashSet::new();
        let _ = expr.walk(&mut |e| {
            if let Expr::Identifier(name) = &e.node {
                ids.insert(name.clone());
            }
            Ok::<(), ()>(())
        });
        ids
    }

    /// Count every node in an expression tree
    pub fn count_nodes(expr: &LocatedExpr) -> usize {
        let mut count = 0;
        let _ = expr.walk(&mut |_| {
            count += 1;
            Ok::<(), ()>(())
        });
        count
    }
}
