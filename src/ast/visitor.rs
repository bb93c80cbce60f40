//! Double dispatch over the expression tree
//!
//! A pass is an implementation of [`ExprVisitor`]: exactly one operation per
//! concrete variant, each returning the pass's own output type (an evaluated
//! value for an interpreter, an inferred type for a checker, unit for a
//! printer). Dispatch happens in [`LocatedExpr::accept`] through a single
//! exhaustive match, so adding a variant without updating every pass is a
//! compile error rather than a silent omission at run time.
//!
//! No traversal order is imposed here. A visitor operation decides whether
//! and when to descend by calling `accept` on child expressions, or, for
//! assignments, the named single-side dispatchers
//! [`AssignExpr::accept_target`] and [`AssignExpr::accept_value`].

use super::{AssignExpr, BinaryExpr, Expr, LiteralExpr, LocatedExpr, UnaryExpr};

/// One operation per concrete expression variant
///
/// Each operation receives the variant payload together with the enclosing
/// located node, whose span carries the construction-time source position
/// for diagnostics and whose address serves as the node identity for side
/// tables (see [`super::NodeMap`]).
pub trait ExprVisitor<'ast> {
    type Output;

    fn visit_literal(&mut self, literal: &'ast LiteralExpr, expr: &'ast LocatedExpr)
        -> Self::Output;

    fn visit_identifier(&mut self, name: &'ast str, expr: &'ast LocatedExpr) -> Self::Output;

    fn visit_unary(&mut self, unary: &'ast UnaryExpr, expr: &'ast LocatedExpr) -> Self::Output;

    fn visit_binary(&mut self, binary: &'ast BinaryExpr, expr: &'ast LocatedExpr) -> Self::Output;

    fn visit_assign(&mut self, assign: &'ast AssignExpr, expr: &'ast LocatedExpr) -> Self::Output;
}

impl LocatedExpr {
    /// Dispatch entry point: route to the operation matching this node's
    /// variant and return its result unchanged
    pub fn accept<'ast, V>(&'ast self, visitor: &mut V) -> V::Output
    where
        V: ExprVisitor<'ast> + ?Sized,
    {
        match &self.node {
            Expr::Literal(literal) => visitor.visit_literal(literal, self),
            Expr::Identifier(name) => visitor.visit_identifier(name, self),
            Expr::Unary(unary) => visitor.visit_unary(unary, self),
            Expr::Binary(binary) => visitor.visit_binary(binary, self),
            Expr::Assign(assign) => visitor.visit_assign(assign, self),
        }
    }
}

impl AssignExpr {
    /// Dispatch into the target subtree only
    ///
    /// The value side is never touched. Passes use this when the storage
    /// location needs different treatment from the computed value, e.g. a
    /// definition pass that introduces the target instead of resolving it.
    pub fn accept_target<'ast, V>(&'ast self, visitor: &mut V) -> V::Output
    where
        V: ExprVisitor<'ast> + ?Sized,
    {
        self.target.accept(visitor)
    }

    /// Dispatch into the value subtree only
    pub fn accept_value<'ast, V>(&'ast self, visitor: &mut V) -> V::Output
    where
        V: ExprVisitor<'ast> + ?Sized,
    {
        self.value.accept(visitor)
    }
}
