//! Abstract Syntax Tree (AST) definitions for Macchiato
//!
//! This module contains the node types built by the parser and consumed by
//! every pass. A tree is constructed bottom-up during parsing and is
//! read-only afterwards: nodes carry no mutation API, ownership flows
//! strictly top-down through `Box`, and there are no parent pointers, so any
//! number of passes may traverse one tree without coordination.
//!
//! The `Display` implementations are the canonical textual rendering used
//! for debug dumps and golden-output comparisons.

mod node_map;
pub mod query;
mod visitor;

pub use node_map::NodeMap;
pub use query::ExprExt;
pub use visitor::ExprVisitor;

use crate::error::Span;
use serde::Serialize;
use std::fmt;

/// A wrapper that attaches source location to an AST node
///
/// The span is fixed at construction by the parser and matches the node's
/// extent in the original input text. Line and column are 1-based.
#[derive(Debug, Clone, Serialize)]
pub struct Located<T> {
    pub node: T,
    pub span: Span,
}

impl<T> Located<T> {
    pub fn new(node: T, span: Span) -> Self {
        Self { node, span }
    }

    /// Line of the node's first character
    pub fn line(&self) -> usize {
        self.span.start_line()
    }

    /// Column of the node's first character
    pub fn column(&self) -> usize {
        self.span.start_column()
    }
}

/// Type alias for located expressions
pub type LocatedExpr = Located<Expr>;

/// The closed set of expression variants
///
/// The variant set is grammar-determined and closed; the set of passes over
/// it is open. Each pass handles every variant through [`ExprVisitor`], and
/// the exhaustive match in [`LocatedExpr::accept`] makes the compiler reject
/// any pass left behind when a variant is added.
#[derive(Debug, Clone, Serialize)]
pub enum Expr {
    Literal(LiteralExpr),
    Identifier(String),
    Unary(UnaryExpr),
    Binary(BinaryExpr),
    Assign(AssignExpr),
}

#[derive(Debug, Clone, Serialize)]
pub enum LiteralExpr {
    Int(i64),
    Bool(bool),
    Str(String),
}

/// An operator applied to exactly one child expression
#[derive(Debug, Clone, Serialize)]
pub struct UnaryExpr {
    pub operator: UnaryOp,
    pub operand: Box<LocatedExpr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum UnaryOp {
    /// Arithmetic negation, `-x`
    Neg,
    /// Logical negation, `!x`
    Not,
}

#[derive(Debug, Clone, Serialize)]
pub struct BinaryExpr {
    pub left: Box<LocatedExpr>,
    pub operator: BinaryOp,
    pub right: Box<LocatedExpr>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum BinaryOp {
    Add,
    Subtract,
    Multiply,
    Divide,
    Modulo,
    Equal,
    NotEqual,
    Less,
    LessEqual,
    Greater,
    GreaterEqual,
    And,
    Or,
}

/// `target = value`
///
/// Both sides are always present and fully formed. The two sides need
/// different treatment in most passes (the target denotes a storage
/// location, the value is computed), so besides ordinary dispatch on the
/// whole node, [`AssignExpr::accept_target`] and [`AssignExpr::accept_value`]
/// let a pass descend into exactly one side; see the visitor module.
#[derive(Debug, Clone, Serialize)]
pub struct AssignExpr {
    pub target: Box<LocatedExpr>,
    pub value: Box<LocatedExpr>,
}

/// A parsed program: a sequence of expression statements
#[derive(Debug, Clone, Serialize)]
pub struct Program {
    pub statements: Vec<LocatedExpr>,
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryOp::Neg => f.write_str("-"),
            UnaryOp::Not => f.write_str("!"),
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            BinaryOp::Add => "+",
            BinaryOp::Subtract => "-",
            BinaryOp::Multiply => "*",
            BinaryOp::Divide => "/",
            BinaryOp::Modulo => "%",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::Less => "<",
            BinaryOp::LessEqual => "<=",
            BinaryOp::Greater => ">",
            BinaryOp::GreaterEqual => ">=",
            BinaryOp::And => "&&",
            BinaryOp::Or => "||",
        };
        f.write_str(symbol)
    }
}

impl fmt::Display for LiteralExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LiteralExpr::Int(value) => write!(f, "{}", value),
            LiteralExpr::Bool(value) => write!(f, "{}", value),
            LiteralExpr::Str(value) => write!(f, "\"{}\"", value),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expr::Literal(literal) => write!(f, "{}", literal),
            Expr::Identifier(name) => f.write_str(name),
            // Operator immediately followed by the operand, no separator
            Expr::Unary(unary) => write!(f, "{}{}", unary.operator, unary.operand),
            Expr::Binary(binary) => {
                write!(f, "{} {} {}", binary.left, binary.operator, binary.right)
            }
            Expr::Assign(assign) => write!(f, "{} = {}", assign.target, assign.value),
        }
    }
}

impl fmt::Display for LocatedExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.node)
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            writeln!(f, "{}", statement)?;
        }
        Ok(())
    }
}
