//! Dispatch contract tests: one visitor operation per variant, routed
//! exactly once, with no implicit traversal and no hidden side entry into
//! the other half of an assignment.

mod common;

use common::{loc, loc_at, parse_expr};
use macchiato::ast::{
    AssignExpr, BinaryExpr, Expr, ExprVisitor, LiteralExpr, LocatedExpr, UnaryExpr, UnaryOp,
};
use macchiato::ast::query::AstQuery;

/// Records which operation fired, without recursing into children
#[derive(Default)]
struct EventLog {
    events: Vec<String>,
}

impl<'ast> ExprVisitor<'ast> for EventLog {
    type Output = ();

    fn visit_literal(&mut self, literal: &'ast LiteralExpr, _expr: &'ast LocatedExpr) {
        self.events.push(format!("literal:{}", literal));
    }

    fn visit_identifier(&mut self, name: &'ast str, _expr: &'ast LocatedExpr) {
        self.events.push(format!("identifier:{}", name));
    }

    fn visit_unary(&mut self, unary: &'ast UnaryExpr, _expr: &'ast LocatedExpr) {
        self.events.push(format!("unary:{}", unary.operator));
    }

    fn visit_binary(&mut self, binary: &'ast BinaryExpr, _expr: &'ast LocatedExpr) {
        self.events.push(format!("binary:{}", binary.operator));
    }

    fn visit_assign(&mut self, _assign: &'ast AssignExpr, _expr: &'ast LocatedExpr) {
        self.events.push("assign".to_string());
    }
}

/// Counts every node by recursing through dispatch only
struct NodeCounter;

impl<'ast> ExprVisitor<'ast> for NodeCounter {
    type Output = usize;

    fn visit_literal(&mut self, _literal: &'ast LiteralExpr, _expr: &'ast LocatedExpr) -> usize {
        1
    }

    fn visit_identifier(&mut self, _name: &'ast str, _expr: &'ast LocatedExpr) -> usize {
        1
    }

    fn visit_unary(&mut self, unary: &'ast UnaryExpr, _expr: &'ast LocatedExpr) -> usize {
        1 + unary.operand.accept(self)
    }

    fn visit_binary(&mut self, binary: &'ast BinaryExpr, _expr: &'ast LocatedExpr) -> usize {
        1 + binary.left.accept(self) + binary.right.accept(self)
    }

    fn visit_assign(&mut self, assign: &'ast AssignExpr, _expr: &'ast LocatedExpr) -> usize {
        1 + assign.accept_target(self) + assign.accept_value(self)
    }
}

/// Collects the construction-time positions the visitor operations observe
struct PositionLog {
    positions: Vec<(usize, usize)>,
}

impl PositionLog {
    fn record(&mut self, expr: &LocatedExpr) {
        self.positions.push((expr.line(), expr.column()));
    }
}

impl<'ast> ExprVisitor<'ast> for PositionLog {
    type Output = ();

    fn visit_literal(&mut self, _literal: &'ast LiteralExpr, expr: &'ast LocatedExpr) {
        self.record(expr);
    }

    fn visit_identifier(&mut self, _name: &'ast str, expr: &'ast LocatedExpr) {
        self.record(expr);
    }

    fn visit_unary(&mut self, unary: &'ast UnaryExpr, expr: &'ast LocatedExpr) {
        self.record(expr);
        unary.operand.accept(self);
    }

    fn visit_binary(&mut self, binary: &'ast BinaryExpr, expr: &'ast LocatedExpr) {
        self.record(expr);
        binary.left.accept(self);
        binary.right.accept(self);
    }

    fn visit_assign(&mut self, assign: &'ast AssignExpr, expr: &'ast LocatedExpr) {
        self.record(expr);
        assign.accept_target(self);
        assign.accept_value(self);
    }
}

#[test]
fn accept_routes_to_matching_operation_exactly_once() {
    let expr = loc(Expr::Unary(UnaryExpr {
        operator: UnaryOp::Neg,
        operand: Box::new(loc(Expr::Identifier("x".to_string()))),
    }));

    let mut log = EventLog::default();
    expr.accept(&mut log);

    // One dispatch, one operation; the child is untouched because the
    // visitor chose not to descend
    assert_eq!(log.events, vec!["unary:-"]);
}

#[test]
fn accept_target_dispatches_into_target_only() {
    let statement = parse_expr("x = 5");
    let assign = match &statement.node {
        Expr::Assign(assign) => assign,
        other => panic!("expected an assignment, got {:?}", other),
    };

    let mut log = EventLog::default();
    assign.accept_target(&mut log);
    assert_eq!(log.events, vec!["identifier:x"]);

    let mut log = EventLog::default();
    assign.accept_value(&mut log);
    assert_eq!(log.events, vec!["literal:5"]);
}

#[test]
fn whole_assignment_dispatch_does_not_descend_on_its_own() {
    let statement = parse_expr("x = 5");

    let mut log = EventLog::default();
    statement.accept(&mut log);

    assert_eq!(log.events, vec!["assign"]);
}

#[test]
fn counting_pass_is_idempotent() {
    let statement = parse_expr("x = -y + 2 * z");

    let first = statement.accept(&mut NodeCounter);
    let second = statement.accept(&mut NodeCounter);

    assert_eq!(first, second);
    assert_eq!(first, AstQuery::count_nodes(&statement));
}

#[test]
fn nodes_report_their_construction_time_positions() {
    let statement = parse_expr("a = b + 1");

    let mut log = PositionLog { positions: vec![] };
    statement.accept(&mut log);

    // assign starts at `a`, binary at `b`, leaves at their own columns
    assert_eq!(
        log.positions,
        vec![(1, 1), (1, 1), (1, 5), (1, 5), (1, 9)]
    );

    // Positions are unaffected by how many passes ran before
    let mut again = PositionLog { positions: vec![] };
    statement.accept(&mut again);
    assert_eq!(log.positions, again.positions);
}

#[test]
fn positions_survive_any_traversal_order() {
    let target = loc_at(Expr::Identifier("t".to_string()), 3, 7);
    let value = loc_at(Expr::Literal(LiteralExpr::Int(9)), 4, 2);
    let assign = AssignExpr {
        target: Box::new(target),
        value: Box::new(value),
    };

    let mut log = PositionLog { positions: vec![] };
    // Value first, then target: order must not change what either reports
    assign.accept_value(&mut log);
    assign.accept_target(&mut log);

    assert_eq!(log.positions, vec![(4, 2), (3, 7)]);
}
