//! Machine-readable AST dumps

mod common;

use common::{parse_expr, parse_ok};

#[test]
fn expressions_serialize_with_their_spans() {
    let expr = parse_expr("x = 5");
    let json = serde_json::to_value(&expr).expect("serialization should succeed");

    assert_eq!(json["node"]["Assign"]["target"]["node"]["Identifier"], "x");
    assert_eq!(json["node"]["Assign"]["value"]["node"]["Literal"]["Int"], 5);
    assert_eq!(json["span"]["start"]["line"], 1);
    assert_eq!(json["span"]["start"]["column"], 1);
    assert_eq!(json["node"]["Assign"]["value"]["span"]["start"]["column"], 5);
}

#[test]
fn programs_serialize_statement_lists() {
    let program = parse_ok("x = 1\n-x");
    let json = serde_json::to_value(&program).expect("serialization should succeed");

    let statements = json["statements"]
        .as_array()
        .expect("statements should be an array");
    assert_eq!(statements.len(), 2);
    assert_eq!(statements[1]["node"]["Unary"]["operator"], "Neg");
}
