//! Tests for the expression module

use super::*;
use std::collections::HashMap;
use std::sync::Arc;

#[test]
fn test_collect_variables() {
    let a = BoolExpr::variable("a");
    let b = BoolExpr::variable("b");
    let c = BoolExpr::variable("c");

    let expr = c.and(&b).or(&a).or(&c);
    let vars = expr.collect_variables();

    let var_names: Vec<String> = vars.iter().map(|s| s.to_string()).collect();
    assert_eq!(var_names, vec!["a", "b", "c"]); // Should be alphabetical, deduplicated
}

// ========== Display and Parsing Round-trip Tests ==========
// These tests verify correct expression formatting with focus on:
// - Operator precedence
// - Correct parenthesis placement
// Printed text must parse back to the same tree.

#[test]
fn test_precedence_and_over_or() {
    let a = BoolExpr::variable("a");
    let b = BoolExpr::variable("b");
    let c = BoolExpr::variable("c");
    let expr = a.and(&b).or(&c);

    let display = format!("{}", expr);
    assert_eq!(display, "a * b + c"); // No parens needed

    assert_eq!(BoolExpr::parse(&display).unwrap(), expr);
}

#[test]
fn test_precedence_or_in_and_needs_parens() {
    let a = BoolExpr::variable("a");
    let b = BoolExpr::variable("b");
    let c = BoolExpr::variable("c");
    let expr = a.or(&b).and(&c);

    let display = format!("{}", expr);
    assert_eq!(display, "(a + b) * c"); // Parens required

    assert_eq!(BoolExpr::parse(&display).unwrap(), expr);
}

#[test]
fn test_not_of_compound_requires_parens() {
    let a = BoolExpr::variable("a");
    let b = BoolExpr::variable("b");

    let expr_and = a.and(&b).not();
    assert_eq!(expr_and.to_string(), "~(a * b)");
    assert_eq!(BoolExpr::parse("~(a * b)").unwrap(), expr_and);

    let expr_or = a.or(&b).not();
    assert_eq!(expr_or.to_string(), "~(a + b)");
    assert_eq!(BoolExpr::parse("~(a + b)").unwrap(), expr_or);
}

#[test]
fn test_double_negation_and_constants() {
    let expr = BoolExpr::variable("a").not().not().and(&BoolExpr::constant(true));
    assert_eq!(expr.to_string(), "~~a * 1");
    assert_eq!(BoolExpr::parse("~~a * 1").unwrap(), expr);
}

#[test]
fn test_operators_match_methods() {
    let a = BoolExpr::variable("a");
    let b = BoolExpr::variable("b");

    assert_eq!(&a * &b, a.and(&b));
    assert_eq!(&a + &b, a.or(&b));
    assert_eq!(!&a, a.not());
    assert_eq!(a.clone() * b.clone() + !a.clone(), a.and(&b).or(&a.not()));
}

#[test]
fn test_evaluate_reports_unbound_variable() {
    let expr = BoolExpr::parse("a and b").unwrap();
    let mut assignment = HashMap::new();
    assignment.insert(Arc::from("a"), true);

    let err = expr.evaluate(&assignment).unwrap_err();
    assert!(err.message().contains("'b'"));
}

#[test]
fn test_from_str() {
    let expr: BoolExpr = "a | !b".parse().unwrap();
    assert_eq!(expr.to_string(), "a + ~b");
}

// ========== Parse Errors ==========

#[test]
fn test_parse_error_reports_position() {
    let err = BoolExpr::parse("a * * b").unwrap_err();
    match err {
        ParseBoolExprError::Parse(ExpressionParseError::InvalidSyntax { position, .. }) => {
            assert_eq!(position, Some(4));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_parse_error_unexpected_end() {
    let err = BoolExpr::parse("(a or b").unwrap_err();
    assert!(matches!(
        err,
        ParseBoolExprError::Parse(ExpressionParseError::UnexpectedEnd { .. })
    ));
}

#[test]
fn test_parse_error_invalid_token() {
    let err = BoolExpr::parse("a $ b").unwrap_err();
    match err {
        ParseBoolExprError::Parse(ExpressionParseError::InvalidSyntax { position, .. }) => {
            assert_eq!(position, Some(2));
        }
        other => panic!("unexpected error: {:?}", other),
    }
}

#[test]
fn test_empty_input_is_an_error() {
    assert!(BoolExpr::parse("").is_err());
    assert!(BoolExpr::parse("   ").is_err());
}
