//! Resolver tests: literal rules, the single binary operation, variable
//! lookup with its one-level depth limit, and rejected shapes.

use miru_resolve::{resolve, resolve_literal, ResolveError, Resolver};
use miru_types::Value;

// ─────────────────────────────────────────────────────────────────────
// Helpers
// ─────────────────────────────────────────────────────────────────────

/// Resolve without any surrounding text.
fn lit(expr: &str) -> Result<Value, ResolveError> {
    resolve(expr, "")
}

fn assert_unsupported(expr: &str) {
    match lit(expr) {
        Err(ResolveError::Unsupported(_)) => {}
        other => panic!("expected `{expr}` to be unsupported, got {other:?}"),
    }
}

// ─────────────────────────────────────────────────────────────────────
// Integer literals
// ─────────────────────────────────────────────────────────────────────

#[test]
fn integer_literal() {
    assert_eq!(lit("42"), Ok(Value::Int(42)));
    assert_eq!(lit("0"), Ok(Value::Int(0)));
}

#[test]
fn negated_integer_literal() {
    assert_eq!(lit("-7"), Ok(Value::Int(-7)));
}

#[test]
fn integer_literal_with_whitespace() {
    assert_eq!(lit("  12 \n"), Ok(Value::Int(12)));
}

#[test]
fn integer_literal_leading_zeros() {
    assert_eq!(lit("007"), Ok(Value::Int(7)));
}

#[test]
fn integer_literal_out_of_range() {
    assert!(matches!(
        lit("99999999999999999999"),
        Err(ResolveError::IntegerOutOfRange(_))
    ));
}

#[test]
fn double_negation_rejected() {
    assert_unsupported("--5");
}

#[test]
fn explicit_plus_sign_rejected() {
    assert_unsupported("+5");
}

// ─────────────────────────────────────────────────────────────────────
// Float literals
// ─────────────────────────────────────────────────────────────────────

#[test]
fn float_literal() {
    assert_eq!(lit("3.500000"), Ok(Value::Float(3.5)));
    assert_eq!(lit("0.25"), Ok(Value::Float(0.25)));
}

#[test]
fn float_literal_prints_canonically() {
    assert_eq!(lit("2.000000").unwrap().to_string(), "2");
    assert_eq!(lit("1.250000").unwrap().to_string(), "1.25");
}

#[test]
fn float_shapes_rejected() {
    assert_unsupported("3.");
    assert_unsupported(".5");
    assert_unsupported("-2.5");
    assert_unsupported("1e5");
    assert_unsupported("1.2.3");
}

// ─────────────────────────────────────────────────────────────────────
// Binary operations
// ─────────────────────────────────────────────────────────────────────

#[test]
fn addition() {
    assert_eq!(lit("2 + 3"), Ok(Value::Int(5)));
}

#[test]
fn subtraction_may_go_negative() {
    assert_eq!(lit("3 - 10"), Ok(Value::Int(-7)));
}

#[test]
fn multiplication_without_spaces() {
    assert_eq!(lit("6*7"), Ok(Value::Int(42)));
}

#[test]
fn division_floors() {
    assert_eq!(lit("7 / 2"), Ok(Value::Int(3)));
    assert_eq!(lit("2 / 3"), Ok(Value::Int(0)));
}

#[test]
fn remainder() {
    assert_eq!(lit("10 % 4"), Ok(Value::Int(2)));
}

#[test]
fn division_by_zero_unresolvable() {
    assert!(matches!(lit("1 / 0"), Err(ResolveError::DivisionByZero(_))));
    assert!(matches!(lit("1 % 0"), Err(ResolveError::DivisionByZero(_))));
}

#[test]
fn multiplication_overflow_unresolvable() {
    assert!(matches!(
        lit("9223372036854775807 * 2"),
        Err(ResolveError::Overflow(_))
    ));
}

#[test]
fn negative_left_operand_rejected() {
    assert_unsupported("-1 * 4");
}

#[test]
fn negative_right_operand_rejected() {
    assert_unsupported("4 - -1");
}

#[test]
fn multi_operator_rejected() {
    assert_unsupported("1 + 2 + 3");
    assert_unsupported("2 * 3 - 1");
}

#[test]
fn parenthesized_rejected() {
    assert_unsupported("(2 + 3)");
    assert_unsupported("(2 + 3");
}

#[test]
fn float_operands_rejected() {
    assert_unsupported("1.5 + 2");
}

#[test]
fn other_expressions_rejected() {
    assert_unsupported("add(1, 2");
    assert_unsupported("\"text\"");
    assert_unsupported("x + 1");
}

#[test]
fn empty_expression() {
    assert_eq!(lit(""), Err(ResolveError::Empty));
    assert_eq!(lit("   "), Err(ResolveError::Empty));
}

// ─────────────────────────────────────────────────────────────────────
// Variable lookup
// ─────────────────────────────────────────────────────────────────────

#[test]
fn variable_with_literal_initializer() {
    let text = "int main(void) {\n    int x = 42;\n    printf(\"%d\\n\", x);\n}";
    assert_eq!(resolve("x", text), Ok(Value::Int(42)));
}

#[test]
fn variable_with_negative_initializer() {
    assert_eq!(resolve("n", "int n = -3;"), Ok(Value::Int(-3)));
}

#[test]
fn variable_with_binary_initializer() {
    assert_eq!(resolve("total", "int total = 10 / 4;"), Ok(Value::Int(2)));
}

#[test]
fn variable_declared_after_use_still_found() {
    let text = "printf(\"%d\\n\", late);\nint late = 8;";
    assert_eq!(resolve("late", text), Ok(Value::Int(8)));
}

#[test]
fn unknown_variable() {
    assert_eq!(
        resolve("missing", "int x = 1;"),
        Err(ResolveError::UnboundVariable("missing".into()))
    );
}

#[test]
fn variable_chain_not_followed() {
    let text = "int a = 5;\nint b = a;";
    assert_eq!(resolve("a", text), Ok(Value::Int(5)));
    assert!(resolve("b", text).is_err());
}

#[test]
fn variable_with_multi_operator_initializer() {
    let err = resolve("y", "int y = 1 + 2 + 3;").unwrap_err();
    assert_eq!(
        err,
        ResolveError::NonLiteralInitializer {
            name: "y".into(),
            initializer: "1 + 2 + 3".into(),
        }
    );
}

#[test]
fn variable_initializer_division_by_zero_keeps_reason() {
    assert!(matches!(
        resolve("z", "int z = 4 / 0;"),
        Err(ResolveError::DivisionByZero(_))
    ));
}

#[test]
fn float_variable_unresolvable() {
    assert!(resolve("r", "double r = 2.5;").is_err());
}

#[test]
fn resolver_value_reused_across_expressions() {
    let text = "int a = 1;\nint b = 2 * 3;";
    let resolver = Resolver::new(text);
    assert_eq!(resolver.resolve("a"), Ok(Value::Int(1)));
    assert_eq!(resolver.resolve("b"), Ok(Value::Int(6)));
    assert_eq!(resolver.resolve("4"), Ok(Value::Int(4)));
}

#[test]
fn literal_rules_never_look_up_variables() {
    assert!(matches!(
        resolve_literal("x"),
        Err(ResolveError::Unsupported(_))
    ));
}

// ─────────────────────────────────────────────────────────────────────
// Determinism
// ─────────────────────────────────────────────────────────────────────

#[test]
fn resolution_determinism_100_iterations() {
    let text = "int q = 17 % 5;";
    let first = resolve("q", text);
    for i in 0..100 {
        assert_eq!(first, resolve("q", text), "Determinism failure at iteration {i}");
    }
}
