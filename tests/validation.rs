use evalyard::{Expression, ExpressionBuilder};

fn parse(src: &str) -> Expression {
    Expression::new(src).unwrap_or_else(|e| panic!("Failed to parse '{src}': {e}"))
}

#[test]
fn well_formed_expressions_are_valid() {
    assert!(parse("1 + 2").is_valid(None));
    assert!(parse("sin(x) * 3!").is_valid(None));
    assert!(parse("pow(2, 3)").is_valid(None));
    assert!(parse("-x").is_valid(None));
}

#[test]
fn dangling_operator_is_invalid() {
    let expression = parse("1 +");
    let mut errors = Vec::new();
    assert!(!expression.is_valid(Some(&mut errors)));
    assert_eq!(errors, vec!["Too many operators".to_string()]);
}

#[test]
fn missing_function_arguments_are_reported() {
    let expression = parse("sin()");
    let mut errors = Vec::new();
    assert!(!expression.is_valid(Some(&mut errors)));
    assert!(errors.contains(&"Not enough arguments for 'sin'".to_string()));
}

#[test]
fn leftover_operands_are_reported() {
    let expression = ExpressionBuilder::new("1 2").implicit_multiplication(false)
                                                  .build()
                                                  .unwrap();
    let mut errors = Vec::new();
    assert!(!expression.is_valid(Some(&mut errors)));
    assert_eq!(errors, vec!["Too many operands".to_string()]);
}

#[test]
fn validity_does_not_require_bindings() {
    // Validation is purely structural; unbound variables are a completeness
    // concern.
    assert!(parse("x + y").is_valid(None));
}

#[test]
fn completeness_tracks_the_binding_map() {
    let mut expression = parse("x + 1");
    assert!(!expression.is_complete(None));

    expression.set_variable("x", 2).unwrap();
    assert!(expression.is_complete(None));
}

#[test]
fn constants_are_always_complete() {
    assert!(parse("pi * e + φ").is_complete(None));
}

#[test]
fn completeness_reports_the_missing_variable() {
    let expression = parse("y * 2");
    let mut errors = Vec::new();
    assert!(!expression.is_complete(Some(&mut errors)));
    assert_eq!(errors, vec!["The variable 'y' has not been set".to_string()]);
}

#[test]
fn cleared_bindings_make_an_expression_incomplete_again() {
    let mut expression = parse("x + pi");
    expression.set_variable("x", 1).unwrap();
    assert!(expression.is_complete(None));

    expression.clear_variables();
    assert!(!expression.is_complete(None));
}

#[test]
fn combined_check_collects_findings_of_both_passes() {
    let expression = parse("sin() + x");
    let mut errors = Vec::new();
    assert!(!expression.is_valid_and_complete(Some(&mut errors)));

    assert!(errors.contains(&"Not enough arguments for 'sin'".to_string()));
    assert!(errors.contains(&"The variable 'x' has not been set".to_string()));
}

#[test]
fn combined_check_passes_for_a_bound_expression() {
    let mut expression = parse("x^2 + 1");
    expression.set_variable("x", 3).unwrap();
    assert!(expression.is_valid_and_complete(None));
}

#[test]
fn valid_and_complete_expressions_evaluate() {
    // The two checks predict evaluability: passing both means evaluation
    // cannot fail for structural or binding reasons.
    let mut expression = parse("x * sin(y)");
    expression.set_variable("x", 2).unwrap();
    expression.set_variable("y", 0.5).unwrap();

    assert!(expression.is_valid_and_complete(None));
    assert!(expression.evaluate().is_ok());
}
