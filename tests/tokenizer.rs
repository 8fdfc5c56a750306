use std::collections::{HashMap, HashSet};

use evalyard::{
    Number,
    error::ParseError,
    token::Token,
    tokenizer::Tokenizer,
};

fn tokenize(src: &str) -> Result<Vec<Token>, ParseError> {
    tokenize_with_variables(src, &[])
}

fn tokenize_with_variables(src: &str, variables: &[&str]) -> Result<Vec<Token>, ParseError> {
    let functions = HashMap::new();
    let operators = HashMap::new();
    let variables: HashSet<String> = variables.iter().map(ToString::to_string).collect();
    let mut tokenizer = Tokenizer::new(src, &functions, &operators, &variables, true);

    let mut tokens = Vec::new();
    while let Some(token) = tokenizer.next_token()? {
        tokens.push(token);
    }
    Ok(tokens)
}

#[test]
fn numbers_variables_and_operators() {
    let tokens = tokenize("3 + 4.5 * x").unwrap();
    assert_eq!(tokens.len(), 5);
    assert!(matches!(tokens[0], Token::Number(Number::Integer(3))));
    assert!(matches!(tokens[1], Token::Operator(_)));
    assert!(matches!(tokens[2], Token::Number(Number::Real(_))));
    assert!(matches!(tokens[3], Token::Operator(_)));
    assert!(matches!(&tokens[4], Token::Variable(name) if name == "x"));
}

#[test]
fn integer_literals_stay_integers() {
    let tokens = tokenize("42").unwrap();
    assert!(matches!(tokens[0], Token::Number(Number::Integer(42))));

    let tokens = tokenize("42.0").unwrap();
    assert!(matches!(tokens[0], Token::Number(Number::Real(_))));
}

#[test]
fn scientific_literals() {
    let tokens = tokenize("7.2973525698e-3").unwrap();
    assert_eq!(tokens.len(), 1);
    assert!(matches!(tokens[0], Token::Number(Number::Real(r)) if (r - 0.0072973525698).abs() < 1e-18));

    let tokens = tokenize("1E+2").unwrap();
    assert_eq!(tokens.len(), 1);
    assert!(matches!(tokens[0], Token::Number(Number::Real(r)) if (r - 100.0).abs() < f64::EPSILON));
}

#[test]
fn trailing_exponent_marker_rolls_back() {
    // The `e` is not part of the literal; it tokenizes as the constant with
    // an implicit multiplication in between.
    let tokens = tokenize("2e").unwrap();
    assert_eq!(tokens.len(), 3);
    assert!(matches!(tokens[0], Token::Number(Number::Integer(2))));
    assert!(matches!(&tokens[1], Token::Operator(op) if op.symbol() == "*"));
    assert!(matches!(&tokens[2], Token::Variable(name) if name == "e"));
}

#[test]
fn adjacent_function_names_split_by_longest_match() {
    let tokens = tokenize("sincos(x)").unwrap();
    assert_eq!(tokens.len(), 5);
    assert!(matches!(&tokens[0], Token::Function(f) if f.name() == "sin"));
    assert!(matches!(&tokens[1], Token::Function(f) if f.name() == "cos"));
    assert!(matches!(tokens[2], Token::OpenParen));
    assert!(matches!(&tokens[3], Token::Variable(name) if name == "x"));
    assert!(matches!(tokens[4], Token::CloseParen));
}

#[test]
fn declared_variables_use_longest_match() {
    let tokens = tokenize_with_variables("tt", &["t", "tt"]).unwrap();
    assert_eq!(tokens.len(), 1);
    assert!(matches!(&tokens[0], Token::Variable(name) if name == "tt"));
}

#[test]
fn a_variable_takes_priority_over_a_function_of_the_same_name() {
    let tokens = tokenize_with_variables("sin", &["sin"]).unwrap();
    assert_eq!(tokens.len(), 1);
    assert!(matches!(&tokens[0], Token::Variable(name) if name == "sin"));
}

#[test]
fn implicit_multiplication_does_not_consume_input() {
    let tokens = tokenize("2x").unwrap();
    assert_eq!(tokens.len(), 3);
    assert!(matches!(&tokens[1], Token::Operator(op) if op.symbol() == "*"));

    let tokens = tokenize("(2)(3)").unwrap();
    assert_eq!(tokens.len(), 7);
    assert!(matches!(&tokens[3], Token::Operator(op) if op.symbol() == "*"));
}

#[test]
fn unary_and_binary_minus_are_distinguished() {
    let tokens = tokenize("-3-2").unwrap();
    assert_eq!(tokens.len(), 4);
    assert!(matches!(&tokens[0], Token::Operator(op) if op.arity() == 1));
    assert!(matches!(&tokens[2], Token::Operator(op) if op.arity() == 2));

    let tokens = tokenize("2^-3").unwrap();
    assert!(matches!(&tokens[2], Token::Operator(op) if op.arity() == 1));

    let tokens = tokenize("sin(-1)").unwrap();
    assert!(matches!(&tokens[2], Token::Operator(op) if op.arity() == 1));
}

#[test]
fn division_alias() {
    let tokens = tokenize("6÷4").unwrap();
    assert!(matches!(&tokens[1], Token::Operator(op) if op.symbol() == "/"));
}

#[test]
fn separator_and_brackets() {
    let tokens = tokenize("pow(2, 3)").unwrap();
    assert_eq!(tokens.len(), 6);
    assert!(matches!(tokens[3], Token::Separator));

    let tokens = tokenize("{[()]}").unwrap();
    assert_eq!(tokens.len(), 6);
}

#[test]
fn unknown_character() {
    let err = tokenize("2 @ 2").unwrap_err();
    assert!(matches!(err, ParseError::UnknownCharacter { character: '@', position: 2, .. }));
}

#[test]
fn unknown_operator_reports_the_whole_run() {
    let err = tokenize("1 ; 2").unwrap_err();
    assert!(matches!(err, ParseError::UnknownOperator { ref symbol, .. } if symbol == ";"));
}

#[test]
fn unknown_identifier() {
    let err = tokenize("beta(1)").unwrap_err();
    assert!(matches!(err, ParseError::UnknownIdentifier { ref token, .. } if token == "beta"));
}

#[test]
fn malformed_numbers() {
    assert!(matches!(tokenize("1 + .").unwrap_err(), ParseError::InvalidNumber { .. }));
    assert!(matches!(tokenize("1e+").unwrap_err(), ParseError::InvalidNumber { .. }));
}
