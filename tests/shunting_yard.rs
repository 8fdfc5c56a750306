use std::collections::{HashMap, HashSet};

use evalyard::{
    Number,
    error::ParseError,
    shunting_yard::convert_to_rpn,
    token::Token,
};

fn to_rpn(src: &str) -> Result<Vec<Token>, ParseError> {
    convert_to_rpn(src, &HashMap::new(), &HashMap::new(), &HashSet::new(), true)
}

fn describe(tokens: &[Token]) -> String {
    tokens.iter()
          .map(|token| match token {
              Token::Number(n) => n.to_string(),
              Token::Variable(name) => name.clone(),
              Token::Operator(op) => op.symbol().to_string(),
              Token::Function(f) => f.name().to_string(),
              Token::OpenParen => "(".to_string(),
              Token::CloseParen => ")".to_string(),
              Token::Separator => ",".to_string(),
          })
          .collect::<Vec<_>>()
          .join(" ")
}

#[test]
fn operator_precedence_orders_the_output() {
    assert_eq!(describe(&to_rpn("1+2*3").unwrap()), "1 2 3 * +");
    assert_eq!(describe(&to_rpn("1*2+3").unwrap()), "1 2 * 3 +");
    assert_eq!(describe(&to_rpn("(1+2)*3").unwrap()), "1 2 + 3 *");
}

#[test]
fn left_associative_operators_group_left() {
    assert_eq!(describe(&to_rpn("1-2-3").unwrap()), "1 2 - 3 -");
    assert_eq!(describe(&to_rpn("8/4/2").unwrap()), "8 4 / 2 /");
}

#[test]
fn power_groups_right() {
    assert_eq!(describe(&to_rpn("2^3^2").unwrap()), "2 3 2 ^ ^");
}

#[test]
fn unary_minus_does_not_steal_binary_operands() {
    assert_eq!(describe(&to_rpn("-3^2").unwrap()), "3 2 ^ -");
    assert_eq!(describe(&to_rpn("2^-3").unwrap()), "2 3 - ^");
}

#[test]
fn functions_follow_their_argument_lists() {
    assert_eq!(describe(&to_rpn("sin(1)").unwrap()), "1 sin");
    assert_eq!(describe(&to_rpn("pow(2,3)").unwrap()), "2 3 pow");
    assert_eq!(describe(&to_rpn("sin(cos(x))").unwrap()), "x cos sin");
    assert_eq!(describe(&to_rpn("1 + sin(x) * 2").unwrap()), "1 x sin 2 * +");
}

#[test]
fn postfix_factorial_stays_adjacent_to_its_operand() {
    assert_eq!(describe(&to_rpn("3!").unwrap()), "3 !");
    assert_eq!(describe(&to_rpn("4 + 3!").unwrap()), "4 3 ! +");
    assert_eq!(describe(&to_rpn("2!*3").unwrap()), "2 ! 3 *");
}

#[test]
fn postfix_operator_without_an_operand_is_rejected() {
    assert!(matches!(to_rpn("!3").unwrap_err(),
                     ParseError::MisplacedPostfixOperator { ref symbol } if symbol == "!"));
}

#[test]
fn no_parentheses_or_separators_survive_conversion() {
    let tokens = to_rpn("pow((1+2), {3})").unwrap();
    assert!(tokens.iter().all(|token| {
        !matches!(token, Token::OpenParen | Token::CloseParen | Token::Separator)
    }));
}

#[test]
fn implicit_multiplication_participates_normally() {
    assert_eq!(describe(&to_rpn("2x+1").unwrap()), "2 x * 1 +");
}

#[test]
fn number_tokens_keep_their_kind() {
    let tokens = to_rpn("6/4").unwrap();
    assert!(matches!(tokens[0], Token::Number(Number::Integer(6))));
    assert!(matches!(tokens[1], Token::Number(Number::Integer(4))));
}

#[test]
fn mismatched_parentheses() {
    assert!(matches!(to_rpn("(1+2").unwrap_err(), ParseError::MismatchedParentheses));
    assert!(matches!(to_rpn("1+2)").unwrap_err(), ParseError::MismatchedParentheses));
    assert!(matches!(to_rpn("sin(1").unwrap_err(), ParseError::MismatchedParentheses));
}

#[test]
fn misplaced_separator() {
    assert!(matches!(to_rpn("1,2").unwrap_err(), ParseError::MisplacedSeparator));
}
