use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use crate::{
    error::ParseError,
    function::Function,
    operator::Operator,
    token::Token,
    tokenizer::Tokenizer,
};

/// Converts an infix expression into a postfix (reverse Polish) token
/// sequence.
///
/// The converter drives the [`Tokenizer`] and rearranges its output with an
/// explicit operator/parenthesis stack:
///
/// - numbers and variables go straight to the output,
/// - functions wait on the stack until their closing parenthesis,
/// - operators pop stacked operators of higher or equal binding strength
///   first (a unary incoming operator never pops a binary stacked one),
/// - an argument separator pops down to the nearest open parenthesis,
/// - a close parenthesis discards its open parenthesis and materializes a
///   pending function token.
///
/// # Errors
/// Returns a [`ParseError`] for tokenization failures, misplaced argument
/// separators, postfix operators without a preceding operand, and mismatched
/// parentheses.
///
/// # Example
/// ```
/// use std::collections::{HashMap, HashSet};
///
/// use evalyard::{shunting_yard::convert_to_rpn, token::Token};
///
/// let tokens = convert_to_rpn("2+3", &HashMap::new(), &HashMap::new(), &HashSet::new(), true)
///     .unwrap();
///
/// assert_eq!(tokens.len(), 3);
/// assert!(matches!(tokens[2], Token::Operator(_)));
/// ```
pub fn convert_to_rpn(expression: &str,
                      user_functions: &HashMap<String, Arc<Function>>,
                      user_operators: &HashMap<String, Arc<Operator>>,
                      variable_names: &HashSet<String>,
                      implicit_multiplication: bool)
                      -> Result<Vec<Token>, ParseError> {
    let mut tokenizer = Tokenizer::new(expression,
                                       user_functions,
                                       user_operators,
                                       variable_names,
                                       implicit_multiplication);
    let mut stack: Vec<Token> = Vec::new();
    let mut output: Vec<Token> = Vec::new();

    while let Some(token) = tokenizer.next_token()? {
        match token {
            Token::Number(_) | Token::Variable(_) => output.push(token),

            Token::Function(_) | Token::OpenParen => stack.push(token),

            Token::Separator => loop {
                match stack.last() {
                    Some(Token::OpenParen) => break,
                    Some(_) => {
                        if let Some(popped) = stack.pop() {
                            output.push(popped);
                        }
                    },
                    None => return Err(ParseError::MisplacedSeparator),
                }
            },

            Token::Operator(ref op) => {
                if op.arity() == 0 && op.is_postfix() && output.is_empty() {
                    return Err(ParseError::MisplacedPostfixOperator { symbol:
                                                                          op.symbol().to_string() });
                }
                loop {
                    let pop = match stack.last() {
                        Some(Token::Operator(stacked)) => {
                            if op.arity() == 1 && stacked.arity() == 2 {
                                // Never pop a binary operator to satisfy a
                                // unary one.
                                false
                            } else {
                                (op.is_left_associative()
                                 && op.precedence() <= stacked.precedence())
                                || op.precedence() < stacked.precedence()
                            }
                        },
                        _ => false,
                    };
                    if !pop {
                        break;
                    }
                    if let Some(popped) = stack.pop() {
                        output.push(popped);
                    }
                }
                stack.push(token);
            },

            Token::CloseParen => {
                loop {
                    match stack.pop() {
                        Some(Token::OpenParen) => break,
                        Some(popped) => output.push(popped),
                        None => return Err(ParseError::MismatchedParentheses),
                    }
                }
                // A function directly below the open parenthesis belongs to
                // the argument list that just closed.
                if let Some(Token::Function(_)) = stack.last()
                    && let Some(func) = stack.pop()
                {
                    output.push(func);
                }
            },
        }
    }

    while let Some(token) = stack.pop() {
        if matches!(token, Token::OpenParen | Token::CloseParen) {
            return Err(ParseError::MismatchedParentheses);
        }
        output.push(token);
    }

    Ok(output)
}
