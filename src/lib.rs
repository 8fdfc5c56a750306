//! # evalyard
//!
//! evalyard is a mathematical expression engine written in Rust.
//! It tokenizes infix expressions, converts them into postfix order with the
//! shunting-yard algorithm, and evaluates them with support for variables,
//! user-defined functions and operators, and implicit multiplication.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Provides unified error types for parsing, naming and evaluation.
///
/// This module defines all errors that can be raised while tokenizing an
/// expression, registering names, or evaluating a postfix sequence. It
/// standardizes error reporting and carries detailed information about
/// failures, including offending symbols and source positions.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (parse, name, evaluation).
/// - Attaches positions and detailed messages for context.
/// - Supports integration with standard error handling traits and reporting
///   utilities.
pub mod error;
/// Ties tokenization, conversion and evaluation into a reusable expression.
///
/// This module provides the public entry points of the engine: the
/// [`Expression`] type holding a compiled postfix sequence plus variable
/// bindings, and the [`ExpressionBuilder`] for attaching user functions,
/// user operators and variable declarations before compilation.
///
/// # Responsibilities
/// - Compiles source text once and evaluates it repeatedly.
/// - Manages variable bindings, including the built-in numeric constants.
/// - Offers structural validation and completeness checks without
///   evaluating.
///
/// [`Expression`]: expression::Expression
/// [`ExpressionBuilder`]: expression::ExpressionBuilder
pub mod expression;
/// Defines functions callable from expressions.
///
/// This module provides the [`Function`] type pairing a validated name with a
/// fixed arity and a callable, plus the table of built-in functions covering
/// trigonometry, logarithms, rounding and related numerics.
///
/// # Responsibilities
/// - Validates function names and arities at registration time.
/// - Hosts the built-in function table behind lazy initialization.
/// - Checks argument counts before invoking a callable.
///
/// [`Function`]: function::Function
pub mod function;
/// Defines the numeric tower of the engine.
///
/// This module declares the [`Number`] value type, a tagged union of `i64`
/// and `f64` with automatic promotion: an operation stays in integer space
/// while both operands are integers and moves to floating point as soon as
/// one operand is real.
///
/// # Responsibilities
/// - Implements checked integer arithmetic that reports overflow.
/// - Rejects division and remainder by exact zero.
/// - Provides conversions from primitive numeric types.
///
/// [`Number`]: number::Number
pub mod number;
/// Defines operators usable in expressions.
///
/// This module provides the [`Operator`] type with its symbol, arity,
/// associativity, precedence and callable, the built-in arithmetic operator
/// set, and the restricted alphabet user operator symbols are drawn from.
///
/// # Responsibilities
/// - Validates operator symbols and arity/callable combinations.
/// - Hosts the built-in operators behind lazy initialization.
/// - Exposes the precedence levels shared by the conversion step.
///
/// [`Operator`]: operator::Operator
pub mod operator;
/// Converts infix token streams into postfix order.
///
/// This module implements the shunting-yard algorithm over the tokenizer's
/// output, producing the flat postfix sequence the evaluator consumes.
///
/// # Responsibilities
/// - Orders operators by precedence and associativity.
/// - Resolves parentheses, argument separators and pending function tokens.
/// - Detects mismatched parentheses and misplaced separators.
pub mod shunting_yard;
/// Defines the token alphabet shared by all phases.
pub mod token;
/// Splits source text into tokens.
///
/// This module implements the context-sensitive scanner: numeric literals
/// with exponents, greedy operator runs with backtracking, longest-match
/// identifiers, and the insertion of implicit multiplication.
///
/// # Responsibilities
/// - Produces one token per call, tracking the previous token for context.
/// - Disambiguates unary versus binary `+` and `-`.
/// - Resolves identifiers against variable and function tables.
pub mod tokenizer;

pub use crate::{
    expression::{Expression, ExpressionBuilder},
    function::Function,
    number::Number,
    operator::Operator,
};

/// Evaluates a self-contained expression in one call.
///
/// This is a convenience wrapper for expressions without variables or custom
/// declarations: it compiles the source text and evaluates it immediately.
/// The numeric constants are available as usual.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use evalyard::{Number, eval};
///
/// assert_eq!(eval("3 + 4 * 2").unwrap(), Number::Integer(11));
/// assert!(eval("1 / 0").is_err());
/// ```
pub fn eval(source: &str) -> Result<Number, Box<dyn std::error::Error>> {
    let expression = Expression::new(source)?;
    Ok(expression.evaluate()?)
}
