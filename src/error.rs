/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing source text or
/// converting it to postfix order. Parse errors cover unknown characters,
/// unresolved operator runs, unknown identifiers, misplaced argument
/// separators and mismatched parentheses. Any of them aborts construction of
/// an expression.
pub mod parse_error;
/// Naming errors.
///
/// Contains the error types raised when a function or operator definition
/// violates the name grammar, or when a variable name collides with an
/// existing function name.
pub mod name_error;
/// Evaluation errors.
///
/// Contains all error types that can be raised while executing a postfix
/// token sequence: unbound variables, operand-count mismatches, division by
/// zero, domain violations and integer overflow. A failed evaluation leaves
/// the expression and its bindings usable.
pub mod eval_error;

pub use eval_error::{EvalError, EvalResult};
pub use name_error::NameError;
pub use parse_error::ParseError;
