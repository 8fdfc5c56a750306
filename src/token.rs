use std::sync::Arc;

use crate::{function::Function, number::Number, operator::Operator};

/// Represents a minimal meaningful unit of an expression.
///
/// Tokens are produced by the [`Tokenizer`] and rearranged into postfix order
/// by the shunting-yard converter. Once produced, a token is immutable;
/// operator and function tokens share their definitions through [`Arc`], so a
/// postfix sequence can be shared read-only across expression clones.
///
/// [`Tokenizer`]: crate::tokenizer::Tokenizer
#[derive(Debug, Clone)]
pub enum Token {
    /// A numeric literal.
    Number(Number),
    /// A reference to a variable by name.
    Variable(String),
    /// An operator, built-in or user-defined.
    Operator(Arc<Operator>),
    /// A function, built-in or user-defined.
    Function(Arc<Function>),
    /// An opening parenthesis: `(`, `{` or `[`.
    OpenParen,
    /// A closing parenthesis: `)`, `}` or `]`.
    CloseParen,
    /// The argument separator `,`.
    Separator,
}
