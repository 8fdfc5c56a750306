use std::sync::{Arc, LazyLock};

use crate::{
    error::{EvalResult, NameError},
    number::Number,
};

/// The fixed alphabet of characters an operator symbol may use.
///
/// Only `+ - * / ÷ % ^ !` carry built-in semantics; the remaining characters
/// are reserved for user-defined operators.
pub const ALLOWED_SYMBOL_CHARS: &[char] = &['+', '-', '*', '/', '%', '^', '!', '#', '§', '$', '&',
                                            ';', ':', '~', '<', '>', '|', '=', '÷', '√', '∛', '⌈',
                                            '⌊'];

/// Precedence values of the built-in operators. Higher binds tighter.
///
/// User operators may pick any integer, including values between or outside
/// these levels.
pub mod precedence {
    /// Postfix factorial.
    pub const FACTORIAL: i32 = 4;
    /// Exponentiation (right-associative).
    pub const POWER: i32 = 3;
    /// Roots, for user operators such as `√`.
    pub const SQRT: i32 = 3;
    /// Unary prefix minus.
    pub const UNARY_MINUS: i32 = 2;
    /// Unary prefix plus.
    pub const UNARY_PLUS: i32 = 2;
    /// Multiplication.
    pub const MULTIPLICATION: i32 = 1;
    /// Division.
    pub const DIVISION: i32 = 1;
    /// Modulo.
    pub const MODULO: i32 = 1;
    /// Addition.
    pub const ADDITION: i32 = 0;
    /// Subtraction.
    pub const SUBTRACTION: i32 = 0;
}

/// The evaluation callable of an operator, tagged by operand count.
///
/// Unary callables serve both prefix operators of arity 1 and postfix
/// operators modeled with arity 0.
#[derive(Clone)]
pub enum OperatorFn {
    /// A callable consuming a single operand.
    Unary(Arc<dyn Fn(Number) -> EvalResult<Number> + Send + Sync>),
    /// A callable consuming two operands, left operand first.
    Binary(Arc<dyn Fn(Number, Number) -> EvalResult<Number> + Send + Sync>),
}

/// Represents an operator that can be used in an expression.
///
/// An operator couples a symbol from the allowed alphabet with its arity,
/// associativity, precedence and evaluation callable. Postfix operators such
/// as factorial are modeled with arity 0 plus the postfix flag and a unary
/// callable.
#[derive(Clone)]
pub struct Operator {
    symbol:              String,
    arity:               usize,
    is_left_associative: bool,
    precedence:          i32,
    postfix:             bool,
    func:                OperatorFn,
}

impl Operator {
    /// Creates a new operator for use in expressions.
    ///
    /// # Errors
    /// Returns [`NameError::InvalidOperatorSymbol`] if the symbol is empty or
    /// uses a character outside [`ALLOWED_SYMBOL_CHARS`], and
    /// [`NameError::ArityMismatch`] if the declared arity does not fit the
    /// callable (binary callables require arity 2; unary callables require
    /// arity 1, or arity 0 with the postfix flag).
    ///
    /// # Example
    /// ```
    /// use evalyard::{
    ///     number::Number,
    ///     operator::{Operator, precedence},
    /// };
    ///
    /// let gteq = Operator::binary(">=", true, precedence::ADDITION - 1, |a, b| {
    ///     Ok(Number::Integer(i64::from(a.as_f64() >= b.as_f64())))
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(gteq.symbol(), ">=");
    /// assert_eq!(gteq.arity(), 2);
    /// ```
    pub fn new(symbol: &str,
               arity: usize,
               is_left_associative: bool,
               precedence: i32,
               postfix: bool,
               func: OperatorFn)
               -> Result<Self, NameError> {
        if symbol.is_empty() || !symbol.chars().all(|c| ALLOWED_SYMBOL_CHARS.contains(&c)) {
            return Err(NameError::InvalidOperatorSymbol { symbol: symbol.to_string() });
        }

        let arity_fits = match func {
            OperatorFn::Unary(_) => arity == 1 || (arity == 0 && postfix),
            OperatorFn::Binary(_) => arity == 2,
        };
        if !arity_fits {
            return Err(NameError::ArityMismatch { symbol: symbol.to_string(),
                                                  arity });
        }

        Ok(Self { symbol: symbol.to_string(),
                  arity,
                  is_left_associative,
                  precedence,
                  postfix,
                  func })
    }

    /// Creates a binary infix operator.
    pub fn binary<F>(symbol: &str,
                     is_left_associative: bool,
                     precedence: i32,
                     func: F)
                     -> Result<Self, NameError>
        where F: Fn(Number, Number) -> EvalResult<Number> + Send + Sync + 'static
    {
        Self::new(symbol,
                  2,
                  is_left_associative,
                  precedence,
                  false,
                  OperatorFn::Binary(Arc::new(func)))
    }

    /// Creates a unary prefix operator.
    pub fn unary<F>(symbol: &str, precedence: i32, func: F) -> Result<Self, NameError>
        where F: Fn(Number) -> EvalResult<Number> + Send + Sync + 'static
    {
        Self::new(symbol, 1, false, precedence, false, OperatorFn::Unary(Arc::new(func)))
    }

    /// Creates a unary postfix operator, modeled with arity 0 plus the
    /// postfix flag.
    pub fn postfix<F>(symbol: &str, precedence: i32, func: F) -> Result<Self, NameError>
        where F: Fn(Number) -> EvalResult<Number> + Send + Sync + 'static
    {
        Self::new(symbol, 0, true, precedence, true, OperatorFn::Unary(Arc::new(func)))
    }

    /// The operator symbol.
    #[must_use]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// The number of operands the operator consumes on the stack. Postfix
    /// operators report 0 but still consume one operand.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Whether repeated application groups left-to-right.
    #[must_use]
    pub const fn is_left_associative(&self) -> bool {
        self.is_left_associative
    }

    /// The precedence value. Higher binds tighter.
    #[must_use]
    pub const fn precedence(&self) -> i32 {
        self.precedence
    }

    /// Whether the operator is written after its operand.
    #[must_use]
    pub const fn is_postfix(&self) -> bool {
        self.postfix
    }

    /// The evaluation callable.
    #[must_use]
    pub const fn func(&self) -> &OperatorFn {
        &self.func
    }
}

impl std::fmt::Debug for Operator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Operator")
         .field("symbol", &self.symbol)
         .field("arity", &self.arity)
         .field("is_left_associative", &self.is_left_associative)
         .field("precedence", &self.precedence)
         .field("postfix", &self.postfix)
         .finish_non_exhaustive()
    }
}

fn binary_builtin<F>(symbol: &str, is_left_associative: bool, precedence: i32, func: F)
                     -> Arc<Operator>
    where F: Fn(Number, Number) -> EvalResult<Number> + Send + Sync + 'static
{
    Arc::new(Operator { symbol: symbol.to_string(),
                        arity: 2,
                        is_left_associative,
                        precedence,
                        postfix: false,
                        func: OperatorFn::Binary(Arc::new(func)) })
}

fn unary_builtin<F>(symbol: &str, arity: usize, precedence: i32, postfix: bool, func: F)
                    -> Arc<Operator>
    where F: Fn(Number) -> EvalResult<Number> + Send + Sync + 'static
{
    Arc::new(Operator { symbol: symbol.to_string(),
                        arity,
                        is_left_associative: postfix,
                        precedence,
                        postfix,
                        func: OperatorFn::Unary(Arc::new(func)) })
}

static ADDITION: LazyLock<Arc<Operator>> =
    LazyLock::new(|| binary_builtin("+", true, precedence::ADDITION, Number::add));

static SUBTRACTION: LazyLock<Arc<Operator>> =
    LazyLock::new(|| binary_builtin("-", true, precedence::SUBTRACTION, Number::sub));

static MULTIPLICATION: LazyLock<Arc<Operator>> =
    LazyLock::new(|| binary_builtin("*", true, precedence::MULTIPLICATION, Number::mul));

static DIVISION: LazyLock<Arc<Operator>> =
    LazyLock::new(|| binary_builtin("/", true, precedence::DIVISION, Number::div));

static MODULO: LazyLock<Arc<Operator>> =
    LazyLock::new(|| binary_builtin("%", true, precedence::MODULO, Number::rem));

static POWER: LazyLock<Arc<Operator>> =
    LazyLock::new(|| binary_builtin("^", false, precedence::POWER, Number::pow));

static UNARY_PLUS: LazyLock<Arc<Operator>> =
    LazyLock::new(|| unary_builtin("+", 1, precedence::UNARY_PLUS, false, Ok));

static UNARY_MINUS: LazyLock<Arc<Operator>> =
    LazyLock::new(|| unary_builtin("-", 1, precedence::UNARY_MINUS, false, Number::neg));

static FACTORIAL: LazyLock<Arc<Operator>> =
    LazyLock::new(|| unary_builtin("!", 0, precedence::FACTORIAL, true, Number::factorial));

/// Resolves a built-in single-character operator.
///
/// For `+` and `-` the result depends on the arity hint the tokenizer derives
/// from context: 1 resolves to the unary prefix form, anything else to the
/// binary form. `÷` is an alias of `/`.
#[must_use]
pub fn builtin(symbol: char, arity: usize) -> Option<Arc<Operator>> {
    match symbol {
        '+' => Some(if arity == 1 { UNARY_PLUS.clone() } else { ADDITION.clone() }),
        '-' => Some(if arity == 1 { UNARY_MINUS.clone() } else { SUBTRACTION.clone() }),
        '*' => Some(MULTIPLICATION.clone()),
        '/' | '÷' => Some(DIVISION.clone()),
        '^' => Some(POWER.clone()),
        '%' => Some(MODULO.clone()),
        '!' => Some(FACTORIAL.clone()),
        _ => None,
    }
}

/// The built-in multiplication operator, used by the tokenizer when it
/// inserts an implicit multiplication.
pub(crate) fn multiplication() -> Arc<Operator> {
    MULTIPLICATION.clone()
}
