/// Result type used by the evaluator and the numeric operations.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating a postfix sequence.
pub enum EvalError {
    /// A variable was referenced without a bound value.
    UnsetVariable {
        /// The name of the variable.
        name: String,
    },
    /// Too few operands were on the stack for an operator.
    NotEnoughOperands {
        /// The operator symbol.
        symbol: String,
    },
    /// Too few values were on the stack for a function call.
    NotEnoughArguments {
        /// The function name.
        name: String,
    },
    /// The stack did not hold exactly one value after the full sequence.
    InvalidOutputCount,
    /// Attempted division or modulo by exact zero.
    DivisionByZero,
    /// A built-in function was evaluated outside its domain.
    Domain {
        /// The name of the function.
        function: String,
    },
    /// Integer arithmetic overflowed.
    Overflow,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnsetVariable { name } => {
                write!(f, "No value has been set for the variable '{name}'.")
            },

            Self::NotEnoughOperands { symbol } => {
                write!(f, "Invalid number of operands available for the '{symbol}' operator.")
            },

            Self::NotEnoughArguments { name } => {
                write!(f, "Invalid number of arguments available for the '{name}' function.")
            },

            Self::InvalidOutputCount => write!(f,
                                               "Invalid number of items on the output queue. Might be caused by an invalid number of arguments for a function."),

            Self::DivisionByZero => write!(f, "Division by zero."),

            Self::Domain { function } => {
                write!(f, "Division by zero in {function}.")
            },

            Self::Overflow => write!(f, "Integer overflow while trying to compute the result."),
        }
    }
}

impl std::error::Error for EvalError {}
