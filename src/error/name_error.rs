#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors caused by an invalid or conflicting name.
pub enum NameError {
    /// A function name violated the name grammar. Names start with a letter
    /// or `_` and continue with letters, digits or `_`; they are never empty.
    InvalidFunctionName {
        /// The rejected name.
        name: String,
    },
    /// An operator symbol was empty or used a character outside the allowed
    /// operator alphabet.
    InvalidOperatorSymbol {
        /// The rejected symbol.
        symbol: String,
    },
    /// A function was declared with more parameters than the engine supports.
    UnsupportedArity {
        /// The function name.
        name:  String,
        /// The declared arity.
        arity: usize,
    },
    /// An operator's declared arity does not match its callable.
    ArityMismatch {
        /// The operator symbol.
        symbol: String,
        /// The declared arity.
        arity:  usize,
    },
    /// A variable was set with the same name as an existing function.
    FunctionNameCollision {
        /// The conflicting name.
        name: String,
    },
}

impl std::fmt::Display for NameError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidFunctionName { name } => {
                write!(f, "The function name '{name}' is invalid.")
            },

            Self::InvalidOperatorSymbol { symbol } => {
                write!(f, "The operator symbol '{symbol}' contains characters outside the allowed alphabet.")
            },

            Self::UnsupportedArity { name, arity } => {
                write!(f, "The function '{name}' declares {arity} parameters, but at most 9 are supported.")
            },

            Self::ArityMismatch { symbol, arity } => {
                write!(f, "The operator '{symbol}' declares arity {arity}, which does not match its callable.")
            },

            Self::FunctionNameCollision { name } => {
                write!(f,
                       "The variable name '{name}' is invalid. A function with the same name exists.")
            },
        }
    }
}

impl std::error::Error for NameError {}
