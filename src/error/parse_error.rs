#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while turning source text into a
/// postfix token sequence.
pub enum ParseError {
    /// Found a character that cannot start any token.
    UnknownCharacter {
        /// The offending character.
        character: char,
        /// The Unicode code point of the character.
        code:      u32,
        /// The character position in the expression.
        position:  usize,
    },
    /// An operator symbol run matched no registered operator, even after
    /// backtracking one character at a time.
    UnknownOperator {
        /// The symbol run that could not be resolved.
        symbol:   String,
        /// The character position where the run starts.
        position: usize,
    },
    /// An identifier matched no declared variable and no known function.
    UnknownIdentifier {
        /// The offending substring.
        token:    String,
        /// The character position where the scan started.
        position: usize,
        /// The length of the scanned substring.
        length:   usize,
    },
    /// A numeric literal could not be parsed as an integer or a real.
    InvalidNumber {
        /// The literal text.
        literal:  String,
        /// The character position where the literal starts.
        position: usize,
    },
    /// An argument separator appeared outside a parenthesized argument list.
    MisplacedSeparator,
    /// A postfix operator appeared with no operand before it.
    MisplacedPostfixOperator {
        /// The operator symbol.
        symbol: String,
    },
    /// An open or close parenthesis was left without its counterpart.
    MismatchedParentheses,
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCharacter { character, code, position } => {
                write!(f, "Unable to parse character '{character}' (code {code}) at position {position}.")
            },

            Self::UnknownOperator { symbol, position } => {
                write!(f, "Unknown operator '{symbol}' at position {position}.")
            },

            Self::UnknownIdentifier { token, position, length } => {
                write!(f,
                       "Unknown function or variable '{token}' at position {position} (length {length}).")
            },

            Self::InvalidNumber { literal, position } => {
                write!(f, "Invalid number literal '{literal}' at position {position}.")
            },

            Self::MisplacedSeparator => {
                write!(f, "Misplaced function separator ',' or mismatched parentheses.")
            },

            Self::MisplacedPostfixOperator { symbol } => {
                write!(f, "Postfix operator '{symbol}' has no operand before it.")
            },

            Self::MismatchedParentheses => {
                write!(f, "Mismatched parentheses detected. Please check the expression.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
