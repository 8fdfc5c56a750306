use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use crate::{
    error::ParseError,
    expression::{CONSTANT_NAMES, DEFAULT_VARIABLE_NAMES},
    function::{self, Function},
    number::Number,
    operator::{self, ALLOWED_SYMBOL_CHARS, Operator},
    token::Token,
};

/// Splits source text into a lazy sequence of [`Token`]s.
///
/// The tokenizer is a single-pass, non-restartable scanner. It consults the
/// user function and operator tables and the declared variable names to
/// disambiguate input, and it remembers the previously produced token to
/// decide whether `+`/`-` are unary or binary and whether an implicit
/// multiplication has to be inserted.
///
/// # Example
/// ```
/// use std::collections::{HashMap, HashSet};
///
/// use evalyard::{token::Token, tokenizer::Tokenizer};
///
/// let functions = HashMap::new();
/// let operators = HashMap::new();
/// let variables = HashSet::new();
/// let mut tokenizer = Tokenizer::new("sin(x)", &functions, &operators, &variables, true);
///
/// assert!(matches!(tokenizer.next_token().unwrap(), Some(Token::Function(_))));
/// assert!(matches!(tokenizer.next_token().unwrap(), Some(Token::OpenParen)));
/// ```
pub struct Tokenizer<'a> {
    chars: Vec<char>,
    pos: usize,
    last_token: Option<Token>,
    user_functions: &'a HashMap<String, Arc<Function>>,
    user_operators: &'a HashMap<String, Arc<Operator>>,
    variable_names: &'a HashSet<String>,
    implicit_multiplication: bool,
}

impl<'a> Tokenizer<'a> {
    /// Creates a tokenizer over the given source text.
    #[must_use]
    pub fn new(expression: &str,
               user_functions: &'a HashMap<String, Arc<Function>>,
               user_operators: &'a HashMap<String, Arc<Operator>>,
               variable_names: &'a HashSet<String>,
               implicit_multiplication: bool)
               -> Self {
        Self { chars: expression.trim().chars().collect(),
               pos: 0,
               last_token: None,
               user_functions,
               user_operators,
               variable_names,
               implicit_multiplication }
    }

    /// Produces the next token, or `None` once the input is exhausted.
    ///
    /// # Errors
    /// Returns a [`ParseError`] for characters outside every token grammar,
    /// operator runs that match no registered operator, identifiers that
    /// match no declared variable or known function, and malformed numeric
    /// literals.
    pub fn next_token(&mut self) -> Result<Option<Token>, ParseError> {
        while self.pos < self.chars.len() && self.chars[self.pos].is_whitespace() {
            self.pos += 1;
        }
        if self.pos >= self.chars.len() {
            return Ok(None);
        }

        let ch = self.chars[self.pos];
        let token = if ch.is_ascii_digit() || ch == '.' {
            if self.mult_valid() { self.insert_multiplication() } else { self.parse_number()? }
        } else if ch == ',' {
            self.pos += 1;
            Token::Separator
        } else if matches!(ch, '(' | '{' | '[') {
            if self.mult_valid() {
                self.insert_multiplication()
            } else {
                self.pos += 1;
                Token::OpenParen
            }
        } else if matches!(ch, ')' | '}' | ']') {
            self.pos += 1;
            Token::CloseParen
        } else if ALLOWED_SYMBOL_CHARS.contains(&ch) {
            self.parse_operator()?
        } else if ch.is_alphabetic() || ch == '_' {
            if self.mult_valid() { self.insert_multiplication() } else { self.parse_name()? }
        } else {
            return Err(ParseError::UnknownCharacter { character: ch,
                                                      code: ch as u32,
                                                      position: self.pos });
        };

        self.last_token = Some(token.clone());
        Ok(Some(token))
    }

    /// Whether an implicit multiplication has to be inserted before the token
    /// starting at the current position.
    fn mult_valid(&self) -> bool {
        self.implicit_multiplication
        && matches!(self.last_token,
                    Some(Token::Number(_) | Token::Variable(_) | Token::CloseParen))
    }

    /// Emits a synthetic `*` without advancing the read position; the real
    /// token is produced on the following call.
    fn insert_multiplication(&self) -> Token {
        Token::Operator(operator::multiplication())
    }

    fn parse_number(&mut self) -> Result<Token, ParseError> {
        let offset = self.pos;
        let mut len = 1;
        let mut seen_dot = self.chars[offset] == '.';
        let mut seen_exp = false;
        self.pos += 1;

        while self.pos < self.chars.len() {
            let numeric = match self.chars[self.pos] {
                '0'..='9' => true,
                '.' if !seen_dot && !seen_exp => {
                    seen_dot = true;
                    true
                },
                'e' | 'E' if !seen_exp => {
                    seen_exp = true;
                    true
                },
                // A sign is numeric only directly after the exponent marker.
                '+' | '-' if matches!(self.chars[self.pos - 1], 'e' | 'E') => true,
                _ => false,
            };
            if !numeric {
                break;
            }
            len += 1;
            self.pos += 1;
        }

        // A trailing exponent marker is not part of the number; roll it back
        // so it can start a following name token.
        if matches!(self.chars[offset + len - 1], 'e' | 'E') {
            len -= 1;
            self.pos -= 1;
        }

        let literal: String = self.chars[offset..offset + len].iter().collect();
        let value = literal.parse::<i64>().map(Number::Integer).or_else(|_| {
                                                                   literal.parse::<f64>()
                                                                          .map(Number::Real)
                                                               });
        match value {
            Ok(number) => Ok(Token::Number(number)),
            Err(_) => Err(ParseError::InvalidNumber { literal,
                                                      position: offset }),
        }
    }

    fn parse_operator(&mut self) -> Result<Token, ParseError> {
        let offset = self.pos;
        let mut run_len = 1;
        while offset + run_len < self.chars.len()
              && ALLOWED_SYMBOL_CHARS.contains(&self.chars[offset + run_len])
        {
            run_len += 1;
        }

        // Backtrack one character at a time until a registered operator
        // matches the symbol.
        let mut len = run_len;
        while len > 0 {
            let symbol: String = self.chars[offset..offset + len].iter().collect();
            if let Some(op) = self.lookup_operator(&symbol) {
                self.pos += len;
                return Ok(Token::Operator(op));
            }
            len -= 1;
        }

        let symbol: String = self.chars[offset..offset + run_len].iter().collect();
        Err(ParseError::UnknownOperator { symbol,
                                          position: offset })
    }

    fn lookup_operator(&self, symbol: &str) -> Option<Arc<Operator>> {
        if let Some(op) = self.user_operators.get(symbol) {
            return Some(op.clone());
        }

        let mut chars = symbol.chars();
        match (chars.next(), chars.next()) {
            (Some(single), None) => operator::builtin(single, self.operand_hint()),
            _ => None,
        }
    }

    /// Derives the arity hint used to resolve built-in single-character
    /// operators: 1 (unary) if the previous token was nothing, an open
    /// parenthesis, an argument separator, or a binary or unary-prefix
    /// operator; 2 (binary) otherwise.
    fn operand_hint(&self) -> usize {
        match &self.last_token {
            None | Some(Token::OpenParen | Token::Separator) => 1,
            Some(Token::Operator(op))
                if op.arity() == 2 || (op.arity() == 1 && !op.is_left_associative()) =>
            {
                1
            },
            _ => 2,
        }
    }

    fn parse_name(&mut self) -> Result<Token, ParseError> {
        let offset = self.pos;
        let mut len = 1;
        let mut last_valid_len = 0;
        let mut last_valid: Option<Token> = None;

        // Grow the candidate and remember the longest known variable or
        // function name seen so far. This lets two adjacent known names
        // tokenize without a separator between them.
        while offset + len - 1 < self.chars.len() && is_name_char(self.chars[offset + len - 1]) {
            let name: String = self.chars[offset..offset + len].iter().collect();
            if self.is_known_variable(&name) {
                last_valid_len = len;
                last_valid = Some(Token::Variable(name));
            } else if let Some(func) = self.lookup_function(&name) {
                last_valid_len = len;
                last_valid = Some(Token::Function(func));
            }
            len += 1;
        }

        match last_valid {
            Some(token) => {
                self.pos += last_valid_len;
                Ok(token)
            },
            None => {
                let end = (offset + len - 1).min(self.chars.len());
                let token: String = self.chars[offset..end].iter().collect();
                let length = end - offset;
                Err(ParseError::UnknownIdentifier { token,
                                                    position: offset,
                                                    length })
            },
        }
    }

    fn is_known_variable(&self, name: &str) -> bool {
        self.variable_names.contains(name)
        || DEFAULT_VARIABLE_NAMES.contains(&name)
        || CONSTANT_NAMES.contains(&name)
    }

    fn lookup_function(&self, name: &str) -> Option<Arc<Function>> {
        self.user_functions.get(name).cloned().or_else(|| function::builtin(name))
    }
}

/// Whether the character can continue a variable or function name.
fn is_name_char(ch: char) -> bool {
    ch.is_alphanumeric() || ch == '_' || ch == '.'
}
