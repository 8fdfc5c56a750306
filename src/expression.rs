use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use crate::{
    error::{EvalError, EvalResult, NameError, ParseError},
    function::{self, Function},
    number::Number,
    operator::{Operator, OperatorFn},
    shunting_yard,
    token::Token,
};

/// The reserved positional variable names, bound by the `x`, `y`, `z` and `w`
/// parameters of [`Expression::evaluate_with`]. They are always eligible
/// during tokenization, even without an explicit declaration.
pub const DEFAULT_VARIABLE_NAMES: &[&str] = &["x", "y", "z", "w"];

/// The names of the built-in numeric constants, seeded into the variable map
/// on construction and by [`Expression::clear_variables`].
pub const CONSTANT_NAMES: &[&str] = &["pi", "π", "e", "φ"];

const GOLDEN_RATIO: f64 = 1.618_033_988_74;

fn seed_constants(variables: &mut HashMap<String, Number>) {
    variables.insert("pi".to_string(), Number::Real(std::f64::consts::PI));
    variables.insert("π".to_string(), Number::Real(std::f64::consts::PI));
    variables.insert("e".to_string(), Number::Real(std::f64::consts::E));
    variables.insert("φ".to_string(), Number::Real(GOLDEN_RATIO));
}

/// Builds an [`Expression`] from source text plus declarations.
///
/// Declarations are user functions, user operators and bare variable names,
/// in any order. Implicit multiplication is enabled unless turned off.
///
/// # Example
/// ```
/// use evalyard::{
///     expression::ExpressionBuilder,
///     function::Function,
///     number::Number,
/// };
///
/// let avg = Function::new("avg", 4, |args: &[Number]| {
///     let sum: f64 = args.iter().map(Number::as_f64).sum();
///     Ok(Number::Real(sum / 4.0))
/// })
/// .unwrap();
///
/// let expression = ExpressionBuilder::new("avg(1,2,3,4)").function(avg).build().unwrap();
/// assert_eq!(expression.evaluate().unwrap(), Number::Real(2.5));
/// ```
#[derive(Debug)]
pub struct ExpressionBuilder {
    source:                  String,
    functions:               HashMap<String, Arc<Function>>,
    operators:               HashMap<String, Arc<Operator>>,
    variables:               HashSet<String>,
    implicit_multiplication: bool,
}

impl ExpressionBuilder {
    /// Starts a builder for the given source text.
    #[must_use]
    pub fn new(source: &str) -> Self {
        Self { source:                  source.to_string(),
               functions:               HashMap::new(),
               operators:               HashMap::new(),
               variables:               HashSet::new(),
               implicit_multiplication: true, }
    }

    /// Declares a user function. A user function shadows a built-in function
    /// with the same name.
    #[must_use]
    pub fn function(mut self, function: Function) -> Self {
        self.functions.insert(function.name().to_string(), Arc::new(function));
        self
    }

    /// Declares a user operator. A user operator shadows the built-in
    /// operator with the same symbol.
    #[must_use]
    pub fn operator(mut self, operator: Operator) -> Self {
        self.operators.insert(operator.symbol().to_string(), Arc::new(operator));
        self
    }

    /// Declares a variable name so the tokenizer accepts it.
    #[must_use]
    pub fn variable(mut self, name: &str) -> Self {
        self.variables.insert(name.to_string());
        self
    }

    /// Declares several variable names at once.
    #[must_use]
    pub fn variables<I, S>(mut self, names: I) -> Self
        where I: IntoIterator<Item = S>,
              S: Into<String>
    {
        self.variables.extend(names.into_iter().map(Into::into));
        self
    }

    /// Turns implicit multiplication on or off. It is on by default.
    #[must_use]
    pub const fn implicit_multiplication(mut self, enabled: bool) -> Self {
        self.implicit_multiplication = enabled;
        self
    }

    /// Compiles the source text into an [`Expression`].
    ///
    /// # Errors
    /// Returns a [`ParseError`] if tokenization or the infix-to-postfix
    /// conversion fails. A failed build leaves no partially constructed
    /// expression behind.
    pub fn build(self) -> Result<Expression, ParseError> {
        let tokens = shunting_yard::convert_to_rpn(&self.source,
                                                   &self.functions,
                                                   &self.operators,
                                                   &self.variables,
                                                   self.implicit_multiplication)?;
        let mut variables = HashMap::new();
        seed_constants(&mut variables);

        Ok(Expression { tokens: tokens.into(),
                        variables,
                        user_function_names: self.functions.keys().cloned().collect(), })
    }
}

/// A compiled expression, ready for repeated evaluation.
///
/// An expression owns a fixed postfix token sequence, produced once at
/// construction, plus a caller-controlled mapping from variable names to
/// values. Cloning shares the immutable token sequence and deep-copies the
/// variable map, so a clone can be mutated and evaluated independently, for
/// instance from another thread.
///
/// # Example
/// ```
/// use evalyard::{expression::Expression, number::Number};
///
/// let mut expression = Expression::new("3 * sin(y) - 2 / (x - 2)").unwrap();
/// let result = expression.evaluate_with(Some(Number::Real(2.3)),
///                                       Some(Number::Real(3.14)),
///                                       None,
///                                       None)
///                        .unwrap();
///
/// assert!((result.as_f64() - -6.66188870791721).abs() < 1e-12);
/// ```
#[derive(Debug, Clone)]
pub struct Expression {
    tokens:              Arc<[Token]>,
    variables:           HashMap<String, Number>,
    user_function_names: HashSet<String>,
}

impl Expression {
    /// Compiles source text without declarations.
    ///
    /// Use [`ExpressionBuilder`] to declare user functions, user operators or
    /// variable names, or to turn off implicit multiplication.
    ///
    /// # Errors
    /// Returns a [`ParseError`] if tokenization or the conversion to postfix
    /// order fails.
    ///
    /// # Example
    /// ```
    /// use evalyard::{expression::Expression, number::Number};
    ///
    /// let expression = Expression::new("3+4*2").unwrap();
    /// assert_eq!(expression.evaluate().unwrap(), Number::Integer(11));
    /// ```
    pub fn new(source: &str) -> Result<Self, ParseError> {
        ExpressionBuilder::new(source).build()
    }

    /// Binds a value to a variable name.
    ///
    /// # Errors
    /// Returns [`NameError::FunctionNameCollision`] if the name belongs to a
    /// built-in or user-declared function.
    pub fn set_variable(&mut self,
                        name: &str,
                        value: impl Into<Number>)
                        -> Result<&mut Self, NameError> {
        self.check_variable_name(name)?;
        self.variables.insert(name.to_string(), value.into());
        Ok(self)
    }

    /// Binds several variables at once.
    ///
    /// # Errors
    /// Returns [`NameError::FunctionNameCollision`] on the first name that
    /// belongs to a function; earlier bindings of the batch stay applied.
    pub fn set_variables<I, N>(&mut self, variables: I) -> Result<&mut Self, NameError>
        where I: IntoIterator<Item = (String, N)>,
              N: Into<Number>
    {
        for (name, value) in variables {
            self.set_variable(&name, value)?;
        }
        Ok(self)
    }

    fn check_variable_name(&self, name: &str) -> Result<(), NameError> {
        if self.user_function_names.contains(name) || function::builtin(name).is_some() {
            return Err(NameError::FunctionNameCollision { name: name.to_string() });
        }
        Ok(())
    }

    /// Removes all bindings, then re-seeds the numeric constants.
    pub fn clear_variables(&mut self) {
        self.variables.clear();
        seed_constants(&mut self.variables);
    }

    /// The variable names referenced by the expression, in token order, one
    /// entry per occurrence.
    #[must_use]
    pub fn variable_names(&self) -> Vec<&str> {
        self.tokens
            .iter()
            .filter_map(|token| match token {
                Token::Variable(name) => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Checks that operand, operator and function arities balance out.
    ///
    /// The check walks the postfix sequence once, counting available
    /// operands: operands add one, binary operators consume one, a function
    /// of arity `n` consumes `n` and produces one. The count must stay
    /// positive throughout and end at exactly one. Human-readable findings
    /// are appended to `errors` when a list is supplied; the check itself
    /// never fails.
    ///
    /// # Example
    /// ```
    /// use evalyard::expression::Expression;
    ///
    /// assert!(Expression::new("1 + 2").unwrap().is_valid(None));
    /// assert!(!Expression::new("1 + ").unwrap().is_valid(None));
    /// assert!(!Expression::new("sin()").unwrap().is_valid(None));
    /// ```
    #[must_use]
    pub fn is_valid(&self, mut errors: Option<&mut Vec<String>>) -> bool {
        let mut count: i64 = 0;
        for token in self.tokens.iter() {
            match token {
                Token::Number(_) | Token::Variable(_) => count += 1,
                Token::Function(func) => {
                    let arity = func.arity() as i64;
                    if arity > count && let Some(list) = errors.as_deref_mut() {
                        list.push(format!("Not enough arguments for '{}'", func.name()));
                    }
                    if arity > 1 {
                        count -= arity - 1;
                    } else if arity == 0 {
                        // A zero-argument function still yields a value.
                        count += 1;
                    }
                },
                Token::Operator(op) => {
                    if op.arity() == 2 {
                        count -= 1;
                    }
                },
                _ => {},
            }
            if count < 1 {
                if let Some(list) = errors {
                    list.push("Too many operators".to_string());
                }
                return false;
            }
        }

        if count > 1 {
            if let Some(list) = errors {
                list.push("Too many operands".to_string());
            }
            return false;
        }
        true
    }

    /// Checks that every referenced variable has a bound value.
    ///
    /// A variable is complete if and only if its name is present in the
    /// binding map; the positional `x`, `y`, `z` and `w` slots follow the
    /// same rule since they alias into the same map.
    #[must_use]
    pub fn is_complete(&self, errors: Option<&mut Vec<String>>) -> bool {
        for token in self.tokens.iter() {
            if let Token::Variable(name) = token
                && !self.variables.contains_key(name)
            {
                if let Some(list) = errors {
                    list.push(format!("The variable '{name}' has not been set"));
                }
                return false;
            }
        }
        true
    }

    /// Runs both [`is_valid`] and [`is_complete`] and combines the outcomes.
    ///
    /// Both checks always run, so a supplied error list collects the
    /// findings of both even when the first check already failed.
    ///
    /// [`is_valid`]: Expression::is_valid
    /// [`is_complete`]: Expression::is_complete
    #[must_use]
    pub fn is_valid_and_complete(&self, mut errors: Option<&mut Vec<String>>) -> bool {
        let valid = self.is_valid(errors.as_deref_mut());
        let complete = self.is_complete(errors);
        valid && complete
    }

    /// Evaluates the expression against the current variable bindings.
    ///
    /// # Errors
    /// Returns an [`EvalError`] for unbound variables, operand-count
    /// mismatches, arithmetic failures raised by operator or function
    /// callables, and a final stack depth other than one. A failed
    /// evaluation leaves the expression and its bindings usable.
    pub fn evaluate(&self) -> EvalResult<Number> {
        self.run()
    }

    /// Evaluates the expression with positional values for `x`, `y`, `z` and
    /// `w`.
    ///
    /// A supplied value overwrites the binding in the variable map and
    /// persists after the call returns. A `None` leaves any existing binding
    /// untouched.
    ///
    /// # Errors
    /// See [`Expression::evaluate`].
    pub fn evaluate_with(&mut self,
                         x: Option<Number>,
                         y: Option<Number>,
                         z: Option<Number>,
                         w: Option<Number>)
                         -> EvalResult<Number> {
        for (name, value) in DEFAULT_VARIABLE_NAMES.iter().zip([x, y, z, w]) {
            if let Some(value) = value {
                self.variables.insert((*name).to_string(), value);
            }
        }
        self.run()
    }

    fn run(&self) -> EvalResult<Number> {
        let mut stack: Vec<Number> = Vec::new();

        for token in self.tokens.iter() {
            match token {
                Token::Number(value) => stack.push(*value),

                Token::Variable(name) => {
                    let value = self.variables
                                    .get(name)
                                    .copied()
                                    .ok_or_else(|| EvalError::UnsetVariable { name:
                                                                                  name.clone() })?;
                    stack.push(value);
                },

                Token::Operator(op) => match op.func() {
                    OperatorFn::Binary(func) => {
                        // The second pop yields the left operand.
                        let (Some(right), Some(left)) = (stack.pop(), stack.pop()) else {
                            return Err(EvalError::NotEnoughOperands { symbol:
                                                                          op.symbol().to_string() });
                        };
                        stack.push(func(left, right)?);
                    },
                    OperatorFn::Unary(func) => {
                        let Some(operand) = stack.pop() else {
                            return Err(EvalError::NotEnoughOperands { symbol:
                                                                          op.symbol().to_string() });
                        };
                        stack.push(func(operand)?);
                    },
                },

                Token::Function(func) => {
                    let arity = func.arity();
                    if stack.len() < arity {
                        return Err(EvalError::NotEnoughArguments { name:
                                                                       func.name().to_string() });
                    }
                    // The leftmost argument sits deepest, so the split keeps
                    // source order.
                    let args = stack.split_off(stack.len() - arity);
                    stack.push(func.call(&args)?);
                },

                // The converter never emits parentheses or separators into
                // the postfix sequence.
                Token::OpenParen | Token::CloseParen | Token::Separator => unreachable!(),
            }
        }

        match stack.pop() {
            Some(result) if stack.is_empty() => Ok(result),
            _ => Err(EvalError::InvalidOutputCount),
        }
    }
}
