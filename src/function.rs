use std::{
    collections::HashMap,
    sync::{Arc, LazyLock},
};

use crate::{
    error::{EvalError, EvalResult, NameError},
    number::Number,
};

/// The largest number of parameters a function may declare.
pub const MAX_ARITY: usize = 9;

/// Type alias for function callables.
///
/// A callable receives a slice holding exactly `arity` evaluated arguments in
/// source order (leftmost argument first) and returns one value.
type FunctionFn = Arc<dyn Fn(&[Number]) -> EvalResult<Number> + Send + Sync>;

/// Represents a function which can be used in an expression.
///
/// A function couples a validated name with a fixed arity between 0 and
/// [`MAX_ARITY`] and an evaluation callable. Function and variable namespaces
/// are disjoint: a name can never refer to both.
#[derive(Clone)]
pub struct Function {
    name:  String,
    arity: usize,
    func:  FunctionFn,
}

impl Function {
    /// Creates a new function for use in expressions.
    ///
    /// # Errors
    /// Returns [`NameError::InvalidFunctionName`] if the name violates the
    /// name grammar and [`NameError::UnsupportedArity`] if `arity` exceeds
    /// [`MAX_ARITY`].
    ///
    /// # Example
    /// ```
    /// use evalyard::{function::Function, number::Number};
    ///
    /// let avg = Function::new("avg", 2, |args: &[Number]| {
    ///     Ok(Number::Real((args[0].as_f64() + args[1].as_f64()) / 2.0))
    /// })
    /// .unwrap();
    ///
    /// assert_eq!(avg.arity(), 2);
    /// assert!(Function::new("1foo", 0, |_: &[Number]| Ok(Number::Integer(0))).is_err());
    /// ```
    pub fn new<F>(name: &str, arity: usize, func: F) -> Result<Self, NameError>
        where F: Fn(&[Number]) -> EvalResult<Number> + Send + Sync + 'static
    {
        if !is_valid_name(name) {
            return Err(NameError::InvalidFunctionName { name: name.to_string() });
        }
        if arity > MAX_ARITY {
            return Err(NameError::UnsupportedArity { name: name.to_string(),
                                                     arity });
        }

        Ok(Self { name: name.to_string(),
                  arity,
                  func: Arc::new(func) })
    }

    /// The function name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The number of arguments the function consumes.
    #[must_use]
    pub const fn arity(&self) -> usize {
        self.arity
    }

    /// Invokes the callable with the given arguments.
    ///
    /// # Errors
    /// Returns [`EvalError::NotEnoughArguments`] if the argument count does
    /// not match the declared arity, or whatever error the callable raises.
    pub fn call(&self, args: &[Number]) -> EvalResult<Number> {
        if args.len() != self.arity {
            return Err(EvalError::NotEnoughArguments { name: self.name.clone() });
        }
        (self.func)(args)
    }
}

impl std::fmt::Debug for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Function")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

/// Checks a name against the function name grammar.
///
/// Names are non-empty, start with a letter or `_`, and continue with
/// letters, digits or `_`.
///
/// # Example
/// ```
/// assert!(evalyard::function::is_valid_name("log2"));
/// assert!(evalyard::function::is_valid_name("_blah"));
/// assert!(!evalyard::function::is_valid_name("2log"));
/// assert!(!evalyard::function::is_valid_name("lo-g"));
/// assert!(!evalyard::function::is_valid_name(""));
/// ```
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    if name.is_empty() {
        return false;
    }
    for (i, c) in name.chars().enumerate() {
        if c.is_alphabetic() || c == '_' {
            continue;
        }
        if c.is_numeric() && i > 0 {
            continue;
        }
        return false;
    }
    true
}

/// Defines the built-in function table.
///
/// Each entry provides a name, an arity and a callable. The macro produces
/// the lazily-initialized lookup table and the public list of built-in names.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                arity: $arity:literal,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static BUILTIN_TABLE: LazyLock<HashMap<&'static str, Arc<Function>>> =
            LazyLock::new(|| {
                let mut map: HashMap<&'static str, Arc<Function>> = HashMap::new();
                $(
                    map.insert($name,
                               Arc::new(Function { name:  $name.to_string(),
                                                   arity: $arity,
                                                   func:  Arc::new($func), }));
                )*
                map
            });
        /// Names of all built-in functions.
        pub const BUILTIN_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

builtin_functions! {
    "sin"      => { arity: 1, func: |args: &[Number]| Ok(Number::Real(args[0].as_f64().sin())) },
    "cos"      => { arity: 1, func: |args: &[Number]| Ok(Number::Real(args[0].as_f64().cos())) },
    "tan"      => { arity: 1, func: |args: &[Number]| Ok(Number::Real(args[0].as_f64().tan())) },
    "cot"      => { arity: 1, func: |args: &[Number]| -> EvalResult<Number> {
        let tan = args[0].as_f64().tan();
        if tan == 0.0 {
            return Err(EvalError::Domain { function: "cotangent".to_string() });
        }
        Ok(Number::Real(1.0 / tan))
    } },
    "ln"       => { arity: 1, func: |args: &[Number]| Ok(Number::Real(args[0].as_f64().ln())) },
    "log2"     => { arity: 1, func: |args: &[Number]| Ok(Number::Real(args[0].as_f64().log2())) },
    "log10"    => { arity: 1, func: |args: &[Number]| Ok(Number::Real(args[0].as_f64().log10())) },
    "ln1p"     => { arity: 1, func: |args: &[Number]| Ok(Number::Real(args[0].as_f64().ln_1p())) },
    "abs"      => { arity: 1, func: |args: &[Number]| Ok(Number::Real(args[0].as_f64().abs())) },
    "acos"     => { arity: 1, func: |args: &[Number]| Ok(Number::Real(args[0].as_f64().acos())) },
    "asin"     => { arity: 1, func: |args: &[Number]| Ok(Number::Real(args[0].as_f64().asin())) },
    "atan"     => { arity: 1, func: |args: &[Number]| Ok(Number::Real(args[0].as_f64().atan())) },
    "cbrt"     => { arity: 1, func: |args: &[Number]| Ok(Number::Real(args[0].as_f64().cbrt())) },
    "floor"    => { arity: 1, func: |args: &[Number]| Ok(Number::Real(args[0].as_f64().floor())) },
    "sinh"     => { arity: 1, func: |args: &[Number]| Ok(Number::Real(args[0].as_f64().sinh())) },
    "sqrt"     => { arity: 1, func: |args: &[Number]| Ok(Number::Real(args[0].as_f64().sqrt())) },
    "tanh"     => { arity: 1, func: |args: &[Number]| Ok(Number::Real(args[0].as_f64().tanh())) },
    "cosh"     => { arity: 1, func: |args: &[Number]| Ok(Number::Real(args[0].as_f64().cosh())) },
    "ceil"     => { arity: 1, func: |args: &[Number]| Ok(Number::Real(args[0].as_f64().ceil())) },
    "pow"      => { arity: 2, func: |args: &[Number]| {
        Ok(Number::Real(args[0].as_f64().powf(args[1].as_f64())))
    } },
    "exp"      => { arity: 1, func: |args: &[Number]| Ok(Number::Real(args[0].as_f64().exp())) },
    "expm1"    => { arity: 1, func: |args: &[Number]| Ok(Number::Real(args[0].as_f64().exp_m1())) },
    "sign"     => { arity: 1, func: |args: &[Number]| {
        let a = args[0].as_f64();
        Ok(Number::Real(if a == 0.0 { 0.0 } else { a.signum() }))
    } },
    "csc"      => { arity: 1, func: |args: &[Number]| -> EvalResult<Number> {
        let sin = args[0].as_f64().sin();
        if sin == 0.0 {
            return Err(EvalError::Domain { function: "cosecant".to_string() });
        }
        Ok(Number::Real(1.0 / sin))
    } },
    "sec"      => { arity: 1, func: |args: &[Number]| -> EvalResult<Number> {
        let cos = args[0].as_f64().cos();
        if cos == 0.0 {
            return Err(EvalError::Domain { function: "secant".to_string() });
        }
        Ok(Number::Real(1.0 / cos))
    } },
    "csch"     => { arity: 1, func: |args: &[Number]| -> EvalResult<Number> {
        let sinh = args[0].as_f64().sinh();
        if sinh == 0.0 {
            return Err(EvalError::Domain { function: "hyperbolic cosecant".to_string() });
        }
        Ok(Number::Real(1.0 / sinh))
    } },
    "sech"     => { arity: 1, func: |args: &[Number]| Ok(Number::Real(1.0 / args[0].as_f64().cosh())) },
    "coth"     => { arity: 1, func: |args: &[Number]| -> EvalResult<Number> {
        let a = args[0].as_f64();
        if a.sinh() == 0.0 {
            return Err(EvalError::Domain { function: "hyperbolic cotangent".to_string() });
        }
        Ok(Number::Real(a.cosh() / a.sinh()))
    } },
    "logb"     => { arity: 2, func: |args: &[Number]| {
        Ok(Number::Real(args[1].as_f64().ln() / args[0].as_f64().ln()))
    } },
    "toRadian" => { arity: 1, func: |args: &[Number]| Ok(Number::Real(args[0].as_f64().to_radians())) },
    "toDegree" => { arity: 1, func: |args: &[Number]| Ok(Number::Real(args[0].as_f64().to_degrees())) },
}

/// Looks up a built-in function by name.
#[must_use]
pub fn builtin(name: &str) -> Option<Arc<Function>> {
    BUILTIN_TABLE.get(name).cloned()
}
