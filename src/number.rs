use crate::error::{EvalError, EvalResult};

/// Represents a numeric value produced or consumed by an expression.
///
/// This enum models the two numeric kinds an expression can work with.
/// Arithmetic between two values promotes to [`Number::Real`] if either
/// operand is real; two integers stay integers. Division and modulo by an
/// exact zero of either kind are reported as errors instead of silently
/// producing an IEEE infinity or NaN.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    /// A 64-bit signed integer value.
    Integer(i64),
    /// A double-precision floating-point value.
    Real(f64),
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Real(v)
    }
}

impl Number {
    /// Converts the value to an `f64` for promoted arithmetic.
    ///
    /// Integers above 2^53 lose precision here.
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub const fn as_f64(&self) -> f64 {
        match self {
            Self::Integer(n) => *n as f64,
            Self::Real(r) => *r,
        }
    }

    /// Returns `true` if the value is [`Integer`].
    ///
    /// [`Integer`]: Number::Integer
    #[must_use]
    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::Integer(..))
    }

    /// Returns `true` if the value is [`Real`].
    ///
    /// [`Real`]: Number::Real
    #[must_use]
    pub const fn is_real(&self) -> bool {
        matches!(self, Self::Real(..))
    }

    /// Adds two values under the promotion rules.
    ///
    /// # Example
    /// ```
    /// use evalyard::number::Number;
    ///
    /// let sum = Number::Integer(3).add(Number::Integer(4)).unwrap();
    /// assert_eq!(sum, Number::Integer(7));
    ///
    /// let sum = Number::Integer(3).add(Number::Real(0.5)).unwrap();
    /// assert_eq!(sum, Number::Real(3.5));
    /// ```
    pub fn add(self, other: Self) -> EvalResult<Self> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => {
                a.checked_add(b).map(Self::Integer).ok_or(EvalError::Overflow)
            },
            _ => Ok(Self::Real(self.as_f64() + other.as_f64())),
        }
    }

    /// Subtracts `other` from `self` under the promotion rules.
    pub fn sub(self, other: Self) -> EvalResult<Self> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => {
                a.checked_sub(b).map(Self::Integer).ok_or(EvalError::Overflow)
            },
            _ => Ok(Self::Real(self.as_f64() - other.as_f64())),
        }
    }

    /// Multiplies two values under the promotion rules.
    pub fn mul(self, other: Self) -> EvalResult<Self> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => {
                a.checked_mul(b).map(Self::Integer).ok_or(EvalError::Overflow)
            },
            _ => Ok(Self::Real(self.as_f64() * other.as_f64())),
        }
    }

    /// Divides `self` by `other` under the promotion rules.
    ///
    /// Integer division truncates. A divisor of exact zero, integer or real,
    /// is an error.
    ///
    /// # Example
    /// ```
    /// use evalyard::{error::EvalError, number::Number};
    ///
    /// assert_eq!(Number::Integer(10).div(Number::Integer(4)).unwrap(),
    ///            Number::Integer(2));
    ///
    /// let err = Number::Integer(1).div(Number::Integer(0)).unwrap_err();
    /// assert!(matches!(err, EvalError::DivisionByZero));
    /// ```
    pub fn div(self, other: Self) -> EvalResult<Self> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => {
                if b == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                a.checked_div(b).map(Self::Integer).ok_or(EvalError::Overflow)
            },
            _ => {
                let divisor = other.as_f64();
                if divisor == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(Self::Real(self.as_f64() / divisor))
            },
        }
    }

    /// Computes `self` modulo `other` under the promotion rules.
    ///
    /// A divisor of exact zero, integer or real, is an error.
    pub fn rem(self, other: Self) -> EvalResult<Self> {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => {
                if b == 0 {
                    return Err(EvalError::DivisionByZero);
                }
                a.checked_rem(b).map(Self::Integer).ok_or(EvalError::Overflow)
            },
            _ => {
                let divisor = other.as_f64();
                if divisor == 0.0 {
                    return Err(EvalError::DivisionByZero);
                }
                Ok(Self::Real(self.as_f64() % divisor))
            },
        }
    }

    /// Raises `self` to the power of `other`.
    ///
    /// Exponentiation always computes through `f64` and yields a real value,
    /// regardless of the operand kinds.
    pub fn pow(self, other: Self) -> EvalResult<Self> {
        Ok(Self::Real(self.as_f64().powf(other.as_f64())))
    }

    /// Negates the value, keeping its kind.
    pub fn neg(self) -> EvalResult<Self> {
        match self {
            Self::Integer(n) => n.checked_neg().map(Self::Integer).ok_or(EvalError::Overflow),
            Self::Real(r) => Ok(Self::Real(-r)),
        }
    }

    /// Computes the factorial of the value.
    ///
    /// Integer operands produce an integer result with overflow detection.
    /// Real operands multiply up to the truncated value and stay real.
    /// Operands below one yield the empty product, `1`.
    ///
    /// # Example
    /// ```
    /// use evalyard::number::Number;
    ///
    /// assert_eq!(Number::Integer(5).factorial().unwrap(), Number::Integer(120));
    /// assert_eq!(Number::Real(3.0).factorial().unwrap(), Number::Real(6.0));
    /// ```
    pub fn factorial(self) -> EvalResult<Self> {
        match self {
            Self::Integer(n) => {
                let mut result: i64 = 1;
                for i in 1..=n {
                    result = result.checked_mul(i).ok_or(EvalError::Overflow)?;
                }
                Ok(Self::Integer(result))
            },
            #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
            Self::Real(r) => {
                let mut result = 1.0;
                for i in 1..=(r as i64) {
                    result *= i as f64;
                }
                Ok(Self::Real(result))
            },
        }
    }
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Real(r) => write!(f, "{r}"),
        }
    }
}
