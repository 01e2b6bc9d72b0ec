//! Binary operators applied by `inject` when given an operator instead of a block.

use std::fmt;

use super::Value;
use crate::error::EnumerableError;

/// A binary operator resolvable on [`Value`] operands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOperator {
    /// `+`: numeric addition, string and array concatenation.
    Add,
    /// `-`: numeric subtraction.
    Subtract,
    /// `*`: numeric multiplication.
    Multiply,
    /// `/`: numeric division; integer division floors.
    Divide,
}

impl BinaryOperator {
    /// Returns the operator's symbol.
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Applies the operator to `left` and `right`.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerableError::Operator`] when the operator is undefined
    /// for the operand kinds, and [`EnumerableError::Raised`] on integer
    /// overflow or division by zero.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::value::{BinaryOperator, Value};
    ///
    /// let sum = BinaryOperator::Add.apply(&Value::from(1), &Value::from(2.5)).unwrap();
    /// assert_eq!(sum, Value::from(3.5));
    ///
    /// let floored = BinaryOperator::Divide.apply(&Value::from(-7), &Value::from(2)).unwrap();
    /// assert_eq!(floored, Value::from(-4));
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn apply(self, left: &Value, right: &Value) -> Result<Value, EnumerableError> {
        match (left, right) {
            (Value::Integer(left), Value::Integer(right)) => self.apply_integer(*left, *right),
            (Value::Integer(left), Value::Float(right)) => Ok(self.apply_float(*left as f64, *right)),
            (Value::Float(left), Value::Integer(right)) => Ok(self.apply_float(*left, *right as f64)),
            (Value::Float(left), Value::Float(right)) => Ok(self.apply_float(*left, *right)),
            (Value::Str(left), Value::Str(right)) if self == Self::Add => {
                Ok(Value::Str(format!("{left}{right}")))
            }
            (Value::Array(left), Value::Array(right)) if self == Self::Add => {
                Ok(Value::Array(left.iter().chain(right).cloned().collect()))
            }
            _ => Err(self.undefined(left, right)),
        }
    }

    fn apply_integer(self, left: i64, right: i64) -> Result<Value, EnumerableError> {
        let result = match self {
            Self::Add => left.checked_add(right),
            Self::Subtract => left.checked_sub(right),
            Self::Multiply => left.checked_mul(right),
            Self::Divide => {
                if right == 0 {
                    return Err(EnumerableError::Raised("divided by 0".to_string()));
                }
                left.checked_div(right).map(|quotient| {
                    if left % right != 0 && (left < 0) != (right < 0) {
                        quotient - 1
                    } else {
                        quotient
                    }
                })
            }
        };
        result
            .map(Value::Integer)
            .ok_or_else(|| EnumerableError::Raised(format!("integer overflow in {left} {self} {right}")))
    }

    fn apply_float(self, left: f64, right: f64) -> Value {
        Value::Float(match self {
            Self::Add => left + right,
            Self::Subtract => left - right,
            Self::Multiply => left * right,
            Self::Divide => left / right,
        })
    }

    fn undefined(self, left: &Value, right: &Value) -> EnumerableError {
        EnumerableError::Operator {
            operator: self.symbol(),
            left: left.inspect(),
            right: right.inspect(),
        }
    }
}

impl fmt::Display for BinaryOperator {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.symbol())
    }
}
