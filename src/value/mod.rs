//! The dynamic element type and the host object-model capabilities.
//!
//! The combinator engine treats elements as opaque. [`Value`] is the value
//! model it runs on; the operations the engine needs from the surrounding
//! object model are provided here:
//!
//! - truthiness ([`Value::is_truthy`])
//! - equality (`PartialEq`, where `Integer(1) == Float(1.0)`)
//! - three-way comparison ([`Value::compare`])
//! - case equality ([`Pattern`])
//! - binary operators for `inject` ([`BinaryOperator`])
//!
//! # Examples
//!
//! ```rust
//! use enumerable::value::Value;
//!
//! let values = Value::from(vec![1, 2, 3]);
//! assert_eq!(values.inspect(), "[1, 2, 3]");
//!
//! assert!(Value::from(0).is_truthy());
//! assert!(!Value::Nil.is_truthy());
//! assert_eq!(Value::from(1), Value::from(1.0));
//! ```

mod compare;
mod operator;
mod pattern;

pub use operator::BinaryOperator;
pub use pattern::{FnPattern, Kind, Pattern};

use std::fmt;

/// A dynamically typed element.
///
/// `Nil` doubles as the null sentinel: `zip` pads missing positions with it,
/// `find` returns it when nothing matches, and the splat-collapse rule
/// produces it for an empty argument list.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Value {
    /// The null sentinel.
    #[default]
    Nil,
    /// A boolean.
    Bool(bool),
    /// A signed integer.
    Integer(i64),
    /// A floating-point number.
    Float(f64),
    /// A string.
    Str(String),
    /// An interned name.
    Symbol(String),
    /// An ordered sequence of values.
    Array(Vec<Self>),
}

impl Value {
    /// Creates a symbol value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::value::Value;
    ///
    /// assert_eq!(Value::symbol("stopped").inspect(), ":stopped");
    /// ```
    pub fn symbol(name: impl Into<String>) -> Self {
        Self::Symbol(name.into())
    }

    /// Returns `false` for `Nil` and `Bool(false)`, `true` for everything else.
    #[inline]
    pub const fn is_truthy(&self) -> bool {
        !matches!(self, Self::Nil | Self::Bool(false))
    }

    /// Returns `true` if this is `Nil`.
    #[inline]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns the integer payload, if any.
    #[inline]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(value) => Some(*value),
            _ => None,
        }
    }

    /// Returns the array payload, if any.
    #[inline]
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Consumes the value and returns the array payload, if any.
    pub fn into_array(self) -> Option<Vec<Self>> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the [`Kind`] of this value.
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Nil => Kind::Nil,
            Self::Bool(_) => Kind::Bool,
            Self::Integer(_) => Kind::Integer,
            Self::Float(_) => Kind::Float,
            Self::Str(_) => Kind::Str,
            Self::Symbol(_) => Kind::Symbol,
            Self::Array(_) => Kind::Array,
        }
    }

    /// Returns a human-readable representation used in error messages.
    pub fn inspect(&self) -> String {
        self.to_string()
    }
}

impl PartialEq for Value {
    #[allow(clippy::cast_precision_loss)]
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Bool(left), Self::Bool(right)) => left == right,
            (Self::Integer(left), Self::Integer(right)) => left == right,
            (Self::Float(left), Self::Float(right)) => left == right,
            (Self::Integer(left), Self::Float(right)) | (Self::Float(right), Self::Integer(left)) => {
                (*left as f64) == *right
            }
            (Self::Str(left), Self::Str(right)) | (Self::Symbol(left), Self::Symbol(right)) => {
                left == right
            }
            (Self::Array(left), Self::Array(right)) => left == right,
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(formatter, "nil"),
            Self::Bool(value) => write!(formatter, "{value}"),
            Self::Integer(value) => write!(formatter, "{value}"),
            Self::Float(value) if value.is_finite() && value.fract() == 0.0 => {
                write!(formatter, "{value:.1}")
            }
            Self::Float(value) => write!(formatter, "{value}"),
            Self::Str(value) => write!(formatter, "{value:?}"),
            Self::Symbol(name) => write!(formatter, ":{name}"),
            Self::Array(items) => {
                write!(formatter, "[")?;
                for (index, item) in items.iter().enumerate() {
                    if index > 0 {
                        write!(formatter, ", ")?;
                    }
                    write!(formatter, "{item}")?;
                }
                write!(formatter, "]")
            }
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Self::Integer(i64::from(value))
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Self::Integer(i64::try_from(value).unwrap_or(i64::MAX))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::Str(value)
    }
}

impl From<()> for Value {
    fn from((): ()) -> Self {
        Self::Nil
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nil, Into::into)
    }
}

impl<A: Into<Self>, B: Into<Self>> From<(A, B)> for Value {
    fn from((first, second): (A, B)) -> Self {
        Self::Array(vec![first.into(), second.into()])
    }
}

impl FromIterator<Self> for Value {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        Self::Array(iter.into_iter().collect())
    }
}

static_assertions::assert_impl_all!(Value: Clone, PartialEq, Default, fmt::Debug);

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(Value::Nil, false)]
    #[case(Value::Bool(false), false)]
    #[case(Value::Bool(true), true)]
    #[case(Value::Integer(0), true)]
    #[case(Value::from(""), true)]
    #[case(Value::Array(vec![]), true)]
    fn test_truthiness(#[case] value: Value, #[case] expected: bool) {
        assert_eq!(value.is_truthy(), expected);
    }

    #[rstest]
    #[case(Value::Nil, "nil")]
    #[case(Value::from(2.0), "2.0")]
    #[case(Value::from(2.5), "2.5")]
    #[case(Value::symbol("x"), ":x")]
    #[case(Value::from(vec![Value::from(1), Value::from("a"), Value::Nil]), "[1, \"a\", nil]")]
    fn test_inspect(#[case] value: Value, #[case] expected: &str) {
        assert_eq!(value.inspect(), expected);
    }

    #[test]
    fn test_numeric_equality_crosses_kinds() {
        assert_eq!(Value::from(3), Value::from(3.0));
        assert_ne!(Value::from(3), Value::from("3"));
        assert_ne!(Value::from("x"), Value::symbol("x"));
    }

    #[test]
    fn test_option_conversion() {
        assert_eq!(Value::from(None::<i32>), Value::Nil);
        assert_eq!(Value::from(Some(4)), Value::Integer(4));
    }
}
