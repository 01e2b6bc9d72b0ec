//! Case equality, the test `grep` applies to each element.

use std::fmt;
use std::ops::RangeInclusive;

use super::Value;

/// A case-equality test: does `value` belong to this pattern?
///
/// # Examples
///
/// ```rust
/// use enumerable::value::{Kind, Pattern, Value};
///
/// assert!(Kind::Numeric.matches(&Value::from(1.5)));
/// assert!((1..=3).matches(&Value::from(2)));
/// assert!(Value::from("a").matches(&Value::from("a")));
/// ```
pub trait Pattern {
    /// Returns `true` if `value` matches this pattern.
    fn matches(&self, value: &Value) -> bool;
}

/// Value patterns match by equality.
impl Pattern for Value {
    fn matches(&self, value: &Value) -> bool {
        self == value
    }
}

/// Ranges match numbers within their bounds.
impl Pattern for RangeInclusive<i64> {
    #[allow(clippy::cast_precision_loss)]
    fn matches(&self, value: &Value) -> bool {
        match value {
            Value::Integer(number) => self.contains(number),
            Value::Float(number) => {
                (*self.start() as f64) <= *number && *number <= (*self.end() as f64)
            }
            _ => false,
        }
    }
}

impl<P: Pattern + ?Sized> Pattern for &P {
    fn matches(&self, value: &Value) -> bool {
        (**self).matches(value)
    }
}

/// The kind of a [`Value`]; as a pattern it is a type test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Kind {
    /// `Nil`.
    Nil,
    /// `Bool`.
    Bool,
    /// `Integer`.
    Integer,
    /// `Float`.
    Float,
    /// `Integer` or `Float`.
    Numeric,
    /// `Str`.
    Str,
    /// `Symbol`.
    Symbol,
    /// `Array`.
    Array,
}

impl Pattern for Kind {
    fn matches(&self, value: &Value) -> bool {
        match (self, value.kind()) {
            (Self::Numeric, Self::Integer | Self::Float) => true,
            (expected, actual) => *expected == actual,
        }
    }
}

/// A pattern backed by a predicate closure.
///
/// # Examples
///
/// ```rust
/// use enumerable::value::{FnPattern, Pattern, Value};
///
/// let even = FnPattern::new(|value: &Value| value.as_integer().is_some_and(|n| n % 2 == 0));
/// assert!(even.matches(&Value::from(4)));
/// assert!(!even.matches(&Value::from(3)));
/// ```
#[derive(Clone, Copy)]
pub struct FnPattern<F>(F);

impl<F: Fn(&Value) -> bool> FnPattern<F> {
    /// Wraps `predicate` as a pattern.
    pub const fn new(predicate: F) -> Self {
        Self(predicate)
    }
}

impl<F: Fn(&Value) -> bool> Pattern for FnPattern<F> {
    fn matches(&self, value: &Value) -> bool {
        (self.0)(value)
    }
}

impl<F> fmt::Debug for FnPattern<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("FnPattern(<function>)")
    }
}
