//! Three-way comparison for values.

use std::cmp::Ordering;

use super::Value;

impl Value {
    /// Compares two values, returning `None` when they are not comparable.
    ///
    /// Integers and floats compare numerically with each other, strings and
    /// symbols lexicographically within their own kind, and arrays
    /// element-wise, falling back to length.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use enumerable::value::Value;
    ///
    /// assert_eq!(Value::from(1).compare(&Value::from(2.5)), Some(Ordering::Less));
    /// assert_eq!(Value::from("b").compare(&Value::from("a")), Some(Ordering::Greater));
    /// assert_eq!(Value::from(1).compare(&Value::from("a")), None);
    /// ```
    #[allow(clippy::cast_precision_loss)]
    pub fn compare(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Integer(left), Self::Integer(right)) => Some(left.cmp(right)),
            (Self::Integer(left), Self::Float(right)) => (*left as f64).partial_cmp(right),
            (Self::Float(left), Self::Integer(right)) => left.partial_cmp(&(*right as f64)),
            (Self::Float(left), Self::Float(right)) => left.partial_cmp(right),
            (Self::Str(left), Self::Str(right)) | (Self::Symbol(left), Self::Symbol(right)) => {
                Some(left.cmp(right))
            }
            (Self::Array(left), Self::Array(right)) => {
                for (left_item, right_item) in left.iter().zip(right) {
                    match left_item.compare(right_item)? {
                        Ordering::Equal => {}
                        ordering => return Some(ordering),
                    }
                }
                Some(left.len().cmp(&right.len()))
            }
            (Self::Nil, Self::Nil) => Some(Ordering::Equal),
            (Self::Bool(left), Self::Bool(right)) if left == right => Some(Ordering::Equal),
            _ => None,
        }
    }

    /// Interprets a comparator's result as a three-way ordering.
    ///
    /// Any integer is reduced to its sign; a finite float likewise. Every
    /// other value (including `Nil`) is not a three-way result.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use std::cmp::Ordering;
    /// use enumerable::value::Value;
    ///
    /// assert_eq!(Value::from(-7).to_ordering(), Some(Ordering::Less));
    /// assert_eq!(Value::from(0.0).to_ordering(), Some(Ordering::Equal));
    /// assert_eq!(Value::Nil.to_ordering(), None);
    /// ```
    pub fn to_ordering(&self) -> Option<Ordering> {
        match self {
            Self::Integer(value) => Some(value.cmp(&0)),
            Self::Float(value) => value.partial_cmp(&0.0),
            _ => None,
        }
    }
}

impl From<Ordering> for Value {
    fn from(ordering: Ordering) -> Self {
        Self::Integer(ordering as i64)
    }
}
