//! An ordered key/value source that yields two arguments per element.

use super::IterationSource;
use crate::block::Block;
use crate::control::{ControlSignal, Outcome};
use crate::proceed;
use crate::value::Value;

/// An ordered list of key/value pairs.
///
/// Each element is yielded as two arguments, so a combinator that collapses
/// its arguments sees `[key, value]`.
///
/// # Examples
///
/// ```rust
/// use enumerable::control::ControlSignal;
/// use enumerable::enumerable::Enumerable;
/// use enumerable::source::Pairs;
/// use enumerable::value::Value;
///
/// let pairs: Pairs = [("a", 1), ("b", 2)].into_iter().collect();
/// assert_eq!(
///     pairs.to_a(),
///     Ok(ControlSignal::Continue(vec![
///         Value::from(("a", 1)),
///         Value::from(("b", 2)),
///     ]))
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Pairs(Vec<(Value, Value)>);

impl Pairs {
    /// Creates an empty pair list.
    pub const fn new() -> Self {
        Self(Vec::new())
    }

    /// Appends a pair.
    pub fn push(&mut self, key: impl Into<Value>, value: impl Into<Value>) {
        self.0.push((key.into(), value.into()));
    }

    /// Returns the number of pairs.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns `true` if there are no pairs.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<Value>, V: Into<Value>> FromIterator<(K, V)> for Pairs {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(key, value)| (key.into(), value.into())).collect())
    }
}

impl IterationSource for Pairs {
    fn each(&self, _arguments: &[Value], block: &mut Block<'_>) -> Outcome<Value> {
        for (key, value) in &self.0 {
            proceed!(block.call(&[key.clone(), value.clone()])?);
        }
        Ok(ControlSignal::Continue(Value::Nil))
    }
}
