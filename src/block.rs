//! The callback capability every combinator invokes.
//!
//! A [`Block`] is called with an ordered argument list and answers with an
//! [`Outcome`]: an error, `Continue(value)`, or `Break(value)`. Call sites
//! inspect the signal for `Break` before interpreting the value.
//!
//! Sources deliver each element as an argument list ([`Args`]). When a
//! callback expects a single value, the list is collapsed with
//! [`collapse`]: no arguments become `Nil`, one argument is passed as is,
//! and several arguments become an `Array`.
//!
//! # Examples
//!
//! ```rust
//! use enumerable::block::Block;
//! use enumerable::control::ControlSignal;
//! use enumerable::value::Value;
//!
//! let mut double = Block::function(|value| match value {
//!     Value::Integer(n) => Value::from(n * 2),
//!     other => other,
//! });
//! assert_eq!(
//!     double.call(&[Value::from(21)]),
//!     Ok(ControlSignal::Continue(Value::from(42)))
//! );
//! ```

use std::fmt;

use smallvec::SmallVec;

use crate::control::{ControlSignal, Outcome};
use crate::value::Value;

/// An owned argument list as yielded by a source for one element.
pub type Args = SmallVec<[Value; 2]>;

/// Collapses an argument list to a single value.
///
/// # Examples
///
/// ```rust
/// use enumerable::block::collapse;
/// use enumerable::value::Value;
///
/// assert_eq!(collapse(&[]), Value::Nil);
/// assert_eq!(collapse(&[Value::from(1)]), Value::from(1));
/// assert_eq!(collapse(&[Value::from(1), Value::from(2)]), Value::from(vec![1, 2]));
/// ```
pub fn collapse(arguments: &[Value]) -> Value {
    match arguments {
        [] => Value::Nil,
        [single] => single.clone(),
        many => Value::Array(many.to_vec()),
    }
}

/// A callback taking an argument list and returning an [`Outcome`].
pub struct Block<'a> {
    body: Box<dyn FnMut(&[Value]) -> Outcome<Value> + 'a>,
}

impl<'a> Block<'a> {
    /// Creates a block from a closure over the raw argument list.
    ///
    /// The closure may fail; its error unwinds the enclosing combinator.
    pub fn new<F>(body: F) -> Self
    where
        F: FnMut(&[Value]) -> Outcome<Value> + 'a,
    {
        Self {
            body: Box::new(body),
        }
    }

    /// Creates a block receiving the collapsed argument list.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::block::Block;
    /// use enumerable::control::ControlSignal;
    /// use enumerable::value::Value;
    ///
    /// let mut stop_at_two = Block::unary(|value| {
    ///     if value == Value::from(2) {
    ///         ControlSignal::Break(Value::symbol("stopped"))
    ///     } else {
    ///         ControlSignal::Continue(value)
    ///     }
    /// });
    /// assert!(stop_at_two.call(&[Value::from(2)]).unwrap().is_break());
    /// ```
    pub fn unary<F>(mut body: F) -> Self
    where
        F: FnMut(Value) -> ControlSignal<Value> + 'a,
    {
        Self::new(move |arguments| Ok(body(collapse(arguments))))
    }

    /// Creates a block receiving the first two arguments; missing ones are `Nil`.
    pub fn binary<F>(mut body: F) -> Self
    where
        F: FnMut(Value, Value) -> ControlSignal<Value> + 'a,
    {
        Self::new(move |arguments| {
            let left = arguments.first().cloned().unwrap_or_default();
            let right = arguments.get(1).cloned().unwrap_or_default();
            Ok(body(left, right))
        })
    }

    /// Creates a block from a predicate that never breaks.
    pub fn predicate<F>(mut body: F) -> Self
    where
        F: FnMut(&Value) -> bool + 'a,
    {
        Self::new(move |arguments| Ok(ControlSignal::Continue(Value::Bool(body(&collapse(arguments))))))
    }

    /// Creates a block from a transform that never breaks.
    pub fn function<F>(mut body: F) -> Self
    where
        F: FnMut(Value) -> Value + 'a,
    {
        Self::new(move |arguments| Ok(ControlSignal::Continue(body(collapse(arguments)))))
    }

    /// Creates a three-way comparator block from a closure returning an ordering.
    pub fn comparator<F>(mut body: F) -> Self
    where
        F: FnMut(&Value, &Value) -> std::cmp::Ordering + 'a,
    {
        Self::new(move |arguments| match arguments {
            [left, right, ..] => Ok(ControlSignal::Continue(Value::from(body(left, right)))),
            _ => Ok(ControlSignal::Continue(Value::Nil)),
        })
    }

    /// Invokes the block with `arguments`.
    ///
    /// # Errors
    ///
    /// Returns whatever error the block raises.
    #[inline]
    pub fn call(&mut self, arguments: &[Value]) -> Outcome<Value> {
        (self.body)(arguments)
    }

    /// Invokes the block with a single argument.
    ///
    /// # Errors
    ///
    /// Returns whatever error the block raises.
    #[inline]
    pub fn call_with(&mut self, value: &Value) -> Outcome<Value> {
        self.call(std::slice::from_ref(value))
    }

    /// Returns a block that forwards every call to this one.
    pub fn reborrow(&mut self) -> Block<'_> {
        Block::new(move |arguments| self.call(arguments))
    }
}

impl fmt::Debug for Block<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("Block(<function>)")
    }
}
