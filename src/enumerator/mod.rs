//! Enumerator - "how to enumerate" as a value.
//!
//! An [`Enumerator`] defers running a source until its own `each` is
//! called. It captures a target and a [`Method`] (or an arbitrary closure)
//! and never a cursor, so every call to `each` replays the whole sequence
//! from the start.
//!
//! Because an enumerator is itself an [`IterationSource`], every
//! [`Enumerable`] combinator applies to it, and a `Break` raised at any
//! nesting level unwinds the whole chain.
//!
//! # Examples
//!
//! ```rust
//! use enumerable::block::Block;
//! use enumerable::control::ControlSignal;
//! use enumerable::enumerable::Enumerable;
//! use enumerable::value::Value;
//!
//! let numbers: Vec<Value> = (1..=5).map(Value::from).collect();
//! let slices = numbers.enum_slice(2);
//!
//! assert_eq!(
//!     slices.to_a(),
//!     Ok(ControlSignal::Continue(vec![
//!         Value::from(vec![1, 2]),
//!         Value::from(vec![3, 4]),
//!         Value::from(vec![5]),
//!     ]))
//! );
//! // Restartable: a second run yields the same sequence.
//! assert_eq!(slices.count(), Ok(ControlSignal::Continue(3)));
//! ```

mod method;

pub use method::Method;
pub(crate) use method::dispatch;

use std::fmt;
use std::rc::Rc;

use crate::block::Block;
use crate::control::Outcome;
use crate::enumerable::Enumerable;
use crate::source::IterationSource;
use crate::value::Value;

type Body = dyn Fn(&mut Block<'_>) -> Outcome<Value>;

/// An immutable, restartable description of an enumeration.
///
/// Cloning is cheap and shares the captured closure.
#[derive(Clone)]
pub struct Enumerator {
    body: Rc<Body>,
    label: Rc<str>,
}

static_assertions::assert_not_impl_any!(Enumerator: Send, Sync);

impl Enumerator {
    /// Creates an enumerator from a closure that feeds `block` each element.
    ///
    /// The closure must not keep a position between calls.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::control::ControlSignal;
    /// use enumerable::enumerable::Enumerable;
    /// use enumerable::enumerator::Enumerator;
    /// use enumerable::proceed;
    /// use enumerable::value::Value;
    ///
    /// let squares = Enumerator::from_fn(|block| {
    ///     for n in 1..=3_i64 {
    ///         proceed!(block.call_with(&Value::from(n * n))?);
    ///     }
    ///     Ok(ControlSignal::Continue(Value::Nil))
    /// });
    /// assert_eq!(
    ///     squares.to_a(),
    ///     Ok(ControlSignal::Continue(vec![Value::from(1), Value::from(4), Value::from(9)]))
    /// );
    /// ```
    pub fn from_fn<F>(body: F) -> Self
    where
        F: Fn(&mut Block<'_>) -> Outcome<Value> + 'static,
    {
        Self {
            body: Rc::new(body),
            label: Rc::from("from_fn"),
        }
    }

    /// Creates an enumerator that runs `method` on `target` each time it is
    /// enumerated, passing the caller's block through.
    pub fn for_method<S>(target: S, method: Method) -> Self
    where
        S: IterationSource + 'static,
    {
        let label = Rc::from(method.to_string());
        let enumerator = Self::from_fn(move |block| target.dispatch(&method, block.reborrow()));
        Self { label, ..enumerator }
    }

    /// Returns the name of the deferred operation.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Extra arguments are ignored; a [`Method::Each`] carries its own.
impl IterationSource for Enumerator {
    fn each(&self, _arguments: &[Value], block: &mut Block<'_>) -> Outcome<Value> {
        (self.body)(block)
    }
}

impl fmt::Debug for Enumerator {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.debug_tuple("Enumerator").field(&self.label).finish()
    }
}
