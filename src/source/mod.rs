//! Iteration sources - the single primitive every combinator is built on.
//!
//! An [`IterationSource`] visits each of its elements by calling a block,
//! synchronously and in source-defined order. If the block answers with
//! `Break`, the source stops immediately and returns that signal.
//!
//! # Laws
//!
//! - **Relay**: a `Break` returned by the block is the result of `each`, and no
//!   further element is visited.
//! - **Order**: elements are delivered in the same order on every call, for
//!   sources that can be enumerated more than once.
//!
//! # Examples
//!
//! ```rust
//! use enumerable::block::Block;
//! use enumerable::control::ControlSignal;
//! use enumerable::source::IterationSource;
//! use enumerable::value::Value;
//!
//! let source = vec![Value::from(1), Value::from(2), Value::from(3)];
//! let mut seen = Vec::new();
//! let signal = source
//!     .each(&[], &mut Block::unary(|value| {
//!         seen.push(value.clone());
//!         if value == Value::from(2) {
//!             ControlSignal::Break(Value::symbol("done"))
//!         } else {
//!             ControlSignal::Continue(Value::Nil)
//!         }
//!     }))
//!     .unwrap();
//!
//! assert_eq!(signal, ControlSignal::Break(Value::symbol("done")));
//! assert_eq!(seen, vec![Value::from(1), Value::from(2)]);
//! ```

mod function;
mod pairs;

pub use function::FnSource;
pub use pairs::Pairs;

use std::ops::{Range, RangeInclusive};
use std::rc::Rc;

use crate::block::Block;
use crate::control::{ControlSignal, Outcome};
use crate::proceed;
use crate::value::Value;

/// A value exposing a push-style "visit each element" primitive.
///
/// `arguments` are extra arguments forwarded by the caller (for example the
/// bound arguments of an [`Enumerator`](crate::enumerator::Enumerator));
/// sources that take none ignore them.
pub trait IterationSource {
    /// Calls `block` once per element, in order, stopping at the first `Break`.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the block or by the source itself.
    fn each(&self, arguments: &[Value], block: &mut Block<'_>) -> Outcome<Value>;
}

impl IterationSource for [Value] {
    fn each(&self, _arguments: &[Value], block: &mut Block<'_>) -> Outcome<Value> {
        for item in self {
            proceed!(block.call_with(item)?);
        }
        Ok(ControlSignal::Continue(Value::Nil))
    }
}

impl IterationSource for Vec<Value> {
    fn each(&self, arguments: &[Value], block: &mut Block<'_>) -> Outcome<Value> {
        self.as_slice().each(arguments, block)
    }
}

impl<const N: usize> IterationSource for [Value; N] {
    fn each(&self, arguments: &[Value], block: &mut Block<'_>) -> Outcome<Value> {
        self.as_slice().each(arguments, block)
    }
}

impl IterationSource for Range<i64> {
    fn each(&self, _arguments: &[Value], block: &mut Block<'_>) -> Outcome<Value> {
        for number in self.clone() {
            proceed!(block.call_with(&Value::Integer(number))?);
        }
        Ok(ControlSignal::Continue(Value::Nil))
    }
}

impl IterationSource for RangeInclusive<i64> {
    fn each(&self, _arguments: &[Value], block: &mut Block<'_>) -> Outcome<Value> {
        for number in self.clone() {
            proceed!(block.call_with(&Value::Integer(number))?);
        }
        Ok(ControlSignal::Continue(Value::Nil))
    }
}

impl<S: IterationSource + ?Sized> IterationSource for &S {
    fn each(&self, arguments: &[Value], block: &mut Block<'_>) -> Outcome<Value> {
        (**self).each(arguments, block)
    }
}

impl<S: IterationSource + ?Sized> IterationSource for Rc<S> {
    fn each(&self, arguments: &[Value], block: &mut Block<'_>) -> Outcome<Value> {
        (**self).each(arguments, block)
    }
}

impl<S: IterationSource + ?Sized> IterationSource for Box<S> {
    fn each(&self, arguments: &[Value], block: &mut Block<'_>) -> Outcome<Value> {
        (**self).each(arguments, block)
    }
}
