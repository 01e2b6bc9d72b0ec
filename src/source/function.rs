//! Closure-backed iteration sources.

use std::fmt;

use super::IterationSource;
use crate::block::Block;
use crate::control::Outcome;
use crate::value::Value;

/// An [`IterationSource`] whose `each` is a closure.
///
/// This is how foreign containers are adapted, and how instrumented sources
/// are built.
///
/// # Examples
///
/// ```rust
/// use std::cell::Cell;
/// use enumerable::block::Block;
/// use enumerable::control::{ControlSignal, Outcome};
/// use enumerable::enumerable::Enumerable;
/// use enumerable::proceed;
/// use enumerable::source::FnSource;
/// use enumerable::value::Value;
///
/// let calls = Cell::new(0);
/// let source = FnSource::new(|_arguments: &[Value], block: &mut Block<'_>| -> Outcome<Value> {
///     calls.set(calls.get() + 1);
///     for number in [10, 20] {
///         proceed!(block.call_with(&Value::from(number))?);
///     }
///     Ok(ControlSignal::Continue(Value::Nil))
/// });
///
/// assert_eq!(
///     source.to_a(),
///     Ok(ControlSignal::Continue(vec![Value::from(10), Value::from(20)]))
/// );
/// assert_eq!(calls.get(), 1);
/// ```
#[derive(Clone, Copy)]
pub struct FnSource<F>(F);

impl<F> FnSource<F>
where
    F: Fn(&[Value], &mut Block<'_>) -> Outcome<Value>,
{
    /// Wraps `each` as a source.
    pub const fn new(each: F) -> Self {
        Self(each)
    }
}

impl<F> IterationSource for FnSource<F>
where
    F: Fn(&[Value], &mut Block<'_>) -> Outcome<Value>,
{
    fn each(&self, arguments: &[Value], block: &mut Block<'_>) -> Outcome<Value> {
        (self.0)(arguments, block)
    }
}

impl<F> fmt::Debug for FnSource<F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("FnSource(<function>)")
    }
}
