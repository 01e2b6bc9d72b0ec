//! Control values threaded through every callback and combinator.
//!
//! - [`ControlSignal`]: `Continue` or `Break`, the result of every callback
//! - [`Outcome`]: a [`ControlSignal`] or an [`EnumerableError`](crate::EnumerableError)
//! - [`Either`]: an enumerator or a materialized result
//! - [`proceed!`](crate::proceed): unwraps `Continue` or returns the `Break`
//!
//! # Examples
//!
//! ```rust
//! use enumerable::control::{ControlSignal, Outcome};
//! use enumerable::proceed;
//! use enumerable::value::Value;
//!
//! fn double(signal: ControlSignal<i64>) -> Outcome<i64> {
//!     let value = proceed!(signal);
//!     Ok(ControlSignal::Continue(value * 2))
//! }
//!
//! assert_eq!(double(ControlSignal::Continue(21)), Ok(ControlSignal::Continue(42)));
//! assert_eq!(
//!     double(ControlSignal::Break(Value::symbol("x"))),
//!     Ok(ControlSignal::Break(Value::symbol("x")))
//! );
//! ```

mod either;
mod signal;

pub use either::Either;
pub use signal::{ControlSignal, Outcome};
