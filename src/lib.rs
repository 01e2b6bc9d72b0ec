//! # enumerable
//!
//! Push-style iteration combinators with non-local early exit.
//!
//! ## Overview
//!
//! Any value that can visit its elements by calling a block implements
//! [`IterationSource`](source::IterationSource). On top of that single
//! primitive, the [`Enumerable`](enumerable::Enumerable) extension trait
//! provides the familiar combinators: `map`, `select`, `inject`, `sort_by`,
//! `each_slice`, `cycle`, `zip`, and the rest.
//!
//! Every callback answers with a [`ControlSignal`](control::ControlSignal):
//! `Continue(value)` or `Break(value)`. A `Break` unwinds the whole
//! combinator, at any nesting depth, and its value becomes the result.
//!
//! - **Values**: [`Value`](value::Value), a dynamic element type with
//!   equality, ordering, case equality and binary operators
//! - **Blocks**: [`Block`](block::Block), the callback capability
//! - **Sources**: vectors, slices, ranges, key/value [`Pairs`](source::Pairs),
//!   closures ([`FnSource`](source::FnSource)) and enumerators
//! - **Sorting**: [`SortEngine`](sort::SortEngine), a merge sort whose
//!   comparator may break
//! - **Enumerators**: [`Enumerator`](enumerator::Enumerator), a restartable
//!   deferred enumeration
//!
//! ## Feature Flags
//!
//! - `serde`: Serialize/Deserialize for values and options
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use enumerable::prelude::*;
//!
//! let numbers: Vec<Value> = (1..=5).map(Value::from).collect();
//!
//! let (even, odd) = numbers
//!     .partition(Block::predicate(|value| value.as_integer().is_some_and(|n| n % 2 == 0)))
//!     .unwrap()
//!     .continue_value()
//!     .unwrap();
//! assert_eq!(even, vec![Value::from(2), Value::from(4)]);
//! assert_eq!(odd.len(), 3);
//!
//! let stopped = numbers.sort(Some(Block::new(|arguments| {
//!     if arguments.contains(&Value::from(1)) {
//!         Ok(ControlSignal::Break(Value::symbol("x")))
//!     } else {
//!         Ok(ControlSignal::Continue(Value::from(0)))
//!     }
//! })));
//! assert_eq!(stopped, Ok(ControlSignal::Break(Value::symbol("x"))));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::redundant_closure_for_method_calls)]
#![allow(clippy::module_name_repetitions)]

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```rust
/// use enumerable::prelude::*;
/// ```
pub mod prelude {
    pub use crate::block::{Args, Block, collapse};
    pub use crate::config::{Cycles, SliceOptions};
    pub use crate::control::{ControlSignal, Either, Outcome};
    pub use crate::enumerable::{Enumerable, Reducer};
    pub use crate::enumerator::{Enumerator, Method};
    pub use crate::error::EnumerableError;
    pub use crate::proceed;
    pub use crate::sort::{Comparator, SortEngine};
    pub use crate::source::{FnSource, IterationSource, Pairs};
    pub use crate::value::{BinaryOperator, FnPattern, Kind, Pattern, Value};
}

pub mod block;
pub mod config;
pub mod control;
pub mod enumerable;
pub mod enumerator;
pub mod error;
pub mod sort;
pub mod source;
pub mod value;

pub use error::EnumerableError;
