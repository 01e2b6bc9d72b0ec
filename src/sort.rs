//! Comparator-driven sorting with an escapable comparator.
//!
//! The comparator is either the natural order of [`Value`] or a block
//! returning a three-way result. A block may also answer with `Break`, which
//! aborts the entire sort: the result of the sort is the broken value, never
//! a partially sorted sequence. A comparison that cannot be reduced to a
//! three-way result is a [`EnumerableError::Comparison`].
//!
//! Internally the sort unwinds through an `Abort` that is converted back
//! into an [`Outcome`] at the public boundary.
//!
//! # Examples
//!
//! ```rust
//! use enumerable::block::Block;
//! use enumerable::control::ControlSignal;
//! use enumerable::sort::SortEngine;
//! use enumerable::value::Value;
//!
//! let items = vec![Value::from(3), Value::from(1), Value::from(2)];
//!
//! let sorted = SortEngine::natural().sort(&items).unwrap();
//! assert_eq!(sorted, ControlSignal::Continue(vec![Value::from(1), Value::from(2), Value::from(3)]));
//!
//! let aborted = SortEngine::with_block(Block::binary(|left, right| {
//!     if left == Value::from(1) || right == Value::from(1) {
//!         ControlSignal::Break(Value::symbol("x"))
//!     } else {
//!         ControlSignal::Continue(Value::from(0))
//!     }
//! }))
//! .sort(&items)
//! .unwrap();
//! assert_eq!(aborted, ControlSignal::Break(Value::symbol("x")));
//! ```

use std::cmp::Ordering;

use crate::block::Block;
use crate::control::{ControlSignal, Outcome};
use crate::error::EnumerableError;
use crate::proceed;
use crate::value::Value;

/// Runs of at most this length use insertion sort.
const INSERTION_THRESHOLD: usize = 8;

/// A three-way comparison capability: natural order, or a block.
#[derive(Debug, Default)]
pub struct Comparator<'a> {
    block: Option<Block<'a>>,
}

impl<'a> Comparator<'a> {
    /// Compares by [`Value::compare`].
    pub const fn natural() -> Self {
        Self { block: None }
    }

    /// Compares by calling `block` with `(left, right)`.
    pub const fn with_block(block: Block<'a>) -> Self {
        Self { block: Some(block) }
    }

    /// Compares `left` with `right`.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerableError::Comparison`] if the values are not
    /// comparable or the block's answer is not a three-way result, and any
    /// error the block raises.
    pub fn compare(&mut self, left: &Value, right: &Value) -> Outcome<Ordering> {
        let ordering = match &mut self.block {
            Some(block) => proceed!(block.call(&[left.clone(), right.clone()])?).to_ordering(),
            None => left.compare(right),
        };
        ordering
            .map(ControlSignal::Continue)
            .ok_or_else(|| EnumerableError::comparison(left, right))
    }
}

impl<'a> From<Option<Block<'a>>> for Comparator<'a> {
    fn from(block: Option<Block<'a>>) -> Self {
        Self { block }
    }
}

/// Early exit from inside the sort routine.
enum Abort {
    Break(Value),
    Error(EnumerableError),
}

impl From<EnumerableError> for Abort {
    fn from(error: EnumerableError) -> Self {
        Self::Error(error)
    }
}

/// Converts a comparator outcome into the internal unwinding form.
fn escape(outcome: Outcome<Ordering>) -> Result<Ordering, Abort> {
    match outcome? {
        ControlSignal::Continue(ordering) => Ok(ordering),
        ControlSignal::Break(value) => Err(Abort::Break(value)),
    }
}

/// Converts the internal unwinding form back at the sort boundary.
fn settle<T>(result: Result<T, Abort>) -> Outcome<T> {
    match result {
        Ok(value) => Ok(ControlSignal::Continue(value)),
        Err(Abort::Break(value)) => {
            tracing::trace!(value = %value, "sort aborted by break");
            Ok(ControlSignal::Break(value))
        }
        Err(Abort::Error(error)) => Err(error),
    }
}

/// Sorts sequences of values with a [`Comparator`].
///
/// Mutating and non-mutating variants share the same routine. Stability is
/// not part of the contract.
#[derive(Debug, Default)]
pub struct SortEngine<'a> {
    comparator: Comparator<'a>,
}

impl<'a> SortEngine<'a> {
    /// Creates an engine comparing by natural order.
    pub const fn natural() -> Self {
        Self {
            comparator: Comparator::natural(),
        }
    }

    /// Creates an engine comparing with `block`.
    pub const fn with_block(block: Block<'a>) -> Self {
        Self {
            comparator: Comparator::with_block(block),
        }
    }

    /// Creates an engine from an explicit comparator.
    pub const fn new(comparator: Comparator<'a>) -> Self {
        Self { comparator }
    }

    /// Returns a sorted copy of `items`.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerableError::Comparison`] on the first comparison that
    /// fails, and any error the comparator block raises.
    pub fn sort(&mut self, items: &[Value]) -> Outcome<Vec<Value>> {
        let comparator = &mut self.comparator;
        settle(merge_sort(items.to_vec(), &mut |left: &Value, right: &Value| {
            escape(comparator.compare(left, right))
        }))
    }

    /// Sorts `items` in place.
    ///
    /// On `Break` or error, `items` is left untouched.
    ///
    /// # Errors
    ///
    /// Same as [`SortEngine::sort`].
    pub fn sort_in_place(&mut self, items: &mut Vec<Value>) -> Outcome<()> {
        let sorted = proceed!(self.sort(items)?);
        *items = sorted;
        Ok(ControlSignal::Continue(()))
    }

    /// Sorts `(key, item)` pairs by key and returns the items in key order.
    ///
    /// # Errors
    ///
    /// Same as [`SortEngine::sort`], applied to the keys.
    pub fn sort_by_keys(&mut self, pairs: Vec<(Value, Value)>) -> Outcome<Vec<Value>> {
        let comparator = &mut self.comparator;
        let sorted = settle(merge_sort(pairs, &mut |left: &(Value, Value), right: &(Value, Value)| {
            escape(comparator.compare(&left.0, &right.0))
        }))?;
        Ok(sorted.map_continue(|pairs| pairs.into_iter().map(|(_, item)| item).collect()))
    }
}

fn merge_sort<T, F>(mut items: Vec<T>, compare: &mut F) -> Result<Vec<T>, Abort>
where
    F: FnMut(&T, &T) -> Result<Ordering, Abort>,
{
    if items.len() <= INSERTION_THRESHOLD {
        insertion_sort(&mut items, compare)?;
        return Ok(items);
    }
    let right = items.split_off(items.len() / 2);
    let left = merge_sort(items, compare)?;
    let right = merge_sort(right, compare)?;
    merge(left, right, compare)
}

fn insertion_sort<T, F>(items: &mut [T], compare: &mut F) -> Result<(), Abort>
where
    F: FnMut(&T, &T) -> Result<Ordering, Abort>,
{
    for index in 1..items.len() {
        let mut position = index;
        while position > 0 && compare(&items[position - 1], &items[position])? == Ordering::Greater {
            items.swap(position - 1, position);
            position -= 1;
        }
    }
    Ok(())
}

fn merge<T, F>(left: Vec<T>, right: Vec<T>, compare: &mut F) -> Result<Vec<T>, Abort>
where
    F: FnMut(&T, &T) -> Result<Ordering, Abort>,
{
    let mut merged = Vec::with_capacity(left.len() + right.len());
    let mut left = left.into_iter().peekable();
    let mut right = right.into_iter().peekable();
    loop {
        let ordering = match (left.peek(), right.peek()) {
            (Some(left_item), Some(right_item)) => compare(left_item, right_item)?,
            _ => break,
        };
        let next = if ordering == Ordering::Greater {
            right.next()
        } else {
            left.next()
        };
        merged.extend(next);
    }
    merged.extend(left);
    merged.extend(right);
    Ok(merged)
}
