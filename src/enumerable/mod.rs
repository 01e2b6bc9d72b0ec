//! Enumerable - the combinator library built on [`IterationSource`].
//!
//! Every operation here is a default method of [`Enumerable`], which is
//! implemented for every [`IterationSource`]. Each operation makes exactly
//! one pass over its source (`cycle` and `sort_by` buffer explicitly) and
//! obeys the same control-flow discipline:
//!
//! - a callback's `Break` is checked before its value is interpreted;
//! - once a callback breaks, iteration stops and the operation's result is
//!   the broken value, discarding any partial accumulation;
//! - errors unwind the operation immediately;
//! - results preserve source encounter order.
//!
//! # Examples
//!
//! ```rust
//! use enumerable::block::Block;
//! use enumerable::control::ControlSignal;
//! use enumerable::enumerable::Enumerable;
//! use enumerable::value::Value;
//!
//! let numbers: Vec<Value> = vec![1, 2, 3].into_iter().map(Value::from).collect();
//!
//! let doubled = numbers.map(Block::function(|value| match value {
//!     Value::Integer(n) => Value::from(n * 2),
//!     other => other,
//! }));
//! assert_eq!(doubled, Ok(ControlSignal::Continue(vec![Value::from(2), Value::from(4), Value::from(6)])));
//!
//! let stopped = numbers.map(Block::unary(|value| {
//!     if value == Value::from(2) {
//!         ControlSignal::Break(Value::symbol("stopped"))
//!     } else {
//!         ControlSignal::Continue(value)
//!     }
//! }));
//! assert_eq!(stopped, Ok(ControlSignal::Break(Value::symbol("stopped"))));
//! ```

mod extrema;
mod query;
mod transform;
mod window;

use std::cmp::Ordering;

use crate::block::Block;
use crate::config::{Cycles, SliceOptions};
use crate::control::{ControlSignal, Either, Outcome};
use crate::enumerator::{Enumerator, Method};
use crate::source::IterationSource;
use crate::value::{BinaryOperator, Pattern, Value};

/// What the internal visitor wants after one element.
pub(crate) enum Visit {
    /// Keep visiting.
    Next,
    /// The combinator has its answer; stop the source.
    Halt,
}

#[inline]
pub(crate) const fn next() -> Outcome<Visit> {
    Ok(ControlSignal::Continue(Visit::Next))
}

#[inline]
pub(crate) const fn halt() -> Outcome<Visit> {
    Ok(ControlSignal::Continue(Visit::Halt))
}

/// Runs `body` over every element of `source`, forwarding `arguments`.
///
/// A `Halt` from the body stops the source and is reported as `Continue`;
/// a `Break` from a user callback inside the body is relayed as `Break`.
pub(crate) fn visit_with<S, F>(source: &S, arguments: &[Value], mut body: F) -> Outcome<()>
where
    S: IterationSource + ?Sized,
    F: FnMut(&[Value]) -> Outcome<Visit>,
{
    let mut halted = false;
    let signal = source.each(
        arguments,
        &mut Block::new(|yielded| match body(yielded)? {
            ControlSignal::Continue(Visit::Next) => Ok(ControlSignal::Continue(Value::Nil)),
            ControlSignal::Continue(Visit::Halt) => {
                halted = true;
                Ok(ControlSignal::Break(Value::Nil))
            }
            ControlSignal::Break(value) => Ok(ControlSignal::Break(value)),
        }),
    )?;
    match signal {
        ControlSignal::Break(value) if !halted => {
            tracing::trace!(value = %value, "iteration broken");
            Ok(ControlSignal::Break(value))
        }
        _ => Ok(ControlSignal::Continue(())),
    }
}

/// [`visit_with`] without extra arguments.
pub(crate) fn visit<S, F>(source: &S, body: F) -> Outcome<()>
where
    S: IterationSource + ?Sized,
    F: FnMut(&[Value]) -> Outcome<Visit>,
{
    visit_with(source, &[], body)
}

/// How `inject` combines the accumulator with the next element.
#[derive(Debug)]
pub enum Reducer<'a> {
    /// Call a block with `(accumulator, element)`.
    Block(Block<'a>),
    /// Apply a binary operator to `(accumulator, element)`.
    Operator(BinaryOperator),
}

impl<'a> From<Block<'a>> for Reducer<'a> {
    fn from(block: Block<'a>) -> Self {
        Self::Block(block)
    }
}

impl From<BinaryOperator> for Reducer<'_> {
    fn from(operator: BinaryOperator) -> Self {
        Self::Operator(operator)
    }
}

/// Higher-order sequence operations over any [`IterationSource`].
///
/// # Examples
///
/// ```rust
/// use enumerable::block::Block;
/// use enumerable::control::ControlSignal;
/// use enumerable::enumerable::Enumerable;
/// use enumerable::value::{BinaryOperator, Value};
///
/// let numbers: Vec<Value> = (1..=4).map(Value::from).collect();
///
/// assert_eq!(numbers.inject(None, BinaryOperator::Add), Ok(ControlSignal::Continue(Value::from(10))));
/// assert_eq!(
///     numbers.inject(Some(Value::from(100)), BinaryOperator::Add),
///     Ok(ControlSignal::Continue(Value::from(110)))
/// );
/// ```
pub trait Enumerable: IterationSource {
    // =========================================================================
    // Predicates
    // =========================================================================

    /// Returns `true` if the predicate (or, without one, the element itself)
    /// is truthy for every element. Stops at the first falsy result.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the predicate or the source.
    fn all(&self, predicate: Option<Block<'_>>) -> Outcome<bool> {
        query::quantify(self, predicate, false, false)
    }

    /// Returns `true` if the predicate (or the element) is truthy for some
    /// element. Stops at the first truthy result.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the predicate or the source.
    fn any(&self, predicate: Option<Block<'_>>) -> Outcome<bool> {
        query::quantify(self, predicate, true, true)
    }

    /// Returns `true` if the predicate (or the element) is truthy for no
    /// element. Stops at the first truthy result.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the predicate or the source.
    fn none(&self, predicate: Option<Block<'_>>) -> Outcome<bool> {
        query::quantify(self, predicate, true, false)
    }

    /// Returns `true` if the predicate (or the element) is truthy for exactly
    /// one element. Stops at the second truthy result.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the predicate or the source.
    fn one(&self, predicate: Option<Block<'_>>) -> Outcome<bool> {
        query::one(self, predicate)
    }

    /// Returns `true` if some element equals `value`.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the source.
    fn include(&self, value: &Value) -> Outcome<bool> {
        query::include(self, value)
    }

    /// Alias for [`Enumerable::include`].
    ///
    /// # Errors
    ///
    /// See [`Enumerable::include`].
    fn member(&self, value: &Value) -> Outcome<bool> {
        self.include(value)
    }

    // =========================================================================
    // Counting and Search
    // =========================================================================

    /// Counts all elements.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the source.
    fn count(&self) -> Outcome<usize> {
        query::count(self)
    }

    /// Counts the elements equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the source.
    fn count_of(&self, value: &Value) -> Outcome<usize> {
        query::count_of(self, value)
    }

    /// Counts the elements for which `predicate` is truthy.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the predicate or the source.
    fn count_where(&self, predicate: Block<'_>) -> Outcome<usize> {
        query::count_where(self, predicate)
    }

    /// Returns the first element for which `predicate` is truthy.
    ///
    /// When nothing matches, calls `if_none` with no arguments and returns
    /// its result, or returns `Nil` if `if_none` is absent.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the predicate, `if_none`, or the source.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::block::Block;
    /// use enumerable::control::ControlSignal;
    /// use enumerable::enumerable::Enumerable;
    /// use enumerable::value::Value;
    ///
    /// let numbers: Vec<Value> = (1..=3).map(Value::from).collect();
    /// let over_five = || Block::predicate(|value| value.as_integer().is_some_and(|n| n > 5));
    ///
    /// assert_eq!(numbers.find(over_five(), None), Ok(ControlSignal::Continue(Value::Nil)));
    /// assert_eq!(
    ///     numbers.find(over_five(), Some(Block::function(|_| Value::from("none")))),
    ///     Ok(ControlSignal::Continue(Value::from("none")))
    /// );
    /// ```
    fn find(&self, predicate: Block<'_>, if_none: Option<Block<'_>>) -> Outcome<Value> {
        query::find(self, predicate, if_none)
    }

    /// Alias for [`Enumerable::find`].
    ///
    /// # Errors
    ///
    /// See [`Enumerable::find`].
    fn detect(&self, predicate: Block<'_>, if_none: Option<Block<'_>>) -> Outcome<Value> {
        self.find(predicate, if_none)
    }

    /// Returns the position of the first element for which `predicate` is truthy.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the predicate or the source.
    fn find_index(&self, predicate: Block<'_>) -> Outcome<Option<usize>> {
        query::find_index(self, predicate)
    }

    /// Returns the position of the first element equal to `value`.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the source.
    fn find_index_of(&self, value: &Value) -> Outcome<Option<usize>> {
        query::find_index_of(self, value)
    }

    // =========================================================================
    // Transformation
    // =========================================================================

    /// Returns `transform`'s result for each element, in order.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the transform or the source.
    fn map(&self, transform: Block<'_>) -> Outcome<Vec<Value>> {
        transform::map(self, transform)
    }

    /// Alias for [`Enumerable::map`].
    ///
    /// # Errors
    ///
    /// See [`Enumerable::map`].
    fn collect(&self, transform: Block<'_>) -> Outcome<Vec<Value>> {
        self.map(transform)
    }

    /// Calls `block` with each element and its position.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the block or the source.
    fn each_with_index(&self, block: Block<'_>) -> Outcome<()> {
        transform::each_with_index(self, block)
    }

    /// Materializes the elements in order.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the source.
    fn to_a(&self) -> Outcome<Vec<Value>> {
        transform::to_a(self, &[])
    }

    /// Materializes the elements, forwarding `arguments` to the source's `each`.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the source.
    fn to_a_with(&self, arguments: &[Value]) -> Outcome<Vec<Value>> {
        transform::to_a(self, arguments)
    }

    /// Alias for [`Enumerable::to_a`].
    ///
    /// # Errors
    ///
    /// See [`Enumerable::to_a`].
    fn entries(&self) -> Outcome<Vec<Value>> {
        self.to_a()
    }

    /// Returns the elements for which `predicate` is truthy.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the predicate or the source.
    fn select(&self, predicate: Block<'_>) -> Outcome<Vec<Value>> {
        transform::filter(self, predicate, true)
    }

    /// Alias for [`Enumerable::select`].
    ///
    /// # Errors
    ///
    /// See [`Enumerable::select`].
    fn find_all(&self, predicate: Block<'_>) -> Outcome<Vec<Value>> {
        self.select(predicate)
    }

    /// Returns the elements for which `predicate` is falsy.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the predicate or the source.
    fn reject(&self, predicate: Block<'_>) -> Outcome<Vec<Value>> {
        transform::filter(self, predicate, false)
    }

    /// [`Enumerable::select`], or a deferred [`Enumerator`] when no predicate
    /// is given.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use enumerable::block::Block;
    /// use enumerable::control::ControlSignal;
    /// use enumerable::enumerable::Enumerable;
    /// use enumerable::source::IterationSource;
    /// use enumerable::value::Value;
    ///
    /// let numbers: Vec<Value> = (1..=4).map(Value::from).collect();
    /// let deferred = numbers.select_or_enum(None).unwrap_left();
    ///
    /// let mut even = Block::predicate(|value| value.as_integer().is_some_and(|n| n % 2 == 0));
    /// assert_eq!(
    ///     deferred.each(&[], &mut even),
    ///     Ok(ControlSignal::Continue(Value::from(vec![2, 4])))
    /// );
    /// ```
    fn select_or_enum(&self, predicate: Option<Block<'_>>) -> Either<Enumerator, Outcome<Vec<Value>>>
    where
        Self: Clone + 'static,
    {
        match predicate {
            Some(predicate) => Either::Right(self.select(predicate)),
            None => Either::Left(self.enumerator(Method::Select)),
        }
    }

    /// [`Enumerable::reject`], or a deferred [`Enumerator`] when no predicate
    /// is given.
    fn reject_or_enum(&self, predicate: Option<Block<'_>>) -> Either<Enumerator, Outcome<Vec<Value>>>
    where
        Self: Clone + 'static,
    {
        match predicate {
            Some(predicate) => Either::Right(self.reject(predicate)),
            None => Either::Left(self.enumerator(Method::Reject)),
        }
    }

    /// Returns the elements matching `pattern`, transformed by `action` if given.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the action or the source.
    fn grep<P>(&self, pattern: &P, action: Option<Block<'_>>) -> Outcome<Vec<Value>>
    where
        P: Pattern + ?Sized,
    {
        transform::grep(self, pattern, action)
    }

    /// Splits the elements into `(truthy, falsy)` by `predicate`, in one pass.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the predicate or the source.
    fn partition(&self, predicate: Block<'_>) -> Outcome<(Vec<Value>, Vec<Value>)> {
        transform::partition(self, predicate)
    }

    /// Pairs each element with the elements at the same position in
    /// `others`, padding with `Nil`.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the source.
    fn zip(&self, others: &[&[Value]]) -> Outcome<Vec<Value>> {
        transform::zip(self, others)
    }

    /// Like [`Enumerable::zip`], but feeds each tuple to `block` and
    /// discards the results.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the block or the source.
    fn zip_with(&self, others: &[&[Value]], block: Block<'_>) -> Outcome<()> {
        transform::zip_with(self, others, block)
    }

    /// Folds the elements into an accumulator.
    ///
    /// Without `initial`, the first element seeds the accumulator; an empty
    /// source then yields `Nil`.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the reducer or the source.
    fn inject<'a>(&self, initial: Option<Value>, reducer: impl Into<Reducer<'a>>) -> Outcome<Value> {
        transform::inject(self, initial, reducer.into())
    }

    /// Alias for [`Enumerable::inject`].
    ///
    /// # Errors
    ///
    /// See [`Enumerable::inject`].
    fn reduce<'a>(&self, initial: Option<Value>, reducer: impl Into<Reducer<'a>>) -> Outcome<Value> {
        self.inject(initial, reducer)
    }

    // =========================================================================
    // Prefixes and Suffixes
    // =========================================================================

    /// Returns the first element, or `Nil` if there is none.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the source.
    fn first(&self) -> Outcome<Value> {
        window::first(self)
    }

    /// Returns the first `count` elements.
    ///
    /// `take(0)` never invokes the source.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerableError::Argument`](crate::EnumerableError::Argument)
    /// for a negative `count`, before any element is visited.
    fn take(&self, count: i64) -> Outcome<Vec<Value>> {
        window::take(self, count)
    }

    /// Returns the elements before the first one whose predicate is falsy.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the predicate or the source.
    fn take_while(&self, predicate: Block<'_>) -> Outcome<Vec<Value>> {
        window::take_while(self, predicate)
    }

    /// Returns the elements after the first `count`.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerableError::Argument`](crate::EnumerableError::Argument)
    /// for a negative `count`, before any element is visited.
    fn drop(&self, count: i64) -> Outcome<Vec<Value>> {
        window::drop_first(self, count)
    }

    /// Drops elements while `predicate` is truthy, then keeps the rest
    /// without calling it again.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the predicate or the source.
    fn drop_while(&self, predicate: Block<'_>) -> Outcome<Vec<Value>> {
        window::drop_while(self, predicate)
    }

    // =========================================================================
    // Repetition and Windows
    // =========================================================================

    /// Calls `block` for each element, `cycles` times over.
    ///
    /// The source is enumerated once; further passes replay a buffer. An
    /// empty source or a non-positive count returns at once.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the block or the source.
    fn cycle(&self, cycles: Cycles, block: Block<'_>) -> Outcome<()> {
        window::cycle(self, cycles, block)
    }

    /// Calls `block` with consecutive windows of `size` elements, including
    /// the trailing partial window.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerableError::Argument`](crate::EnumerableError::Argument)
    /// for a non-positive `size`, before any element is visited.
    fn each_slice(&self, size: i64, block: Block<'_>) -> Outcome<()> {
        window::each_slice(self, size, SliceOptions::default(), block)
    }

    /// [`Enumerable::each_slice`] with explicit [`SliceOptions`].
    ///
    /// # Errors
    ///
    /// See [`Enumerable::each_slice`].
    fn each_slice_with(&self, size: i64, options: SliceOptions, block: Block<'_>) -> Outcome<()> {
        window::each_slice(self, size, options, block)
    }

    /// Calls `block` with each overlapping window of `size` consecutive elements.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerableError::Argument`](crate::EnumerableError::Argument)
    /// for a non-positive `size`, before any element is visited.
    fn each_cons(&self, size: i64, block: Block<'_>) -> Outcome<()> {
        window::each_cons(self, size, block)
    }

    // =========================================================================
    // Extremes and Ordering
    // =========================================================================

    /// Returns the smallest element, or `Nil` for an empty source.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerableError::Comparison`](crate::EnumerableError::Comparison)
    /// when two elements cannot be compared.
    fn min(&self, comparator: Option<Block<'_>>) -> Outcome<Value> {
        extrema::extreme(self, comparator, Ordering::Less)
    }

    /// Returns the largest element, or `Nil` for an empty source.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerableError::Comparison`](crate::EnumerableError::Comparison)
    /// when two elements cannot be compared.
    fn max(&self, comparator: Option<Block<'_>>) -> Outcome<Value> {
        extrema::extreme(self, comparator, Ordering::Greater)
    }

    /// Returns `(min, max)` in a single pass; `(Nil, Nil)` for an empty source.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerableError::Comparison`](crate::EnumerableError::Comparison)
    /// when two elements cannot be compared.
    fn minmax(&self, comparator: Option<Block<'_>>) -> Outcome<(Value, Value)> {
        extrema::minmax(self, comparator)
    }

    /// Returns the elements sorted by `comparator`, or by natural order.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerableError::Comparison`](crate::EnumerableError::Comparison)
    /// on the first failed comparison.
    fn sort(&self, comparator: Option<Block<'_>>) -> Outcome<Vec<Value>> {
        extrema::sort(self, comparator)
    }

    /// Returns the elements ordered by the keys `key` selects.
    ///
    /// # Errors
    ///
    /// Returns [`EnumerableError::MissingBlock`](crate::EnumerableError::MissingBlock)
    /// if `key` is absent and the source has elements, and
    /// [`EnumerableError::Comparison`](crate::EnumerableError::Comparison)
    /// when two keys cannot be compared.
    fn sort_by(&self, key: Option<Block<'_>>) -> Outcome<Vec<Value>> {
        extrema::sort_by(self, key)
    }

    // =========================================================================
    // Enumerators
    // =========================================================================

    /// Returns an [`Enumerator`] that runs `method` on a copy of this source
    /// each time it is enumerated.
    fn enumerator(&self, method: Method) -> Enumerator
    where
        Self: Clone + 'static,
    {
        Enumerator::for_method(self.clone(), method)
    }

    /// An enumerator over the overlapping windows of `size`.
    fn enum_cons(&self, size: i64) -> Enumerator
    where
        Self: Clone + 'static,
    {
        self.enumerator(Method::EachCons(size))
    }

    /// An enumerator over the consecutive windows of `size`.
    fn enum_slice(&self, size: i64) -> Enumerator
    where
        Self: Clone + 'static,
    {
        self.enumerator(Method::EachSlice(size))
    }

    /// An enumerator yielding `(element, index)`.
    fn enum_with_index(&self) -> Enumerator
    where
        Self: Clone + 'static,
    {
        self.enumerator(Method::EachWithIndex)
    }

    /// Runs `method` with `block`, returning its result as a [`Value`].
    ///
    /// # Errors
    ///
    /// Returns whatever error the dispatched operation returns.
    fn dispatch(&self, method: &Method, block: Block<'_>) -> Outcome<Value> {
        crate::enumerator::dispatch(self, method, block)
    }
}

impl<S: IterationSource + ?Sized> Enumerable for S {}
