//! Block-taking operations an [`Enumerator`](super::Enumerator) can defer.

use std::fmt;

use crate::block::{Args, Block};
use crate::config::{Cycles, SliceOptions};
use crate::control::Outcome;
use crate::enumerable::Enumerable;
use crate::source::IterationSource;
use crate::value::Value;

/// A block-taking combinator together with its bound arguments.
///
/// The block is supplied later, each time the enumerator runs.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum Method {
    /// The source's own `each`, with extra arguments forwarded to it.
    Each(Args),
    /// [`Enumerable::map`].
    Map,
    /// [`Enumerable::select`].
    Select,
    /// [`Enumerable::reject`].
    Reject,
    /// [`Enumerable::find`] without an `if_none` fallback.
    Find,
    /// [`Enumerable::find_index`].
    FindIndex,
    /// [`Enumerable::find_index_of`]; the block is ignored.
    FindIndexOf(Value),
    /// [`Enumerable::each_with_index`].
    EachWithIndex,
    /// [`Enumerable::partition`].
    Partition,
    /// [`Enumerable::take_while`].
    TakeWhile,
    /// [`Enumerable::drop_while`].
    DropWhile,
    /// [`Enumerable::cycle`].
    Cycle(Cycles),
    /// [`Enumerable::each_slice`].
    EachSlice(i64),
    /// [`Enumerable::each_cons`].
    EachCons(i64),
    /// [`Enumerable::sort`] with the block as comparator.
    Sort,
    /// [`Enumerable::sort_by`].
    SortBy,
    /// [`Enumerable::min`] with the block as comparator.
    Min,
    /// [`Enumerable::max`] with the block as comparator.
    Max,
    /// [`Enumerable::minmax`] with the block as comparator.
    MinMax,
    /// [`Enumerable::count_where`].
    Count,
    /// [`Enumerable::count_of`]; the block is ignored.
    CountOf(Value),
    /// [`Enumerable::all`].
    All,
    /// [`Enumerable::any`].
    Any,
    /// [`Enumerable::none`].
    NoneMatch,
    /// [`Enumerable::one`].
    One,
    /// [`Enumerable::inject`] with the block as reducer.
    Inject(Option<Value>),
    /// [`Enumerable::zip_with`].
    Zip(Vec<Vec<Value>>),
}

impl Method {
    /// Returns the combinator's name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Each(_) => "each",
            Self::Map => "map",
            Self::Select => "select",
            Self::Reject => "reject",
            Self::Find => "find",
            Self::FindIndex | Self::FindIndexOf(_) => "find_index",
            Self::EachWithIndex => "each_with_index",
            Self::Partition => "partition",
            Self::TakeWhile => "take_while",
            Self::DropWhile => "drop_while",
            Self::Cycle(_) => "cycle",
            Self::EachSlice(_) => "each_slice",
            Self::EachCons(_) => "each_cons",
            Self::Sort => "sort",
            Self::SortBy => "sort_by",
            Self::Min => "min",
            Self::Max => "max",
            Self::MinMax => "minmax",
            Self::Count | Self::CountOf(_) => "count",
            Self::All => "all?",
            Self::Any => "any?",
            Self::NoneMatch => "none?",
            Self::One => "one?",
            Self::Inject(_) => "inject",
            Self::Zip(_) => "zip",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.name())?;
        match self {
            Self::Each(arguments) if !arguments.is_empty() => {
                formatter.write_str("(")?;
                for (index, argument) in arguments.iter().enumerate() {
                    if index > 0 {
                        formatter.write_str(", ")?;
                    }
                    write!(formatter, "{argument}")?;
                }
                formatter.write_str(")")
            }
            Self::EachSlice(size) | Self::EachCons(size) => write!(formatter, "({size})"),
            Self::Cycle(Cycles::Times(count)) => write!(formatter, "({count})"),
            Self::FindIndexOf(value) | Self::CountOf(value) => write!(formatter, "({value})"),
            Self::Inject(Some(initial)) => write!(formatter, "({initial})"),
            _ => Ok(()),
        }
    }
}

fn erase<T: Into<Value>>(outcome: Outcome<T>) -> Outcome<Value> {
    outcome.map(|signal| signal.map_continue(Into::into))
}

/// Runs `method` on `source` with `block`, erasing the typed result into a [`Value`].
pub(crate) fn dispatch<S>(source: &S, method: &Method, mut block: Block<'_>) -> Outcome<Value>
where
    S: IterationSource + ?Sized,
{
    match method {
        Method::Each(arguments) => source.each(arguments, &mut block),
        Method::Map => erase(source.map(block)),
        Method::Select => erase(source.select(block)),
        Method::Reject => erase(source.reject(block)),
        Method::Find => source.find(block, None),
        Method::FindIndex => erase(source.find_index(block)),
        Method::FindIndexOf(value) => {
            tracing::warn!(method = %method, "given block not used");
            erase(source.find_index_of(value))
        }
        Method::EachWithIndex => erase(source.each_with_index(block)),
        Method::Partition => erase(source.partition(block)),
        Method::TakeWhile => erase(source.take_while(block)),
        Method::DropWhile => erase(source.drop_while(block)),
        Method::Cycle(cycles) => erase(source.cycle(*cycles, block)),
        Method::EachSlice(size) => erase(source.each_slice_with(*size, SliceOptions::default(), block)),
        Method::EachCons(size) => erase(source.each_cons(*size, block)),
        Method::Sort => erase(source.sort(Some(block))),
        Method::SortBy => erase(source.sort_by(Some(block))),
        Method::Min => source.min(Some(block)),
        Method::Max => source.max(Some(block)),
        Method::MinMax => erase(source.minmax(Some(block))),
        Method::Count => erase(source.count_where(block)),
        Method::CountOf(value) => {
            tracing::warn!(method = %method, "given block not used");
            erase(source.count_of(value))
        }
        Method::All => erase(source.all(Some(block))),
        Method::Any => erase(source.any(Some(block))),
        Method::NoneMatch => erase(source.none(Some(block))),
        Method::One => erase(source.one(Some(block))),
        Method::Inject(initial) => source.inject(initial.clone(), block),
        Method::Zip(others) => {
            let others: Vec<&[Value]> = others.iter().map(Vec::as_slice).collect();
            erase(source.zip_with(&others, block))
        }
    }
}
