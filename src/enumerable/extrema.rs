//! Extremes and ordering.
//!
//! Ties never replace the running extremum, so the earliest-seen element
//! wins among equals.

use std::cmp::Ordering;

use super::transform::to_a;
use super::{next, visit};
use crate::block::{Block, collapse};
use crate::control::{ControlSignal, Outcome};
use crate::error::EnumerableError;
use crate::proceed;
use crate::sort::{Comparator, SortEngine};
use crate::source::IterationSource;
use crate::value::Value;

/// Keeps the element that compares as `wanted` against every later one.
pub(crate) fn extreme<S>(source: &S, comparator: Option<Block<'_>>, wanted: Ordering) -> Outcome<Value>
where
    S: IterationSource + ?Sized,
{
    let mut comparator = Comparator::from(comparator);
    let mut result: Option<Value> = None;
    proceed!(visit(source, |arguments| {
        let item = collapse(arguments);
        let replace = match &result {
            None => true,
            Some(current) => proceed!(comparator.compare(&item, current)?) == wanted,
        };
        if replace {
            result = Some(item);
        }
        next()
    })?);
    Ok(ControlSignal::Continue(result.unwrap_or_default()))
}

pub(crate) fn minmax<S>(source: &S, comparator: Option<Block<'_>>) -> Outcome<(Value, Value)>
where
    S: IterationSource + ?Sized,
{
    let mut comparator = Comparator::from(comparator);
    let mut bounds: Option<(Value, Value)> = None;
    proceed!(visit(source, |arguments| {
        let item = collapse(arguments);
        if let Some((minimum, maximum)) = bounds.as_mut() {
            if proceed!(comparator.compare(&item, minimum)?) == Ordering::Less {
                *minimum = item.clone();
            }
            if proceed!(comparator.compare(&item, maximum)?) == Ordering::Greater {
                *maximum = item;
            }
        } else {
            bounds = Some((item.clone(), item));
        }
        next()
    })?);
    Ok(ControlSignal::Continue(bounds.unwrap_or_default()))
}

pub(crate) fn sort<S>(source: &S, comparator: Option<Block<'_>>) -> Outcome<Vec<Value>>
where
    S: IterationSource + ?Sized,
{
    let mut items = proceed!(to_a(source, &[])?);
    proceed!(SortEngine::new(Comparator::from(comparator)).sort_in_place(&mut items)?);
    Ok(ControlSignal::Continue(items))
}

/// Collects `(key, element)` pairs in one pass, then orders by key alone.
pub(crate) fn sort_by<S>(source: &S, mut key: Option<Block<'_>>) -> Outcome<Vec<Value>>
where
    S: IterationSource + ?Sized,
{
    let mut pairs = Vec::new();
    proceed!(visit(source, |arguments| {
        let Some(selector) = key.as_mut() else {
            return Err(EnumerableError::MissingBlock);
        };
        let selected = proceed!(selector.call(arguments)?);
        pairs.push((selected, collapse(arguments)));
        next()
    })?);
    SortEngine::natural().sort_by_keys(pairs)
}
