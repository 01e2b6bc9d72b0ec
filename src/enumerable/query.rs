//! Predicates, membership, counting, and search.

use super::{halt, next, visit};
use crate::block::{Block, collapse};
use crate::control::{ControlSignal, Outcome};
use crate::proceed;
use crate::source::IterationSource;
use crate::value::Value;

/// Evaluates the predicate (or the element's own truthiness) for one element.
macro_rules! verdict {
    ($predicate:expr, $arguments:expr) => {
        match $predicate.as_mut() {
            Some(block) => proceed!(block.call($arguments)?),
            None => collapse($arguments),
        }
    };
}

/// Shared body of `all?`, `any?` and `none?`.
///
/// The first element whose truthiness equals `stop_on` decides the result as
/// `decided`; if no element does, the result is `!decided`.
pub(crate) fn quantify<S>(
    source: &S,
    mut predicate: Option<Block<'_>>,
    stop_on: bool,
    decided: bool,
) -> Outcome<bool>
where
    S: IterationSource + ?Sized,
{
    let mut result = !decided;
    proceed!(visit(source, |arguments| {
        if verdict!(predicate, arguments).is_truthy() == stop_on {
            result = decided;
            return halt();
        }
        next()
    })?);
    Ok(ControlSignal::Continue(result))
}

pub(crate) fn one<S>(source: &S, mut predicate: Option<Block<'_>>) -> Outcome<bool>
where
    S: IterationSource + ?Sized,
{
    let mut matches = 0_usize;
    proceed!(visit(source, |arguments| {
        if verdict!(predicate, arguments).is_truthy() {
            matches += 1;
            if matches > 1 {
                return halt();
            }
        }
        next()
    })?);
    Ok(ControlSignal::Continue(matches == 1))
}

pub(crate) fn include<S>(source: &S, value: &Value) -> Outcome<bool>
where
    S: IterationSource + ?Sized,
{
    let mut found = false;
    proceed!(visit(source, |arguments| {
        if collapse(arguments) == *value {
            found = true;
            return halt();
        }
        next()
    })?);
    Ok(ControlSignal::Continue(found))
}

pub(crate) fn count<S>(source: &S) -> Outcome<usize>
where
    S: IterationSource + ?Sized,
{
    let mut total = 0_usize;
    proceed!(visit(source, |_| {
        total += 1;
        next()
    })?);
    Ok(ControlSignal::Continue(total))
}

pub(crate) fn count_of<S>(source: &S, value: &Value) -> Outcome<usize>
where
    S: IterationSource + ?Sized,
{
    let mut total = 0_usize;
    proceed!(visit(source, |arguments| {
        if collapse(arguments) == *value {
            total += 1;
        }
        next()
    })?);
    Ok(ControlSignal::Continue(total))
}

pub(crate) fn count_where<S>(source: &S, mut predicate: Block<'_>) -> Outcome<usize>
where
    S: IterationSource + ?Sized,
{
    let mut total = 0_usize;
    proceed!(visit(source, |arguments| {
        if proceed!(predicate.call(arguments)?).is_truthy() {
            total += 1;
        }
        next()
    })?);
    Ok(ControlSignal::Continue(total))
}

pub(crate) fn find<S>(
    source: &S,
    mut predicate: Block<'_>,
    if_none: Option<Block<'_>>,
) -> Outcome<Value>
where
    S: IterationSource + ?Sized,
{
    let mut found = None;
    proceed!(visit(source, |arguments| {
        if proceed!(predicate.call(arguments)?).is_truthy() {
            found = Some(collapse(arguments));
            return halt();
        }
        next()
    })?);
    match (found, if_none) {
        (Some(item), _) => Ok(ControlSignal::Continue(item)),
        (None, Some(mut fallback)) => fallback.call(&[]),
        (None, None) => Ok(ControlSignal::Continue(Value::Nil)),
    }
}

pub(crate) fn find_index<S>(source: &S, mut predicate: Block<'_>) -> Outcome<Option<usize>>
where
    S: IterationSource + ?Sized,
{
    let mut index = 0_usize;
    let mut found = None;
    proceed!(visit(source, |arguments| {
        if proceed!(predicate.call(arguments)?).is_truthy() {
            found = Some(index);
            return halt();
        }
        index += 1;
        next()
    })?);
    Ok(ControlSignal::Continue(found))
}

pub(crate) fn find_index_of<S>(source: &S, value: &Value) -> Outcome<Option<usize>>
where
    S: IterationSource + ?Sized,
{
    let mut index = 0_usize;
    let mut found = None;
    proceed!(visit(source, |arguments| {
        if collapse(arguments) == *value {
            found = Some(index);
            return halt();
        }
        index += 1;
        next()
    })?);
    Ok(ControlSignal::Continue(found))
}
