//! Mapping, filtering, folding, and materialization.

use super::{Reducer, next, visit, visit_with};
use crate::block::{Block, collapse};
use crate::control::{ControlSignal, Outcome};
use crate::proceed;
use crate::source::IterationSource;
use crate::value::{Pattern, Value};

pub(crate) fn map<S>(source: &S, mut transform: Block<'_>) -> Outcome<Vec<Value>>
where
    S: IterationSource + ?Sized,
{
    let mut results = Vec::new();
    proceed!(visit(source, |arguments| {
        results.push(proceed!(transform.call(arguments)?));
        next()
    })?);
    Ok(ControlSignal::Continue(results))
}

pub(crate) fn each_with_index<S>(source: &S, mut block: Block<'_>) -> Outcome<()>
where
    S: IterationSource + ?Sized,
{
    let mut index = 0_usize;
    proceed!(visit(source, |arguments| {
        proceed!(block.call(&[collapse(arguments), Value::from(index)])?);
        index += 1;
        next()
    })?);
    Ok(ControlSignal::Continue(()))
}

pub(crate) fn to_a<S>(source: &S, arguments: &[Value]) -> Outcome<Vec<Value>>
where
    S: IterationSource + ?Sized,
{
    let mut items = Vec::new();
    proceed!(visit_with(source, arguments, |yielded| {
        items.push(collapse(yielded));
        next()
    })?);
    Ok(ControlSignal::Continue(items))
}

/// Keeps the elements whose predicate truthiness equals `keep`.
pub(crate) fn filter<S>(source: &S, mut predicate: Block<'_>, keep: bool) -> Outcome<Vec<Value>>
where
    S: IterationSource + ?Sized,
{
    let mut kept = Vec::new();
    proceed!(visit(source, |arguments| {
        if proceed!(predicate.call(arguments)?).is_truthy() == keep {
            kept.push(collapse(arguments));
        }
        next()
    })?);
    Ok(ControlSignal::Continue(kept))
}

pub(crate) fn grep<S, P>(source: &S, pattern: &P, mut action: Option<Block<'_>>) -> Outcome<Vec<Value>>
where
    S: IterationSource + ?Sized,
    P: Pattern + ?Sized,
{
    let mut matched = Vec::new();
    proceed!(visit(source, |arguments| {
        let item = collapse(arguments);
        if pattern.matches(&item) {
            let item = match action.as_mut() {
                Some(block) => proceed!(block.call_with(&item)?),
                None => item,
            };
            matched.push(item);
        }
        next()
    })?);
    Ok(ControlSignal::Continue(matched))
}

pub(crate) fn partition<S>(source: &S, mut predicate: Block<'_>) -> Outcome<(Vec<Value>, Vec<Value>)>
where
    S: IterationSource + ?Sized,
{
    let mut truthy = Vec::new();
    let mut falsy = Vec::new();
    proceed!(visit(source, |arguments| {
        let verdict = proceed!(predicate.call(arguments)?);
        let item = collapse(arguments);
        if verdict.is_truthy() {
            truthy.push(item);
        } else {
            falsy.push(item);
        }
        next()
    })?);
    Ok(ControlSignal::Continue((truthy, falsy)))
}

/// Builds the tuple for position `index`: the element, then each auxiliary
/// sequence's element at `index` or `Nil`.
fn tuple(item: Value, others: &[&[Value]], index: usize) -> Value {
    let mut tuple = Vec::with_capacity(others.len() + 1);
    tuple.push(item);
    tuple.extend(others.iter().map(|other| other.get(index).cloned().unwrap_or_default()));
    Value::Array(tuple)
}

pub(crate) fn zip<S>(source: &S, others: &[&[Value]]) -> Outcome<Vec<Value>>
where
    S: IterationSource + ?Sized,
{
    let mut tuples = Vec::new();
    proceed!(visit(source, |arguments| {
        tuples.push(tuple(collapse(arguments), others, tuples.len()));
        next()
    })?);
    Ok(ControlSignal::Continue(tuples))
}

pub(crate) fn zip_with<S>(source: &S, others: &[&[Value]], mut block: Block<'_>) -> Outcome<()>
where
    S: IterationSource + ?Sized,
{
    let mut index = 0_usize;
    proceed!(visit(source, |arguments| {
        proceed!(block.call_with(&tuple(collapse(arguments), others, index))?);
        index += 1;
        next()
    })?);
    Ok(ControlSignal::Continue(()))
}

pub(crate) fn inject<S>(source: &S, initial: Option<Value>, mut reducer: Reducer<'_>) -> Outcome<Value>
where
    S: IterationSource + ?Sized,
{
    let mut accumulator = initial;
    proceed!(visit(source, |arguments| {
        let value = collapse(arguments);
        let combined = match accumulator.take() {
            None => value,
            Some(current) => match &mut reducer {
                Reducer::Block(block) => proceed!(block.call(&[current, value])?),
                Reducer::Operator(operator) => operator.apply(&current, &value)?,
            },
        };
        accumulator = Some(combined);
        next()
    })?);
    Ok(ControlSignal::Continue(accumulator.unwrap_or_default()))
}
