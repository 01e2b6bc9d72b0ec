//! Prefixes, suffixes, repetition, and fixed-size windows.

use std::collections::VecDeque;

use super::{halt, next, visit};
use crate::block::{Args, Block, collapse};
use crate::config::{Cycles, SliceOptions};
use crate::control::{ControlSignal, Outcome};
use crate::error::EnumerableError;
use crate::proceed;
use crate::source::IterationSource;
use crate::value::Value;

/// Validates a take/drop count before any element is visited.
fn element_count(count: i64, operation: &str) -> Result<usize, EnumerableError> {
    usize::try_from(count)
        .map_err(|_| EnumerableError::argument(format!("attempt to {operation} negative size")))
}

/// Validates a slice/cons window before any element is visited.
fn window_size(size: i64) -> Result<usize, EnumerableError> {
    match usize::try_from(size) {
        Ok(size) if size > 0 => Ok(size),
        _ => Err(EnumerableError::argument("invalid slice size")),
    }
}

pub(crate) fn first<S>(source: &S) -> Outcome<Value>
where
    S: IterationSource + ?Sized,
{
    let mut found = Value::Nil;
    proceed!(visit(source, |arguments| {
        found = collapse(arguments);
        halt()
    })?);
    Ok(ControlSignal::Continue(found))
}

pub(crate) fn take<S>(source: &S, count: i64) -> Outcome<Vec<Value>>
where
    S: IterationSource + ?Sized,
{
    let count = element_count(count, "take")?;
    let mut taken = Vec::new();
    if count == 0 {
        return Ok(ControlSignal::Continue(taken));
    }
    proceed!(visit(source, |arguments| {
        taken.push(collapse(arguments));
        if taken.len() == count {
            return halt();
        }
        next()
    })?);
    Ok(ControlSignal::Continue(taken))
}

pub(crate) fn take_while<S>(source: &S, mut predicate: Block<'_>) -> Outcome<Vec<Value>>
where
    S: IterationSource + ?Sized,
{
    let mut taken = Vec::new();
    proceed!(visit(source, |arguments| {
        if !proceed!(predicate.call(arguments)?).is_truthy() {
            return halt();
        }
        taken.push(collapse(arguments));
        next()
    })?);
    Ok(ControlSignal::Continue(taken))
}

pub(crate) fn drop_first<S>(source: &S, count: i64) -> Outcome<Vec<Value>>
where
    S: IterationSource + ?Sized,
{
    let mut remaining = element_count(count, "drop")?;
    let mut kept = Vec::new();
    proceed!(visit(source, |arguments| {
        if remaining > 0 {
            remaining -= 1;
        } else {
            kept.push(collapse(arguments));
        }
        next()
    })?);
    Ok(ControlSignal::Continue(kept))
}

pub(crate) fn drop_while<S>(source: &S, mut predicate: Block<'_>) -> Outcome<Vec<Value>>
where
    S: IterationSource + ?Sized,
{
    let mut dropping = true;
    let mut kept = Vec::new();
    proceed!(visit(source, |arguments| {
        if dropping {
            dropping = proceed!(predicate.call(arguments)?).is_truthy();
        }
        if !dropping {
            kept.push(collapse(arguments));
        }
        next()
    })?);
    Ok(ControlSignal::Continue(kept))
}

/// Invokes the source once; later passes replay the buffered argument lists.
pub(crate) fn cycle<S>(source: &S, cycles: Cycles, mut block: Block<'_>) -> Outcome<()>
where
    S: IterationSource + ?Sized,
{
    if cycles.is_empty() {
        return Ok(ControlSignal::Continue(()));
    }
    let buffering = cycles.repeats();
    let mut buffer: Vec<Args> = Vec::new();
    proceed!(visit(source, |arguments| {
        proceed!(block.call(arguments)?);
        if buffering {
            buffer.push(arguments.iter().cloned().collect());
        }
        next()
    })?);
    if buffer.is_empty() {
        return Ok(ControlSignal::Continue(()));
    }

    let mut replay = || -> Outcome<()> {
        for arguments in &buffer {
            proceed!(block.call(arguments)?);
        }
        Ok(ControlSignal::Continue(()))
    };
    match cycles {
        Cycles::Forever => loop {
            proceed!(replay()?);
        },
        Cycles::Times(count) => {
            for _ in 1..count {
                proceed!(replay()?);
            }
        }
    }
    Ok(ControlSignal::Continue(()))
}

pub(crate) fn each_slice<S>(
    source: &S,
    size: i64,
    options: SliceOptions,
    mut block: Block<'_>,
) -> Outcome<()>
where
    S: IterationSource + ?Sized,
{
    let size = window_size(size)?;
    let mut slice = Vec::new();
    proceed!(visit(source, |arguments| {
        slice.push(collapse(arguments));
        if slice.len() == size {
            let complete = std::mem::take(&mut slice);
            proceed!(block.call_with(&Value::Array(complete))?);
        }
        next()
    })?);
    if options.include_partial && !slice.is_empty() {
        proceed!(block.call_with(&Value::Array(slice))?);
    }
    Ok(ControlSignal::Continue(()))
}

pub(crate) fn each_cons<S>(source: &S, size: i64, mut block: Block<'_>) -> Outcome<()>
where
    S: IterationSource + ?Sized,
{
    let size = window_size(size)?;
    let mut window = VecDeque::new();
    proceed!(visit(source, |arguments| {
        window.push_back(collapse(arguments));
        if window.len() == size {
            let snapshot = Value::Array(window.iter().cloned().collect());
            window.pop_front();
            proceed!(block.call_with(&snapshot)?);
        }
        next()
    })?);
    Ok(ControlSignal::Continue(()))
}
