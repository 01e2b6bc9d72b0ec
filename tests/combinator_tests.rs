//! Integration tests for the Enumerable combinators.
//!
//! Covers early exit through `Break`, argument validation before any
//! element is visited, and the documented results of each combinator.

use std::cell::Cell;
use std::cmp::Ordering;
use std::rc::Rc;

use enumerable::prelude::*;
use rstest::{fixture, rstest};

// =============================================================================
// Helpers
// =============================================================================

fn values(items: &[i64]) -> Vec<Value> {
    items.iter().copied().map(Value::from).collect()
}

fn continued<T: std::fmt::Debug>(outcome: Outcome<T>) -> T {
    match outcome {
        Ok(ControlSignal::Continue(value)) => value,
        other => panic!("expected Continue, got {other:?}"),
    }
}

fn integer(value: &Value) -> i64 {
    value.as_integer().unwrap_or_default()
}

fn even() -> Block<'static> {
    Block::predicate(|value| integer(value) % 2 == 0)
}

fn stop_at<'a>(target: i64, payload: &'static str) -> Block<'a> {
    Block::unary(move |value| {
        if value == Value::from(target) {
            ControlSignal::Break(Value::symbol(payload))
        } else {
            ControlSignal::Continue(value)
        }
    })
}

/// A source over `items` that counts how many times `each` is invoked and
/// how many elements it delivers.
fn instrumented(
    items: Vec<Value>,
) -> (
    FnSource<impl Fn(&[Value], &mut Block<'_>) -> Outcome<Value> + Clone + 'static>,
    Rc<Cell<usize>>,
    Rc<Cell<usize>>,
) {
    let invocations = Rc::new(Cell::new(0));
    let delivered = Rc::new(Cell::new(0));
    let (invocation_counter, delivery_counter) = (Rc::clone(&invocations), Rc::clone(&delivered));
    let source = FnSource::new(move |_: &[Value], block: &mut Block<'_>| -> Outcome<Value> {
        invocation_counter.set(invocation_counter.get() + 1);
        for item in &items {
            delivery_counter.set(delivery_counter.get() + 1);
            proceed!(block.call_with(item)?);
        }
        Ok(ControlSignal::Continue(Value::Nil))
    });
    (source, invocations, delivered)
}

/// A source that fails if it is ever enumerated.
fn exploding() -> FnSource<impl Fn(&[Value], &mut Block<'_>) -> Outcome<Value>> {
    FnSource::new(|_: &[Value], _: &mut Block<'_>| -> Outcome<Value> {
        Err(EnumerableError::Raised("source was enumerated".to_string()))
    })
}

#[fixture]
fn numbers() -> Vec<Value> {
    values(&[1, 2, 3, 4, 5])
}

// =============================================================================
// Predicates
// =============================================================================

#[rstest]
#[case(values(&[2, 4]), true, true, false, false)]
#[case(values(&[1, 2]), false, true, false, true)]
#[case(values(&[1, 3]), false, false, true, false)]
#[case(values(&[]), true, false, true, false)]
fn test_quantifiers_with_predicate(
    #[case] source: Vec<Value>,
    #[case] all: bool,
    #[case] any: bool,
    #[case] none: bool,
    #[case] one: bool,
) {
    assert_eq!(continued(source.all(Some(even()))), all);
    assert_eq!(continued(source.any(Some(even()))), any);
    assert_eq!(continued(source.none(Some(even()))), none);
    assert_eq!(continued(source.one(Some(even()))), one);
}

#[rstest]
fn test_quantifiers_default_to_truthiness() {
    let source = vec![Value::from(1), Value::Nil, Value::Bool(false)];
    assert!(!continued(source.all(None)));
    assert!(continued(source.any(None)));
    assert!(!continued(source.none(None)));
    assert!(continued(source.one(None)));
}

#[rstest]
fn test_any_stops_at_first_truthy() {
    let (source, _, delivered) = instrumented(values(&[1, 2, 3, 4]));
    assert!(continued(source.any(Some(even()))));
    assert_eq!(delivered.get(), 2);
}

#[rstest]
fn test_one_stops_at_second_match() {
    let (source, _, delivered) = instrumented(values(&[2, 4, 6, 8]));
    assert!(!continued(source.one(Some(even()))));
    assert_eq!(delivered.get(), 2);
}

#[rstest]
fn test_predicate_break_wins_over_verdict(numbers: Vec<Value>) {
    assert_eq!(
        numbers.all(Some(stop_at(1, "early"))),
        Ok(ControlSignal::Break(Value::symbol("early")))
    );
}

#[rstest]
fn test_include_and_member(numbers: Vec<Value>) {
    assert!(continued(numbers.include(&Value::from(3))));
    assert!(continued(numbers.member(&Value::from(3.0))));
    assert!(!continued(numbers.include(&Value::from("3"))));
}

// =============================================================================
// Transformation
// =============================================================================

#[rstest]
fn test_map_doubles() {
    let doubled = values(&[1, 2, 3]).map(Block::function(|value| Value::from(integer(&value) * 2)));
    assert_eq!(continued(doubled), values(&[2, 4, 6]));
}

#[rstest]
fn test_map_break_discards_partial_result() {
    let result = values(&[1, 2, 3]).collect(Block::unary(|value| {
        if value == Value::from(2) {
            ControlSignal::Break(Value::symbol("stopped"))
        } else {
            ControlSignal::Continue(Value::from(integer(&value) * 2))
        }
    }));
    assert_eq!(result, Ok(ControlSignal::Break(Value::symbol("stopped"))));
}

#[rstest]
fn test_select_reject_partition(numbers: Vec<Value>) {
    let selected = continued(numbers.select(even()));
    let rejected = continued(numbers.reject(even()));
    assert_eq!(selected, values(&[2, 4]));
    assert_eq!(rejected, values(&[1, 3, 5]));
    assert_eq!(continued(numbers.partition(even())), (selected, rejected));
    assert_eq!(continued(numbers.find_all(even())), values(&[2, 4]));
}

#[rstest]
fn test_each_with_index_yields_positions() {
    let mut seen = Vec::new();
    let result = values(&[10, 20]).each_with_index(Block::binary(|item, index| {
        seen.push((item, index));
        ControlSignal::Continue(Value::Nil)
    }));
    continued(result);
    assert_eq!(
        seen,
        vec![
            (Value::from(10), Value::from(0)),
            (Value::from(20), Value::from(1))
        ]
    );
}

#[rstest]
fn test_grep_patterns() {
    let mixed = vec![
        Value::from(1),
        Value::from("two"),
        Value::from(3.5),
        Value::symbol("four"),
        Value::from(5),
    ];
    assert_eq!(
        continued(mixed.grep(&Kind::Integer, None)),
        values(&[1, 5])
    );
    assert_eq!(
        continued(mixed.grep(&Kind::Numeric, None)),
        vec![Value::from(1), Value::from(3.5), Value::from(5)]
    );
    assert_eq!(
        continued(mixed.grep(&(2_i64..=4), None)),
        vec![Value::from(3.5)]
    );
    assert_eq!(
        continued(mixed.grep(&Value::from("two"), Some(Block::function(|_| Value::from(2))))),
        values(&[2])
    );
    let short = FnPattern::new(|value: &Value| matches!(value, Value::Str(text) if text.len() <= 3));
    assert_eq!(continued(mixed.grep(&short, None)), vec![Value::from("two")]);
}

#[rstest]
#[case(None, 10)]
#[case(Some(100), 110)]
fn test_inject_with_operator(#[case] initial: Option<i64>, #[case] expected: i64) {
    let source = values(&[1, 2, 3, 4]);
    assert_eq!(
        continued(source.inject(initial.map(Value::from), BinaryOperator::Add)),
        Value::from(expected)
    );
}

#[rstest]
fn test_inject_with_block_and_empty_source() {
    let product = values(&[1, 2, 3, 4]).reduce(
        None,
        Block::binary(|left, right| ControlSignal::Continue(Value::from(integer(&left) * integer(&right)))),
    );
    assert_eq!(continued(product), Value::from(24));
    assert_eq!(
        continued(Vec::<Value>::new().inject(None, BinaryOperator::Add)),
        Value::Nil
    );
}

#[rstest]
fn test_inject_operator_errors() {
    let mixed = vec![Value::from(1), Value::from("a")];
    assert!(matches!(
        mixed.inject(None, BinaryOperator::Subtract),
        Err(EnumerableError::Operator { operator: "-", .. })
    ));
    let division = values(&[1, 0]).inject(None, BinaryOperator::Divide);
    assert_eq!(division, Err(EnumerableError::Raised("divided by 0".to_string())));
}

#[rstest]
fn test_inject_collapses_splatted_elements() {
    let pairs: Pairs = [("a", 1), ("b", 2)].into_iter().collect();
    let flattened = pairs.inject(Some(Value::from(Vec::<Value>::new())), BinaryOperator::Add);
    assert_eq!(
        continued(flattened),
        Value::from(vec![
            Value::from("a"),
            Value::from(1),
            Value::from("b"),
            Value::from(2)
        ])
    );
}

#[rstest]
fn test_map_sees_collapsed_pairs() {
    let pairs: Pairs = [("a", 1), ("b", 2)].into_iter().collect();
    assert_eq!(
        continued(pairs.map(Block::function(|pair| pair))),
        vec![Value::from(("a", 1)), Value::from(("b", 2))]
    );
    let keys = pairs.map(Block::new(|arguments| Ok(ControlSignal::Continue(arguments[0].clone()))));
    assert_eq!(continued(keys), vec![Value::from("a"), Value::from("b")]);
}

#[rstest]
fn test_zip_pads_with_nil() {
    let letters = vec![Value::from("a"), Value::from("b"), Value::from("c")];
    let short = values(&[10]);
    let zipped = values(&[1, 2]).zip(&[letters.as_slice(), short.as_slice()]);
    assert_eq!(
        continued(zipped),
        vec![
            Value::from(vec![Value::from(1), Value::from("a"), Value::from(10)]),
            Value::from(vec![Value::from(2), Value::from("b"), Value::Nil]),
        ]
    );
}

#[rstest]
fn test_zip_with_feeds_tuples() {
    let letters = vec![Value::from("a")];
    let mut tuples = Vec::new();
    let result = values(&[1, 2]).zip_with(
        &[letters.as_slice()],
        Block::unary(|tuple| {
            tuples.push(tuple);
            ControlSignal::Continue(Value::Nil)
        }),
    );
    continued(result);
    assert_eq!(
        tuples,
        vec![
            Value::from(vec![Value::from(1), Value::from("a")]),
            Value::from(vec![Value::from(2), Value::Nil]),
        ]
    );
}

#[rstest]
fn test_to_a_with_forwards_arguments() {
    let echo = FnSource::new(|arguments: &[Value], block: &mut Block<'_>| -> Outcome<Value> {
        for argument in arguments {
            proceed!(block.call_with(argument)?);
        }
        Ok(ControlSignal::Continue(Value::Nil))
    });
    assert_eq!(
        continued(echo.to_a_with(&[Value::symbol("a"), Value::symbol("b")])),
        vec![Value::symbol("a"), Value::symbol("b")]
    );
    assert_eq!(continued(echo.entries()), Vec::<Value>::new());
}

// =============================================================================
// Counting and Search
// =============================================================================

#[rstest]
fn test_count_overloads() {
    let source = values(&[1, 2, 2, 3]);
    assert_eq!(continued(source.count()), 4);
    assert_eq!(continued(source.count_of(&Value::from(2))), 2);
    assert_eq!(continued(source.count_where(even())), 2);
    assert_eq!(
        source.count_where(stop_at(3, "counted")),
        Ok(ControlSignal::Break(Value::symbol("counted")))
    );
}

#[rstest]
fn test_find_returns_first_match(numbers: Vec<Value>) {
    assert_eq!(continued(numbers.find(even(), None)), Value::from(2));
    assert_eq!(continued(numbers.detect(even(), None)), Value::from(2));
}

#[rstest]
fn test_find_without_match() {
    let source = values(&[1, 2, 3]);
    let over_five = || Block::predicate(|value| integer(value) > 5);
    assert_eq!(continued(source.find(over_five(), None)), Value::Nil);
    assert_eq!(
        continued(source.find(over_five(), Some(Block::function(|_| Value::symbol("none"))))),
        Value::symbol("none")
    );
}

#[rstest]
fn test_find_index_forms(numbers: Vec<Value>) {
    assert_eq!(continued(numbers.find_index(even())), Some(1));
    assert_eq!(continued(numbers.find_index_of(&Value::from(5))), Some(4));
    assert_eq!(continued(numbers.find_index_of(&Value::from(9))), None);
}

// =============================================================================
// Prefixes and Suffixes
// =============================================================================

#[rstest]
fn test_take_zero_never_enumerates() {
    let (source, invocations, _) = instrumented(values(&[1, 2, 3]));
    assert_eq!(continued(source.take(0)), Vec::<Value>::new());
    assert_eq!(invocations.get(), 0);
}

#[rstest]
fn test_take_stops_after_count() {
    let (source, invocations, delivered) = instrumented(values(&[1, 2, 3, 4]));
    assert_eq!(continued(source.take(2)), values(&[1, 2]));
    assert_eq!(invocations.get(), 1);
    assert_eq!(delivered.get(), 2);
    assert_eq!(continued(source.take(10)), values(&[1, 2, 3, 4]));
}

#[rstest]
fn test_first_stops_immediately() {
    let (source, _, delivered) = instrumented(values(&[7, 8]));
    assert_eq!(continued(source.first()), Value::from(7));
    assert_eq!(delivered.get(), 1);
    assert_eq!(continued(Vec::<Value>::new().first()), Value::Nil);
}

#[rstest]
fn test_take_while_and_drop_while(numbers: Vec<Value>) {
    let small = || Block::predicate(|value| integer(value) < 3);
    assert_eq!(continued(numbers.take_while(small())), values(&[1, 2]));
    assert_eq!(continued(numbers.drop_while(small())), values(&[3, 4, 5]));
}

#[rstest]
fn test_drop_while_stops_calling_predicate() {
    let mut calls = 0;
    let kept = values(&[1, 5, 1, 1]).drop_while(Block::predicate(|value| {
        calls += 1;
        integer(value) < 3
    }));
    assert_eq!(continued(kept), values(&[5, 1, 1]));
    assert_eq!(calls, 2);
}

#[rstest]
fn test_drop(numbers: Vec<Value>) {
    assert_eq!(continued(numbers.drop(2)), values(&[3, 4, 5]));
    assert_eq!(continued(numbers.drop(0)), numbers);
    assert_eq!(continued(numbers.drop(9)), Vec::<Value>::new());
}

#[rstest]
#[case::take(exploding().take(-1), "attempt to take negative size")]
#[case::drop(exploding().drop(-1), "attempt to drop negative size")]
fn test_negative_counts_fail_before_enumeration(
    #[case] result: Outcome<Vec<Value>>,
    #[case] message: &str,
) {
    assert_eq!(result, Err(EnumerableError::Argument(message.to_string())));
}

#[rstest]
#[case(0)]
#[case(-3)]
fn test_non_positive_windows_fail_before_enumeration(#[case] size: i64) {
    let slice = exploding().each_slice(size, Block::unary(ControlSignal::Continue));
    let cons = exploding().each_cons(size, Block::unary(ControlSignal::Continue));
    assert!(matches!(slice, Err(error) if error.is_argument()));
    assert!(matches!(cons, Err(error) if error.is_argument()));
}

// =============================================================================
// Repetition and Windows
// =============================================================================

fn windows<F>(run: F) -> Vec<Value>
where
    F: FnOnce(Block<'_>) -> Outcome<()>,
{
    let mut seen = Vec::new();
    let result = run(Block::unary(|window| {
        seen.push(window);
        ControlSignal::Continue(Value::Nil)
    }));
    continued(result);
    seen
}

#[rstest]
fn test_each_slice(numbers: Vec<Value>) {
    assert_eq!(
        windows(|block| numbers.each_slice(2, block)),
        vec![Value::from(vec![1, 2]), Value::from(vec![3, 4]), Value::from(vec![5])]
    );
    assert_eq!(
        windows(|block| numbers.each_slice_with(2, SliceOptions::default().with_partial(false), block)),
        vec![Value::from(vec![1, 2]), Value::from(vec![3, 4])]
    );
}

#[rstest]
fn test_each_cons(numbers: Vec<Value>) {
    assert_eq!(
        windows(|block| numbers.each_cons(2, block)),
        vec![
            Value::from(vec![1, 2]),
            Value::from(vec![2, 3]),
            Value::from(vec![3, 4]),
            Value::from(vec![4, 5]),
        ]
    );
    assert!(windows(|block| numbers.each_cons(6, block)).is_empty());
}

#[rstest]
fn test_each_slice_break() {
    let result = values(&[1, 2, 3, 4]).each_slice(
        2,
        Block::unary(|window| {
            if window == Value::from(vec![3, 4]) {
                ControlSignal::Break(Value::symbol("second"))
            } else {
                ControlSignal::Continue(Value::Nil)
            }
        }),
    );
    assert_eq!(result, Ok(ControlSignal::Break(Value::symbol("second"))));
}

#[rstest]
fn test_cycle_replays_buffer() {
    let (source, invocations, _) = instrumented(values(&[1, 2]));
    let seen = windows(|block| source.cycle(Cycles::Times(2), block));
    assert_eq!(seen, values(&[1, 2, 1, 2]));
    assert_eq!(invocations.get(), 1);
}

#[rstest]
fn test_cycle_forever_until_break() {
    let (source, invocations, _) = instrumented(values(&[1, 2, 3]));
    let mut visits = 0;
    let result = source.cycle(
        Cycles::from(None),
        Block::unary(|_| {
            visits += 1;
            if visits == 7 {
                ControlSignal::Break(Value::symbol("done"))
            } else {
                ControlSignal::Continue(Value::Nil)
            }
        }),
    );
    assert_eq!(result, Ok(ControlSignal::Break(Value::symbol("done"))));
    assert_eq!(visits, 7);
    assert_eq!(invocations.get(), 1);
}

#[rstest]
#[case(Cycles::Times(0))]
#[case(Cycles::Times(-2))]
fn test_cycle_non_positive_is_noop(#[case] cycles: Cycles) {
    let (source, invocations, _) = instrumented(values(&[1]));
    assert!(windows(|block| source.cycle(cycles, block)).is_empty());
    assert_eq!(invocations.get(), 0);
}

#[rstest]
fn test_cycle_forever_over_empty_source_returns() {
    assert!(windows(|block| Vec::<Value>::new().cycle(Cycles::Forever, block)).is_empty());
}

// =============================================================================
// Extremes and Ordering
// =============================================================================

fn by_magnitude<'a>() -> Block<'a> {
    Block::comparator(|left, right| integer(left).abs().cmp(&integer(right).abs()))
}

#[rstest]
#[case(values(&[5, 3, 9, 1]), Value::from(1), Value::from(9))]
#[case(values(&[7]), Value::from(7), Value::from(7))]
#[case(values(&[]), Value::Nil, Value::Nil)]
fn test_minmax(#[case] source: Vec<Value>, #[case] minimum: Value, #[case] maximum: Value) {
    assert_eq!(continued(source.minmax(None)), (minimum.clone(), maximum.clone()));
    assert_eq!(continued(source.min(None)), minimum);
    assert_eq!(continued(source.max(None)), maximum);
}

#[rstest]
fn test_extremes_keep_earliest_tie() {
    let source = values(&[-2, 1, 2, -1]);
    assert_eq!(continued(source.max(Some(by_magnitude()))), Value::from(-2));
    assert_eq!(continued(source.min(Some(by_magnitude()))), Value::from(1));
    assert_eq!(
        continued(source.minmax(Some(by_magnitude()))),
        (Value::from(1), Value::from(-2))
    );
}

#[rstest]
fn test_sort_natural_and_block() {
    assert_eq!(continued(values(&[3, 1, 2]).sort(None)), values(&[1, 2, 3]));
    let descending = Block::comparator(|left, right| right.compare(left).unwrap_or(Ordering::Equal));
    assert_eq!(
        continued(values(&[3, 1, 2]).sort(Some(descending))),
        values(&[3, 2, 1])
    );
}

#[rstest]
fn test_sort_break_aborts_whole_sort() {
    let result = values(&[3, 1, 2]).sort(Some(Block::new(|arguments| {
        if arguments.contains(&Value::from(1)) {
            Ok(ControlSignal::Break(Value::symbol("x")))
        } else {
            Ok(ControlSignal::Continue(Value::from(0)))
        }
    })));
    assert_eq!(result, Ok(ControlSignal::Break(Value::symbol("x"))));
}

#[rstest]
fn test_comparison_failures() {
    let mixed = vec![Value::from(1), Value::from("a")];
    assert!(matches!(mixed.sort(None), Err(EnumerableError::Comparison { .. })));
    assert!(matches!(mixed.max(None), Err(EnumerableError::Comparison { .. })));
    let unconvertible = Block::new(|_| Ok(ControlSignal::Continue(Value::Nil)));
    assert!(matches!(
        values(&[2, 1]).sort(Some(unconvertible)),
        Err(EnumerableError::Comparison { .. })
    ));
}

#[rstest]
fn test_sort_by_orders_by_key() {
    let words = vec![Value::from("ccc"), Value::from("a"), Value::from("bb")];
    let by_length = Block::function(|word| match word {
        Value::Str(text) => Value::from(text.len()),
        other => other,
    });
    assert_eq!(
        continued(words.sort_by(Some(by_length))),
        vec![Value::from("a"), Value::from("bb"), Value::from("ccc")]
    );
}

#[rstest]
fn test_sort_by_key_break() {
    assert_eq!(
        values(&[1, 2, 3]).sort_by(Some(stop_at(2, "key"))),
        Ok(ControlSignal::Break(Value::symbol("key")))
    );
}

#[rstest]
fn test_sort_by_without_key() {
    assert_eq!(continued(Vec::<Value>::new().sort_by(None)), Vec::<Value>::new());
    assert_eq!(values(&[1]).sort_by(None), Err(EnumerableError::MissingBlock));
}

// =============================================================================
// Sources
// =============================================================================

#[rstest]
fn test_combinators_over_ranges() {
    let range = 1_i64..=6;
    assert_eq!(continued(Enumerable::select(&range, even())), values(&[2, 4, 6]));
    assert_eq!(continued(Enumerable::count(&(0_i64..3))), 3);
}

#[rstest]
fn test_source_errors_unwind(numbers: Vec<Value>) {
    assert_eq!(
        exploding().map(Block::unary(ControlSignal::Continue)),
        Err(EnumerableError::Raised("source was enumerated".to_string()))
    );
    let failing = numbers.map(Block::new(|_| Err(EnumerableError::Raised("boom".to_string()))));
    assert_eq!(failing, Err(EnumerableError::Raised("boom".to_string())));
}
