//! Integration tests for the diagnostic events emitted through `tracing`.

use std::io;
use std::sync::{Arc, Mutex};

use enumerable::prelude::*;
use rstest::rstest;

#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl io::Write for Capture {
    fn write(&mut self, buffer: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buffer);
        Ok(buffer.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

/// Runs `action` under a TRACE-level subscriber and returns what it logged.
fn logged<F: FnOnce()>(action: F) -> String {
    let capture = Capture::default();
    let writer = capture.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(move || writer.clone())
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .finish();
    tracing::subscriber::with_default(subscriber, action);
    capture.contents()
}

fn values(items: &[i64]) -> Vec<Value> {
    items.iter().copied().map(Value::from).collect()
}

#[rstest]
#[case::count(Method::CountOf(Value::from(2)))]
#[case::find_index(Method::FindIndexOf(Value::from(2)))]
fn test_unused_block_warns(#[case] method: Method) {
    let output = logged(|| {
        let enumerator = values(&[1, 2, 2]).enumerator(method);
        let _ = enumerator.each(&[], &mut Block::predicate(|_| true));
    });
    assert!(output.contains("WARN"));
    assert!(output.contains("given block not used"));
}

#[rstest]
fn test_break_is_traced() {
    let output = logged(|| {
        let _ = values(&[1, 2]).map(Block::unary(|_| ControlSignal::Break(Value::symbol("out"))));
    });
    assert!(output.contains("iteration broken"));
    assert!(output.contains(":out"));
}

#[rstest]
fn test_sort_abort_is_traced() {
    let output = logged(|| {
        let _ = values(&[2, 1]).sort(Some(Block::new(|_| Ok(ControlSignal::Break(Value::Nil)))));
    });
    assert!(output.contains("sort aborted by break"));
}

#[rstest]
fn test_internal_stop_is_not_traced_as_break() {
    let output = logged(|| {
        let _ = values(&[1, 2, 3]).take(1);
    });
    assert!(!output.contains("iteration broken"));
}

#[rstest]
fn test_argument_error_is_logged() {
    let output = logged(|| {
        let _ = values(&[1]).each_cons(0, Block::unary(ControlSignal::Continue));
    });
    assert!(output.contains("DEBUG"));
    assert!(output.contains("invalid slice size"));
}
