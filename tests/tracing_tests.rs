//! Integration tests for the `tracing` events emitted by merge and sort.
//!
//! A formatting subscriber writes into a shared buffer for the duration of
//! each test, and the captured lines are checked for the event message and
//! its length fields.

#![cfg(all(feature = "tracing", feature = "algorithm"))]

use fixlist::algorithm::{merge, sort};
use fixlist::persistent::FixedList;
use rstest::rstest;
use std::io;
use std::sync::{Arc, Mutex};

#[derive(Clone, Default)]
struct CapturedOutput {
    buffer: Arc<Mutex<Vec<u8>>>,
}

impl CapturedOutput {
    fn contents(&self) -> String {
        let buffer = self.buffer.lock().expect("buffer lock poisoned");
        String::from_utf8_lossy(&buffer).into_owned()
    }
}

impl io::Write for CapturedOutput {
    fn write(&mut self, bytes: &[u8]) -> io::Result<usize> {
        self.buffer
            .lock()
            .expect("buffer lock poisoned")
            .extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn capture<R>(action: impl FnOnce() -> R) -> (R, String) {
    let output = CapturedOutput::default();
    let writer = output.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::TRACE)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    let result = tracing::subscriber::with_default(subscriber, action);
    (result, output.contents())
}

#[rstest]
fn test_sort_emits_trace_event_with_size() {
    let (sorted, logs) = capture(|| sort(&FixedList::from([4, 2, 3, 1])));
    assert_eq!(sorted.as_array(), &[1, 2, 3, 4]);
    assert!(logs.contains("sorting fixed list"), "captured: {logs}");
    assert!(logs.contains("size=4"), "captured: {logs}");
    assert_eq!(logs.matches("sorting fixed list").count(), 1);
}

#[rstest]
fn test_merge_emits_trace_event_with_lengths() {
    let (merged, logs) = capture(|| {
        let merged: FixedList<i32, 5> = merge(&FixedList::from([1, 3, 5]), &FixedList::from([2, 4]));
        merged
    });
    assert_eq!(merged.as_array(), &[1, 2, 3, 4, 5]);
    assert!(logs.contains("merging fixed lists"), "captured: {logs}");
    assert!(logs.contains("left=3"), "captured: {logs}");
    assert!(logs.contains("right=2"), "captured: {logs}");
}

#[rstest]
fn test_no_events_below_trace_level() {
    let output = CapturedOutput::default();
    let writer = output.clone();
    let subscriber = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_ansi(false)
        .with_writer(move || writer.clone())
        .finish();
    tracing::subscriber::with_default(subscriber, || {
        let _ = sort(&FixedList::from([2, 1]));
    });
    assert!(output.contents().is_empty());
}
