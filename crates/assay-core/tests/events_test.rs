//! Tests for the assessment event system.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use assay_core::events::*;

#[derive(Default)]
struct CountingHandler {
    started: AtomicUsize,
    batches: AtomicUsize,
    failed: AtomicUsize,
    completed: AtomicUsize,
    cancelled: AtomicUsize,
}

impl AssessmentEventHandler for CountingHandler {
    fn on_run_started(&self, _event: &RunStartedEvent) {
        self.started.fetch_add(1, Ordering::Relaxed);
    }

    fn on_batch_complete(&self, _event: &BatchProgressEvent) {
        self.batches.fetch_add(1, Ordering::Relaxed);
    }

    fn on_asset_failed(&self, _event: &AssetFailedEvent) {
        self.failed.fetch_add(1, Ordering::Relaxed);
    }

    fn on_run_complete(&self, _event: &RunCompleteEvent) {
        self.completed.fetch_add(1, Ordering::Relaxed);
    }

    fn on_run_cancelled(&self, _event: &RunCancelledEvent) {
        self.cancelled.fetch_add(1, Ordering::Relaxed);
    }
}

struct PanickingHandler;

impl AssessmentEventHandler for PanickingHandler {
    fn on_run_started(&self, _event: &RunStartedEvent) {
        panic!("handler exploded");
    }
}

fn started() -> RunStartedEvent {
    RunStartedEvent {
        tenant_id: "default".into(),
        total_assets: 10,
        batch_size: 5,
    }
}

#[test]
fn test_handler_noop_defaults() {
    struct Noop;
    impl AssessmentEventHandler for Noop {}

    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(Noop));
    dispatcher.emit_run_started(&started());
    dispatcher.emit_run_cancelled(&RunCancelledEvent { processed: 0, total: 10 });
    assert_eq!(dispatcher.handler_count(), 1);
}

#[test]
fn test_dispatch_reaches_every_handler() {
    let a = Arc::new(CountingHandler::default());
    let b = Arc::new(CountingHandler::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(a.clone());
    dispatcher.register(b.clone());

    dispatcher.emit_run_started(&started());
    dispatcher.emit_batch_complete(&BatchProgressEvent {
        batch_index: 0,
        batch_count: 2,
        processed: 5,
        total: 10,
        succeeded: 5,
        failed: 0,
    });
    dispatcher.emit_asset_failed(&AssetFailedEvent {
        guid: "g".into(),
        message: "bad".into(),
        policy: "warn",
    });
    dispatcher.emit_run_complete(&RunCompleteEvent {
        processed: 10,
        succeeded: 9,
        failed: 1,
        duration_ms: 3,
    });

    for h in [&a, &b] {
        assert_eq!(h.started.load(Ordering::Relaxed), 1);
        assert_eq!(h.batches.load(Ordering::Relaxed), 1);
        assert_eq!(h.failed.load(Ordering::Relaxed), 1);
        assert_eq!(h.completed.load(Ordering::Relaxed), 1);
        assert_eq!(h.cancelled.load(Ordering::Relaxed), 0);
    }
}

#[test]
fn test_panicking_handler_does_not_block_others() {
    let counter = Arc::new(CountingHandler::default());
    let mut dispatcher = EventDispatcher::new();
    dispatcher.register(Arc::new(PanickingHandler));
    dispatcher.register(counter.clone());

    dispatcher.emit_run_started(&started());
    assert_eq!(counter.started.load(Ordering::Relaxed), 1);
}

#[test]
fn test_empty_dispatcher_is_noop() {
    let dispatcher = EventDispatcher::default();
    assert_eq!(dispatcher.handler_count(), 0);
    dispatcher.emit_run_started(&started());
}

#[test]
fn test_batch_progress_fraction() {
    let event = BatchProgressEvent {
        batch_index: 1,
        batch_count: 4,
        processed: 25,
        total: 100,
        succeeded: 25,
        failed: 0,
    };
    assert!((event.progress() - 0.25).abs() < f64::EPSILON);

    let empty = BatchProgressEvent { total: 0, processed: 0, ..event };
    assert_eq!(empty.progress(), 1.0);
}
