//! Log capture for tests.
//!
//! Installs a thread-local subscriber that records `(Level, message)` for
//! every event emitted inside a closure.  Compiled for this crate's own tests
//! and, with the `testing` feature, for tests in dependent crates.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::{Level, Subscriber};
use tracing_subscriber::layer::{Context, SubscriberExt};
use tracing_subscriber::{Layer, Registry};

/// Captured log records, in emission order.
pub type Logs = Vec<(Level, String)>;

#[derive(Clone, Default)]
struct Captured(Arc<Mutex<Logs>>);

struct MessageVisitor(String);

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.0 = format!("{value:?}");
        }
    }
}

impl<S: Subscriber> Layer<S> for Captured {
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let mut visitor = MessageVisitor(String::new());
        event.record(&mut visitor);
        self.0
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((*event.metadata().level(), visitor.0));
    }
}

/// Runs `f` and returns its output with every event it logged.
pub fn with_captured_logs<R>(f: impl FnOnce() -> R) -> (R, Logs) {
    let captured = Captured::default();
    let subscriber = Registry::default().with(captured.clone());
    let out = tracing::subscriber::with_default(subscriber, f);
    let logs = captured
        .0
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .clone();
    (out, logs)
}

/// Number of records at exactly `level`.
pub fn count(logs: &[(Level, String)], level: Level) -> usize {
    logs.iter().filter(|(l, _)| *l == level).count()
}
