//! Destinations for the machine's status messages.
//!
//! The state machine produces [`Notice`] values and hands them to an
//! injected sink. The sink's identity is irrelevant to correctness: swap
//! the default tracing sink for [`StdoutSink`] in a console demo or
//! [`MemorySink`] in a test without touching the machine.

use crate::core::Notice;
use std::sync::{Arc, Mutex};

/// An abstract destination for status messages.
pub trait EventSink: Send {
    /// Deliver one notice. Must not influence machine behavior.
    fn emit(&mut self, notice: &Notice);
}

/// Default sink: one structured log line per notice via `tracing`.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl EventSink for TracingSink {
    fn emit(&mut self, notice: &Notice) {
        tracing::info!(kind = ?notice, "{notice}");
    }
}

/// Console sink, matching the original demo's direct prints.
#[derive(Clone, Copy, Debug, Default)]
pub struct StdoutSink;

impl EventSink for StdoutSink {
    fn emit(&mut self, notice: &Notice) {
        println!("{notice}");
    }
}

/// Collecting sink for tests.
///
/// Clones share the same buffer, so a test can keep one handle while the
/// machine owns another and assert on everything emitted.
///
/// # Example
///
/// ```rust
/// use gumball::core::Notice;
/// use gumball::sink::{EventSink, MemorySink};
///
/// let handle = MemorySink::new();
/// let mut sink = handle.clone();
/// sink.emit(&Notice::CoinInserted);
///
/// assert_eq!(handle.notices(), vec![Notice::CoinInserted]);
/// ```
#[derive(Clone, Debug, Default)]
pub struct MemorySink {
    notices: Arc<Mutex<Vec<Notice>>>,
}

impl MemorySink {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything emitted so far, in order.
    pub fn notices(&self) -> Vec<Notice> {
        self.buffer().clone()
    }

    /// Check whether a notice was emitted.
    pub fn contains(&self, notice: Notice) -> bool {
        self.buffer().contains(&notice)
    }

    /// Drop everything collected so far.
    pub fn clear(&self) {
        self.buffer().clear();
    }

    fn buffer(&self) -> std::sync::MutexGuard<'_, Vec<Notice>> {
        // A poisoned buffer still holds valid notices.
        self.notices.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl EventSink for MemorySink {
    fn emit(&mut self, notice: &Notice) {
        self.buffer().push(*notice);
    }
}
