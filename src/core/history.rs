//! Dispatch history tracking.
//!
//! Provides immutable tracking of handled events over time. One record per
//! external event, resting state to resting state, so the transient
//! `Sold`/`Winner` states never appear in a history.

use super::event::Event;
use super::state::MachineState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Record of a single handled event.
///
/// Records are immutable values. `released` is the number of units the
/// event dispensed: 0 for every no-op, 1 for the ordinary crank, 2 for the
/// bonus crank.
///
/// # Example
///
/// ```rust
/// use gumball::core::{DispatchRecord, Event, MachineState};
/// use chrono::Utc;
///
/// let record = DispatchRecord {
///     event: Event::TurnCrank,
///     from: MachineState::HasCoin,
///     to: MachineState::NoCoin,
///     released: 1,
///     timestamp: Utc::now(),
/// };
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchRecord {
    /// The event that was handled
    pub event: Event,
    /// The resting state the event found the machine in
    pub from: MachineState,
    /// The resting state the event left the machine in
    pub to: MachineState,
    /// Units dispensed while handling the event (0, 1, or 2)
    pub released: u32,
    /// When the event was handled
    pub timestamp: DateTime<Utc>,
}

/// Ordered history of handled events.
///
/// History is immutable - the `record` method returns a new history with
/// the record added.
///
/// # Example
///
/// ```rust
/// use gumball::core::{DispatchHistory, DispatchRecord, Event, MachineState};
/// use chrono::Utc;
///
/// let history = DispatchHistory::new();
/// let history = history.record(DispatchRecord {
///     event: Event::InsertCoin,
///     from: MachineState::NoCoin,
///     to: MachineState::HasCoin,
///     released: 0,
///     timestamp: Utc::now(),
/// });
///
/// assert_eq!(history.records().len(), 1);
/// assert_eq!(history.total_released(), 0);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DispatchHistory {
    records: Vec<DispatchRecord>,
}

impl DispatchHistory {
    /// Create a new empty history.
    pub fn new() -> Self {
        Self {
            records: Vec::new(),
        }
    }

    /// Record a handled event, returning a new history.
    ///
    /// This is a pure function - it does not mutate the existing history
    /// but returns a new one with the record added.
    pub fn record(&self, record: DispatchRecord) -> Self {
        let mut records = self.records.clone();
        records.push(record);
        Self { records }
    }

    /// Get the path of resting states traversed.
    ///
    /// Returns the state the first event found the machine in, followed by
    /// the state each event left it in.
    pub fn path(&self) -> Vec<MachineState> {
        let mut path = Vec::new();
        if let Some(first) = self.records.first() {
            path.push(first.from);
        }
        for record in &self.records {
            path.push(record.to);
        }
        path
    }

    /// Total units dispensed across all recorded events.
    pub fn total_released(&self) -> u32 {
        self.records.iter().map(|r| r.released).sum()
    }

    /// Calculate total duration from first to last record.
    ///
    /// Returns `None` if there are no records.
    pub fn duration(&self) -> Option<Duration> {
        if let (Some(first), Some(last)) = (self.records.first(), self.records.last()) {
            let duration = last.timestamp.signed_duration_since(first.timestamp);
            duration.to_std().ok()
        } else {
            None
        }
    }

    /// Get all records in order.
    pub fn records(&self) -> &[DispatchRecord] {
        &self.records
    }
}
