//! The dispenser context.
//!
//! [`GumballMachine`] is the imperative shell around the pure core: it owns
//! the inventory counter and the current state, routes external events
//! through the transition table, draws the bonus odds, and forwards every
//! notice to the injected sink.

pub mod builder;
pub mod error;

pub use builder::MachineBuilder;
pub use error::BuildError;

use crate::core::{respond, DispatchHistory, DispatchRecord, Event, MachineState};
use crate::odds::{OddsSource, ThreadRngOdds};
use crate::sink::{EventSink, TracingSink};
use chrono::Utc;

/// A coin-operated dispenser with a probabilistic bonus branch.
///
/// Events are synchronous and always succeed from the caller's
/// perspective: an event the current state cannot use is a legal no-op
/// that emits a message, never a fault. A crank that succeeds runs its
/// dispense in the same call, so the machine is only ever observed in a
/// resting state.
///
/// The machine is single-writer by design. If many callers share one
/// machine, deliver their events through one owner; the crank sequence is
/// a single unit of work and must not interleave.
///
/// # Example
///
/// ```rust
/// use gumball::machine::GumballMachine;
/// use gumball::odds::FixedOdds;
/// use gumball::sink::StdoutSink;
///
/// let mut machine = GumballMachine::builder()
///     .inventory(5)
///     .odds(FixedOdds::losing())
///     .sink(StdoutSink)
///     .build()
///     .unwrap();
///
/// machine.insert_coin();
/// machine.turn_crank();
///
/// assert_eq!(machine.inventory_count(), 4);
/// assert_eq!(machine.state_name(), "NoCoin");
/// ```
pub struct GumballMachine {
    inventory: u32,
    state: MachineState,
    odds: Box<dyn OddsSource>,
    sink: Box<dyn EventSink>,
    history: DispatchHistory,
}

impl GumballMachine {
    /// Create a machine with the given inventory, default odds (one crank
    /// in ten wins) and the tracing sink.
    ///
    /// Starts in `NoCoin` when inventory is positive, `SoldOut` otherwise.
    pub fn new(initial_inventory: u32) -> Self {
        Self::assemble(
            initial_inventory,
            Box::new(ThreadRngOdds::default()),
            Box::new(TracingSink),
        )
    }

    /// Start building a machine with injected odds and sink.
    pub fn builder() -> MachineBuilder {
        MachineBuilder::new()
    }

    pub(crate) fn assemble(
        inventory: u32,
        odds: Box<dyn OddsSource>,
        sink: Box<dyn EventSink>,
    ) -> Self {
        let state = if inventory > 0 {
            MachineState::NoCoin
        } else {
            MachineState::SoldOut
        };
        Self {
            inventory,
            state,
            odds,
            sink,
            history: DispatchHistory::new(),
        }
    }

    /// Insert a coin, arming the mechanism.
    pub fn insert_coin(&mut self) {
        self.dispatch(Event::InsertCoin);
    }

    /// Ask for the coin back.
    pub fn eject_coin(&mut self) {
        self.dispatch(Event::EjectCoin);
    }

    /// Turn the crank. If the machine is armed this releases one unit, or
    /// two on a winning draw, within this same call.
    pub fn turn_crank(&mut self) {
        self.dispatch(Event::TurnCrank);
    }

    /// Units remaining.
    pub fn inventory_count(&self) -> u32 {
        self.inventory
    }

    /// Name of the current resting state.
    pub fn state_name(&self) -> &'static str {
        self.state.name()
    }

    /// Render inventory and state for diagnostics.
    pub fn describe(&self) -> String {
        format!(
            "Mighty Gumball, Inc.\nInventory: {} gumballs\nState: {}",
            self.inventory, self.state
        )
    }

    /// Everything the machine has handled so far.
    pub fn history(&self) -> &DispatchHistory {
        &self.history
    }

    fn dispatch(&mut self, event: Event) {
        // One draw per crank while armed, regardless of outcome; no other
        // (state, event) pair touches the odds source.
        let winning_draw = match (self.state, event) {
            (MachineState::HasCoin, Event::TurnCrank) => self.odds.draw(),
            _ => false,
        };

        let from = self.state;
        let response = respond(self.state, event, self.inventory, winning_draw);
        for notice in &response.notices {
            self.sink.emit(notice);
        }

        let released = self.inventory - response.inventory;
        self.history = self.history.record(DispatchRecord {
            event,
            from,
            to: response.next,
            released,
            timestamp: Utc::now(),
        });
        self.state = response.next;
        self.inventory = response.inventory;
    }
}

impl std::fmt::Display for GumballMachine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.describe())
    }
}
