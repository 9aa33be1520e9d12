//! External events accepted by the dispenser.

use serde::{Deserialize, Serialize};

/// The three events an external caller can issue.
///
/// Every (state, event) combination is fully defined by the transition
/// table; there is no invalid event, only no-op responses.
///
/// # Example
///
/// ```rust
/// use gumball::core::Event;
///
/// assert_eq!(Event::TurnCrank.name(), "TurnCrank");
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Event {
    /// Pay: arms the mechanism for a dispense attempt.
    InsertCoin,
    /// Ask for the coin back before cranking.
    EjectCoin,
    /// Turn the crank. A successful crank runs the dispense in the same
    /// call; it is one atomic unit of work, not two separate events.
    TurnCrank,
}

impl Event {
    /// Get the event's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::InsertCoin => "InsertCoin",
            Self::EjectCoin => "EjectCoin",
            Self::TurnCrank => "TurnCrank",
        }
    }
}

impl std::fmt::Display for Event {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
