//! Behavioral states of the dispenser.
//!
//! A state is a plain tag with no data of its own. All branching logic over
//! states lives in the pure transition function, so the tags here only carry
//! inspection methods with no side effects.

use serde::{Deserialize, Serialize};

/// The five mutually exclusive behavioral modes of the dispenser.
///
/// `NoCoin`, `HasCoin`, and `SoldOut` are *resting* states: the machine can
/// be observed in them between external events. `Sold` and `Winner` are
/// *transient*: they are entered and resolved within a single
/// [`turn_crank`](crate::machine::GumballMachine::turn_crank) call and are
/// never visible to a caller.
///
/// # Example
///
/// ```rust
/// use gumball::core::MachineState;
///
/// assert_eq!(MachineState::NoCoin.name(), "NoCoin");
/// assert!(MachineState::NoCoin.is_resting());
/// assert!(MachineState::Winner.is_transient());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum MachineState {
    /// Waiting for payment; the crank does nothing.
    NoCoin,
    /// A coin is in the slot; the next crank triggers a dispense.
    HasCoin,
    /// A crank succeeded and a single release is in progress.
    Sold,
    /// Inventory is exhausted; every event is a polite no-op.
    SoldOut,
    /// The bonus branch: two releases are in progress.
    Winner,
}

impl MachineState {
    /// Get the state's name for display/logging.
    pub fn name(&self) -> &'static str {
        match self {
            Self::NoCoin => "NoCoin",
            Self::HasCoin => "HasCoin",
            Self::Sold => "Sold",
            Self::SoldOut => "SoldOut",
            Self::Winner => "Winner",
        }
    }

    /// Check if this state is stable across external event boundaries.
    ///
    /// Only resting states are ever observable from outside the machine.
    pub fn is_resting(&self) -> bool {
        matches!(self, Self::NoCoin | Self::HasCoin | Self::SoldOut)
    }

    /// Check if this state is resolved within a single crank call.
    pub fn is_transient(&self) -> bool {
        !self.is_resting()
    }
}

impl std::fmt::Display for MachineState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
