//! The pure transition table of the dispenser.
//!
//! The original per-state objects collapse into one exhaustive match over
//! (state, event). The function takes the current state and inventory by
//! value and returns the next state, the new inventory, and the messages to
//! emit; nothing here performs I/O or holds a reference back to the machine.

use super::event::Event;
use super::notice::Notice;
use super::state::MachineState;

/// The outcome of handling one external event.
///
/// `inventory` is the count after the event; it never exceeds the count the
/// event started with, and a single event lowers it by at most 2 (the
/// Winner path).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    /// The state to commit. Always a resting state.
    pub next: MachineState,
    /// Inventory after any releases.
    pub inventory: u32,
    /// Messages to hand to the event sink, in emission order.
    pub notices: Vec<Notice>,
}

/// Handle one event against the current state and inventory.
///
/// `winning_draw` is the pre-drawn outcome of the randomness source. It is
/// consulted only in the `(HasCoin, TurnCrank)` arm; every other arm
/// ignores it. The caller draws exactly once per crank while in `HasCoin`
/// so that seeded runs stay reproducible.
///
/// A crank that succeeds resolves the transient `Sold`/`Winner` dispense in
/// the same call: the returned `next` is always a resting state.
///
/// # Example
///
/// ```rust
/// use gumball::core::{respond, Event, MachineState, Notice};
///
/// let response = respond(MachineState::NoCoin, Event::InsertCoin, 5, false);
/// assert_eq!(response.next, MachineState::HasCoin);
/// assert_eq!(response.inventory, 5);
/// assert_eq!(response.notices, vec![Notice::CoinInserted]);
/// ```
pub fn respond(
    state: MachineState,
    event: Event,
    inventory: u32,
    winning_draw: bool,
) -> Response {
    match (state, event) {
        (MachineState::NoCoin, Event::InsertCoin) => {
            single(MachineState::HasCoin, inventory, Notice::CoinInserted)
        }
        (MachineState::NoCoin, Event::EjectCoin) => {
            single(MachineState::NoCoin, inventory, Notice::NoCoinToReturn)
        }
        (MachineState::NoCoin, Event::TurnCrank) => {
            single(MachineState::NoCoin, inventory, Notice::CrankedWithoutCoin)
        }

        (MachineState::HasCoin, Event::InsertCoin) => {
            single(MachineState::HasCoin, inventory, Notice::CoinAlreadyInserted)
        }
        (MachineState::HasCoin, Event::EjectCoin) => {
            single(MachineState::NoCoin, inventory, Notice::CoinReturned)
        }
        (MachineState::HasCoin, Event::TurnCrank) => {
            let mut notices = vec![Notice::CrankTurned];
            // The bonus branch releases up to 2 units, so it is only
            // offered when at least 2 remain.
            if winning_draw && inventory > 1 {
                winner_dispense(inventory, &mut notices)
            } else {
                sold_dispense(inventory, &mut notices)
            }
        }

        (MachineState::Sold, Event::InsertCoin) => {
            single(MachineState::Sold, inventory, Notice::WaitForDispense)
        }
        (MachineState::Sold, Event::EjectCoin) => {
            single(MachineState::Sold, inventory, Notice::CrankAlreadyTurned)
        }
        (MachineState::Sold, Event::TurnCrank) => {
            single(MachineState::Sold, inventory, Notice::DispenseInProgress)
        }

        // Winner resolves inside the crank that entered it; these arms only
        // exist so the table is total.
        (MachineState::Winner, _) => single(
            MachineState::Winner,
            inventory,
            Notice::UnexpectedDuringDispense,
        ),

        (MachineState::SoldOut, Event::InsertCoin) => {
            single(MachineState::SoldOut, inventory, Notice::MachineEmpty)
        }
        (MachineState::SoldOut, Event::EjectCoin) => {
            single(MachineState::SoldOut, inventory, Notice::EmptyNoRefund)
        }
        (MachineState::SoldOut, Event::TurnCrank) => {
            single(MachineState::SoldOut, inventory, Notice::NoInventory)
        }
    }
}

/// A single-message response that holds or moves state without releasing.
fn single(next: MachineState, inventory: u32, notice: Notice) -> Response {
    Response {
        next,
        inventory,
        notices: vec![notice],
    }
}

/// Release one unit: the released notice always goes out, but the count
/// only drops while above the zero floor. The Winner path's second release
/// leans on this guard.
fn release(inventory: &mut u32, notices: &mut Vec<Notice>) {
    notices.push(Notice::UnitReleased);
    if *inventory > 0 {
        *inventory -= 1;
    } else {
        notices.push(Notice::OutOfStock);
    }
}

/// The ordinary dispense: one release, then settle.
fn sold_dispense(mut inventory: u32, notices: &mut Vec<Notice>) -> Response {
    release(&mut inventory, notices);
    settle(inventory, notices)
}

/// The bonus dispense: announce the win, release once, and release again
/// only if the first release left something behind.
fn winner_dispense(mut inventory: u32, notices: &mut Vec<Notice>) -> Response {
    notices.push(Notice::BonusWinner);
    release(&mut inventory, notices);
    if inventory == 0 {
        notices.push(Notice::OutOfGumballs);
        return Response {
            next: MachineState::SoldOut,
            inventory,
            notices: std::mem::take(notices),
        };
    }
    release(&mut inventory, notices);
    settle(inventory, notices)
}

/// Fix the resting state after a dispense.
fn settle(inventory: u32, notices: &mut Vec<Notice>) -> Response {
    let next = if inventory > 0 {
        MachineState::NoCoin
    } else {
        notices.push(Notice::OutOfGumballs);
        MachineState::SoldOut
    };
    Response {
        next,
        inventory,
        notices: std::mem::take(notices),
    }
}
