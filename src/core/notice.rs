//! Messages emitted while handling events.
//!
//! Messages are produced as data and handed to an injected
//! [`EventSink`](crate::sink::EventSink). They are observability only and
//! never influence control flow, so tests can assert on them without
//! touching the machine's logic.

use serde::{Deserialize, Serialize};

/// A human-readable status message produced during event handling.
///
/// One variant per distinct message in the transition table. The rendered
/// text lives in the `Display` impl; sinks that want structure can match on
/// the variant instead.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub enum Notice {
    /// A coin was accepted and the mechanism is armed.
    CoinInserted,
    /// A coin is already in the slot.
    CoinAlreadyInserted,
    /// The coin was returned to the caller.
    CoinReturned,
    /// Eject with no coin present.
    NoCoinToReturn,
    /// Crank with no coin present.
    CrankedWithoutCoin,
    /// The crank was turned with a coin in the slot.
    CrankTurned,
    /// One unit left the machine.
    UnitReleased,
    /// The zero-floor guard fired: a release was requested at inventory 0.
    OutOfStock,
    /// The bonus branch was taken: two units for one coin.
    BonusWinner,
    /// Coin inserted while a dispense is running.
    WaitForDispense,
    /// Eject after the crank was already turned.
    CrankAlreadyTurned,
    /// Crank turned again while a dispense is running.
    DispenseInProgress,
    /// Coin inserted into an empty machine.
    MachineEmpty,
    /// Eject from an empty machine with no coin present.
    EmptyNoRefund,
    /// Crank turned on an empty machine.
    NoInventory,
    /// The machine just ran dry.
    OutOfGumballs,
    /// An event reached a transient state. Unreachable through the public
    /// API; kept so the transition table is total.
    UnexpectedDuringDispense,
}

impl std::fmt::Display for Notice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::CoinInserted => "You inserted a coin",
            Self::CoinAlreadyInserted => "You can't insert another coin",
            Self::CoinReturned => "Coin returned",
            Self::NoCoinToReturn => "You haven't inserted a coin",
            Self::CrankedWithoutCoin => "You turned, but there's no coin",
            Self::CrankTurned => "You turned the crank...",
            Self::UnitReleased => "A gumball comes rolling out the slot",
            Self::OutOfStock => "No gumball released, the machine is out of stock",
            Self::BonusWinner => "You're a winner! You get two gumballs for your coin",
            Self::WaitForDispense => "Please wait, we're already giving you a gumball",
            Self::CrankAlreadyTurned => "Sorry, you already turned the crank",
            Self::DispenseInProgress => "Turning twice doesn't get you another gumball",
            Self::MachineEmpty => "You can't insert a coin, the machine is sold out",
            Self::EmptyNoRefund => "You can't eject, you haven't inserted a coin",
            Self::NoInventory => "You turned, but there are no gumballs",
            Self::OutOfGumballs => "Oops, out of gumballs!",
            Self::UnexpectedDuringDispense => "The machine is mid-dispense, hold on",
        };
        f.write_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notices_render_readable_text() {
        assert_eq!(Notice::CoinInserted.to_string(), "You inserted a coin");
        assert_eq!(
            Notice::UnitReleased.to_string(),
            "A gumball comes rolling out the slot"
        );
        assert_eq!(Notice::OutOfGumballs.to_string(), "Oops, out of gumballs!");
    }

    #[test]
    fn notice_roundtrips_through_serde() {
        let notice = Notice::BonusWinner;
        let json = serde_json::to_string(&notice).unwrap();
        let back: Notice = serde_json::from_str(&json).unwrap();
        assert_eq!(notice, back);
    }
}
