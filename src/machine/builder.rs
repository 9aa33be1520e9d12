//! Builder for constructing machines with injected capabilities.

use super::error::BuildError;
use super::GumballMachine;
use crate::odds::{OddsSource, ThreadRngOdds, WIN_PROBABILITY};
use crate::sink::{EventSink, TracingSink};

/// Builder for a [`GumballMachine`] with a fluent API.
///
/// Everything is optional: the default machine has zero inventory, the
/// design-value thread-RNG odds, and the tracing sink. An explicitly
/// injected odds source takes precedence over `win_probability`.
///
/// # Example
///
/// ```rust
/// use gumball::machine::GumballMachine;
///
/// let machine = GumballMachine::builder()
///     .inventory(10)
///     .win_probability(0.25)
///     .build()
///     .unwrap();
///
/// assert_eq!(machine.inventory_count(), 10);
/// ```
pub struct MachineBuilder {
    inventory: u32,
    win_probability: Option<f64>,
    odds: Option<Box<dyn OddsSource>>,
    sink: Option<Box<dyn EventSink>>,
}

impl MachineBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            inventory: 0,
            win_probability: None,
            odds: None,
            sink: None,
        }
    }

    /// Set the initial inventory.
    pub fn inventory(mut self, count: u32) -> Self {
        self.inventory = count;
        self
    }

    /// Use thread-RNG odds with this win probability.
    ///
    /// Validated at [`build`](Self::build); values outside [0.0, 1.0] are
    /// rejected there.
    pub fn win_probability(mut self, probability: f64) -> Self {
        self.win_probability = Some(probability);
        self
    }

    /// Inject an odds source.
    pub fn odds(mut self, odds: impl OddsSource + 'static) -> Self {
        self.odds = Some(Box::new(odds));
        self
    }

    /// Inject an event sink.
    pub fn sink(mut self, sink: impl EventSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Build the machine.
    ///
    /// Fails only when `win_probability` is outside [0.0, 1.0].
    pub fn build(self) -> Result<GumballMachine, BuildError> {
        let odds: Box<dyn OddsSource> = match self.odds {
            Some(odds) => odds,
            None => Box::new(ThreadRngOdds::new(
                self.win_probability.unwrap_or(WIN_PROBABILITY),
            )?),
        };
        let sink = self.sink.unwrap_or_else(|| Box::new(TracingSink));
        Ok(GumballMachine::assemble(self.inventory, odds, sink))
    }
}

impl Default for MachineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::odds::FixedOdds;
    use crate::sink::MemorySink;

    #[test]
    fn defaults_build_an_empty_machine() {
        let machine = MachineBuilder::new().build().unwrap();
        assert_eq!(machine.inventory_count(), 0);
        assert_eq!(machine.state_name(), "SoldOut");
    }

    #[test]
    fn builder_rejects_bad_probability() {
        let result = MachineBuilder::new().win_probability(1.5).build();
        assert!(matches!(result, Err(BuildError::Odds(_))));
    }

    #[test]
    fn injected_odds_take_precedence_over_probability() {
        // An out-of-range probability is never validated once explicit
        // odds are injected.
        let mut machine = GumballMachine::builder()
            .inventory(5)
            .win_probability(9.0)
            .odds(FixedOdds::winning())
            .sink(MemorySink::new())
            .build()
            .unwrap();

        machine.insert_coin();
        machine.turn_crank();
        assert_eq!(machine.inventory_count(), 3);
    }

    #[test]
    fn fluent_api_builds_machine() {
        let machine = GumballMachine::builder()
            .inventory(7)
            .odds(FixedOdds::losing())
            .sink(MemorySink::new())
            .build()
            .unwrap();

        assert_eq!(machine.inventory_count(), 7);
        assert_eq!(machine.state_name(), "NoCoin");
    }
}
