//! Injectable randomness for the bonus branch.
//!
//! The machine never reaches for a global random generator. It draws from
//! an [`OddsSource`] handed in at construction, which keeps the bonus
//! branch deterministic under a seeded source and lets tests force either
//! outcome.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Design value for the bonus branch: one crank in ten wins.
pub const WIN_PROBABILITY: f64 = 0.1;

/// Errors from constructing an odds source.
#[derive(Debug, Error, PartialEq)]
pub enum OddsError {
    #[error("win probability {0} is outside [0.0, 1.0]")]
    ProbabilityOutOfRange(f64),
}

/// A capability that answers one question: did this crank win the bonus?
///
/// Drawn exactly once per crank while a coin is in the slot, regardless of
/// the outcome, so a seeded source replays identically.
pub trait OddsSource: Send {
    /// Draw the bonus outcome for one crank.
    fn draw(&mut self) -> bool;
}

fn check_probability(probability: f64) -> Result<f64, OddsError> {
    if (0.0..=1.0).contains(&probability) {
        Ok(probability)
    } else {
        Err(OddsError::ProbabilityOutOfRange(probability))
    }
}

/// Production odds over the thread-local generator.
///
/// The probability is range-checked at construction, so the draw itself
/// can never go out of range.
///
/// # Example
///
/// ```rust
/// use gumball::odds::{OddsSource, ThreadRngOdds};
///
/// let mut odds = ThreadRngOdds::default();
/// let _ = odds.draw();
///
/// assert!(ThreadRngOdds::new(1.5).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct ThreadRngOdds {
    probability: f64,
}

impl ThreadRngOdds {
    /// Create a source winning with the given probability in [0.0, 1.0].
    pub fn new(probability: f64) -> Result<Self, OddsError> {
        Ok(Self {
            probability: check_probability(probability)?,
        })
    }

    /// The configured win probability.
    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl Default for ThreadRngOdds {
    fn default() -> Self {
        Self {
            probability: WIN_PROBABILITY,
        }
    }
}

impl OddsSource for ThreadRngOdds {
    fn draw(&mut self) -> bool {
        rand::thread_rng().gen_bool(self.probability)
    }
}

/// Seeded odds for reproducible runs.
///
/// Two sources built from the same seed produce the same draw sequence.
#[derive(Clone, Debug)]
pub struct SeededOdds {
    rng: StdRng,
    probability: f64,
}

impl SeededOdds {
    /// Create a seeded source at the design probability.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            probability: WIN_PROBABILITY,
        }
    }

    /// Create a seeded source with a custom probability in [0.0, 1.0].
    pub fn with_probability(seed: u64, probability: f64) -> Result<Self, OddsError> {
        Ok(Self {
            rng: StdRng::seed_from_u64(seed),
            probability: check_probability(probability)?,
        })
    }
}

impl OddsSource for SeededOdds {
    fn draw(&mut self) -> bool {
        self.rng.gen_bool(self.probability)
    }
}

/// Constant odds for tests: every draw reports the same outcome.
///
/// With `FixedOdds::losing()` the machine is indistinguishable from one
/// without the bonus branch.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedOdds(bool);

impl FixedOdds {
    /// Every crank wins.
    pub fn winning() -> Self {
        Self(true)
    }

    /// Every crank loses.
    pub fn losing() -> Self {
        Self(false)
    }
}

impl OddsSource for FixedOdds {
    fn draw(&mut self) -> bool {
        self.0
    }
}

/// Scripted odds for tests: draws follow a fixed sequence, cycling when
/// exhausted.
#[derive(Clone, Debug)]
pub struct SequenceOdds {
    outcomes: Vec<bool>,
    index: usize,
}

impl SequenceOdds {
    /// Create a source replaying the given outcomes.
    ///
    /// An empty sequence behaves like `FixedOdds::losing()`.
    pub fn new(outcomes: Vec<bool>) -> Self {
        Self { outcomes, index: 0 }
    }
}

impl OddsSource for SequenceOdds {
    fn draw(&mut self) -> bool {
        if self.outcomes.is_empty() {
            return false;
        }
        let outcome = self.outcomes[self.index % self.outcomes.len()];
        self.index += 1;
        outcome
    }
}
