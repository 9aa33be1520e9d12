//! Gumball: a coin-operated dispenser modeled as a pure state machine
//!
//! Gumball follows a "pure core, imperative shell" design. The transition
//! table is a pure function over value types, while the machine context
//! isolates the three impure concerns behind injected capabilities: the
//! randomness behind the bonus branch, the sink that receives status
//! messages, and the clock stamping the dispatch history.
//!
//! # Core Concepts
//!
//! - **MachineState**: the five behavioral modes; only `NoCoin`, `HasCoin`,
//!   and `SoldOut` are observable between events
//! - **Event**: the three external events; every (state, event) pair is a
//!   defined response, never a fault
//! - **Notice**: status messages as data, delivered to an injected sink
//! - **OddsSource**: the injectable randomness deciding the bonus branch
//!
//! # Example
//!
//! ```rust
//! use gumball::machine::GumballMachine;
//! use gumball::odds::SeededOdds;
//! use gumball::sink::MemorySink;
//!
//! let sink = MemorySink::new();
//! let mut machine = GumballMachine::builder()
//!     .inventory(5)
//!     .odds(SeededOdds::new(42))
//!     .sink(sink.clone())
//!     .build()
//!     .unwrap();
//!
//! machine.insert_coin();
//! machine.turn_crank();
//!
//! // A crank from an armed machine releases exactly one or two units.
//! let released = 5 - machine.inventory_count();
//! assert!(released == 1 || released == 2);
//! ```

pub mod core;
pub mod machine;
pub mod odds;
pub mod sink;

// Re-export commonly used types
pub use crate::core::{Event, MachineState, Notice};
pub use crate::machine::{BuildError, GumballMachine, MachineBuilder};
pub use crate::odds::{FixedOdds, OddsSource, SeededOdds, ThreadRngOdds};
pub use crate::sink::{EventSink, MemorySink, StdoutSink, TracingSink};
