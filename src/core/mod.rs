//! Pure core of the dispenser.
//!
//! Everything in this module is a value type or a pure function: no I/O,
//! no randomness, no shared mutable state. The imperative pieces (the
//! machine context, the odds source, the sink) live in their own modules
//! and feed this core.

pub mod event;
pub mod history;
pub mod notice;
pub mod state;
pub mod transition;

pub use event::Event;
pub use history::{DispatchHistory, DispatchRecord};
pub use notice::Notice;
pub use state::MachineState;
pub use transition::{respond, Response};
