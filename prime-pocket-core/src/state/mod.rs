//! Wake/sleep cycle state machine
//!
//! The device alternates between a short awake burst and a timed sleep.
//! The only absorbing state is the fatal halt.

pub mod events;
pub mod machine;

pub use events::Event;
pub use machine::{FaultKind, Mode};
