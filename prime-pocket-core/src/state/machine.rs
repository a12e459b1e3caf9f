//! Mode definition
//!
//! What the device does in a cycle is a function of the current mode and
//! an event.

use super::events::Event;

/// Device modes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Mode {
    /// Low-power wait for the sleep timer
    Asleep,
    /// Inputs sampled, indicator refreshed
    Awake,
    /// Banner and prime shown
    NormalDisplay,
    /// Battery screen shown while the button is held
    PowerDisplay,
    /// Fatal error; no wake path
    Halted(FaultKind),
}

/// Fatal startup conditions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum FaultKind {
    /// Primality table could not be allocated
    OutOfMemory,
    /// Table contains no prime to show
    NoPrimes,
    /// Compile-time configuration is inconsistent
    InvalidConfig,
}

impl Mode {
    /// Process an event and return the next mode
    pub fn transition(self, event: Event) -> Self {
        use Event::*;
        use Mode::*;

        match (self, event) {
            // Halt is absorbing
            (Halted(_), _) => self,
            (_, Fault(kind)) => Halted(kind),

            (Asleep, Wake) => Awake,

            (Awake, ButtonActive) => PowerDisplay,
            (Awake, ButtonCleared) => NormalDisplay,

            (PowerDisplay, ButtonCleared) => NormalDisplay,

            (NormalDisplay, ButtonActive) => PowerDisplay,
            (NormalDisplay, PrimeShown) => Asleep,

            _ => self,
        }
    }
}
