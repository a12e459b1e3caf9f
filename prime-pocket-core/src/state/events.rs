//! Events that drive the main cycle

use super::machine::FaultKind;

/// Events that can trigger mode transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// Sleep timer expired
    Wake,
    /// Button held while awake
    ButtonActive,
    /// Button released, or not held at wake
    ButtonCleared,
    /// Next prime rendered, ready to sleep
    PrimeShown,
    /// Unrecoverable startup failure
    Fault(FaultKind),
}
