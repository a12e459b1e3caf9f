//! Time abstraction
//!
//! The wake cycle needs two things from a clock: a monotonic timestamp for
//! the discharge-rate estimate and a blocking pause between battery screen
//! refreshes.

/// Monotonic millisecond clock
pub trait Clock {
    /// Milliseconds since boot
    fn now_ms(&self) -> u64;

    /// Block the caller for `ms` milliseconds
    fn pause_ms(&mut self, ms: u32);
}
