//! Input polling interface for the wake cycle

/// Everything the wake cycle reads from or drives on the board
///
/// The battery screen loop polls `is_button_active` between refreshes, so a
/// scripted implementation is enough to drive the whole cycle in tests.
pub trait BoardIo {
    /// Charger reports the battery is being charged
    fn is_charging(&self) -> bool;

    /// User is holding the battery screen button
    fn is_button_active(&self) -> bool;

    /// Drive the indicator light
    fn set_indicator(&mut self, on: bool);

    /// Battery sensor reading normalized to `[0.0, 1.0]`
    ///
    /// `None` when the converter failed; the caller skips the voltage update.
    fn read_battery_level(&mut self) -> Option<f32>;

    /// Milliseconds since boot
    fn now_ms(&self) -> u64;

    /// Block for `ms` milliseconds
    fn pause_ms(&mut self, ms: u32);
}
