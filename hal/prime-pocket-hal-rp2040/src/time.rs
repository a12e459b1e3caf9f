//! Clock backed by the embassy time driver

use embassy_time::{block_for, Duration, Instant};
use prime_pocket_hal::Clock;

/// Uptime clock; pauses spin on the time driver
#[derive(Debug, Default, Clone, Copy)]
pub struct EmbassyClock;

impl Clock for EmbassyClock {
    fn now_ms(&self) -> u64 {
        Instant::now().as_millis()
    }

    fn pause_ms(&mut self, ms: u32) {
        block_for(Duration::from_millis(u64::from(ms)));
    }
}
