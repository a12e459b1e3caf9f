//! Battery screen figures
//!
//! Percentage full, colour band and remaining-time text, derived from the
//! monitor state plus a live voltage sample.

use core::fmt::{self, Write};

use heapless::String;
use prime_pocket_display::Color;

use super::monitor::PowerMonitor;

/// Text capacity for one battery screen line
pub const LINE_CAPACITY: usize = 32;

/// Fraction full by linear interpolation between empty and full voltage
///
/// Clamped to `[0.0, 1.0]`.
pub fn percentage_full(voltage: f32, die_threshold_v: f32, max_voltage_v: f32) -> f32 {
    if !(voltage > die_threshold_v) {
        return 0.0;
    }
    let fraction = (voltage - die_threshold_v) / (max_voltage_v - die_threshold_v);
    fraction.min(1.0)
}

/// Three-tier colour band for the charge bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ChargeBand {
    /// 10% or less
    Red,
    /// Above 10%, up to 30%
    Yellow,
    /// Above 30%
    Green,
}

impl ChargeBand {
    /// Band for a fraction in `[0.0, 1.0]`
    pub fn from_percentage(percentage: f32) -> Self {
        if percentage <= 0.10 {
            ChargeBand::Red
        } else if percentage <= 0.30 {
            ChargeBand::Yellow
        } else {
            ChargeBand::Green
        }
    }

    /// Bar fill colour
    pub fn color(&self) -> Color {
        match self {
            ChargeBand::Red => Color::Red,
            ChargeBand::Yellow => Color::Yellow,
            ChargeBand::Green => Color::Green,
        }
    }
}

/// Status line content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RemainingTime {
    /// Charge signal asserted
    Charging,
    /// Below the die threshold
    Empty,
    /// Discharging but no estimate yet
    Unknown,
    /// A day or more left
    Days(u32),
    /// Less than a day left
    HoursMinutes { hours: u32, minutes: u32 },
}

impl RemainingTime {
    /// Bucket a time-to-die estimate
    pub fn from_seconds(seconds: u32) -> Self {
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;

        if hours >= 24 {
            RemainingTime::Days(hours / 24)
        } else {
            RemainingTime::HoursMinutes { hours, minutes }
        }
    }

    /// Pick the status for the current monitor state
    ///
    /// Charging wins over empty, empty wins over the estimate.
    pub fn for_monitor(monitor: &PowerMonitor, charging: bool) -> Self {
        if charging {
            RemainingTime::Charging
        } else if monitor.is_empty() {
            RemainingTime::Empty
        } else {
            monitor
                .time_to_die_s()
                .map_or(RemainingTime::Unknown, RemainingTime::from_seconds)
        }
    }
}

impl fmt::Display for RemainingTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemainingTime::Charging => f.write_str("Battery charging"),
            RemainingTime::Empty => f.write_str("Battery empty"),
            RemainingTime::Unknown => f.write_str("Remaining: unknown"),
            RemainingTime::Days(days) => write!(f, "Remaining: {:02} days", days),
            RemainingTime::HoursMinutes { hours, minutes } => {
                write!(f, "Remaining: {:02}h {:02}m", hours, minutes)
            }
        }
    }
}

/// Everything the battery screen shows
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct BatteryReport {
    /// Voltage sampled for this refresh
    pub live_voltage: f32,
    /// Fraction full from the debounced voltage
    pub percentage: f32,
    /// Bar colour
    pub band: ChargeBand,
    /// Status line
    pub remaining: RemainingTime,
}

impl BatteryReport {
    /// Build the report for one battery screen refresh
    pub fn new(monitor: &PowerMonitor, live_voltage: f32, charging: bool) -> Self {
        let percentage = percentage_full(
            monitor.last_voltage(),
            monitor.die_threshold_v(),
            monitor.max_voltage_v(),
        );

        Self {
            live_voltage,
            percentage,
            band: ChargeBand::from_percentage(percentage),
            remaining: RemainingTime::for_monitor(monitor, charging),
        }
    }

    /// "Battery: 3.87V (65.4%)"
    pub fn voltage_line(&self) -> String<LINE_CAPACITY> {
        let mut line = String::new();
        let _ = write!(
            line,
            "Battery: {:.2}V ({:.1}%)",
            self.live_voltage,
            self.percentage * 100.0
        );
        line
    }

    /// Charging, empty or remaining-time line
    pub fn status_line(&self) -> String<LINE_CAPACITY> {
        let mut line = String::new();
        let _ = write!(line, "{}", self.remaining);
        line
    }
}
