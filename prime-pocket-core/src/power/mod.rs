//! Battery monitoring
//!
//! Converts ADC samples to volts, keeps a debounced discharge-rate estimate
//! and derives the figures shown on the battery screen.

pub mod monitor;
pub mod report;
pub mod scale;

pub use monitor::PowerMonitor;
pub use report::{percentage_full, BatteryReport, ChargeBand, RemainingTime};
pub use scale::VoltageScale;
