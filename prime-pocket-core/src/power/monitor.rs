//! Discharge-rate monitor
//!
//! Keeps the last accepted voltage sample and a linear extrapolation of
//! the time left until the die threshold. A sample is accepted only when
//! both the elapsed time and the voltage change reach their minimums,
//! which filters ADC noise and keeps the rate division away from zero.

use micromath::F32;

use crate::config::DeviceConfig;

/// Slack on the voltage step check so a step of exactly the minimum passes
/// despite f32 rounding (one ULP near 4 V is about 0.5 uV)
const DELTA_TOLERANCE_V: f32 = 1e-5;

/// Battery voltage monitor
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerMonitor {
    /// Last accepted voltage (V)
    last_voltage: f32,
    /// Timestamp of the last accepted sample (ms)
    last_time_ms: u64,
    /// Voltage change per second between the last two accepted samples
    discharge_rate: Option<f32>,
    /// Seconds until the die threshold, only while discharging
    time_to_die_s: Option<u32>,
    /// Empty battery voltage
    die_threshold_v: f32,
    /// Full battery voltage
    max_voltage_v: f32,
    /// Debounce interval (ms)
    min_interval_ms: u64,
    /// Debounce voltage step (V)
    min_delta_v: f32,
}

impl PowerMonitor {
    /// Create a monitor from the device configuration
    ///
    /// The baseline starts at the die threshold at time zero, so the first
    /// accepted sample yields a positive rate and no estimate.
    pub fn new(config: &DeviceConfig) -> Self {
        Self {
            last_voltage: config.die_threshold_v,
            last_time_ms: 0,
            discharge_rate: None,
            time_to_die_s: None,
            die_threshold_v: config.die_threshold_v,
            max_voltage_v: config.max_voltage_v,
            min_interval_ms: config.min_update_interval_ms,
            min_delta_v: config.min_voltage_delta_v,
        }
    }

    /// Offer a new sample
    ///
    /// Returns `true` if the sample was accepted and the stored state changed.
    pub fn update(&mut self, voltage: f32, now_ms: u64) -> bool {
        if !voltage.is_finite() {
            return false;
        }

        let elapsed_ms = now_ms.saturating_sub(self.last_time_ms);
        let delta_v = voltage - self.last_voltage;

        if elapsed_ms < self.min_interval_ms
            || F32(delta_v).abs().0 + DELTA_TOLERANCE_V < self.min_delta_v
        {
            return false;
        }

        let rate = 1000.0 * delta_v / elapsed_ms as f32;
        self.discharge_rate = Some(rate);
        self.time_to_die_s = estimate_time_to_die(voltage, rate, self.die_threshold_v);
        self.last_voltage = voltage;
        self.last_time_ms = now_ms;

        true
    }

    /// Last accepted voltage
    pub fn last_voltage(&self) -> f32 {
        self.last_voltage
    }

    /// Timestamp of the last accepted sample
    pub fn last_time_ms(&self) -> u64 {
        self.last_time_ms
    }

    /// Volts per second between the last two accepted samples
    pub fn discharge_rate(&self) -> Option<f32> {
        self.discharge_rate
    }

    /// Seconds until empty; `None` while charging, flat or before any estimate
    pub fn time_to_die_s(&self) -> Option<u32> {
        self.time_to_die_s
    }

    /// Empty battery voltage
    pub fn die_threshold_v(&self) -> f32 {
        self.die_threshold_v
    }

    /// Full battery voltage
    pub fn max_voltage_v(&self) -> f32 {
        self.max_voltage_v
    }

    /// Battery is below the die threshold
    pub fn is_empty(&self) -> bool {
        self.last_voltage < self.die_threshold_v
    }
}

/// Linear extrapolation to the die threshold
///
/// Only a falling voltage gives a meaningful answer. A battery that is
/// already below the threshold reports zero.
fn estimate_time_to_die(voltage: f32, rate_v_per_s: f32, die_threshold_v: f32) -> Option<u32> {
    if !rate_v_per_s.is_finite() || rate_v_per_s >= 0.0 {
        return None;
    }

    let seconds = -(voltage - die_threshold_v) / rate_v_per_s;
    if !seconds.is_finite() {
        return None;
    }

    Some(seconds.clamp(0.0, u32::MAX as f32) as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn monitor() -> PowerMonitor {
        PowerMonitor::new(&DeviceConfig::default())
    }

    /// Monitor with an accepted baseline of `voltage` at `time_ms`
    fn seeded(voltage: f32, time_ms: u64) -> PowerMonitor {
        let mut m = monitor();
        assert!(m.update(voltage, time_ms));
        m
    }

    #[test]
    fn test_initial_state() {
        let m = monitor();
        assert_eq!(m.last_voltage(), 3.0);
        assert_eq!(m.last_time_ms(), 0);
        assert_eq!(m.discharge_rate(), None);
        assert_eq!(m.time_to_die_s(), None);
    }

    #[test]
    fn test_first_sample_gives_no_estimate() {
        // Rising from the 3.0 V baseline looks like charging
        let m = seeded(4.0, 5000);
        assert!(m.discharge_rate().unwrap() > 0.0);
        assert_eq!(m.time_to_die_s(), None);
    }

    #[test]
    fn test_debounce_short_interval() {
        let mut m = seeded(4.0, 10_000);
        let before = m.clone();

        // Large drop but only 999 ms later
        assert!(!m.update(3.5, 10_999));
        assert_eq!(m, before);
    }

    #[test]
    fn test_debounce_small_delta() {
        let mut m = seeded(4.0, 10_000);
        let before = m.clone();

        // Long wait but only 5 mV change
        assert!(!m.update(3.995, 60_000));
        assert_eq!(m, before);
    }

    #[test]
    fn test_minimum_step_accepted() {
        // 4.00 -> 3.99 is exactly the 10 mV minimum
        let mut m = seeded(4.0, 10_000);
        assert!(m.update(3.99, 20_000));
        assert_eq!(m.last_voltage(), 3.99);
        assert_eq!(m.last_time_ms(), 20_000);

        // Same step upwards
        assert!(m.update(4.0, 30_000));
        assert_eq!(m.last_voltage(), 4.0);
    }

    #[test]
    fn test_just_below_minimum_step_rejected() {
        let mut m = seeded(4.0, 10_000);
        assert!(!m.update(3.991, 20_000));
        assert_eq!(m.last_voltage(), 4.0);
    }

    #[test]
    fn test_discharge_estimate() {
        let mut m = seeded(4.0, 10_000);

        // 0.1 V lost in 100 s -> 1 mV/s, 0.9 V above threshold -> 900 s
        assert!(m.update(3.9, 110_000));
        let rate = m.discharge_rate().unwrap();
        assert!((rate + 0.001).abs() < 1e-6);

        let ttd = m.time_to_die_s().unwrap();
        assert!((899..=901).contains(&ttd));
        assert_eq!(m.last_voltage(), 3.9);
        assert_eq!(m.last_time_ms(), 110_000);
    }

    #[test]
    fn test_charging_suppresses_estimate() {
        let mut m = seeded(3.8, 10_000);
        assert!(m.update(3.7, 20_000));
        assert!(m.time_to_die_s().is_some());

        // Voltage climbs again
        assert!(m.update(3.9, 30_000));
        assert_eq!(m.time_to_die_s(), None);
    }

    #[test]
    fn test_below_threshold_clamps_to_zero() {
        let mut m = seeded(3.2, 10_000);
        assert!(m.update(2.9, 20_000));
        assert_eq!(m.time_to_die_s(), Some(0));
        assert!(m.is_empty());
    }

    #[test]
    fn test_non_finite_sample_ignored() {
        let mut m = seeded(4.0, 10_000);
        let before = m.clone();
        assert!(!m.update(f32::NAN, 20_000));
        assert!(!m.update(f32::INFINITY, 20_000));
        assert_eq!(m, before);
    }

    #[test]
    fn test_clock_going_backwards_is_ignored() {
        let mut m = seeded(4.0, 10_000);
        assert!(!m.update(3.0, 5_000));
    }
}
