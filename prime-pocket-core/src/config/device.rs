//! Device configuration constants

use crate::power::VoltageScale;

/// Size of the primality table (primes below this are displayed)
pub const MAX_PRIME: usize = 100_001;

/// Time between wake-ups
pub const SLEEP_INTERVAL_MS: u64 = 1000;

/// Pause between battery screen redraws while the button is held
pub const POWER_SCREEN_REFRESH_MS: u32 = 1000;

/// Voltage at which the battery is considered empty
pub const DIE_THRESHOLD_V: f32 = 3.0;

/// Voltage of a fully charged battery
pub const MAX_VOLTAGE_V: f32 = 4.34;

/// Minimum time between stored voltage samples
pub const MIN_UPDATE_INTERVAL_MS: u64 = 1000;

/// Minimum voltage change before a sample is stored
pub const MIN_VOLTAGE_DELTA_V: f32 = 0.01;

/// ADC reference voltage
pub const ADC_REFERENCE_V: f32 = 3.3;

/// VSYS divider on the Pico (VSYS / 3 reaches ADC3)
pub const DIVIDER_RATIO: f32 = 3.0;

/// Multiplicative correction applied on top of the nominal scale
pub const ADC_CALIBRATION: f32 = 1.0;

/// Configuration errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// Table must cover at least [0, 2)
    TableTooSmall,
    /// Die threshold must sit below the full-charge voltage
    InvalidVoltageRange,
    /// Scale factors must be positive
    InvalidScale,
}

/// Complete device configuration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DeviceConfig {
    /// Primality table size N
    pub table_size: usize,
    /// Battery screen refresh pause (ms)
    pub power_refresh_ms: u32,
    /// Empty battery voltage
    pub die_threshold_v: f32,
    /// Full battery voltage
    pub max_voltage_v: f32,
    /// Debounce: minimum elapsed time (ms)
    pub min_update_interval_ms: u64,
    /// Debounce: minimum voltage change (V)
    pub min_voltage_delta_v: f32,
    /// ADC reading to volts conversion
    pub scale: VoltageScale,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            table_size: MAX_PRIME,
            power_refresh_ms: POWER_SCREEN_REFRESH_MS,
            die_threshold_v: DIE_THRESHOLD_V,
            max_voltage_v: MAX_VOLTAGE_V,
            min_update_interval_ms: MIN_UPDATE_INTERVAL_MS,
            min_voltage_delta_v: MIN_VOLTAGE_DELTA_V,
            scale: VoltageScale::new(ADC_REFERENCE_V, DIVIDER_RATIO, ADC_CALIBRATION),
        }
    }
}

impl DeviceConfig {
    /// Same configuration with a different table size
    pub fn with_table_size(mut self, table_size: usize) -> Self {
        self.table_size = table_size;
        self
    }

    /// Check the configuration for values the firmware cannot run with
    ///
    /// Comparisons are written so that NaN fails them.
    #[allow(clippy::neg_cmp_op_on_partial_ord)]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.table_size < 2 {
            return Err(ConfigError::TableTooSmall);
        }

        if !(self.die_threshold_v < self.max_voltage_v) {
            return Err(ConfigError::InvalidVoltageRange);
        }

        if !(self.scale.reference_v > 0.0
            && self.scale.divider_ratio > 0.0
            && self.scale.calibration > 0.0)
        {
            return Err(ConfigError::InvalidScale);
        }

        Ok(())
    }
}
