//! ADC reading to battery voltage conversion

/// Fixed linear scale from a normalized ADC reading to battery volts
///
/// volts = reading × reference × divider ratio × calibration
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct VoltageScale {
    /// ADC reference voltage
    pub reference_v: f32,
    /// Battery-to-pin divider ratio (2.0 for a 2:1 divider)
    pub divider_ratio: f32,
    /// Board-specific correction factor
    pub calibration: f32,
}

impl VoltageScale {
    /// Create a new scale
    pub const fn new(reference_v: f32, divider_ratio: f32, calibration: f32) -> Self {
        Self {
            reference_v,
            divider_ratio,
            calibration,
        }
    }

    /// Volts at the battery for a full-scale reading
    pub fn full_scale_v(&self) -> f32 {
        self.reference_v * self.divider_ratio * self.calibration
    }

    /// Convert a reading in `[0.0, 1.0]` to volts
    ///
    /// Readings outside the range are clamped.
    pub fn to_volts(&self, normalized: f32) -> f32 {
        let normalized = if normalized.is_nan() {
            0.0
        } else {
            normalized.clamp(0.0, 1.0)
        };
        normalized * self.full_scale_v()
    }
}
