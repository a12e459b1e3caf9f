//! Analog input abstraction
//!
//! A single ADC channel bound to one pin. Readings are raw counts; the
//! default `read_normalized` maps them onto `[0.0, 1.0]`.

/// Errors reported by an analog read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// Conversion did not complete or reported an error
    ConversionFailed,
}

/// Analog input channel
pub trait AnalogInput {
    /// Read the raw conversion result
    fn read_raw(&mut self) -> Result<u16, AdcError>;

    /// Largest raw value the converter can return (4095 for 12-bit)
    fn full_scale(&self) -> u16 {
        4095
    }

    /// Read a sample normalized to `[0.0, 1.0]`
    fn read_normalized(&mut self) -> Result<f32, AdcError> {
        let raw = self.read_raw()?;
        let full_scale = self.full_scale().max(1);
        Ok(raw.min(full_scale) as f32 / full_scale as f32)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct DummyAdc(Result<u16, AdcError>);

    impl AnalogInput for DummyAdc {
        fn read_raw(&mut self) -> Result<u16, AdcError> {
            self.0
        }
    }

    #[test]
    fn test_normalized_range() {
        assert_eq!(DummyAdc(Ok(0)).read_normalized(), Ok(0.0));
        assert_eq!(DummyAdc(Ok(4095)).read_normalized(), Ok(1.0));

        let mid = DummyAdc(Ok(2048)).read_normalized().unwrap();
        assert!((mid - 0.5).abs() < 0.001);
    }

    #[test]
    fn test_out_of_range_raw_is_clamped() {
        assert_eq!(DummyAdc(Ok(u16::MAX)).read_normalized(), Ok(1.0));
    }

    #[test]
    fn test_error_propagates() {
        assert_eq!(
            DummyAdc(Err(AdcError::ConversionFailed)).read_normalized(),
            Err(AdcError::ConversionFailed)
        );
    }
}
