//! GPIO pins
//!
//! Thin wrappers that let embassy pins stand in for the HAL pin traits.

use embassy_rp::gpio::{Input, Output};

/// Digital input on an RP2040 GPIO
pub struct RpInputPin<'d> {
    pin: Input<'d>,
}

impl<'d> RpInputPin<'d> {
    pub fn new(pin: Input<'d>) -> Self {
        Self { pin }
    }
}

impl prime_pocket_hal::InputPin for RpInputPin<'_> {
    fn is_high(&self) -> bool {
        self.pin.is_high()
    }
}

/// Digital output on an RP2040 GPIO
pub struct RpOutputPin<'d> {
    pin: Output<'d>,
}

impl<'d> RpOutputPin<'d> {
    pub fn new(pin: Output<'d>) -> Self {
        Self { pin }
    }
}

impl prime_pocket_hal::OutputPin for RpOutputPin<'_> {
    fn set_high(&mut self) {
        self.pin.set_high();
    }

    fn set_low(&mut self) {
        self.pin.set_low();
    }

    fn is_set_high(&self) -> bool {
        self.pin.is_set_high()
    }
}
