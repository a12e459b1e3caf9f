//! Board wiring for a Raspberry Pi Pico with a Pico Display Pack
//!
//! - Charge signal: GPIO24 (VBUS sense, high while USB power is present)
//! - Battery screen button: GPIO12 (button A, active-low)
//! - Indicator: GPIO25 (on-board LED)
//! - Battery: ADC3 on GPIO29 (VSYS / 3)

use embassy_rp::adc::{Adc, Blocking, Channel};
use embassy_rp::gpio::{Input, Output};
use prime_pocket_core::board::PinBoard;
use prime_pocket_hal_rp2040::{ActiveLow, EmbassyClock, RpAnalogInput, RpInputPin, RpOutputPin};

/// Concrete board type used by the wake cycle
pub type HandheldBoard = PinBoard<
    RpInputPin<'static>,
    ActiveLow<RpInputPin<'static>>,
    RpOutputPin<'static>,
    RpAnalogInput<'static>,
    EmbassyClock,
>;

/// Assemble the board from configured pins
pub fn build(
    charge: Input<'static>,
    button: Input<'static>,
    indicator: Output<'static>,
    adc: Adc<'static, Blocking>,
    vsys: Channel<'static>,
) -> HandheldBoard {
    PinBoard::new(
        RpInputPin::new(charge),
        ActiveLow(RpInputPin::new(button)),
        RpOutputPin::new(indicator),
        RpAnalogInput::new(adc, vsys),
        EmbassyClock,
    )
}
