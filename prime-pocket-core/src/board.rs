//! `BoardIo` over the HAL pin traits
//!
//! Pin polarity is sorted out before the pins get here: wrap active-low
//! lines in [`ActiveLow`](prime_pocket_hal::ActiveLow) so that "high"
//! always means asserted.

use prime_pocket_hal::{AnalogInput, Clock, InputPin, OutputPin};

use crate::traits::BoardIo;

/// Board built from individual pins, an ADC channel and a clock
pub struct PinBoard<CHG, BTN, LED, BAT, CLK> {
    charge: CHG,
    button: BTN,
    indicator: LED,
    battery: BAT,
    clock: CLK,
}

impl<CHG, BTN, LED, BAT, CLK> PinBoard<CHG, BTN, LED, BAT, CLK>
where
    CHG: InputPin,
    BTN: InputPin,
    LED: OutputPin,
    BAT: AnalogInput,
    CLK: Clock,
{
    pub fn new(charge: CHG, button: BTN, indicator: LED, battery: BAT, clock: CLK) -> Self {
        Self {
            charge,
            button,
            indicator,
            battery,
            clock,
        }
    }

    /// Current indicator output
    pub fn indicator_on(&self) -> bool {
        self.indicator.is_set_high()
    }
}

impl<CHG, BTN, LED, BAT, CLK> BoardIo for PinBoard<CHG, BTN, LED, BAT, CLK>
where
    CHG: InputPin,
    BTN: InputPin,
    LED: OutputPin,
    BAT: AnalogInput,
    CLK: Clock,
{
    fn is_charging(&self) -> bool {
        self.charge.is_high()
    }

    fn is_button_active(&self) -> bool {
        self.button.is_high()
    }

    fn set_indicator(&mut self, on: bool) {
        self.indicator.set_state(on);
    }

    fn read_battery_level(&mut self) -> Option<f32> {
        self.battery.read_normalized().ok()
    }

    fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    fn pause_ms(&mut self, ms: u32) {
        self.clock.pause_ms(ms);
    }
}
