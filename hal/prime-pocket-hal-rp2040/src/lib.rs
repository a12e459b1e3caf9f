//! RP2040-specific HAL for the Prime Pocket handheld
//!
//! Implements the shared `prime-pocket-hal` traits on top of `embassy-rp`:
//!
//! - GPIO input and output pins
//! - Blocking ADC channel reads
//! - Millisecond clock from the embassy time driver

#![no_std]

pub mod adc;
pub mod gpio;
pub mod time;

pub use adc::RpAnalogInput;
pub use gpio::{RpInputPin, RpOutputPin};
pub use time::EmbassyClock;

// Re-export shared traits for convenience
pub use prime_pocket_hal::{ActiveLow, AnalogInput, Clock, InputPin, OutputPin};
