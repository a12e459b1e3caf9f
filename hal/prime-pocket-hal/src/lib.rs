//! Prime Pocket Hardware Abstraction Layer
//!
//! This crate defines the small set of hardware traits the firmware needs.
//! Chip-specific crates implement them; the core crate only ever sees
//! these traits, which keeps the wake cycle testable on the host.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (prime-pocket-firmware)    │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  prime-pocket-hal (this crate - traits) │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!          ┌─────────────────────┐
//!          │ prime-pocket-hal-   │
//!          │      rp2040         │
//!          └─────────────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`], [`gpio::InputPin`] - Digital I/O
//! - [`adc::AnalogInput`] - Single-channel analog sampling
//! - [`time::Clock`] - Millisecond clock with blocking pause

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod time;

// Re-export key traits at crate root for convenience
pub use adc::{AdcError, AnalogInput};
pub use gpio::{ActiveLow, InputPin, OutputPin};
pub use time::Clock;
