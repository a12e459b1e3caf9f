//! Board-agnostic core logic for the Prime Pocket handheld
//!
//! This crate contains all application logic that does not depend on
//! specific hardware implementations:
//!
//! - Sieve of Eratosthenes and the cyclic prime cursor
//! - Battery voltage monitor and time-to-empty estimate
//! - State machine for the wake/sleep cycle
//! - Screen layouts drawn through `PixelSurface`
//! - Compile-time configuration
//!
//! The primality table lives on the heap, so the crate needs `alloc`.
//! Host tests run with `std` (via `cfg_attr`) while the firmware is `no_std`.

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::cast_sign_loss)]

extern crate alloc;

pub mod board;
pub mod config;
pub mod device;
pub mod power;
pub mod primes;
pub mod screens;
pub mod state;
pub mod traits;

pub use device::{BootError, CycleReport, Device};
