//! Configuration
//!
//! Every tunable is a compile-time constant. `DeviceConfig` gathers them so
//! tests can boot a device with a small table and custom thresholds.

pub mod device;

pub use device::*;
