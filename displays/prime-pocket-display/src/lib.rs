//! Display abstraction for Prime Pocket
//!
//! This crate provides:
//! - `PixelSurface` trait: the only drawing protocol the firmware uses
//!   (fill rectangle, outline rectangle, text at a pixel position)
//! - `Color` and `Font` enums naming the palette and typefaces
//! - `GraphicsSurface`, an adapter that implements `PixelSurface` for any
//!   `embedded-graphics` draw target with RGB565 pixels
//!
//! # Architecture
//!
//! Screen layouts in the core crate are written against `PixelSurface` only.
//! The firmware wraps its ST7789 driver in a `GraphicsSurface`; tests use a
//! recording fake.

#![cfg_attr(not(test), no_std)]

pub mod backend;
pub mod graphics;

// Re-export key types
pub use backend::{Color, DisplayError, Font, PixelSurface};
pub use graphics::GraphicsSurface;
