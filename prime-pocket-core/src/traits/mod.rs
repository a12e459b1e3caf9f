//! Hardware abstraction traits
//!
//! The interface between the wake cycle and whatever board it runs on.

pub mod board;

pub use board::BoardIo;
