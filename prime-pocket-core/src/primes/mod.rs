//! Prime number generation and traversal
//!
//! The table is computed once at boot with the Sieve of Eratosthenes and
//! never modified afterwards. The cursor walks it one prime per wake-up.

pub mod cursor;
pub mod sieve;

pub use cursor::{CursorError, PrimeCursor};
pub use sieve::{PrimeTable, SieveError};
