//! Sieve of Eratosthenes
//!
//! Produces a primality table covering `[0, N)`. The table is the largest
//! allocation the firmware makes, so the storage is reserved fallibly and
//! an out-of-memory condition comes back as an error value.

use alloc::collections::TryReserveError;
use alloc::vec::Vec;

/// Errors that can occur while building the table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SieveError {
    /// Table must cover at least 0 and 1
    TooSmall { size: usize },
    /// Heap could not provide `requested` bytes
    OutOfMemory { requested: usize },
}

/// Primality table
///
/// Entry `i` is `true` iff `i` is prime. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeTable {
    flags: Vec<bool>,
}

impl PrimeTable {
    /// Allocate and sieve a table covering `[0, size)`
    pub fn sieve(size: usize) -> Result<Self, SieveError> {
        if size < 2 {
            return Err(SieveError::TooSmall { size });
        }

        let mut flags = Vec::new();
        flags
            .try_reserve_exact(size)
            .map_err(|_: TryReserveError| SieveError::OutOfMemory { requested: size })?;
        flags.resize(size, true);

        flags[0] = false;
        flags[1] = false;

        let mut p = 2;
        while p * p < size {
            if flags[p] {
                // Smaller multiples were struck by smaller primes
                for multiple in (p * p..size).step_by(p) {
                    flags[multiple] = false;
                }
            }
            p += 1;
        }

        Ok(Self { flags })
    }

    /// Number of entries (N)
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    /// Always false; a table holds at least two entries
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    /// Check whether `n` is prime; out-of-range values are not
    pub fn is_prime(&self, n: usize) -> bool {
        self.flags.get(n).copied().unwrap_or(false)
    }

    /// Count the primes in the table
    pub fn count(&self) -> usize {
        self.flags.iter().filter(|&&prime| prime).count()
    }

    /// Iterate the primes in ascending order
    pub fn iter_primes(&self) -> impl Iterator<Item = usize> + '_ {
        self.flags
            .iter()
            .enumerate()
            .filter_map(|(n, &prime)| prime.then_some(n))
    }
}
