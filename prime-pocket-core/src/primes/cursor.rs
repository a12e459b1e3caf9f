//! Cyclic prime cursor
//!
//! Walks the primality table one prime per call, wrapping modulo N.

use super::sieve::PrimeTable;

/// Errors when positioning a cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CursorError {
    /// Table contains no prime, so the walk would never terminate
    NoPrimes,
}

/// Position in the primality table
///
/// The index always points at the next candidate; `next_prime` skips
/// composites from there, returns the prime and steps past it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PrimeCursor {
    index: usize,
}

impl PrimeCursor {
    /// Create a cursor at index 0
    ///
    /// Fails for a table without primes (N <= 2).
    pub fn new(table: &PrimeTable) -> Result<Self, CursorError> {
        if table.iter_primes().next().is_none() {
            return Err(CursorError::NoPrimes);
        }
        Ok(Self { index: 0 })
    }

    /// Current index into the table
    pub fn position(&self) -> usize {
        self.index
    }

    /// Return the next prime and advance past it
    ///
    /// `table` must be the table the cursor was created for.
    pub fn next_prime(&mut self, table: &PrimeTable) -> usize {
        let len = table.len();

        // Bounded by one full lap; `new` guarantees a prime exists
        let mut steps = 0;
        while !table.is_prime(self.index) && steps < len {
            self.index = (self.index + 1) % len;
            steps += 1;
        }

        let prime = self.index;
        self.index = (self.index + 1) % len;
        prime
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_ascending_then_wraps() {
        let table = PrimeTable::sieve(30).unwrap();
        let mut cursor = PrimeCursor::new(&table).unwrap();

        let first_lap: Vec<usize> = (0..10).map(|_| cursor.next_prime(&table)).collect();
        assert_eq!(first_lap, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);

        // 29 was the last index, so the cursor wrapped to 0
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.next_prime(&table), 2);
    }

    #[test]
    fn test_position_after_call() {
        let table = PrimeTable::sieve(30).unwrap();
        let mut cursor = PrimeCursor::new(&table).unwrap();

        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.next_prime(&table), 2);
        assert_eq!(cursor.position(), 3);
        assert_eq!(cursor.next_prime(&table), 3);
        assert_eq!(cursor.position(), 4);
    }

    #[test]
    fn test_single_prime_table() {
        let table = PrimeTable::sieve(3).unwrap();
        let mut cursor = PrimeCursor::new(&table).unwrap();

        for _ in 0..5 {
            assert_eq!(cursor.next_prime(&table), 2);
        }
    }

    #[test]
    fn test_prime_less_table_rejected() {
        let table = PrimeTable::sieve(2).unwrap();
        assert_eq!(PrimeCursor::new(&table), Err(CursorError::NoPrimes));
    }

    proptest! {
        #[test]
        fn prop_one_lap_returns_to_first_prime(size in 3usize..500, laps in 1usize..3) {
            let table = PrimeTable::sieve(size).unwrap();
            let mut cursor = PrimeCursor::new(&table).unwrap();
            let expected: Vec<usize> = table.iter_primes().collect();

            for _ in 0..laps {
                let lap: Vec<usize> = (0..expected.len()).map(|_| cursor.next_prime(&table)).collect();
                prop_assert_eq!(&lap, &expected);
            }
            prop_assert_eq!(cursor.next_prime(&table), 2);
        }
    }
}
