//! RNG module - secret and hint-position generation
//!
//! A small LCG keeps games reproducible: the same seed produces the same
//! sequence of secrets and hint positions, which is what the tests rely on.
//! Unseeded engines take their seed from the wall clock.

use std::time::{SystemTime, UNIX_EPOCH};

use crate::code::{Code, CODE_SPACE};
use crate::types::CODE_LENGTH;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Seed from the current time
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos();
        Self::new((nanos ^ (nanos >> 32)) as u32)
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, bound)
    ///
    /// Scales by the high bits; the low bits of an LCG have short periods.
    pub fn next_below(&mut self, bound: u32) -> u32 {
        ((u64::from(self.next_u32()) * u64::from(bound)) >> 32) as u32
    }

    /// Draw a uniformly distributed secret
    pub fn next_code(&mut self) -> Code {
        Code::from_index(self.next_below(CODE_SPACE))
    }

    /// Draw a 0-based code position
    pub fn next_position(&mut self) -> usize {
        self.next_below(CODE_LENGTH as u32) as usize
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        assert_ne!(rng1.next_u32(), rng2.next_u32());
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut zero = SimpleRng::new(0);
        let mut one = SimpleRng::new(1);
        assert_eq!(zero.next_u32(), one.next_u32());
    }

    #[test]
    fn test_next_below_stays_in_range() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..10_000 {
            assert!(rng.next_below(4) < 4);
            assert!(rng.next_below(CODE_SPACE) < CODE_SPACE);
        }
    }

    #[test]
    fn test_positions_cover_every_slot() {
        let mut rng = SimpleRng::new(99);
        let mut counts = [0u32; CODE_LENGTH];
        for _ in 0..4000 {
            counts[rng.next_position()] += 1;
        }
        // roughly 1000 each
        for c in counts {
            assert!((800..1200).contains(&c), "skewed positions: {:?}", counts);
        }
    }

    #[test]
    fn test_codes_vary() {
        let mut rng = SimpleRng::new(2024);
        let codes: HashSet<Code> = (0..1000).map(|_| rng.next_code()).collect();
        assert!(codes.len() > 800);
    }

    #[test]
    fn test_last_digit_is_not_periodic() {
        // a plain `% 10000` on the raw LCG output would cycle every 16 draws
        let mut rng = SimpleRng::new(5);
        let last: Vec<u8> = (0..64).map(|_| rng.next_code().digits()[3]).collect();
        assert_ne!(&last[..16], &last[16..32]);
    }
}
