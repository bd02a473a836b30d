//! RNG module - pseudo-random source for piece generation
//!
//! Piece generation goes through the [`PieceRng`] trait so a game can be
//! driven by a clock-seeded generator in play and by a fixed sequence in tests.
//! [`SimpleRng`] is a small LCG; nothing here needs cryptographic quality.

use std::time::{SystemTime, UNIX_EPOCH};

/// Source of uniformly distributed piece choices
pub trait PieceRng {
    /// Uniform value in `[0, bound)`; `bound` must be non-zero
    fn next_below(&mut self, bound: u32) -> u32;
}

impl<R: PieceRng + ?Sized> PieceRng for &mut R {
    fn next_below(&mut self, bound: u32) -> u32 {
        (**self).next_below(bound)
    }
}

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

    /// Seed from the wall clock (seconds since the Unix epoch)
    pub fn from_clock() -> Self {
        let secs = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_secs())
            .unwrap_or(0);
        Self::new(secs as u32)
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl PieceRng for SimpleRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        debug_assert!(bound > 0);
        // Scale by the high bits; the low bits of an LCG have tiny periods.
        ((self.next_u32() as u64 * bound as u64) >> 32) as u32
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Each value is reduced modulo the requested bound.
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<u32>,
    pos: usize,
}

impl SequenceRng {
    pub fn new(values: Vec<u32>) -> Self {
        assert!(!values.is_empty(), "SequenceRng needs at least one value");
        Self { values, pos: 0 }
    }
}

impl PieceRng for SequenceRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v % bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

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
    fn test_next_below_stays_in_range_and_covers_it() {
        let mut rng = SimpleRng::new(7);
        let mut seen = [false; 7];
        for _ in 0..1000 {
            let v = rng.next_below(7);
            assert!(v < 7);
            seen[v as usize] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn test_rotation_draws_are_not_periodic() {
        // `% 4` on a power-of-two LCG would cycle with period 4.
        let mut rng = SimpleRng::new(99);
        let draws: Vec<u32> = (0..16).map(|_| rng.next_below(4)).collect();
        assert_ne!(draws[0..4], draws[4..8]);
    }

    #[test]
    fn test_sequence_rng_cycles() {
        let mut rng = SequenceRng::new(vec![1, 2]);
        assert_eq!(rng.next_below(10), 1);
        assert_eq!(rng.next_below(10), 2);
        assert_eq!(rng.next_below(10), 1);
        assert_eq!(rng.next_below(2), 0);
    }

    #[test]
    fn test_zero_seed_is_remapped() {
        let mut a = SimpleRng::new(0);
        let mut b = SimpleRng::new(1);
        assert_eq!(a.next_u32(), b.next_u32());
    }
}
