//! Deterministic RNG for cosmetic label generation.
//!
//! # Determinism strategy
//!
//! The only randomness in a simulation is the highway number printed on
//! interpolated driving segments.  It never feeds back into compliance
//! logic, but tests and golden-output comparisons still need identical
//! ledgers for identical inputs, so every trip draws from its own
//! `SmallRng` seeded by:
//!
//!   seed = label_seed XOR (trip_index * MIXING_CONSTANT)
//!
//! The mixing constant is the 64-bit fractional part of the golden ratio,
//! which spreads consecutive trip indices uniformly across the seed space.
//! Trips run in parallel never share RNG state.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

/// 64-bit fractional golden-ratio constant for seed mixing.
const MIXING_CONSTANT: u64 = 0x9e37_79b9_7f4a_7c15;

/// Per-trip deterministic RNG.
pub struct LabelRng(SmallRng);

impl LabelRng {
    pub fn new(seed: u64) -> Self {
        LabelRng(SmallRng::seed_from_u64(seed))
    }

    /// Seed deterministically from a batch seed and the trip's position in
    /// the batch.
    pub fn for_trip(label_seed: u64, trip_index: usize) -> Self {
        let seed = label_seed ^ (trip_index as u64).wrapping_mul(MIXING_CONSTANT);
        LabelRng(SmallRng::seed_from_u64(seed))
    }

    /// Generate a value uniformly in `range`.
    #[inline]
    pub fn gen_range<T, R>(&mut self, range: R) -> T
    where
        T: rand::distributions::uniform::SampleUniform,
        R: rand::distributions::uniform::SampleRange<T>,
    {
        self.0.gen_range(range)
    }
}
