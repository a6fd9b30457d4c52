//! Production randomness for the action worker.

use monster_core::RandomSource;
use rand::rngs::StdRng;
use rand::{RngCore, SeedableRng};

/// [`RandomSource`] backed by `StdRng` seeded from OS entropy.
///
/// Use `monster_core::PcgRng` instead when outcomes must be replayable.
pub struct EntropyRandom {
    rng: StdRng,
}

impl EntropyRandom {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for EntropyRandom {
    fn default() -> Self {
        Self::new()
    }
}

impl RandomSource for EntropyRandom {
    fn next_u64(&mut self) -> u64 {
        self.rng.next_u64()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn draws_stay_in_range() {
        let mut rng = EntropyRandom::new();
        for _ in 0..1_000 {
            let f = rng.next_f64();
            assert!((0.0..1.0).contains(&f));
            assert!((-2..=3).contains(&rng.range_inclusive(-2, 3)));
        }
    }
}
