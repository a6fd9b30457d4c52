//! Injected randomness for action resolution.
//!
//! The engine never touches an ambient RNG. Every roll goes through a
//! [`RandomSource`] supplied by the caller, so a seeded source replays the
//! exact same outcomes.
//!
//! # Draw order
//!
//! Resolution consumes values in a fixed order so scripted sources can pin
//! individual rolls:
//!
//! - feed: favorite roll, plain mood roll (not favorite only), element roll
//!   (Water/Earth only)
//! - train: random target index (no bias only), success roll, gain (success only)
//! - rest: mood roll (Spirit only)
//! - every recorded action: two `next_u64` draws for the record id

use std::collections::VecDeque;

/// Source of uniform random variates.
pub trait RandomSource {
    /// Next raw 64-bit value.
    fn next_u64(&mut self) -> u64;

    /// Uniform value in `[0, 1)` built from the top 53 bits of `next_u64`.
    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }

    /// Uniform integer in `[min, max]` inclusive. Returns `min` when the
    /// range is empty or degenerate.
    fn range_inclusive(&mut self, min: i32, max: i32) -> i32 {
        if min >= max {
            return min;
        }
        let span = (i64::from(max) - i64::from(min) + 1) as u64;
        let offset = (self.next_u64() % span) as i64;
        (i64::from(min) + offset) as i32
    }

    /// Bernoulli trial succeeding with `probability` in `[0, 1]`.
    fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }
}

/// PCG random number generator (Permuted Congruential Generator).
///
/// PCG-XSH-RR: 64-bit LCG state, 32-bit permuted output. Two outputs are
/// concatenated for each `next_u64`.
///
/// # Properties
///
/// - **Deterministic**: same seed always produces the same sequence
/// - **Re-seedable**: [`PcgRng::reseed`] restarts the sequence
/// - **Small state**: only 64 bits
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PcgRng {
    state: u64,
}

impl PcgRng {
    /// PCG multiplier constant.
    const MULTIPLIER: u64 = 6364136223846793005;

    /// PCG increment constant.
    const INCREMENT: u64 = 1442695040888963407;

    pub fn new(seed: u64) -> Self {
        let mut rng = Self { state: 0 };
        rng.reseed(seed);
        rng
    }

    /// Restarts the sequence from `seed`.
    pub fn reseed(&mut self, seed: u64) {
        self.state = Self::pcg_step(seed.wrapping_add(Self::INCREMENT));
    }

    /// `state' = (state × multiplier + increment) mod 2^64`
    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    /// XSH-RR output permutation (xorshift high, random rotate).
    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }

    fn next_u32(&mut self) -> u32 {
        let old = self.state;
        self.state = Self::pcg_step(old);
        Self::pcg_output(old)
    }
}

impl RandomSource for PcgRng {
    fn next_u64(&mut self) -> u64 {
        let high = u64::from(self.next_u32());
        let low = u64::from(self.next_u32());
        (high << 32) | low
    }
}

/// Replays caller-provided values, for pinning individual rolls in tests
/// and scenario scripts.
///
/// `next_f64` pops from the float queue (falling back to `0.5` once empty),
/// `range_inclusive` pops from the integer queue and clamps into the
/// requested range (falling back to `min`), and `next_u64` counts upward.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandom {
    floats: VecDeque<f64>,
    ints: VecDeque<i32>,
    counter: u64,
}

impl ScriptedRandom {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues values returned by `next_f64` (and therefore `chance`).
    #[must_use]
    pub fn with_floats(mut self, values: impl IntoIterator<Item = f64>) -> Self {
        self.floats.extend(values);
        self
    }

    /// Queues values returned by `range_inclusive`.
    #[must_use]
    pub fn with_ints(mut self, values: impl IntoIterator<Item = i32>) -> Self {
        self.ints.extend(values);
        self
    }

    /// True once every scripted value has been consumed.
    pub fn is_exhausted(&self) -> bool {
        self.floats.is_empty() && self.ints.is_empty()
    }
}

impl RandomSource for ScriptedRandom {
    fn next_u64(&mut self) -> u64 {
        self.counter = self.counter.wrapping_add(1);
        self.counter
    }

    fn next_f64(&mut self) -> f64 {
        self.floats.pop_front().unwrap_or(0.5)
    }

    fn range_inclusive(&mut self, min: i32, max: i32) -> i32 {
        self.ints
            .pop_front()
            .map(|value| value.clamp(min, max.max(min)))
            .unwrap_or(min)
    }
}
