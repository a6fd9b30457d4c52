//! Capabilities injected into the engine.
//!
//! The engine reads time and randomness only through these traits, which
//! keeps resolution reproducible under a fixed clock and a seeded source.
mod clock;
mod rng;

pub use clock::{Clock, FixedClock, SystemClock};
pub use rng::{PcgRng, RandomSource, ScriptedRandom};
