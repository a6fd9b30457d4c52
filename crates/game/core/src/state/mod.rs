//! Monster state and the append-only action log types.
//!
//! Everything here is plain data. Rules that rewrite it live in
//! [`crate::engine`] and [`crate::action`].

mod monster;
mod record;
mod stats;

pub use monster::{Monster, MonsterId, SizeCategory, UserId};
pub use record::{ActionId, ActionRecord, ActionResult, StatGain};
pub use stats::{BaseStats, STAT_MAX, STAT_MIN, StatBlock, StatKind};
