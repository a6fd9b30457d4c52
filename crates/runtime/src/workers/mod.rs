//! Worker tasks that back the runtime orchestration.
//!
//! A single action worker owns every read-modify-write of monster
//! snapshots, so commands for the same monster never interleave.

mod action;

pub use action::{ActionWorker, Command, MonsterStatus};
