//! Deterministic monster rules shared by every entry point.
//!
//! `monster-core` owns the canonical rules: the species catalog, the
//! identity → monster generator, the daily quota, passive regeneration and
//! the feed/train/rest/rename resolver. It performs no I/O and reads time
//! and randomness only through injected capabilities. All snapshot changes
//! flow through [`engine::GameEngine`], and supporting crates depend on the
//! types re-exported here.
pub mod action;
pub mod catalog;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod generator;
pub mod state;

#[cfg(test)]
mod test_utils;

pub use action::{
    ActionCommand, ActionEnv, ActionError, ActionKind, ActionTransition, FeedAction, NameError,
    RenameAction, RestAction, TrainAction,
};
pub use catalog::{Catalog, CatalogError, Element, ElementProfile, Species, StatBonus};
pub use config::GameRules;
pub use engine::{ActionOutcome, DailyQuota, GameEngine};
pub use env::{Clock, FixedClock, PcgRng, RandomSource, ScriptedRandom, SystemClock};
pub use error::{ErrorSeverity, GameError};
pub use generator::{MonsterGenerator, monster_id_for};
pub use state::{
    ActionId, ActionRecord, ActionResult, BaseStats, Monster, MonsterId, STAT_MAX, STAT_MIN,
    SizeCategory, StatBlock, StatGain, StatKind, UserId,
};
