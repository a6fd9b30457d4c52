//! Runtime orchestration for the monster-raising rules.
//!
//! This crate wires the pure [`monster_core::GameEngine`] to persistence,
//! a single action worker and an event bus. Consumers embed [`Runtime`] and
//! talk to it through the cloneable [`RuntimeHandle`].
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts the orchestrator and builder
//! - [`api`] exposes the types downstream clients interact with
//! - [`events`] provides the topic-based event bus
//! - [`repository`] stores monster snapshots and the action log
//! - [`random`] supplies OS-seeded randomness for production use
//! - `workers` keeps the action worker internal to the crate
pub mod api;
pub mod events;
pub mod random;
pub mod repository;
pub mod runtime;

mod workers;

pub use api::{Result, RuntimeError, RuntimeHandle};
pub use events::{EventBus, GameEvent, Topic};
pub use random::EntropyRandom;
pub use repository::{
    ActionRepository, FileActionRepository, FileMonsterRepository, InMemoryActionRepo,
    InMemoryMonsterRepo, MonsterRepository, RecordLog, RepositoryError,
};
pub use runtime::{Runtime, RuntimeBuilder, RuntimeConfig};
pub use workers::MonsterStatus;
