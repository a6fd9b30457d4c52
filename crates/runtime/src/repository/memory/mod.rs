//! In-memory repository implementations for testing and development.

mod action;
mod monster;

pub use action::InMemoryActionRepo;
pub use monster::InMemoryMonsterRepo;
