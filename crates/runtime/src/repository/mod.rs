//! Repository layer for dynamic runtime data
//!
//! Repositories handle data that CHANGES during play:
//! - Monster snapshots (one per owner)
//! - The append-only action log
//!
//! Static content (species, rules) is loaded by `monster-content`, not
//! stored here.

mod error;
mod file;
mod memory;
mod traits;

pub use error::{RepositoryError, Result};
pub use file::{FileActionRepository, FileMonsterRepository, RecordLog};
pub use memory::{InMemoryActionRepo, InMemoryMonsterRepo};
pub use traits::{ActionRepository, MonsterRepository};
pub(crate) use traits::newest_first;
