//! Repository contracts for saving and loading mutable runtime data.

use monster_core::{ActionRecord, Monster, MonsterId, UserId};

use crate::repository::Result;

/// Repository for monster snapshots, keyed by owning account.
///
/// Each owner has at most one monster. `save` overwrites the previous
/// snapshot wholesale.
pub trait MonsterRepository: Send + Sync {
    /// Load the monster owned by `owner`, if any.
    fn load_by_owner(&self, owner: &UserId) -> Result<Option<Monster>>;

    /// Save a snapshot. The monster must carry an owner.
    fn save(&self, monster: &Monster) -> Result<()>;
}

/// Append-only log of resolved actions.
pub trait ActionRepository: Send + Sync {
    /// Append a record. Records are never rewritten.
    fn append(&self, record: &ActionRecord) -> Result<()>;

    /// Up to `limit` records for `monster_id`, newest first.
    fn recent(&self, monster_id: MonsterId, limit: usize) -> Result<Vec<ActionRecord>>;
}

/// Orders records newest first and keeps at most `limit`.
///
/// Ties on timestamp keep reverse insertion order.
pub(crate) fn newest_first(mut records: Vec<ActionRecord>, limit: usize) -> Vec<ActionRecord> {
    records.reverse();
    records.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    records.truncate(limit);
    records
}
