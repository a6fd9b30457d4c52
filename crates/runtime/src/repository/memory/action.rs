//! In-memory ActionRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use monster_core::{ActionRecord, MonsterId};

use crate::repository::{ActionRepository, RepositoryError, Result, newest_first};

/// In-memory append-only action log, grouped by monster.
pub struct InMemoryActionRepo {
    records: RwLock<HashMap<MonsterId, Vec<ActionRecord>>>,
}

impl InMemoryActionRepo {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Total number of records across all monsters.
    pub fn len(&self) -> usize {
        self.records
            .read()
            .map(|records| records.values().map(Vec::len).sum())
            .unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryActionRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl ActionRepository for InMemoryActionRepo {
    fn append(&self, record: &ActionRecord) -> Result<()> {
        let mut records = self
            .records
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        records
            .entry(record.monster_id)
            .or_default()
            .push(record.clone());
        Ok(())
    }

    fn recent(&self, monster_id: MonsterId, limit: usize) -> Result<Vec<ActionRecord>> {
        let records = self
            .records
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let log = records.get(&monster_id).cloned().unwrap_or_default();
        Ok(newest_first(log, limit))
    }
}
