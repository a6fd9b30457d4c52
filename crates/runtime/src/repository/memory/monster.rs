//! In-memory MonsterRepository implementation for tests and local runs.

use std::collections::HashMap;
use std::sync::RwLock;

use monster_core::{Monster, UserId};

use crate::repository::{MonsterRepository, RepositoryError, Result};

/// In-memory implementation of MonsterRepository.
pub struct InMemoryMonsterRepo {
    monsters: RwLock<HashMap<UserId, Monster>>,
}

impl InMemoryMonsterRepo {
    /// Create a new empty in-memory repository.
    pub fn new() -> Self {
        Self {
            monsters: RwLock::new(HashMap::new()),
        }
    }

    /// Number of stored monsters.
    pub fn len(&self) -> usize {
        self.monsters.read().map(|m| m.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryMonsterRepo {
    fn default() -> Self {
        Self::new()
    }
}

impl MonsterRepository for InMemoryMonsterRepo {
    fn load_by_owner(&self, owner: &UserId) -> Result<Option<Monster>> {
        let monsters = self
            .monsters
            .read()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        Ok(monsters.get(owner).cloned())
    }

    fn save(&self, monster: &Monster) -> Result<()> {
        let owner = monster
            .owner
            .clone()
            .ok_or(RepositoryError::MissingOwner(monster.id))?;
        let mut monsters = self
            .monsters
            .write()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        monsters.insert(owner, monster.clone());
        Ok(())
    }
}
