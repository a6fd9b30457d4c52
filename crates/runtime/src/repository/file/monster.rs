//! File-based MonsterRepository implementation.

use std::fs;
use std::path::{Path, PathBuf};

use monster_core::{Monster, UserId};
use sha2::{Digest, Sha256};

use crate::repository::{MonsterRepository, RepositoryError, Result};

/// Stores one bincode snapshot per owner.
///
/// Files are named `monster_{sha256(owner)}.bin` so arbitrary account ids
/// map to safe file names. Saves go through a temp file and an atomic
/// rename; a crash mid-save leaves the previous snapshot intact.
pub struct FileMonsterRepository {
    base_dir: PathBuf,
}

impl FileMonsterRepository {
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self { base_dir })
    }

    fn monster_path(&self, owner: &UserId) -> PathBuf {
        let digest = Sha256::digest(owner.as_str().as_bytes());
        self.base_dir
            .join(format!("monster_{}.bin", hex::encode(digest)))
    }
}

impl MonsterRepository for FileMonsterRepository {
    fn load_by_owner(&self, owner: &UserId) -> Result<Option<Monster>> {
        let path = self.monster_path(owner);

        if !path.exists() {
            return Ok(None);
        }

        let bytes = fs::read(&path).map_err(RepositoryError::Io)?;
        let monster: Monster = bincode::deserialize(&bytes)
            .map_err(|e| RepositoryError::CorruptedData(format!("{}: {}", path.display(), e)))?;

        tracing::debug!("Loaded monster for {} from {}", owner, path.display());

        Ok(Some(monster))
    }

    fn save(&self, monster: &Monster) -> Result<()> {
        let owner = monster
            .owner
            .as_ref()
            .ok_or(RepositoryError::MissingOwner(monster.id))?;
        let path = self.monster_path(owner);
        let temp_path = path.with_extension("bin.tmp");

        let bytes = bincode::serialize(monster)
            .map_err(|e| RepositoryError::Serialization(e.to_string()))?;

        fs::write(&temp_path, bytes).map_err(RepositoryError::Io)?;
        fs::rename(&temp_path, &path).map_err(RepositoryError::Io)?;

        tracing::debug!("Saved monster {} to {}", monster.id, path.display());

        Ok(())
    }
}
