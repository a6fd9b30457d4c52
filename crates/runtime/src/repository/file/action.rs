//! File-based ActionRepository implementation.

use std::path::{Path, PathBuf};
use std::sync::Mutex;

use monster_core::{ActionRecord, MonsterId};

use super::RecordLog;
use crate::repository::{ActionRepository, RepositoryError, Result, newest_first};

/// One append-only `actions_{monster_id}.log` per monster.
///
/// Each call opens the log, uses it and closes it again, so no file handle
/// outlives the call. Every append is synced before returning and cut back
/// off the log if the sync fails.
pub struct FileActionRepository {
    base_dir: PathBuf,
    /// Serializes file access within this process.
    io_lock: Mutex<()>,
}

impl FileActionRepository {
    pub fn new(base_dir: impl AsRef<Path>) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        std::fs::create_dir_all(&base_dir).map_err(RepositoryError::Io)?;
        Ok(Self {
            base_dir,
            io_lock: Mutex::new(()),
        })
    }

    fn with_log<R>(
        &self,
        monster_id: MonsterId,
        f: impl FnOnce(&mut RecordLog<ActionRecord>) -> Result<R>,
    ) -> Result<R> {
        let _guard = self
            .io_lock
            .lock()
            .map_err(|_| RepositoryError::LockPoisoned)?;
        let mut log =
            RecordLog::open_or_create(&self.base_dir, format!("actions_{monster_id}.log"))?;
        f(&mut log)
    }
}

impl ActionRepository for FileActionRepository {
    fn append(&self, record: &ActionRecord) -> Result<()> {
        self.with_log(record.monster_id, |log| {
            let offset = log.append(record)?;
            if let Err(e) = log.sync() {
                if let Err(rollback) = log.truncate(offset) {
                    tracing::error!(
                        "Failed to roll back unsynced action {} in {}: {}",
                        record.id,
                        log.path().display(),
                        rollback
                    );
                }
                return Err(e);
            }
            Ok(())
        })
    }

    fn recent(&self, monster_id: MonsterId, limit: usize) -> Result<Vec<ActionRecord>> {
        let records = self.with_log(monster_id, |log| log.read_all())?;
        Ok(newest_first(records, limit))
    }
}
