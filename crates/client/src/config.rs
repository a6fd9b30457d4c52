//! Client configuration loaded from the environment.
use std::env;
use std::path::PathBuf;

use crate::dirs;

/// Everything the binary needs to assemble a runtime.
#[derive(Clone, Debug)]
pub struct ClientConfig {
    /// Root for monster snapshots and action logs.
    pub data_dir: PathBuf,
    /// Directory holding `species.ron` and `rules.toml`. Bundled data when unset.
    pub content_dir: Option<PathBuf>,
    pub log_dir: PathBuf,
    /// Fixed RNG seed for reproducible sessions.
    pub seed: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            data_dir: dirs::data_dir(),
            content_dir: None,
            log_dir: dirs::log_dir(),
            seed: None,
        }
    }
}

impl ClientConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `MONSTER_DATA_DIR` - Save data directory (default: platform-specific)
    /// - `MONSTER_CONTENT_DIR` - Species and rules directory (default: bundled)
    /// - `MONSTER_LOG_DIR` - Log directory (default: platform cache dir)
    /// - `MONSTER_SEED` - Deterministic RNG seed (default: OS entropy)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(dir) = read_env::<PathBuf>("MONSTER_DATA_DIR") {
            config.data_dir = dir;
        }
        config.content_dir = read_env::<PathBuf>("MONSTER_CONTENT_DIR");
        if let Some(dir) = read_env::<PathBuf>("MONSTER_LOG_DIR") {
            config.log_dir = dir;
        }
        config.seed = read_env::<u64>("MONSTER_SEED");

        config
    }

    pub fn monsters_dir(&self) -> PathBuf {
        self.data_dir.join("monsters")
    }

    pub fn actions_dir(&self) -> PathBuf {
        self.data_dir.join("actions")
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok().filter(|v| !v.is_empty())?.parse().ok()
}
