//! Platform-specific directory utilities
//!
//! Provides consistent directory paths across different operating systems,
//! following platform conventions for cache and data directories.

use std::path::PathBuf;

const APP_NAME: &str = "monster";

/// Platform-specific log directory
///
/// - macOS: `~/Library/Caches/monster/logs`
/// - Linux: `~/.cache/monster/logs` (or `$XDG_CACHE_HOME/monster/logs`)
/// - Windows: `%LOCALAPPDATA%\monster\cache\logs`
/// - Fallback: `/tmp/monster/logs`
pub fn log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/monster"))
        .join("logs")
}

/// Platform-specific data directory for saved monsters and action logs
///
/// - macOS: `~/Library/Application Support/monster`
/// - Linux: `~/.local/share/monster` (or `$XDG_DATA_HOME/monster`)
/// - Windows: `%APPDATA%\monster\data`
/// - Fallback: `./save_data`
pub fn data_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", APP_NAME)
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("./save_data"))
}
