//! File logging setup for the binary.
use std::path::Path;

use anyhow::{Context, Result};
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE: &str = "monster.log";

/// Route `tracing` output to `<log_dir>/monster.log`.
///
/// The level defaults to `info` and can be overridden with `RUST_LOG`.
/// Stdout stays reserved for command output. Buffered lines are written out
/// when the returned guard is dropped, so hold it until the runtime is shut
/// down.
#[must_use = "dropping the guard stops the log writer"]
pub fn setup_logging(log_dir: &Path) -> Result<WorkerGuard> {
    let (non_blocking_file, guard) = file_writer(log_dir)?;

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("failed to install tracing subscriber")?;

    tracing::debug!("Log file: {}", log_dir.join(LOG_FILE).display());

    Ok(guard)
}

fn file_writer(log_dir: &Path) -> Result<(NonBlocking, WorkerGuard)> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(log_dir, LOG_FILE);
    Ok(tracing_appender::non_blocking(file_appender))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn dropping_the_guard_flushes_pending_lines() {
        let dir = TempDir::new().unwrap();
        let log_dir = dir.path().join("logs");

        let (mut writer, guard) = file_writer(&log_dir).unwrap();
        writer.write_all(b"last line before exit\n").unwrap();
        drop(writer);
        drop(guard);

        let written = std::fs::read_to_string(log_dir.join(LOG_FILE)).unwrap();
        assert_eq!(written, "last line before exit\n");
    }
}
