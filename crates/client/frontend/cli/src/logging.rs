//! File-only tracing setup; the terminal belongs to the UI.
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

const LOG_FILE: &str = "battle.log";

/// Install the global subscriber writing to `<log_dir>/battle.log`.
///
/// Logs at `info` unless `RUST_LOG` says otherwise.
pub fn setup_logging(log_dir: Option<&Path>) -> Result<PathBuf> {
    let log_dir = log_dir.map(Path::to_path_buf).unwrap_or_else(default_log_dir);
    std::fs::create_dir_all(&log_dir)
        .with_context(|| format!("creating log directory {}", log_dir.display()))?;

    let file_appender = tracing_appender::rolling::never(&log_dir, LOG_FILE);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = env_filter(std::env::var(EnvFilter::DEFAULT_ENV).ok().as_deref());

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("installing tracing subscriber")?;

    // Keep the writer alive for the rest of the process.
    std::mem::forget(guard);

    let log_file = log_dir.join(LOG_FILE);
    tracing::info!("Log file: {}", log_file.display());

    Ok(log_file)
}

/// Build the filter from `RUST_LOG`-style directives, defaulting to `info`.
fn env_filter(directives: Option<&str>) -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .parse_lossy(directives.unwrap_or_default())
}

/// Platform cache directory for logs, or a temp-dir fallback.
pub fn default_log_dir() -> PathBuf {
    directories::ProjectDirs::from("", "", "classic-battle")
        .map(|dirs| dirs.cache_dir().join("logs"))
        .unwrap_or_else(|| std::env::temp_dir().join("classic-battle").join("logs"))
}
