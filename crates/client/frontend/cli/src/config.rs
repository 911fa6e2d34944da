//! CLI-specific configuration for the terminal UI.
use std::env;
use std::path::PathBuf;

/// CLI terminal UI configuration.
///
/// This contains settings specific to the terminal interface, separate
/// from the battle setup read by `client-bootstrap`.
#[derive(Clone, Debug, Default)]
pub struct CliConfig {
    pub ui: UiConfig,
    /// Where log files go; the platform cache directory when unset.
    pub log_dir: Option<PathBuf>,
}

impl CliConfig {
    /// Construct CLI configuration from environment variables.
    ///
    /// Environment variables:
    /// - `CLI_FRAME_INTERVAL_MS` - Delay between input polls and redraws (default: 16)
    /// - `CLI_MESSAGE_CAPACITY` - Battle log capacity (default: 32)
    /// - `BATTLE_LOG_DIR` - Log directory (default: platform cache dir)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(interval) = read_env::<u64>("CLI_FRAME_INTERVAL_MS") {
            config.ui.frame_interval_ms = interval.max(1);
        }

        if let Some(capacity) = read_env::<usize>("CLI_MESSAGE_CAPACITY") {
            config.ui.message_capacity = capacity.max(1);
        }

        config.log_dir = env::var("BATTLE_LOG_DIR")
            .ok()
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from);

        config
    }
}

/// UI pacing and display configuration.
#[derive(Clone, Debug)]
pub struct UiConfig {
    pub frame_interval_ms: u64,
    /// Number of INFO messages kept in the battle log.
    pub message_capacity: usize,
}

impl UiConfig {
    pub const DEFAULT_FRAME_INTERVAL_MS: u64 = 16;
    pub const DEFAULT_MESSAGE_CAPACITY: usize = 32;
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            frame_interval_ms: Self::DEFAULT_FRAME_INTERVAL_MS,
            message_capacity: Self::DEFAULT_MESSAGE_CAPACITY,
        }
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.trim().parse().ok()
}
