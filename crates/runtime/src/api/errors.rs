//! Error types surfaced by the battle runtime.
use thiserror::Error;

use battle_core::ConfigError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    #[error("clock went backwards: {now_ms}ms is before {previous_ms}ms")]
    ClockWentBackwards { previous_ms: u64, now_ms: u64 },

    #[error("failed to build battle session")]
    Config(#[from] ConfigError),

    #[error("event buffer size must be positive")]
    ZeroEventBuffer,
}
