//! Shared bootstrap utilities for client front-ends.
//!
//! Reads configuration, loads the battle roster, and hands out fresh
//! [`runtime::BattleRuntime`]s so a front-end can start (and restart)
//! battles without knowing where the data came from.
pub mod builder;
pub mod config;

pub use builder::{RuntimeBuilder, RuntimeSetup};
pub use config::{BootstrapConfig, TimingOverrides};
