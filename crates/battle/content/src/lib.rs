//! Data-driven battle setup.
//!
//! Rosters (the two combatants plus turn pacing) live in RON or TOML files so
//! matchups can be tuned without touching the rules in `battle-core`.
#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{LoadResult, RosterFormat, RosterLoader};

/// Path of the roster shipped with the crate, relative to the crate root.
pub const DEFAULT_ROSTER: &str = "data/roster.ron";
