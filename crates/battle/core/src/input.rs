//! Logical keys the battle reacts to.

use crate::menu::Command;
use crate::state::BattleState;

/// A key-down edge, already decoded from whatever physical key produced it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Key {
    Up,
    Down,
    Confirm,
}

/// What a key press did to the battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyOutcome {
    /// The battle was not in the command phase; nothing changed.
    Ignored(BattleState),
    SelectionMoved { cursor: usize },
    Executed(Command),
}

impl KeyOutcome {
    pub const fn is_ignored(&self) -> bool {
        matches!(self, Self::Ignored(_))
    }
}
