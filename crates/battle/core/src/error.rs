//! Error types for constructing battle values.
//!
//! Running a battle never fails: input in the wrong phase is ignored and
//! stale deferred steps are discarded. The errors here only guard
//! construction from user-supplied data (roster files, environment).

/// Stat contract violations in a [`crate::CombatantSpec`] or a stored
/// [`crate::Combatant`].
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CombatantError {
    #[error("combatant '{name}' must have a positive max hp")]
    ZeroMaxHp { name: String },

    #[error("combatant '{name}' must have a positive attack")]
    ZeroAttack { name: String },

    #[error("combatant '{name}' has {hp} hp above its maximum of {max_hp}")]
    HpAboveMax { name: String, hp: u32, max_hp: u32 },
}

/// Command menu construction errors.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MenuError {
    #[error("command menu needs at least one command")]
    Empty,
}

/// Errors surfaced while building a battle from configuration.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid player: {0}")]
    Player(#[source] CombatantError),

    #[error("invalid enemy: {0}")]
    Enemy(#[source] CombatantError),
}
