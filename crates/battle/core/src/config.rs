use crate::combatant::CombatantSpec;

/// Pacing of the deferred steps and transient effects, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct BattleTimings {
    /// Wait between an attack's effects starting and its damage landing.
    pub impact_delay_ms: u64,
    /// Wait after a surviving defender before control changes hands.
    pub turn_delay_ms: u64,
    /// Wind-up between entering the enemy turn and the enemy's attack.
    pub enemy_delay_ms: u64,
    /// Wait between a killing blow and the outcome message.
    pub outcome_delay_ms: u64,
    /// Camera shake duration.
    pub shake_ms: u64,
    /// Lifetime of a floating damage number.
    pub damage_number_ms: u64,
}

impl BattleTimings {
    pub const DEFAULT_IMPACT_DELAY_MS: u64 = 300;
    pub const DEFAULT_TURN_DELAY_MS: u64 = 800;
    pub const DEFAULT_ENEMY_DELAY_MS: u64 = 500;
    pub const DEFAULT_OUTCOME_DELAY_MS: u64 = 800;
    pub const DEFAULT_SHAKE_MS: u64 = 250;
    pub const DEFAULT_DAMAGE_NUMBER_MS: u64 = 900;

    /// Camera shake strength handed to the presentation layer.
    pub const SHAKE_INTENSITY: u8 = 3;

    pub const fn new() -> Self {
        Self {
            impact_delay_ms: Self::DEFAULT_IMPACT_DELAY_MS,
            turn_delay_ms: Self::DEFAULT_TURN_DELAY_MS,
            enemy_delay_ms: Self::DEFAULT_ENEMY_DELAY_MS,
            outcome_delay_ms: Self::DEFAULT_OUTCOME_DELAY_MS,
            shake_ms: Self::DEFAULT_SHAKE_MS,
            damage_number_ms: Self::DEFAULT_DAMAGE_NUMBER_MS,
        }
    }

    /// Every delay set to zero; deferred steps fire on the next poll.
    pub const fn instant() -> Self {
        Self {
            impact_delay_ms: 0,
            turn_delay_ms: 0,
            enemy_delay_ms: 0,
            outcome_delay_ms: 0,
            shake_ms: 0,
            damage_number_ms: 0,
        }
    }
}

impl Default for BattleTimings {
    fn default() -> Self {
        Self::new()
    }
}

/// Everything needed to set up one battle.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BattleConfig {
    pub player: CombatantSpec,
    pub enemy: CombatantSpec,
    #[cfg_attr(feature = "serde", serde(default))]
    pub timings: BattleTimings,
}

impl BattleConfig {
    pub const DEFAULT_PLAYER_NAME: &'static str = "Hero";
    pub const DEFAULT_PLAYER_MAX_HP: u32 = 30;
    pub const DEFAULT_PLAYER_ATK: u32 = 8;
    pub const DEFAULT_ENEMY_NAME: &'static str = "Slime";
    pub const DEFAULT_ENEMY_MAX_HP: u32 = 20;
    pub const DEFAULT_ENEMY_ATK: u32 = 5;

    pub fn new(player: CombatantSpec, enemy: CombatantSpec) -> Self {
        Self {
            player,
            enemy,
            timings: BattleTimings::default(),
        }
    }

    pub fn with_timings(mut self, timings: BattleTimings) -> Self {
        self.timings = timings;
        self
    }
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self::new(
            CombatantSpec::new(
                Self::DEFAULT_PLAYER_NAME,
                Self::DEFAULT_PLAYER_MAX_HP,
                Self::DEFAULT_PLAYER_ATK,
            ),
            CombatantSpec::new(
                Self::DEFAULT_ENEMY_NAME,
                Self::DEFAULT_ENEMY_MAX_HP,
                Self::DEFAULT_ENEMY_ATK,
            ),
        )
    }
}
