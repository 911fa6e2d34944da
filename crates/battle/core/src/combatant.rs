//! Battle participants and their mutable combat state.

use crate::error::CombatantError;
use crate::state::BattleState;

/// Identifies one of the two participants in a battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    /// Returns the other participant.
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Enemy,
            Self::Enemy => Self::Player,
        }
    }

    /// State the battle sits in while this side's attack resolves.
    pub const fn turn_state(self) -> BattleState {
        match self {
            Self::Player => BattleState::PlayerTurn,
            Self::Enemy => BattleState::EnemyTurn,
        }
    }

    /// Terminal state reached when this side lands the killing blow.
    pub const fn victory_state(self) -> BattleState {
        match self {
            Self::Player => BattleState::Win,
            Self::Enemy => BattleState::Lose,
        }
    }
}

/// Posture a combatant holds for the duration of the opposing attack.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Stance {
    #[default]
    Normal,
    Defense,
}

/// Immutable template a [`Combatant`] is created from at battle start.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantSpec {
    pub name: String,
    pub max_hp: u32,
    pub atk: u32,
}

impl CombatantSpec {
    pub fn new(name: impl Into<String>, max_hp: u32, atk: u32) -> Self {
        Self {
            name: name.into(),
            max_hp,
            atk,
        }
    }

    /// Checks the stat contract: both `max_hp` and `atk` must be positive.
    pub fn validate(&self) -> Result<(), CombatantError> {
        if self.max_hp == 0 {
            return Err(CombatantError::ZeroMaxHp {
                name: self.name.clone(),
            });
        }
        if self.atk == 0 {
            return Err(CombatantError::ZeroAttack {
                name: self.name.clone(),
            });
        }
        Ok(())
    }
}

/// A battle participant.
///
/// `hp` always stays within `0..=max_hp`. Only the turn sequencer mutates a
/// combatant: damage through [`Combatant::apply_damage`], stance at the edges
/// of a turn. Deserialized records go through the same checks as
/// [`Combatant::from_spec`] and are rejected if out of bounds.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "CombatantRecord")
)]
pub struct Combatant {
    name: String,
    max_hp: u32,
    hp: u32,
    atk: u32,
    stance: Stance,
}

impl Combatant {
    /// Creates a combatant at full health in the normal stance.
    pub fn from_spec(spec: &CombatantSpec) -> Result<Self, CombatantError> {
        spec.validate()?;
        Ok(Self {
            name: spec.name.clone(),
            max_hp: spec.max_hp,
            hp: spec.max_hp,
            atk: spec.atk,
            stance: Stance::Normal,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn max_hp(&self) -> u32 {
        self.max_hp
    }

    pub const fn hp(&self) -> u32 {
        self.hp
    }

    pub const fn atk(&self) -> u32 {
        self.atk
    }

    pub const fn stance(&self) -> Stance {
        self.stance
    }

    pub const fn is_alive(&self) -> bool {
        self.hp > 0
    }

    pub fn set_stance(&mut self, stance: Stance) {
        self.stance = stance;
    }

    /// Subtracts `damage` from current HP, clamping at zero.
    ///
    /// Returns the HP left after the hit.
    pub fn apply_damage(&mut self, damage: u32) -> u32 {
        self.hp = self.hp.saturating_sub(damage);
        self.assert_invariants();
        self.hp
    }

    /// Restores full HP and the normal stance.
    pub fn reset(&mut self) {
        self.hp = self.max_hp;
        self.stance = Stance::Normal;
        self.assert_invariants();
    }

    /// Panics if the HP bounds were broken. No sanctioned code path can do
    /// that, so a failure here is a programming error.
    pub fn assert_invariants(&self) {
        assert!(
            self.hp <= self.max_hp,
            "{} has {} hp above its maximum of {}",
            self.name,
            self.hp,
            self.max_hp
        );
    }
}

/// Unchecked wire form of a [`Combatant`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct CombatantRecord {
    name: String,
    max_hp: u32,
    hp: u32,
    atk: u32,
    #[serde(default)]
    stance: Stance,
}

#[cfg(feature = "serde")]
impl TryFrom<CombatantRecord> for Combatant {
    type Error = CombatantError;

    fn try_from(record: CombatantRecord) -> Result<Self, Self::Error> {
        let mut combatant =
            Self::from_spec(&CombatantSpec::new(record.name, record.max_hp, record.atk))?;
        if record.hp > record.max_hp {
            return Err(CombatantError::HpAboveMax {
                name: combatant.name,
                hp: record.hp,
                max_hp: record.max_hp,
            });
        }
        combatant.hp = record.hp;
        combatant.stance = record.stance;
        Ok(combatant)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn slime() -> Combatant {
        Combatant::from_spec(&CombatantSpec::new("Slime", 20, 5)).unwrap()
    }

    #[test]
    fn starts_at_full_health_in_normal_stance() {
        let slime = slime();
        assert_eq!(slime.hp(), 20);
        assert_eq!(slime.max_hp(), 20);
        assert_eq!(slime.stance(), Stance::Normal);
        assert!(slime.is_alive());
    }

    #[test]
    fn rejects_non_positive_stats() {
        assert!(matches!(
            Combatant::from_spec(&CombatantSpec::new("Ghost", 0, 3)),
            Err(CombatantError::ZeroMaxHp { .. })
        ));
        assert!(matches!(
            Combatant::from_spec(&CombatantSpec::new("Pacifist", 10, 0)),
            Err(CombatantError::ZeroAttack { .. })
        ));
    }

    #[test]
    fn damage_clamps_at_zero() {
        let mut slime = slime();
        assert_eq!(slime.apply_damage(8), 12);
        assert_eq!(slime.apply_damage(8), 4);
        assert_eq!(slime.apply_damage(8), 0);
        assert!(!slime.is_alive());
        assert_eq!(slime.apply_damage(8), 0);
    }

    #[test]
    fn reset_restores_health_and_stance() {
        let mut slime = slime();
        slime.apply_damage(15);
        slime.set_stance(Stance::Defense);

        slime.reset();

        assert_eq!(slime.hp(), 20);
        assert_eq!(slime.stance(), Stance::Normal);
    }

    #[test]
    fn sides_map_to_turn_and_victory_states() {
        assert_eq!(Side::Player.opponent(), Side::Enemy);
        assert_eq!(Side::Enemy.turn_state(), BattleState::EnemyTurn);
        assert_eq!(Side::Player.victory_state(), BattleState::Win);
        assert_eq!(Side::Enemy.victory_state(), BattleState::Lose);
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializing_rejects_out_of_bounds_records() {
        let overfull = ron::from_str::<Combatant>(
            r#"(name: "Broken", max_hp: 10, hp: 50, atk: 3, stance: Normal)"#,
        );
        assert!(overfull.unwrap_err().to_string().contains("above its maximum"));

        let pacifist = ron::from_str::<Combatant>(
            r#"(name: "Broken", max_hp: 10, hp: 5, atk: 0, stance: Normal)"#,
        );
        assert!(pacifist.unwrap_err().to_string().contains("positive attack"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserializing_keeps_valid_battle_state() {
        let slime: Combatant =
            ron::from_str(r#"(name: "Slime", max_hp: 20, hp: 4, atk: 5, stance: Defense)"#)
                .unwrap();

        assert_eq!(slime.hp(), 4);
        assert_eq!(slime.max_hp(), 20);
        assert_eq!(slime.stance(), Stance::Defense);

        let echoed: Combatant = ron::from_str(&ron::to_string(&slime).unwrap()).unwrap();
        assert_eq!(echoed, slime);
    }
}
