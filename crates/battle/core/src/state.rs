//! Battle state machine states and terminal outcomes.

/// Single active phase of a battle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum BattleState {
    #[default]
    Start,
    PlayerCommand,
    PlayerTurn,
    EnemyTurn,
    Win,
    Lose,
}

impl BattleState {
    /// WIN and LOSE have no outgoing transitions.
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Win | Self::Lose)
    }

    /// Only the command phase reacts to menu input.
    pub const fn accepts_commands(self) -> bool {
        matches!(self, Self::PlayerCommand)
    }
}

/// How a finished battle ended.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum Outcome {
    Victory,
    Defeat,
    /// The player ran; reported apart from a defeat although the state is LOSE.
    Fled,
}

impl Outcome {
    pub const fn terminal_state(self) -> BattleState {
        match self {
            Self::Victory => BattleState::Win,
            Self::Defeat | Self::Fled => BattleState::Lose,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_win_and_lose_are_terminal() {
        assert!(BattleState::Win.is_terminal());
        assert!(BattleState::Lose.is_terminal());
        assert!(!BattleState::PlayerCommand.is_terminal());
        assert!(!BattleState::EnemyTurn.is_terminal());
    }

    #[test]
    fn displays_in_screaming_snake_case() {
        assert_eq!(BattleState::PlayerCommand.to_string(), "PLAYER_COMMAND");
        assert_eq!(BattleState::EnemyTurn.as_ref(), "ENEMY_TURN");
    }

    #[test]
    fn fled_ends_in_lose() {
        assert_eq!(Outcome::Fled.terminal_state(), BattleState::Lose);
        assert_eq!(Outcome::Victory.terminal_state(), BattleState::Win);
    }
}
