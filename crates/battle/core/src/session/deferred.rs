use core::fmt;

use crate::combatant::Side;
use crate::state::BattleState;

/// Identifies one battle instance among several living side by side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SessionId(pub u64);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "battle#{}", self.0)
    }
}

/// Continuation of a turn, run once its delay has elapsed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Step {
    /// Land a previously resolved hit on `attacker`'s opponent.
    ApplyDamage {
        attacker: Side,
        damage: u32,
        mitigated: bool,
    },
    /// Hand control to the other side after a surviving defender.
    FinishTurn { attacker: Side },
    /// The enemy's automatic attack.
    EnemyAttack,
    /// Show the terminal message.
    AnnounceOutcome,
}

/// A scheduled [`Step`] plus the preconditions it was scheduled under.
///
/// Deferred steps cannot be cancelled, so [`super::BattleSession::resume`]
/// re-checks `session` and `expected` before acting.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Deferred {
    pub session: SessionId,
    pub expected: BattleState,
    pub step: Step,
}

impl Deferred {
    pub const fn new(session: SessionId, expected: BattleState, step: Step) -> Self {
        Self {
            session,
            expected,
            step,
        }
    }
}

/// Why a deferred step was dropped without effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DiscardReason {
    ForeignSession(SessionId),
    StateChanged {
        expected: BattleState,
        actual: BattleState,
    },
    /// A participant the step relies on is already at zero hp. Lethal hits
    /// end the battle first, so this only guards against outside mutation.
    CombatantDown(Side),
    Finished,
}

/// Result of handing a deferred step back to its battle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Resumption {
    Applied(Step),
    Discarded(DiscardReason),
}

impl Resumption {
    pub const fn is_applied(&self) -> bool {
        matches!(self, Self::Applied(_))
    }
}
