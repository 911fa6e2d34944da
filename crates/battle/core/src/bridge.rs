//! Capability interface the battle drives but does not implement.
//!
//! The turn sequencer never renders, sleeps, or animates. It describes what
//! should be shown and when it wants to be called back, and the embedding
//! layer (runtime, tests) decides how that happens.

use crate::combatant::Side;
use crate::menu::Command;
use crate::session::Deferred;
use crate::state::{BattleState, Outcome};

/// Text regions the battle writes to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum TextSlot {
    /// Both combatants' current and maximum HP.
    Hp,
    /// Prompt and narration of the last thing that happened.
    Info,
    /// The command menu with its highlight.
    CommandList,
}

/// Cosmetic, self-expiring effects.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Effect {
    CameraShake { duration_ms: u64, intensity: u8 },
    /// Number floating over `target` that fades out.
    DamageNumber {
        target: Side,
        amount: u32,
        duration_ms: u64,
    },
}

impl Effect {
    pub const fn duration_ms(&self) -> u64 {
        match self {
            Self::CameraShake { duration_ms, .. } | Self::DamageNumber { duration_ms, .. } => {
                *duration_ms
            }
        }
    }
}

/// Opaque identifier of a running effect.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EffectHandle(pub u64);

/// Notable things that happened in a battle, for logs and observers.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BattleEvent {
    Started,
    StateChanged {
        from: BattleState,
        to: BattleState,
    },
    CommandChosen(Command),
    DamageApplied {
        target: Side,
        damage: u32,
        hp: u32,
    },
    Finished(Outcome),
}

/// Presentation and scheduling capabilities injected into a battle.
pub trait PresentationBridge {
    /// Replace the content of `slot`.
    fn display_text(&mut self, slot: TextSlot, content: &str);

    /// Hand `deferred` back to the battle once `delay_ms` have elapsed.
    ///
    /// Fire-once, no cancellation. Steps scheduled with equal due times must
    /// come back in scheduling order.
    fn schedule_after(&mut self, delay_ms: u64, deferred: Deferred);

    /// Start a fire-and-forget effect that cleans itself up.
    fn play_effect(&mut self, effect: Effect) -> EffectHandle;

    /// Observe a battle event. Ignored by default.
    fn on_event(&mut self, _event: &BattleEvent) {}
}
