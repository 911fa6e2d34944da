//! Deterministic rules for a one-on-one, turn-based battle.
//!
//! `battle-core` defines the combatants, the damage rule, the command menu,
//! and the turn sequencer that ties them together. It performs no I/O and
//! reads no clock: presentation and timed callbacks are requested through
//! the [`PresentationBridge`] capability, so the same rules run under the
//! terminal client, the runtime driver, and plain unit tests.
pub mod bridge;
pub mod combatant;
pub mod config;
pub mod damage;
pub mod error;
pub mod input;
pub mod menu;
pub mod session;
pub mod state;

pub use bridge::{BattleEvent, Effect, EffectHandle, PresentationBridge, TextSlot};
pub use combatant::{Combatant, CombatantSpec, Side, Stance};
pub use config::{BattleConfig, BattleTimings};
pub use damage::{DamageOutcome, MIN_DAMAGE, resolve, resolve_detailed};
pub use error::{CombatantError, ConfigError, MenuError};
pub use input::{Key, KeyOutcome};
pub use menu::{Command, CommandMenu};
pub use session::{BattleSession, Deferred, DiscardReason, Resumption, SessionId, Step};
pub use state::{BattleState, Outcome};
