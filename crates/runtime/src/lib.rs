//! Runtime that drives a battle in real time.
//!
//! `battle-core` only describes what should happen and when. This crate
//! supplies the clock: it keeps the deferred-step [`Timeline`], retires
//! cosmetic effects through the [`EffectTracker`], forwards text and effects
//! to a front-end [`Presenter`], and broadcasts [`battle_core::BattleEvent`]s.
//!
//! Modules are organized by responsibility:
//! - [`runtime`] hosts [`BattleRuntime`] and its builder
//! - [`api`] exposes the types front-ends interact with
//! - [`timeline`] and [`effects`] keep time-based bookkeeping
pub mod api;
pub mod effects;
pub mod runtime;
pub mod timeline;

pub use api::{Presenter, Result, RuntimeError};
pub use effects::EffectTracker;
pub use runtime::{BattleRuntime, BattleRuntimeBuilder, RuntimeConfig};
pub use timeline::Timeline;
