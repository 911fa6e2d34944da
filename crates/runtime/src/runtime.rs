//! Battle driver.
//!
//! [`BattleRuntime`] owns one [`BattleSession`] together with the clock,
//! the deferred-step timeline and the effect tracker. The front-end feeds it
//! key presses and the current time; everything the battle wants shown goes
//! out through the [`Presenter`].

use tokio::sync::broadcast;

use battle_core::{
    BattleConfig, BattleEvent, BattleSession, BattleState, Deferred, Effect, EffectHandle, Key,
    KeyOutcome, PresentationBridge, Resumption, SessionId, TextSlot,
};

use crate::api::{Presenter, Result, RuntimeError};
use crate::effects::EffectTracker;
use crate::timeline::Timeline;

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub battle: BattleConfig,
    pub event_buffer_size: usize,
}

impl RuntimeConfig {
    pub const DEFAULT_EVENT_BUFFER_SIZE: usize = 64;
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            battle: BattleConfig::default(),
            event_buffer_size: Self::DEFAULT_EVENT_BUFFER_SIZE,
        }
    }
}

/// Drives a single battle against a virtual millisecond clock.
pub struct BattleRuntime<P: Presenter> {
    session: BattleSession,
    timeline: Timeline,
    effects: EffectTracker,
    presenter: P,
    now_ms: u64,
    events: broadcast::Sender<BattleEvent>,
}

impl<P: Presenter> BattleRuntime<P> {
    /// Run the battle's initialization sequence.
    ///
    /// Returns `false` if the battle was already started.
    pub fn start(&mut self) -> bool {
        let (session, mut bridge) = self.split();
        let started = session.start(&mut bridge);
        if started {
            tracing::info!(
                session = %self.session.id(),
                player = self.session.player().name(),
                enemy = self.session.enemy().name(),
                "battle started"
            );
        }
        started
    }

    /// Forward a key press to the battle.
    pub fn press(&mut self, key: Key) -> KeyOutcome {
        let (session, mut bridge) = self.split();
        let outcome = session.on_key(key, &mut bridge);
        match outcome {
            KeyOutcome::Ignored(state) => tracing::trace!(?key, %state, "key ignored"),
            KeyOutcome::SelectionMoved { cursor } => tracing::trace!(cursor, "selection moved"),
            KeyOutcome::Executed(command) => tracing::debug!(%command, "command executed"),
        }
        outcome
    }

    /// Catch the clock up to `now_ms`, then forward the key press.
    ///
    /// Anything the key schedules is timed from `now_ms` rather than from the
    /// last poll.
    pub fn press_at(&mut self, key: Key, now_ms: u64) -> Result<KeyOutcome> {
        self.advance_to(now_ms)?;
        Ok(self.press(key))
    }

    /// Move the clock to `now_ms`, firing every deferred step that became due
    /// and retiring expired effects.
    ///
    /// Steps fire one at a time in due order. Each runs at its own due time,
    /// so anything it schedules is timed from that instant and may itself
    /// fire within the same call.
    ///
    /// Returns the number of steps the battle applied.
    pub fn advance_to(&mut self, now_ms: u64) -> Result<usize> {
        if now_ms < self.now_ms {
            return Err(RuntimeError::ClockWentBackwards {
                previous_ms: self.now_ms,
                now_ms,
            });
        }

        let mut applied = 0;
        while let Some((due_ms, deferred)) = self.timeline.pop_due(now_ms) {
            self.now_ms = due_ms;
            let (session, mut bridge) = self.split();
            match session.resume(deferred, &mut bridge) {
                Resumption::Applied(step) => {
                    applied += 1;
                    tracing::trace!(?step, due_ms, "deferred step applied");
                }
                Resumption::Discarded(reason) => {
                    tracing::trace!(?deferred, ?reason, "deferred step discarded");
                }
            }
        }
        self.now_ms = now_ms;

        for handle in self.effects.expire(now_ms) {
            self.presenter.clear_effect(handle);
        }

        Ok(applied)
    }

    /// Advance by `delta_ms` from the current clock.
    pub fn advance_by(&mut self, delta_ms: u64) -> Result<usize> {
        self.advance_to(self.now_ms.saturating_add(delta_ms))
    }

    pub fn state(&self) -> BattleState {
        self.session.state()
    }

    pub fn session(&self) -> &BattleSession {
        &self.session
    }

    pub fn presenter(&self) -> &P {
        &self.presenter
    }

    pub fn presenter_mut(&mut self) -> &mut P {
        &mut self.presenter
    }

    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    /// Number of deferred steps still waiting on the timeline.
    pub fn pending(&self) -> usize {
        self.timeline.len()
    }

    /// Due time of the next deferred step, if any.
    pub fn next_due(&self) -> Option<u64> {
        self.timeline.next_due()
    }

    pub fn effects(&self) -> &EffectTracker {
        &self.effects
    }

    /// Subscribe to battle events
    pub fn subscribe(&self) -> broadcast::Receiver<BattleEvent> {
        self.events.subscribe()
    }

    pub fn into_presenter(self) -> P {
        self.presenter
    }

    fn split(&mut self) -> (&mut BattleSession, RuntimeBridge<'_, P>) {
        let bridge = RuntimeBridge {
            now_ms: self.now_ms,
            timeline: &mut self.timeline,
            effects: &mut self.effects,
            presenter: &mut self.presenter,
            events: &self.events,
        };
        (&mut self.session, bridge)
    }
}

/// [`PresentationBridge`] view over the runtime's parts, valid for one call
/// into the session.
struct RuntimeBridge<'a, P> {
    now_ms: u64,
    timeline: &'a mut Timeline,
    effects: &'a mut EffectTracker,
    presenter: &'a mut P,
    events: &'a broadcast::Sender<BattleEvent>,
}

impl<P: Presenter> PresentationBridge for RuntimeBridge<'_, P> {
    fn display_text(&mut self, slot: TextSlot, content: &str) {
        self.presenter.show_text(slot, content);
    }

    fn schedule_after(&mut self, delay_ms: u64, deferred: Deferred) {
        let due_ms = self.timeline.schedule(self.now_ms, delay_ms, deferred);
        tracing::trace!(step = ?deferred.step, due_ms, "deferred step scheduled");
    }

    fn play_effect(&mut self, effect: Effect) -> EffectHandle {
        let handle = self.effects.start(self.now_ms, effect.clone());
        self.presenter.show_effect(handle, &effect);
        handle
    }

    fn on_event(&mut self, event: &BattleEvent) {
        match event {
            BattleEvent::StateChanged { from, to } => {
                tracing::debug!(%from, %to, "battle state changed");
            }
            BattleEvent::Finished(outcome) => {
                tracing::info!(?outcome, "battle finished");
            }
            _ => {}
        }

        if self.events.send(event.clone()).is_err() {
            // No subscribers - this is normal, not an error
            tracing::trace!("no battle event subscribers");
        }
    }
}

/// Builder for [`BattleRuntime`].
pub struct BattleRuntimeBuilder {
    config: RuntimeConfig,
    session_id: SessionId,
}

impl Default for BattleRuntimeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BattleRuntimeBuilder {
    pub fn new() -> Self {
        Self {
            config: RuntimeConfig::default(),
            session_id: SessionId::default(),
        }
    }

    /// Override runtime configuration
    pub fn config(mut self, config: RuntimeConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the battle roster and timings
    pub fn battle(mut self, battle: BattleConfig) -> Self {
        self.config.battle = battle;
        self
    }

    pub fn session_id(mut self, id: SessionId) -> Self {
        self.session_id = id;
        self
    }

    /// Build the runtime. The battle is not started yet.
    pub fn build<P: Presenter>(self, presenter: P) -> Result<BattleRuntime<P>> {
        if self.config.event_buffer_size == 0 {
            return Err(RuntimeError::ZeroEventBuffer);
        }

        let session = BattleSession::new(self.session_id, &self.config.battle)?;
        let (events, _) = broadcast::channel(self.config.event_buffer_size);

        Ok(BattleRuntime {
            session,
            timeline: Timeline::new(),
            effects: EffectTracker::new(),
            presenter,
            now_ms: 0,
            events,
        })
    }
}
