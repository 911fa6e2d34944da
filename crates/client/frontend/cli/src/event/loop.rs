//! Event loop orchestrating the battle clock, user input, and rendering.

use std::time::Instant;

use anyhow::Result;
use battle_core::BattleEvent;
use client_bootstrap::RuntimeSetup;
use runtime::BattleRuntime;
use tokio::{
    sync::broadcast::error::RecvError,
    time::{self, Duration},
};

use crate::{
    config::CliConfig, input::InputHandler, presentation::terminal::Tui, view::BattleView,
};

/// What the loop should do after handling a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    /// A fresh battle replaced the old one; event subscriptions are stale.
    Restarted,
    Quit,
}

/// Event loop owning the running battle.
///
/// The battle clock is wall time since the current battle was created.
pub struct EventLoop {
    pub(crate) setup: RuntimeSetup,
    pub(crate) runtime: BattleRuntime<BattleView>,
    pub(crate) input: InputHandler,
    pub(crate) config: CliConfig,
    pub(crate) started_at: Instant,
    pub(crate) frame_index: u64,
}

impl EventLoop {
    pub fn new(setup: RuntimeSetup, runtime: BattleRuntime<BattleView>, config: CliConfig) -> Self {
        Self {
            setup,
            runtime,
            input: InputHandler::new(),
            config,
            started_at: Instant::now(),
            frame_index: 0,
        }
    }

    pub async fn run(mut self, terminal: &mut Tui) -> Result<()> {
        self.render(terminal)?;

        let frame_interval = Duration::from_millis(self.config.ui.frame_interval_ms);
        let mut events = self.runtime.subscribe();

        loop {
            tokio::select! {
                result = events.recv() => {
                    if self.handle_battle_event(result) {
                        events = self.runtime.subscribe();
                    }
                }
                _ = time::sleep(frame_interval) => {
                    match self.handle_input_tick(terminal)? {
                        Flow::Quit => break,
                        Flow::Restarted => events = self.runtime.subscribe(),
                        Flow::Continue => {}
                    }
                    self.handle_frame_tick(terminal)?;
                }
            }
        }

        Ok(())
    }

    /// Log a battle event. Returns `true` when the subscription must be renewed.
    fn handle_battle_event(&mut self, result: Result<BattleEvent, RecvError>) -> bool {
        match result {
            Ok(BattleEvent::Finished(outcome)) => {
                tracing::info!(
                    session = %self.runtime.session().id(),
                    %outcome,
                    elapsed_ms = self.runtime.now_ms(),
                    "battle over"
                );
                false
            }
            Ok(event) => {
                tracing::debug!(?event, "battle event");
                false
            }
            Err(RecvError::Lagged(skipped)) => {
                tracing::warn!("Dropped {} stale battle events", skipped);
                false
            }
            Err(RecvError::Closed) => true,
        }
    }

    /// Battle clock: wall time since the current battle was created.
    pub(crate) fn elapsed_ms(&self) -> u64 {
        u64::try_from(self.started_at.elapsed().as_millis()).unwrap_or(u64::MAX)
    }

    /// Advance the battle to wall time and redraw when something changed.
    fn handle_frame_tick(&mut self, terminal: &mut Tui) -> Result<()> {
        self.runtime.advance_to(self.elapsed_ms())?;
        self.frame_index = self.frame_index.wrapping_add(1);

        let shaking = self.runtime.presenter().shake_intensity().is_some();
        if self.runtime.presenter_mut().take_dirty() || shaking {
            self.render(terminal)?;
        }
        Ok(())
    }
}
