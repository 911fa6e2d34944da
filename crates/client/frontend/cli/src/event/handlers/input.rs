//! Keyboard input handling.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self as term_event, Event as TermEvent, KeyEvent, KeyEventKind};
use tokio::time::Duration;

use super::super::EventLoop;
use super::super::r#loop::Flow;
use crate::{input::KeyAction, presentation::terminal::Tui, view::BattleView};

impl EventLoop {
    /// Poll for keyboard input without blocking.
    pub(in crate::event) fn handle_input_tick(&mut self, terminal: &mut Tui) -> Result<Flow> {
        if !term_event::poll(Duration::from_millis(0))? {
            return Ok(Flow::Continue);
        }

        match term_event::read()? {
            TermEvent::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_press(key),
            TermEvent::Resize(_, _) => {
                self.render(terminal)?;
                Ok(Flow::Continue)
            }
            _ => Ok(Flow::Continue),
        }
    }

    fn handle_key_press(&mut self, key: KeyEvent) -> Result<Flow> {
        match self.input.handle_key(key) {
            KeyAction::Quit => {
                tracing::info!("Quit requested");
                Ok(Flow::Quit)
            }
            KeyAction::Restart => self.restart(),
            KeyAction::Battle(key) => {
                let now_ms = self.elapsed_ms();
                self.runtime.press_at(key, now_ms)?;
                Ok(Flow::Continue)
            }
            KeyAction::None => Ok(Flow::Continue),
        }
    }

    /// Replace a finished battle with a brand-new one.
    fn restart(&mut self) -> Result<Flow> {
        let state = self.runtime.state();
        if !state.is_terminal() {
            tracing::debug!(%state, "restart ignored while the battle is running");
            return Ok(Flow::Continue);
        }

        let view = BattleView::new(self.config.ui.message_capacity);
        self.runtime = self.setup.new_battle(view)?;
        self.started_at = Instant::now();
        tracing::info!(session = %self.runtime.session().id(), "battle restarted");

        Ok(Flow::Restarted)
    }
}
