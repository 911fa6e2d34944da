//! Rendering handlers.

use anyhow::Result;

use super::super::EventLoop;
use crate::presentation::{terminal::Tui, ui};

impl EventLoop {
    /// Render the current battle.
    pub(in crate::event) fn render(&mut self, terminal: &mut Tui) -> Result<()> {
        let session = self.runtime.session();
        let ctx = ui::RenderContext {
            view: self.runtime.presenter(),
            state: session.state(),
            player: session.player(),
            enemy: session.enemy(),
            frame_index: self.frame_index,
        };

        ui::draw(terminal, &ctx)
    }
}
