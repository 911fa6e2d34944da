//! Screen layout composing the battle widgets.
//!
//! This module provides the main render entry point that composes all widgets
//! to create the complete terminal UI.
use anyhow::Result;
use battle_core::{BattleState, Combatant};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
};

use crate::presentation::{terminal::Tui, theme::RatatuiTheme, widgets};
use crate::view::BattleView;

/// Everything a frame needs, borrowed from the event loop.
pub struct RenderContext<'a> {
    pub view: &'a BattleView,
    pub state: BattleState,
    pub player: &'a Combatant,
    pub enemy: &'a Combatant,
    /// Advances once per drawn frame; drives the shake jitter.
    pub frame_index: u64,
}

/// Draw one frame to the terminal.
pub fn draw(terminal: &mut Tui, ctx: &RenderContext) -> Result<()> {
    terminal.draw(|frame| render(frame, ctx))?;
    Ok(())
}

/// Lay out and render the battle screen.
pub fn render(frame: &mut Frame, ctx: &RenderContext) {
    let theme = RatatuiTheme::new();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Length(4), // Combatants
            Constraint::Min(4),    // Info + history
            Constraint::Length(5), // Commands
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    widgets::header::render(frame, chunks[0], ctx.state, &theme);

    let offset = shake_offset(ctx.view.shake_intensity(), ctx.frame_index);
    widgets::combatants::render(
        frame,
        shift_right(chunks[1], offset),
        ctx.view,
        [ctx.player, ctx.enemy],
        &theme,
    );

    widgets::info::render(frame, chunks[2], ctx.view, &theme);
    widgets::commands::render(
        frame,
        chunks[3],
        ctx.view,
        ctx.state.accepts_commands(),
        &theme,
    );
    widgets::footer::render(frame, chunks[4], ctx.state, &theme);
}

/// Horizontal jitter for the current frame: alternates between the full
/// intensity and zero while a shake is active.
pub fn shake_offset(intensity: Option<u8>, frame_index: u64) -> u16 {
    match intensity {
        Some(intensity) if frame_index % 2 == 0 => u16::from(intensity),
        _ => 0,
    }
}

fn shift_right(area: Rect, offset: u16) -> Rect {
    let offset = offset.min(area.width.saturating_sub(1));
    Rect {
        x: area.x + offset,
        width: area.width - offset,
        ..area
    }
}
