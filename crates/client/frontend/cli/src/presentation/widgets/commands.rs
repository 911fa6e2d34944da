//! Command menu rendered from the COMMAND_LIST slot.

use battle_core::TextSlot;
use battle_core::menu::SELECTED_MARKER;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;
use crate::view::BattleView;

/// Render the menu; everything is dimmed while commands are not accepted.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    view: &BattleView,
    active: bool,
    theme: &RatatuiTheme,
) {
    let lines: Vec<Line> = view
        .text(TextSlot::CommandList)
        .lines()
        .map(|entry| {
            let style = if active && entry.starts_with(SELECTED_MARKER) {
                theme.selected_command()
            } else {
                theme.idle_command()
            };
            Line::from(Span::styled(entry.to_owned(), style))
        })
        .collect();

    let paragraph =
        Paragraph::new(lines).block(Block::default().borders(Borders::ALL).title(" Command "));

    frame.render_widget(paragraph, area);
}
