//! Header widget with the title and the current battle state.

use battle_core::BattleState;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;

pub const TITLE: &str = "Classic Turn Battle";

pub fn render(frame: &mut Frame, area: Rect, state: BattleState, theme: &RatatuiTheme) {
    let line = Line::from(vec![
        Span::styled(TITLE, theme.title()),
        Span::raw(" | "),
        Span::styled(state.to_string(), theme.state(state)),
    ]);

    let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL));

    frame.render_widget(paragraph, area);
}
