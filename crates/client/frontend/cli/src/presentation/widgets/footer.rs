//! Key hints.

use battle_core::BattleState;
use ratatui::{Frame, layout::Rect, text::Span, widgets::Paragraph};

use crate::presentation::theme::RatatuiTheme;

pub fn render(frame: &mut Frame, area: Rect, state: BattleState, theme: &RatatuiTheme) {
    let hint = if state.is_terminal() {
        "R restart  Q quit"
    } else {
        "↑/↓ select  Z/Enter confirm  Q quit"
    };

    frame.render_widget(Paragraph::new(Span::styled(hint, theme.hint())), area);
}
