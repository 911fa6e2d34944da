//! Current narration line followed by earlier messages.

use battle_core::TextSlot;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::presentation::theme::RatatuiTheme;
use crate::view::BattleView;

pub fn render(frame: &mut Frame, area: Rect, view: &BattleView, theme: &RatatuiTheme) {
    let history_rows = usize::from(area.height.saturating_sub(3));

    let mut lines = vec![Line::from(Span::styled(
        view.text(TextSlot::Info).to_owned(),
        theme.info(),
    ))];
    // The newest entry is the line above.
    lines.extend(
        view.messages()
            .recent(history_rows + 1)
            .skip(1)
            .map(|text| Line::from(Span::styled(text.to_owned(), theme.history()))),
    );

    let paragraph = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(" Battle "));

    frame.render_widget(paragraph, area);
}
