//! HP panel, one line per combatant, with floating damage numbers.

use battle_core::{Combatant, Side, TextSlot};
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::presentation::theme::RatatuiTheme;
use crate::view::BattleView;

/// Render the HP slot. Its lines are the player's then the enemy's.
pub fn render(
    frame: &mut Frame,
    area: Rect,
    view: &BattleView,
    combatants: [&Combatant; 2],
    theme: &RatatuiTheme,
) {
    let sides = [Side::Player, Side::Enemy];

    let lines: Vec<Line> = view
        .text(TextSlot::Hp)
        .lines()
        .zip(sides.into_iter().zip(combatants))
        .map(|(text, (side, combatant))| {
            let mut spans = vec![Span::styled(
                text.to_owned(),
                theme.health(combatant.hp(), combatant.max_hp()),
            )];
            spans.extend(view.damage_numbers(side).map(|amount| {
                Span::styled(format!("  -{amount}"), theme.damage_number())
            }));
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .title(Span::styled(" HP ", theme.combatant(Side::Player))),
    );

    frame.render_widget(paragraph, area);
}
