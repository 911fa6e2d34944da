//! Styling rules for the battle screen.

use battle_core::{BattleState, Side};
use ratatui::style::{Color, Modifier, Style};

/// Color scheme shared by every widget.
#[derive(Clone, Copy, Debug, Default)]
pub struct RatatuiTheme;

impl RatatuiTheme {
    pub fn new() -> Self {
        Self
    }

    pub fn title(&self) -> Style {
        Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD)
    }

    pub fn state(&self, state: BattleState) -> Style {
        let color = match state {
            BattleState::Start => Color::Gray,
            BattleState::PlayerCommand | BattleState::PlayerTurn => Color::Cyan,
            BattleState::EnemyTurn => Color::LightRed,
            BattleState::Win => Color::LightGreen,
            BattleState::Lose => Color::Red,
        };
        Style::default().fg(color).add_modifier(Modifier::BOLD)
    }

    pub fn combatant(&self, side: Side) -> Style {
        match side {
            Side::Player => Style::default().fg(Color::Yellow),
            Side::Enemy => Style::default().fg(Color::LightRed),
        }
    }

    pub fn health(&self, current: u32, maximum: u32) -> Style {
        if maximum == 0 {
            return Style::default().fg(Color::Gray);
        }

        let percent = (u64::from(current) * 100) / u64::from(maximum);
        let color = match percent {
            75..=100 => Color::Green,
            50..=74 => Color::Yellow,
            25..=49 => Color::LightRed,
            _ => Color::Red,
        };

        Style::default().fg(color)
    }

    pub fn damage_number(&self) -> Style {
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
    }

    pub fn selected_command(&self) -> Style {
        Style::default()
            .fg(Color::LightYellow)
            .add_modifier(Modifier::BOLD)
    }

    /// Unselected entries, and the whole menu outside the command phase.
    pub fn idle_command(&self) -> Style {
        Style::default().fg(Color::Gray).add_modifier(Modifier::DIM)
    }

    pub fn info(&self) -> Style {
        Style::default().fg(Color::White)
    }

    pub fn history(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }

    pub fn hint(&self) -> Style {
        Style::default().fg(Color::DarkGray)
    }
}
