//! Selectable battle commands and the highlight cursor over them.

use strum::IntoEnumIterator;

use crate::error::MenuError;

/// Marker drawn in front of the highlighted command.
pub const SELECTED_MARKER: &str = "▶ ";
/// Padding drawn in front of every other command so labels stay aligned.
pub const UNSELECTED_MARKER: &str = "  ";

/// A command the player can issue during the command phase.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
    strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Command {
    Attack,
    Defend,
    Flee,
}

impl Command {
    /// Human-facing label shown in the command list.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Attack => "Attack",
            Self::Defend => "Defend",
            Self::Flee => "Flee",
        }
    }
}

/// Ordered, fixed list of commands with a cyclic cursor.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommandMenu {
    commands: Vec<Command>,
    cursor: usize,
}

impl CommandMenu {
    /// Builds a menu over `commands`, cursor on the first entry.
    pub fn new(commands: Vec<Command>) -> Result<Self, MenuError> {
        if commands.is_empty() {
            return Err(MenuError::Empty);
        }
        Ok(Self {
            commands,
            cursor: 0,
        })
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Always false: construction rejects empty menus.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    /// Moves the cursor by `delta`, wrapping around both ends.
    pub fn move_selection(&mut self, delta: i32) {
        let count = self.commands.len() as i64;
        let next = (self.cursor as i64 + i64::from(delta)).rem_euclid(count);
        self.cursor = next as usize;
    }

    pub fn current_command(&self) -> Command {
        self.commands[self.cursor]
    }

    pub fn reset(&mut self) {
        self.cursor = 0;
    }

    /// Renders the list as it appears in the command slot, one command per
    /// line with the selected entry marked.
    pub fn render(&self) -> String {
        self.commands
            .iter()
            .enumerate()
            .map(|(index, command)| {
                let marker = if index == self.cursor {
                    SELECTED_MARKER
                } else {
                    UNSELECTED_MARKER
                };
                format!("{marker}{}", command.label())
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl Default for CommandMenu {
    fn default() -> Self {
        Self {
            commands: Command::iter().collect(),
            cursor: 0,
        }
    }
}
