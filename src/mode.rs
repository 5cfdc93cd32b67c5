//! Difficulty presets and the pre-game mode menu.

use serde::{Deserialize, Serialize};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Easy,
    Medium,
    Hard,
    Endless,
}

/// What a mode fixes for the whole game.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ModeRules {
    pub initial_speed: u32,
    pub self_collision_lethal: bool,
}

impl Mode {
    pub const ALL: [Mode; 4] = [Mode::Easy, Mode::Medium, Mode::Hard, Mode::Endless];

    pub fn rules(self) -> ModeRules {
        let (initial_speed, self_collision_lethal) = match self {
            Mode::Easy => (6, true),
            Mode::Medium => (8, true),
            Mode::Hard => (12, true),
            Mode::Endless => (5, false),
        };
        ModeRules { initial_speed, self_collision_lethal }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Easy => "Easy",
            Mode::Medium => "Medium",
            Mode::Hard => "Hard",
            Mode::Endless => "Endless",
        }
    }

    pub fn index(self) -> usize {
        Mode::ALL.iter().position(|m| *m == self).unwrap_or(0)
    }
}

/// Cursor over [`Mode::ALL`] with cyclic wrap-around.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ModeMenu {
    selected: usize,
}

impl ModeMenu {
    pub fn new(initial: Mode) -> Self {
        Self { selected: initial.index() }
    }

    pub fn up(&mut self) {
        self.selected = (self.selected + Mode::ALL.len() - 1) % Mode::ALL.len();
    }

    pub fn down(&mut self) {
        self.selected = (self.selected + 1) % Mode::ALL.len();
    }

    pub fn selected_index(&self) -> usize { self.selected }

    pub fn selected(&self) -> Mode { Mode::ALL[self.selected] }
}
