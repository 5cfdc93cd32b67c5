//! Read-only views handed to the presentation layer each frame.

use crate::entity::{Food, Powerup};
use crate::grid::{Cell, Grid};
use crate::mode::Mode;
use crate::palette::{Rgb, cycled};

pub enum Snapshot<'a> {
    Menu(MenuView),
    Game(GameView<'a>),
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct MenuView {
    pub options: [Mode; 4],
    pub selected: usize,
}

#[derive(Clone, Debug)]
pub struct GameView<'a> {
    pub grid: Grid,
    pub mode: Mode,
    pub snake: &'a [Cell],
    pub snake_color: Rgb,
    pub food: Food,
    pub powerups: &'a [Powerup],
    pub score: u32,
    pub level: u32,
    pub speed: u32,
    pub paused: bool,
    pub game_over: bool,
    /// Best score in this mode since the program started.
    pub best: u32,
}

impl GameView<'_> {
    /// Head keeps the per-game colour, the body cycles through the palette.
    pub fn segment_color(&self, index: usize) -> Rgb {
        if index == 0 { self.snake_color } else { cycled(index) }
    }

    pub fn segments(&self) -> impl Iterator<Item = (Cell, Rgb)> + '_ {
        self.snake.iter().enumerate().map(|(i, c)| (*c, self.segment_color(i)))
    }

    pub fn hud_line(&self) -> String {
        format!("Score:{}  Level:{}  Speed:{}", self.score, self.level, self.speed)
    }
}
