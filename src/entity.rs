//! Food, powerups and the cosmetic effects gameplay asks the renderer for.

use crate::grid::Cell;
use crate::palette::Rgb;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Food {
    pub position: Cell,
    pub color: Rgb,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum PowerupKind {
    Slow,
    Shrink,
    Bonus,
}

impl PowerupKind {
    pub const ALL: [PowerupKind; 3] = [PowerupKind::Slow, PowerupKind::Shrink, PowerupKind::Bonus];

    /// Letter drawn on top of the powerup tile.
    pub fn glyph(self) -> char {
        match self {
            PowerupKind::Slow | PowerupKind::Shrink => 'S',
            PowerupKind::Bonus => 'B',
        }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Powerup {
    pub position: Cell,
    pub kind: PowerupKind,
    pub color: Rgb,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum BurstStyle {
    Food,
    Powerup,
}

/// Fire-and-forget requests emitted by a tick. Gameplay never reads them back.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Effect {
    Burst { at: Cell, color: Rgb, style: BurstStyle },
}
