//! Neon colour palette shared by gameplay entities and the renderer.

use rand::Rng;

/// Plain 8-bit RGB colour, independent of any graphics backend.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rgb(pub u8, pub u8, pub u8);

pub const BACKGROUND: Rgb = Rgb(10, 10, 14);
pub const NEON_CYAN: Rgb = Rgb(80, 250, 255);
pub const NEON_YELLOW: Rgb = Rgb(255, 240, 90);
pub const NEON_RED: Rgb = Rgb(255, 60, 60);
pub const MENU_IDLE: Rgb = Rgb(180, 180, 180);

pub const NEON_COLORS: [Rgb; 9] = [
    Rgb(255, 80, 180),
    Rgb(80, 250, 255),
    Rgb(0, 255, 150),
    Rgb(255, 240, 90),
    Rgb(255, 150, 50),
    Rgb(180, 100, 255),
    Rgb(0, 255, 255),
    Rgb(255, 60, 60),
    Rgb(255, 0, 255),
];

pub fn random_neon<R: Rng + ?Sized>(rng: &mut R) -> Rgb {
    NEON_COLORS[rng.gen_range(0..NEON_COLORS.len())]
}

/// Colour cycled by index, used for body segments and menu highlights.
pub fn cycled(i: usize) -> Rgb {
    NEON_COLORS[i % NEON_COLORS.len()]
}
