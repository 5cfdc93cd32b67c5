//! Cosmetic particles. Nothing here feeds back into gameplay.
//!
//! Positions are in logical pixels: one grid cell spans `cell_size` pixels,
//! and the renderer scales to the actual window.

use rand::Rng;

use crate::entity::{BurstStyle, Effect};
use crate::palette::{Rgb, random_neon};

const STAR_COUNT: usize = 90;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub x: f32,
    pub y: f32,
    pub dx: f32,
    pub dy: f32,
    pub life: u32,
    pub color: Rgb,
    pub style: BurstStyle,
}

struct BurstShape {
    count: usize,
    spread: f32,
    life: (u32, u32),
}

fn shape(style: BurstStyle) -> BurstShape {
    match style {
        BurstStyle::Food => BurstShape { count: 20, spread: 2.2, life: (18, 36) },
        BurstStyle::Powerup => BurstShape { count: 28, spread: 3.0, life: (20, 46) },
    }
}

#[derive(Default)]
pub struct Particles {
    live: Vec<Particle>,
}

impl Particles {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn emit<R: Rng + ?Sized>(&mut self, effect: &Effect, cell_size: f32, rng: &mut R) {
        let Effect::Burst { at, color, style } = *effect;
        let s = shape(style);
        let (x, y) = (at.x as f32 * cell_size, at.y as f32 * cell_size);
        for _ in 0..s.count {
            self.live.push(Particle {
                x,
                y,
                dx: rng.gen_range(-s.spread..=s.spread),
                dy: rng.gen_range(-s.spread..=s.spread),
                life: rng.gen_range(s.life.0..=s.life.1),
                color,
                style,
            });
        }
    }

    /// One frame of motion; expired particles are dropped.
    pub fn update(&mut self) {
        for p in &mut self.live {
            p.x += p.dx;
            p.y += p.dy;
            p.life = p.life.saturating_sub(1);
        }
        self.live.retain(|p| p.life > 0);
    }

    pub fn clear(&mut self) {
        self.live.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = &Particle> {
        self.live.iter()
    }

    pub fn len(&self) -> usize { self.live.len() }

    pub fn is_empty(&self) -> bool { self.live.is_empty() }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Star {
    pub x: f32,
    pub y: f32,
    pub size: f32,
    pub speed: f32,
    pub color: Rgb,
}

/// Slowly falling background dots.
pub struct Starfield {
    width: f32,
    height: f32,
    stars: Vec<Star>,
}

impl Starfield {
    pub fn new<R: Rng + ?Sized>(width: f32, height: f32, rng: &mut R) -> Self {
        let stars = (0..STAR_COUNT)
            .map(|_| Star {
                x: rng.gen_range(0.0..=width),
                y: rng.gen_range(0.0..=height),
                size: rng.gen_range(1..=3) as f32,
                speed: rng.gen_range(0.2..1.0),
                color: random_neon(rng),
            })
            .collect();
        Self { width, height, stars }
    }

    pub fn drift<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for s in &mut self.stars {
            s.y += s.speed;
            if s.y > self.height {
                s.y = 0.0;
                s.x = rng.gen_range(0.0..=self.width);
            }
        }
    }

    pub fn stars(&self) -> &[Star] { &self.stars }
}
