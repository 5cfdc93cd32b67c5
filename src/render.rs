//! Macroquad drawing of menu and game snapshots.

use macroquad::prelude::{
    BLACK, Color, clear_background, draw_circle, draw_rectangle, draw_text, measure_text,
    screen_height, screen_width,
};

use snake_xtreme::fx::{Particles, Starfield};
use snake_xtreme::palette::{self, Rgb};
use snake_xtreme::{BurstStyle, Cell, GameView, MenuView, Snapshot};

const FONT_SIZE: f32 = 26.0;
const BIG_FONT_SIZE: f32 = 48.0;

fn color(c: Rgb) -> Color {
    Color::from_rgba(c.0, c.1, c.2, 255)
}

/// Maps logical pixels (grid cells times `cell_size`) onto the window,
/// keeping the aspect ratio and centring the arena.
struct Layout {
    scale: f32,
    off_x: f32,
    off_y: f32,
    cell: f32,
}

impl Layout {
    fn new(logical_w: f32, logical_h: f32, cell_size: f32) -> Self {
        let sw = screen_width();
        let sh = screen_height();
        let scale = (sw / logical_w).min(sh / logical_h);
        let off_x = (sw - logical_w * scale) * 0.5;
        let off_y = (sh - logical_h * scale) * 0.5;
        Self { scale, off_x, off_y, cell: cell_size * scale }
    }

    fn point(&self, x: f32, y: f32) -> (f32, f32) {
        (self.off_x + x * self.scale, self.off_y + y * self.scale)
    }

    /// Cell rectangle shrunk by `inset` logical pixels on every side.
    fn fill_cell(&self, c: Cell, inset: f32, col: Color) {
        let x = self.off_x + c.x as f32 * self.cell + inset * self.scale;
        let y = self.off_y + c.y as f32 * self.cell + inset * self.scale;
        let side = (self.cell - 2.0 * inset * self.scale).max(1.0);
        draw_rectangle(x, y, side, side, col);
    }
}

fn draw_text_center(text: &str, size: f32, col: Color, y: f32) {
    let dims = measure_text(text, None, size as u16, 1.0);
    draw_text(text, (screen_width() - dims.width) * 0.5, y, size, col);
}

pub fn draw(snapshot: &Snapshot<'_>, stars: &Starfield, particles: &Particles, cell_size: f32) {
    clear_background(color(palette::BACKGROUND));
    match snapshot {
        Snapshot::Menu(menu) => draw_menu(menu),
        Snapshot::Game(game) => {
            let layout = Layout::new(
                game.grid.width() as f32 * cell_size,
                game.grid.height() as f32 * cell_size,
                cell_size,
            );
            draw_stars(&layout, stars);
            draw_game(&layout, game);
            draw_particles(&layout, particles);
            draw_hud(game);
        }
    }
}

fn draw_menu(menu: &MenuView) {
    draw_text_center("SNAKE XTREME", BIG_FONT_SIZE, color(palette::NEON_YELLOW), 120.0);
    for (i, mode) in menu.options.iter().enumerate() {
        let col = if i == menu.selected { palette::cycled(i) } else { palette::MENU_IDLE };
        draw_text_center(mode.label(), FONT_SIZE, color(col), 240.0 + i as f32 * 50.0);
    }
}

fn draw_stars(layout: &Layout, stars: &Starfield) {
    for s in stars.stars() {
        let (x, y) = layout.point(s.x, s.y);
        draw_circle(x, y, s.size * layout.scale, color(s.color));
    }
}

fn draw_game(layout: &Layout, game: &GameView<'_>) {
    layout.fill_cell(game.food.position, 4.0, color(game.food.color));

    for pu in game.powerups {
        layout.fill_cell(pu.position, 6.0, color(pu.color));
        let label = pu.kind.glyph().to_string();
        let size = (layout.cell * 0.8).max(8.0);
        let dims = measure_text(&label, None, size as u16, 1.0);
        let x = layout.off_x + (pu.position.x as f32 + 0.5) * layout.cell - dims.width * 0.5;
        let y = layout.off_y + (pu.position.y as f32 + 0.5) * layout.cell + dims.offset_y * 0.5;
        draw_text(&label, x, y, size, BLACK);
    }

    for (c, col) in game.segments() {
        layout.fill_cell(c, 2.0, color(col));
    }
}

fn draw_particles(layout: &Layout, particles: &Particles) {
    for p in particles.iter() {
        let (x, y) = layout.point(p.x, p.y);
        let radius = match p.style {
            BurstStyle::Food => 2.0,
            BurstStyle::Powerup => 3.0,
        };
        draw_circle(x, y, radius * layout.scale, color(p.color));
    }
}

fn draw_hud(game: &GameView<'_>) {
    draw_text(&game.hud_line(), 10.0, 30.0, FONT_SIZE, color(palette::NEON_CYAN));
    let mid = screen_height() * 0.5;
    if game.paused {
        draw_text_center("PAUSED", BIG_FONT_SIZE, color(palette::NEON_YELLOW), mid);
    }
    if game.game_over {
        draw_text_center("GAME OVER", BIG_FONT_SIZE, color(palette::NEON_RED), mid - 50.0);
        draw_text_center(
            "Press ENTER to restart or ESC to quit",
            FONT_SIZE,
            color(palette::NEON_CYAN),
            mid + 20.0,
        );
        let best = format!("Best {}: {}", game.mode.label(), game.best);
        draw_text_center(&best, FONT_SIZE, color(palette::NEON_YELLOW), mid + 60.0);
    }
}
