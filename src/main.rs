use std::fs::File;
use std::path::Path;

use log::{info, warn};
use macroquad::prelude::{Conf, get_time, next_frame};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;
use simplelog::{Config, LevelFilter, WriteLogger};

use snake_xtreme::clock::TimeSource;
use snake_xtreme::config::{self, CONFIG_FILE, GameConfig};
use snake_xtreme::fx::{Particles, Starfield};
use snake_xtreme::App;

mod input;
mod render;

const LOG_FILE: &str = "snake_xtreme.log";

/// Frame time as reported by macroquad.
struct MacroquadTime;

impl TimeSource for MacroquadTime {
    fn now(&self) -> f64 {
        get_time()
    }
}

fn init_logging() {
    // The window owns the screen, so logs go to a file.
    match File::create(LOG_FILE) {
        Ok(file) => {
            if let Err(e) = WriteLogger::init(LevelFilter::Info, Config::default(), file) {
                eprintln!("logger already initialised: {e}");
            }
        }
        Err(e) => eprintln!("cannot create {LOG_FILE}: {e}"),
    }
}

fn load_config() -> GameConfig {
    match config::load(Path::new(CONFIG_FILE)) {
        Ok(c) => c,
        Err(e) => {
            warn!("{e:#}; falling back to defaults");
            GameConfig::default()
        }
    }
}

fn window_conf() -> Conf {
    let config = GameConfig::default();
    Conf {
        window_title: "Snake Xtreme - Modes Edition".to_owned(),
        window_width: (config.grid_width as f32 * config.cell_size) as i32,
        window_height: (config.grid_height as f32 * config.cell_size) as i32,
        high_dpi: true,
        ..Default::default()
    }
}

#[macroquad::main(window_conf)]
async fn main() {
    init_logging();
    let config = load_config();
    info!("starting Snake Xtreme with {config:?}");

    let cell_size = config.cell_size;
    let mut fx_rng = ChaCha12Rng::from_entropy();
    let mut particles = Particles::new();
    let mut stars = Starfield::new(
        config.grid_width as f32 * cell_size,
        config.grid_height as f32 * cell_size,
        &mut fx_rng,
    );
    let mut app = App::new(config, MacroquadTime, ChaCha12Rng::from_entropy());

    loop {
        let intents = input::poll(app.in_menu());
        if !app.frame(intents) {
            break;
        }

        if app.take_new_game() {
            particles.clear();
        }
        if app.is_playing() {
            stars.drift(&mut fx_rng);
        }
        for effect in app.drain_effects() {
            particles.emit(&effect, cell_size, &mut fx_rng);
        }
        particles.update();

        render::draw(&app.snapshot(), &stars, &particles, cell_size);
        next_frame().await;
    }

    info!("bye");
}
