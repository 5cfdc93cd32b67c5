//! Snake Xtreme: grid snake with difficulty modes and powerups.
//!
//! The library holds the whole simulation and is free of any graphics
//! backend; the binary maps keys to [`Intent`]s and draws [`Snapshot`]s.

pub mod app;
pub mod clock;
pub mod config;
pub mod entity;
pub mod fx;
pub mod grid;
pub mod intent;
pub mod mode;
pub mod palette;
pub mod session;
pub mod snapshot;
pub mod spawner;

pub use app::App;
pub use clock::{GameClock, ManualTime, TimeSource};
pub use config::GameConfig;
pub use entity::{BurstStyle, Effect, Food, Powerup, PowerupKind};
pub use grid::{Cell, Direction, Grid};
pub use intent::Intent;
pub use mode::{Mode, ModeMenu, ModeRules};
pub use palette::Rgb;
pub use session::{GameSession, Phase};
pub use snapshot::{GameView, MenuView, Snapshot};
