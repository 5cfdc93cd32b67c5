//! Tunable game constants, optionally overridden from a JSON file.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Serialize};

use crate::grid::Grid;
use crate::mode::Mode;

pub const CONFIG_FILE: &str = "snake_xtreme.json";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_width: i32,
    pub grid_height: i32,
    /// Pixel size of one cell at the reference window size.
    pub cell_size: f32,
    pub default_mode: Mode,
    pub ticks_per_second_floor: f64,
    pub powerup_spawn_probability: f64,
    pub level_up_score_divisor: u32,
    pub slow_delta: u32,
    pub slow_floor: u32,
    pub shrink_amount: usize,
    pub shrink_min_length: usize,
    pub bonus_score_delta: u32,
    pub spawn_attempts: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: 40,
            grid_height: 30,
            cell_size: 20.0,
            default_mode: Mode::Easy,
            ticks_per_second_floor: 0.1,
            powerup_spawn_probability: 0.2,
            level_up_score_divisor: 5,
            slow_delta: 2,
            slow_floor: 3,
            shrink_amount: 3,
            shrink_min_length: 5,
            bonus_score_delta: 5,
            spawn_attempts: 5000,
        }
    }
}

impl GameConfig {
    pub fn grid(&self) -> Grid {
        Grid::new(self.grid_width, self.grid_height)
    }

    pub fn validate(&self) -> Result<()> {
        ensure!(
            self.grid_width >= 1 && self.grid_height >= 1,
            "grid must be at least 1x1, got {}x{}",
            self.grid_width,
            self.grid_height
        );
        ensure!(self.cell_size > 0.0, "cell_size must be positive");
        ensure!(
            (0.0..=1.0).contains(&self.powerup_spawn_probability),
            "powerup_spawn_probability must lie in [0, 1], got {}",
            self.powerup_spawn_probability
        );
        ensure!(self.ticks_per_second_floor > 0.0, "ticks_per_second_floor must be positive");
        ensure!(self.level_up_score_divisor > 0, "level_up_score_divisor must be non-zero");
        ensure!(self.spawn_attempts > 0, "spawn_attempts must be non-zero");
        Ok(())
    }
}

/// Reads `path` if it exists; a missing file yields the defaults.
pub fn load(path: &Path) -> Result<GameConfig> {
    if !path.exists() {
        return Ok(GameConfig::default());
    }
    let text = fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    let config: GameConfig = serde_json::from_str(&text)
        .with_context(|| format!("parsing config {}", path.display()))?;
    config.validate().with_context(|| format!("invalid config {}", path.display()))?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn scratch_file(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("snake_xtreme_{}_{}", std::process::id(), name));
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn defaults_are_valid() {
        GameConfig::default().validate().unwrap();
    }

    #[test]
    fn missing_file_gives_defaults() {
        let path = std::env::temp_dir().join("snake_xtreme_definitely_missing.json");
        assert_eq!(load(&path).unwrap(), GameConfig::default());
    }

    #[test]
    fn partial_file_overrides_only_given_keys() {
        let path = scratch_file("partial.json", r#"{ "grid_width": 12, "default_mode": "hard" }"#);
        let config = load(&path).unwrap();
        fs::remove_file(&path).ok();
        assert_eq!(config.grid_width, 12);
        assert_eq!(config.grid_height, 30);
        assert_eq!(config.default_mode, Mode::Hard);
    }

    #[test]
    fn out_of_range_probability_is_rejected() {
        let path = scratch_file("bad_prob.json", r#"{ "powerup_spawn_probability": 1.5 }"#);
        let err = load(&path).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(format!("{err:#}").contains("powerup_spawn_probability"));
    }

    #[test]
    fn malformed_json_reports_path() {
        let path = scratch_file("broken.json", "{ not json");
        let err = load(&path).unwrap_err();
        fs::remove_file(&path).ok();
        assert!(format!("{err:#}").contains("parsing config"));
    }
}
