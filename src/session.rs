//! The game state machine: one owned session, advanced one tick at a time.

use log::{debug, info};
use rand::Rng;

use crate::config::GameConfig;
use crate::entity::{BurstStyle, Effect, Food, Powerup, PowerupKind};
use crate::grid::{Cell, Direction, Grid};
use crate::mode::{Mode, ModeRules};
use crate::palette::{Rgb, random_neon};
use crate::snapshot::GameView;
use crate::spawner::Spawner;

const INITIAL_LENGTH: i32 = 3;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Phase {
    Playing,
    Paused,
    GameOver,
}

pub struct GameSession {
    config: GameConfig,
    grid: Grid,
    spawner: Spawner,
    mode: Mode,
    snake: Vec<Cell>,
    snake_color: Rgb,
    direction: Direction,
    food: Food,
    powerups: Vec<Powerup>,
    score: u32,
    level: u32,
    base_speed: u32,
    speed: u32,
    paused: bool,
    game_over: bool,
}

impl GameSession {
    pub fn new<R: Rng + ?Sized>(config: &GameConfig, mode: Mode, rng: &mut R) -> Self {
        let grid = config.grid();
        let snake = initial_snake(grid);
        let spawner = Spawner::new(grid, config.spawn_attempts);
        let food = spawner.food(&snake, rng);
        let speed = mode.rules().initial_speed;
        info!("new {} game on a {}x{} grid", mode.label(), grid.width(), grid.height());
        Self {
            config: config.clone(),
            grid,
            spawner,
            mode,
            snake,
            snake_color: random_neon(rng),
            direction: Direction::Right,
            food,
            powerups: Vec::new(),
            score: 0,
            level: 1,
            base_speed: speed,
            speed,
            paused: false,
            game_over: false,
        }
    }

    /// Back to a fresh game in the same mode.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.snake = initial_snake(self.grid);
        self.direction = Direction::Right;
        self.snake_color = random_neon(rng);
        self.food = self.spawner.food(&self.snake, rng);
        self.powerups.clear();
        self.score = 0;
        self.level = 1;
        self.base_speed = self.rules().initial_speed;
        self.speed = self.base_speed;
        self.paused = false;
        self.game_over = false;
        info!("restarted {} game", self.mode.label());
    }

    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.paused {
            Phase::Paused
        } else {
            Phase::Playing
        }
    }

    pub fn mode(&self) -> Mode { self.mode }

    pub fn rules(&self) -> ModeRules { self.mode.rules() }

    pub fn grid(&self) -> Grid { self.grid }

    pub fn snake(&self) -> &[Cell] { &self.snake }

    pub fn head(&self) -> Cell { self.snake[0] }

    pub fn direction(&self) -> Direction { self.direction }

    pub fn food(&self) -> Food { self.food }

    pub fn powerups(&self) -> &[Powerup] { &self.powerups }

    pub fn score(&self) -> u32 { self.score }

    pub fn level(&self) -> u32 { self.level }

    pub fn base_speed(&self) -> u32 { self.base_speed }

    pub fn speed(&self) -> u32 { self.speed }

    /// Ignored (returns false) when it would reverse the snake onto itself,
    /// or while the game is not running.
    pub fn change_direction(&mut self, dir: Direction) -> bool {
        if self.phase() != Phase::Playing || dir == self.direction.opposite() {
            return false;
        }
        self.direction = dir;
        true
    }

    pub fn toggle_pause(&mut self) {
        if self.game_over {
            return;
        }
        self.paused = !self.paused;
        debug!("paused: {}", self.paused);
    }

    /// Moves the snake one cell and resolves everything it runs into.
    /// Does nothing unless the game is in the playing phase.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Vec<Effect> {
        let mut effects = Vec::new();
        if self.phase() != Phase::Playing {
            return effects;
        }

        let new_head = self.grid.step(self.head(), self.direction);
        if self.rules().self_collision_lethal && self.snake.contains(&new_head) {
            self.game_over = true;
            info!(
                "game over in {} mode: score {}, level {}, length {}",
                self.mode.label(),
                self.score,
                self.level,
                self.snake.len()
            );
            return effects;
        }

        self.snake.insert(0, new_head);
        if new_head == self.food.position {
            self.eat_food(new_head, rng, &mut effects);
        } else {
            self.snake.pop();
        }
        self.collect_powerups(new_head, &mut effects);
        effects
    }

    pub fn view(&self) -> GameView<'_> {
        GameView {
            grid: self.grid,
            mode: self.mode,
            snake: &self.snake,
            snake_color: self.snake_color,
            food: self.food,
            powerups: &self.powerups,
            score: self.score,
            level: self.level,
            speed: self.speed,
            paused: self.paused,
            game_over: self.game_over,
            best: self.score,
        }
    }

    fn eat_food<R: Rng + ?Sized>(&mut self, at: Cell, rng: &mut R, effects: &mut Vec<Effect>) {
        self.score += 1;
        effects.push(Effect::Burst { at, color: self.food.color, style: BurstStyle::Food });
        self.food = self.spawner.food(&self.snake, rng);
        if rng.gen_bool(self.config.powerup_spawn_probability.clamp(0.0, 1.0)) {
            let pu = self.spawner.powerup(&self.snake, self.food.position, rng);
            self.powerups.push(pu);
        }
        if self.score % self.config.level_up_score_divisor.max(1) == 0 {
            self.level += 1;
            self.base_speed += 1;
            self.speed = self.base_speed;
            info!("level {} reached, speed {}", self.level, self.speed);
        }
    }

    fn collect_powerups(&mut self, head: Cell, effects: &mut Vec<Effect>) {
        let (hit, kept): (Vec<Powerup>, Vec<Powerup>) =
            self.powerups.drain(..).partition(|pu| pu.position == head);
        self.powerups = kept;
        for pu in hit {
            effects.push(Effect::Burst { at: head, color: pu.color, style: BurstStyle::Powerup });
            self.apply_powerup(pu.kind);
        }
    }

    // Bonus points never trigger a level-up; only food does.
    fn apply_powerup(&mut self, kind: PowerupKind) {
        match kind {
            PowerupKind::Slow => {
                self.base_speed = self
                    .base_speed
                    .saturating_sub(self.config.slow_delta)
                    .max(self.config.slow_floor);
            }
            PowerupKind::Shrink => {
                let len = self.snake.len();
                if len > self.config.shrink_min_length {
                    self.snake.truncate(len.saturating_sub(self.config.shrink_amount).max(2));
                }
            }
            PowerupKind::Bonus => self.score += self.config.bonus_score_delta,
        }
        debug!("picked up {kind:?}: score {}, speed {}, length {}", self.score, self.speed, self.snake.len());
    }
}

/// Three cells ending at the grid centre, heading right. Cells that would
/// coincide on very narrow grids are dropped.
fn initial_snake(grid: Grid) -> Vec<Cell> {
    let center = grid.center();
    let mut snake: Vec<Cell> = Vec::with_capacity(INITIAL_LENGTH as usize);
    for i in 0..INITIAL_LENGTH {
        let cell = grid.wrap(Cell { x: center.x - i, y: center.y });
        if !snake.contains(&cell) {
            snake.push(cell);
        }
    }
    snake
}
