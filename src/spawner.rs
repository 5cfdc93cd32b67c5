//! Random placement of food and powerups on free cells.

use std::collections::HashSet;

use log::{debug, warn};
use rand::Rng;

use crate::entity::{Food, Powerup, PowerupKind};
use crate::grid::{Cell, Grid};
use crate::palette::random_neon;

pub struct Spawner {
    grid: Grid,
    attempts: u32,
}

impl Spawner {
    pub fn new(grid: Grid, attempts: u32) -> Self {
        Self { grid, attempts: attempts.max(1) }
    }

    /// Rejection-samples a cell outside `occupied`, falling back to the origin
    /// once the attempt budget is spent. The fallback may overlap.
    pub fn free_cell<R: Rng + ?Sized>(&self, occupied: &HashSet<Cell>, rng: &mut R) -> Cell {
        for _ in 0..self.attempts {
            let cell = Cell {
                x: rng.gen_range(0..self.grid.width()),
                y: rng.gen_range(0..self.grid.height()),
            };
            if !occupied.contains(&cell) {
                return cell;
            }
        }
        warn!(
            "no free cell after {} attempts ({} of {} occupied), using origin",
            self.attempts,
            occupied.len(),
            self.grid.cell_count()
        );
        Cell::ORIGIN
    }

    pub fn food<R: Rng + ?Sized>(&self, snake: &[Cell], rng: &mut R) -> Food {
        let occupied: HashSet<Cell> = snake.iter().copied().collect();
        let position = self.free_cell(&occupied, rng);
        Food { position, color: random_neon(rng) }
    }

    pub fn powerup<R: Rng + ?Sized>(&self, snake: &[Cell], food: Cell, rng: &mut R) -> Powerup {
        let mut occupied: HashSet<Cell> = snake.iter().copied().collect();
        occupied.insert(food);
        let position = self.free_cell(&occupied, rng);
        let kind = PowerupKind::ALL[rng.gen_range(0..PowerupKind::ALL.len())];
        debug!("spawned {kind:?} powerup at ({}, {})", position.x, position.y);
        Powerup { position, kind, color: random_neon(rng) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha12Rng;

    const RNG_SEED: u64 = 0x5EED_CAFE;

    #[test]
    fn food_never_lands_on_snake() {
        let grid = Grid::new(6, 4);
        let spawner = Spawner::new(grid, 5000);
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let snake: Vec<Cell> = (0..6).flat_map(|x| [Cell::new(x, 0), Cell::new(x, 1)]).collect();
        for _ in 0..200 {
            let food = spawner.food(&snake, &mut rng);
            assert!(!snake.contains(&food.position));
            assert!(grid.contains(food.position));
        }
    }

    #[test]
    fn powerup_avoids_snake_and_food() {
        let grid = Grid::new(3, 1);
        let spawner = Spawner::new(grid, 5000);
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let snake = [Cell::new(0, 0)];
        for _ in 0..50 {
            let pu = spawner.powerup(&snake, Cell::new(1, 0), &mut rng);
            assert_eq!(pu.position, Cell::new(2, 0));
        }
    }

    #[test]
    fn full_grid_falls_back_to_origin() {
        let grid = Grid::new(2, 2);
        let spawner = Spawner::new(grid, 50);
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let occupied: HashSet<Cell> =
            [Cell::new(0, 0), Cell::new(1, 0), Cell::new(0, 1), Cell::new(1, 1)].into_iter().collect();
        assert_eq!(spawner.free_cell(&occupied, &mut rng), Cell::ORIGIN);
    }

    #[test]
    fn every_kind_shows_up() {
        let spawner = Spawner::new(Grid::new(10, 10), 5000);
        let mut rng = ChaCha12Rng::seed_from_u64(RNG_SEED);
        let kinds: HashSet<PowerupKind> =
            (0..100).map(|_| spawner.powerup(&[], Cell::ORIGIN, &mut rng).kind).collect();
        assert_eq!(kinds.len(), 3);
    }
}
