//! Toroidal grid geometry: cells, directions and wrap-around stepping.

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    pub const ORIGIN: Cell = Cell { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit step in screen coordinates (y grows downwards).
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }
}

/// A `width x height` arena whose edges wrap onto each other.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    width: i32,
    height: i32,
}

impl Grid {
    /// Dimensions are clamped to at least one cell each.
    pub fn new(width: i32, height: i32) -> Self {
        Self { width: width.max(1), height: height.max(1) }
    }

    pub fn width(&self) -> i32 { self.width }

    pub fn height(&self) -> i32 { self.height }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn contains(&self, c: Cell) -> bool {
        (0..self.width).contains(&c.x) && (0..self.height).contains(&c.y)
    }

    pub fn wrap(&self, c: Cell) -> Cell {
        Cell { x: c.x.rem_euclid(self.width), y: c.y.rem_euclid(self.height) }
    }

    pub fn step(&self, from: Cell, dir: Direction) -> Cell {
        let (dx, dy) = dir.delta();
        self.wrap(Cell { x: from.x + dx, y: from.y + dy })
    }

    pub fn center(&self) -> Cell {
        Cell { x: self.width / 2, y: self.height / 2 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_wraps_on_every_edge() {
        let grid = Grid::new(4, 3);
        assert_eq!(grid.step(Cell::new(3, 1), Direction::Right), Cell::new(0, 1));
        assert_eq!(grid.step(Cell::new(0, 1), Direction::Left), Cell::new(3, 1));
        assert_eq!(grid.step(Cell::new(2, 0), Direction::Up), Cell::new(2, 2));
        assert_eq!(grid.step(Cell::new(2, 2), Direction::Down), Cell::new(2, 0));
    }

    #[test]
    fn single_cell_grid_steps_onto_itself() {
        let grid = Grid::new(1, 1);
        for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert_eq!(grid.step(Cell::ORIGIN, dir), Cell::ORIGIN);
        }
    }

    #[test]
    fn degenerate_dimensions_are_clamped() {
        let grid = Grid::new(0, -4);
        assert_eq!((grid.width(), grid.height()), (1, 1));
        assert!(grid.contains(Cell::ORIGIN));
    }

    #[test]
    fn opposite_is_an_involution() {
        for dir in [Direction::Up, Direction::Down, Direction::Left, Direction::Right] {
            assert_ne!(dir.opposite(), dir);
            assert_eq!(dir.opposite().opposite(), dir);
        }
    }
}
