use rand::seq::IndexedRandom;
use rand::Rng;

use crate::grid::{Cell, Grid};

pub struct Food {
    position: Cell,
}

impl Food {
    pub fn new<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> Self {
        Food { position: grid.random_cell(rng) }
    }

    pub fn at(position: Cell) -> Self {
        Food { position }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    pub fn is_eaten(&self, head: Cell) -> bool {
        head == self.position
    }

    /// Moves the food to a uniformly random cell. Cells in `avoid` are
    /// skipped, unless they cover the whole board.
    pub fn relocate<R>(&mut self, grid: &Grid, rng: &mut R, avoid: &[Cell]) -> Cell
    where
        R: Rng + ?Sized,
    {
        let free: Vec<Cell> = if avoid.is_empty() {
            vec![]
        } else {
            grid.cells().filter(|cell| !avoid.contains(cell)).collect()
        };

        self.position = match free.choose(rng) {
            Some(cell) => *cell,
            None => grid.random_cell(rng),
        };
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn eaten_only_on_exact_cell() {
        let food = Food::at((3, 4));
        assert!(food.is_eaten((3, 4)));
        assert!(!food.is_eaten((3, 5)));
        assert!(!food.is_eaten((4, 4)));
        assert!(!food.is_eaten((2, 3)));
    }

    #[test]
    fn relocate_reaches_whole_board() {
        let grid = Grid::new(60, 40, 20);
        let mut rng = StdRng::seed_from_u64(99);
        let mut food = Food::new(&grid, &mut rng);
        let mut seen = std::collections::HashSet::new();

        for _ in 0..500 {
            let cell = food.relocate(&grid, &mut rng, &[]);
            assert_eq!(cell, food.position());
            seen.insert(cell);
        }
        assert_eq!(seen.len(), grid.cell_count());
    }

    #[test]
    fn relocate_skips_avoided_cells() {
        let grid = Grid::new(60, 40, 20);
        let mut rng = StdRng::seed_from_u64(5);
        let mut food = Food::at((0, 0));
        let avoid: Vec<Cell> = grid.cells().filter(|c| *c != (2, 1)).collect();

        for _ in 0..20 {
            assert_eq!(food.relocate(&grid, &mut rng, &avoid), (2, 1));
        }
    }

    #[test]
    fn relocate_on_full_board_still_places() {
        let grid = Grid::new(40, 40, 20);
        let mut rng = StdRng::seed_from_u64(5);
        let mut food = Food::at((0, 0));
        let avoid: Vec<Cell> = grid.cells().collect();

        let cell = food.relocate(&grid, &mut rng, &avoid);
        assert!(avoid.contains(&cell));
    }
}
