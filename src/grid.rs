use rand::Rng;
use Direction::*;

pub type CellInt = i32;
pub type Cell = (CellInt, CellInt);

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right
}

impl Direction {
    pub const ALL: [Direction; 4] = [Up, Right, Left, Down];

    pub fn delta(self) -> (CellInt, CellInt) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Up => Down,
            Down => Up,
            Left => Right,
            Right => Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }

    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Direction {
        Self::ALL[rng.random_range(0..Self::ALL.len())]
    }
}

/// Board geometry. Pixel sizes only matter for conversions; everything
/// else works in cells on a wrap-around board.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    cell_size: CellInt,
    width: CellInt,
    height: CellInt,
}

impl Grid {
    pub fn new(screen_width: u32, screen_height: u32, cell_size: u32) -> Self {
        let cell_size = cell_size.max(1) as CellInt;
        let width = (screen_width as CellInt / cell_size).max(1);
        let height = (screen_height as CellInt / cell_size).max(1);
        Grid { cell_size, width, height }
    }

    pub fn width(&self) -> CellInt {
        self.width
    }

    pub fn height(&self) -> CellInt {
        self.height
    }

    pub fn cell_size(&self) -> CellInt {
        self.cell_size
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn center(&self) -> Cell {
        (self.width / 2, self.height / 2)
    }

    pub fn to_cell(&self, pixel: (CellInt, CellInt)) -> Cell {
        self.wrap((
            pixel.0.div_euclid(self.cell_size),
            pixel.1.div_euclid(self.cell_size),
        ))
    }

    pub fn to_pixel(&self, cell: Cell) -> (CellInt, CellInt) {
        (cell.0 * self.cell_size, cell.1 * self.cell_size)
    }

    pub fn wrap(&self, cell: Cell) -> Cell {
        (cell.0.rem_euclid(self.width), cell.1.rem_euclid(self.height))
    }

    pub fn step(&self, cell: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        self.wrap((cell.0 + dx, cell.1 + dy))
    }

    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        (rng.random_range(0..self.width), rng.random_range(0..self.height))
    }

    /// Every cell, row by row.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.height).flat_map(move |y| (0..self.width).map(move |x| (x, y)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn board() -> Grid {
        Grid::new(640, 480, 20)
    }

    #[test]
    fn reference_board_is_32_by_24() {
        let grid = board();
        assert_eq!((grid.width(), grid.height()), (32, 24));
        assert_eq!(grid.center(), (16, 12));
        assert_eq!(grid.cell_count(), 768);
    }

    #[test]
    fn wraps_on_every_edge() {
        let grid = board();
        assert_eq!(grid.step((31, 5), Right), (0, 5));
        assert_eq!(grid.step((0, 5), Left), (31, 5));
        assert_eq!(grid.step((7, 0), Up), (7, 23));
        assert_eq!(grid.step((7, 23), Down), (7, 0));
        assert_eq!(grid.wrap((-33, 49)), (31, 1));
    }

    #[test]
    fn pixel_conversion() {
        let grid = board();
        assert_eq!(grid.to_cell((0, 0)), (0, 0));
        assert_eq!(grid.to_cell((39, 19)), (1, 0));
        assert_eq!(grid.to_cell((640, 480)), (0, 0));
        assert_eq!(grid.to_pixel((3, 4)), (60, 80));
    }

    #[test]
    fn opposites() {
        for dir in Direction::ALL {
            assert!(dir.is_opposite(dir.opposite()));
            assert!(!dir.is_opposite(dir));
            let (dx, dy) = dir.delta();
            let (ox, oy) = dir.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn random_cells_stay_on_board() {
        let grid = board();
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..2000 {
            let (x, y) = grid.random_cell(&mut rng);
            assert!((0..32).contains(&x) && (0..24).contains(&y));
        }
    }

    #[test]
    fn cells_covers_whole_board() {
        let grid = Grid::new(100, 60, 20);
        let all: Vec<Cell> = grid.cells().collect();
        assert_eq!(all.len(), 15);
        assert_eq!(all.first(), Some(&(0, 0)));
        assert_eq!(all.last(), Some(&(4, 2)));
    }
}
