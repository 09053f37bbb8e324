use itertools::Itertools;
use rand::Rng;
use static_assertions::const_assert_eq;

use crate::basic::Cell;

pub const SCREEN_WIDTH: i32 = 640;
pub const SCREEN_HEIGHT: i32 = 480;
pub const CELL_SIZE: i32 = 20;

// the grid must tile the screen exactly, otherwise wrapping
// would produce cells that are not grid-aligned
const_assert_eq!(SCREEN_WIDTH % CELL_SIZE, 0);
const_assert_eq!(SCREEN_HEIGHT % CELL_SIZE, 0);

/// Pixel dimensions of the (toroidal) board and of its cells
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub struct BoardDim {
    pub width: i32,
    pub height: i32,
    pub cell: i32,
}

impl Default for BoardDim {
    fn default() -> Self {
        Self::DEFAULT
    }
}

impl BoardDim {
    pub const DEFAULT: Self = Self {
        width: SCREEN_WIDTH,
        height: SCREEN_HEIGHT,
        cell: CELL_SIZE,
    };

    /// Number of columns
    pub fn grid_width(self) -> i32 {
        self.width / self.cell
    }

    /// Number of rows
    pub fn grid_height(self) -> i32 {
        self.height / self.cell
    }

    pub fn cell_count(self) -> usize {
        (self.grid_width() * self.grid_height()) as usize
    }

    pub fn center(self) -> Cell {
        Cell {
            x: self.width / 2,
            y: self.height / 2,
        }
    }

    /// Inside the board and grid-aligned
    pub fn contains(self, cell: Cell) -> bool {
        (0..self.width).contains(&cell.x)
            && (0..self.height).contains(&cell.y)
            && cell.x % self.cell == 0
            && cell.y % self.cell == 0
    }
}

/// Sample random cells until one is found that isn't occupied,
/// None if the occupied cells cover the entire board
pub fn random_free_cell<'a>(
    occupied_cells: impl Iterator<Item = &'a Cell> + Clone,
    board_dim: BoardDim,
    rng: &mut impl Rng,
) -> Option<Cell> {
    // a self-intersecting snake can list the same cell twice
    let distinct_occupied = occupied_cells
        .clone()
        .filter(|cell| board_dim.contains(**cell))
        .unique()
        .count();
    if distinct_occupied >= board_dim.cell_count() {
        return None;
    }

    loop {
        let candidate = Cell::from_grid(
            rng.gen_range(0..board_dim.grid_width()),
            rng.gen_range(0..board_dim.grid_height()),
            board_dim,
        );
        if !occupied_cells.clone().any(|&cell| cell == candidate) {
            return Some(candidate);
        }
    }
}

#[test]
fn test_default_board() {
    let board_dim = BoardDim::DEFAULT;
    assert_eq!(board_dim.grid_width(), 32);
    assert_eq!(board_dim.grid_height(), 24);
    assert_eq!(board_dim.center(), Cell { x: 320, y: 240 });
    assert!(board_dim.contains(board_dim.center()));
    assert!(!board_dim.contains(Cell { x: 640, y: 0 }));
    assert!(!board_dim.contains(Cell { x: 10, y: 0 }));
}

#[test]
fn test_random_free_cell_avoids_occupied() {
    use rand::{rngs::StdRng, SeedableRng};

    let board_dim = BoardDim { width: 60, height: 40, cell: 20 };
    let occupied = [
        Cell { x: 0, y: 0 },
        Cell { x: 20, y: 0 },
        Cell { x: 40, y: 0 },
        Cell { x: 0, y: 20 },
    ];
    let mut rng = StdRng::seed_from_u64(1);
    for _ in 0..100 {
        let cell = random_free_cell(occupied.iter(), board_dim, &mut rng).expect("board has free cells");
        assert!(board_dim.contains(cell));
        assert!(!occupied.contains(&cell), "{:?} is occupied", cell);
    }
}

#[test]
fn test_random_free_cell_single_free_spot() {
    use rand::{rngs::StdRng, SeedableRng};

    let board_dim = BoardDim { width: 40, height: 40, cell: 20 };
    let occupied = [Cell { x: 0, y: 0 }, Cell { x: 20, y: 0 }, Cell { x: 0, y: 20 }];
    let mut rng = StdRng::seed_from_u64(2);
    assert_eq!(random_free_cell(occupied.iter(), board_dim, &mut rng), Some(Cell { x: 20, y: 20 }));
}

#[test]
fn test_random_free_cell_full_board() {
    use rand::{rngs::StdRng, SeedableRng};

    let board_dim = BoardDim { width: 40, height: 20, cell: 20 };
    // duplicates don't count as extra coverage
    let occupied = [Cell { x: 0, y: 0 }, Cell { x: 20, y: 0 }, Cell { x: 0, y: 0 }];
    let mut rng = StdRng::seed_from_u64(3);
    assert_eq!(random_free_cell(occupied.iter(), board_dim, &mut rng), None);
}
