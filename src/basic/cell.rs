use std::fmt::{Debug, Error, Formatter};

use num_integer::Integer;

use crate::basic::{BoardDim, Dir};

/// Top-left pixel coordinate of a grid cell
// INVARIANT: both coordinates are multiples of the cell size and
// lie inside the board
#[derive(Eq, PartialEq, Copy, Clone, Add, Mul, Hash)]
pub struct Cell {
    pub x: i32,
    pub y: i32,
}

impl Cell {
    /// Move one cell in `dir`, wrapping around the edges of the board
    #[must_use]
    pub fn wrapping_translate(self, dir: Dir, board_dim: BoardDim) -> Self {
        let moved = self + dir.delta() * board_dim.cell;
        Self {
            x: moved.x.mod_floor(&board_dim.width),
            y: moved.y.mod_floor(&board_dim.height),
        }
    }

    pub fn from_grid(column: i32, row: i32, board_dim: BoardDim) -> Self {
        Self {
            x: column * board_dim.cell,
            y: row * board_dim.cell,
        }
    }
}

impl Debug for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result<(), Error> {
        write!(f, "<{}, {}>", self.x, self.y)
    }
}

#[test]
fn test_wrap_horizontal() {
    let board_dim = BoardDim::DEFAULT;
    let left_edge = Cell { x: 0, y: 100 };
    assert_eq!(left_edge.wrapping_translate(Dir::L, board_dim), Cell { x: 620, y: 100 });
    let right_edge = Cell { x: 620, y: 100 };
    assert_eq!(right_edge.wrapping_translate(Dir::R, board_dim), Cell { x: 0, y: 100 });
}

#[test]
fn test_wrap_vertical() {
    let board_dim = BoardDim::DEFAULT;
    let top_edge = Cell { x: 40, y: 0 };
    assert_eq!(top_edge.wrapping_translate(Dir::U, board_dim), Cell { x: 40, y: 460 });
    let bottom_edge = Cell { x: 40, y: 460 };
    assert_eq!(bottom_edge.wrapping_translate(Dir::D, board_dim), Cell { x: 40, y: 0 });
}

#[test]
fn test_translate_inside_board() {
    let board_dim = BoardDim::DEFAULT;
    let center = board_dim.center();
    for (dir, expect) in [
        (Dir::U, Cell { x: 320, y: 220 }),
        (Dir::R, Cell { x: 340, y: 240 }),
        (Dir::D, Cell { x: 320, y: 260 }),
        (Dir::L, Cell { x: 300, y: 240 }),
    ] {
        assert_eq!(center.wrapping_translate(dir, board_dim), expect, "{:?}", dir);
    }
}

#[test]
fn test_grid_conversion() {
    let board_dim = BoardDim::DEFAULT;
    assert_eq!(Cell::from_grid(31, 23, board_dim), Cell { x: 620, y: 460 });
    assert_eq!(Cell::from_grid(0, 1, board_dim), Cell { x: 0, y: 20 });
}
