use crate::apple::Apple;
use crate::basic::Cell;
use crate::snake::Snake;

/// What the board looked like at one tick, captured
/// between the game logic and the snake's move
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Frame {
    pub apple: Cell,
    /// Head first
    pub snake: Vec<Cell>,
    /// Tail cell left behind by the previous move
    pub vacated: Option<Cell>,
    /// The snake was reset, stale segments must be wiped
    pub cleared: bool,
}

/// A single drawing step, in order
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DrawOp {
    /// Fill the whole board with the background color
    Clear,
    /// Paint a cell with the background color
    Erase(Cell),
    Apple(Cell),
    Snake(Cell),
}

impl Frame {
    pub fn capture(snake: &Snake, apple: &Apple, cleared: bool) -> Self {
        Self {
            apple: apple.pos,
            snake: snake.cells().iter().copied().collect(),
            vacated: snake.last_removed,
            cleared,
        }
    }

    pub fn head(&self) -> Cell {
        self.snake[0]
    }

    /// Apple first, then the body, then the head on top
    pub fn draw_ops(&self) -> Vec<DrawOp> {
        let mut ops = Vec::with_capacity(self.snake.len() + 2);

        if self.cleared {
            ops.push(DrawOp::Clear);
        } else if let Some(cell) = self.vacated {
            // erasing after the snake would hide a head that
            // moved onto the cell its own tail just left
            ops.push(DrawOp::Erase(cell));
        }

        ops.push(DrawOp::Apple(self.apple));
        ops.extend(self.snake.iter().skip(1).map(|&cell| DrawOp::Snake(cell)));
        ops.push(DrawOp::Snake(self.head()));
        ops
    }
}

#[cfg(test)]
fn cell(x: i32, y: i32) -> Cell {
    Cell { x, y }
}

#[test]
fn test_draw_order() {
    let frame = Frame {
        apple: cell(0, 0),
        snake: vec![cell(100, 100), cell(80, 100), cell(60, 100)],
        vacated: Some(cell(40, 100)),
        cleared: false,
    };
    assert_eq!(
        frame.draw_ops(),
        [
            DrawOp::Erase(cell(40, 100)),
            DrawOp::Apple(cell(0, 0)),
            DrawOp::Snake(cell(80, 100)),
            DrawOp::Snake(cell(60, 100)),
            DrawOp::Snake(cell(100, 100)),
        ]
    );
}

#[test]
fn test_cleared_frame_skips_erase() {
    let frame = Frame {
        apple: cell(0, 0),
        snake: vec![cell(320, 240)],
        vacated: Some(cell(40, 100)),
        cleared: true,
    };
    assert_eq!(
        frame.draw_ops(),
        [DrawOp::Clear, DrawOp::Apple(cell(0, 0)), DrawOp::Snake(cell(320, 240))]
    );
}
