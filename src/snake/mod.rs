use std::collections::VecDeque;

use rand::Rng;

use crate::basic::{BoardDim, Cell, Dir};

pub struct Snake {
    /// Head first
    pub body: VecDeque<Cell>,
    /// Number of cells the body should have after the next move,
    /// grows by 1 for each apple eaten
    pub length: usize,
    pub dir: Dir,
    /// Set by key presses, applied at the start of the next tick
    pub pending_dir: Option<Dir>,
    /// Tail cell dropped by the last move, the renderer erases it
    pub last_removed: Option<Cell>,

    board_dim: BoardDim,
}

impl Snake {
    /// A snake of length 1 in the center of the board, going right
    pub fn new(board_dim: BoardDim) -> Self {
        Self {
            body: VecDeque::from([board_dim.center()]),
            length: 1,
            dir: Dir::R,
            pending_dir: None,
            last_removed: None,
            board_dim,
        }
    }

    pub fn head(&self) -> Cell {
        self.body[0]
    }

    pub fn cells(&self) -> &VecDeque<Cell> {
        &self.body
    }

    /// Queue a turn, 180° turns are silently dropped
    pub fn set_pending_dir(&mut self, dir: Dir) {
        if dir != -self.dir {
            self.pending_dir = Some(dir);
        }
    }

    pub fn advance_dir(&mut self) {
        if let Some(dir) = self.pending_dir.take() {
            self.dir = dir;
        }
    }

    pub fn grow(&mut self) {
        self.length += 1;
    }

    /// Whether the head overlaps any other segment
    pub fn hits_itself(&self) -> bool {
        let head = self.head();
        self.body.iter().skip(1).any(|&cell| cell == head)
    }

    /// Move one cell forward, the tail only follows if the
    /// body is already as long as it should be
    pub fn advance(&mut self) {
        let new_head = self.head().wrapping_translate(self.dir, self.board_dim);
        self.body.push_front(new_head);

        self.last_removed = if self.body.len() > self.length {
            self.body.pop_back()
        } else {
            None
        };
    }

    /// Back to length 1 in the center, going in a random direction
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.body.clear();
        self.body.push_back(self.board_dim.center());
        self.length = 1;
        self.dir = Dir::random(rng);
        self.pending_dir = None;
        self.last_removed = None;
    }
}

#[cfg(test)]
fn snake_with_body(cells: &[(i32, i32)], dir: Dir) -> Snake {
    let mut snake = Snake::new(BoardDim::DEFAULT);
    snake.body = cells.iter().map(|&(x, y)| Cell { x, y }).collect();
    snake.length = cells.len();
    snake.dir = dir;
    snake
}

#[test]
fn test_first_move_from_center() {
    let mut snake = Snake::new(BoardDim::DEFAULT);
    snake.advance();
    assert_eq!(snake.body, [Cell { x: 340, y: 240 }]);
    assert_eq!(snake.length, 1);
    assert_eq!(snake.last_removed, Some(Cell { x: 320, y: 240 }));
}

#[test]
fn test_move_wraps_around() {
    let mut snake = snake_with_body(&[(0, 100)], Dir::L);
    snake.advance();
    assert_eq!(snake.head(), Cell { x: 620, y: 100 });

    let mut snake = snake_with_body(&[(620, 100)], Dir::R);
    snake.advance();
    assert_eq!(snake.head(), Cell { x: 0, y: 100 });
}

#[test]
fn test_opposite_dir_rejected() {
    let mut snake = Snake::new(BoardDim::DEFAULT);
    assert_eq!(snake.dir, Dir::R);
    snake.set_pending_dir(Dir::L);
    assert_eq!(snake.pending_dir, None);
    snake.advance_dir();
    assert_eq!(snake.dir, Dir::R);
}

#[test]
fn test_pending_dir_applied_once() {
    let mut snake = Snake::new(BoardDim::DEFAULT);
    snake.set_pending_dir(Dir::U);
    // nothing changes until the tick starts
    assert_eq!(snake.dir, Dir::R);
    snake.advance_dir();
    assert_eq!(snake.dir, Dir::U);
    assert_eq!(snake.pending_dir, None);
}

#[test]
fn test_advance_dir_without_pending_is_noop() {
    let mut snake = Snake::new(BoardDim::DEFAULT);
    snake.dir = Dir::D;
    for _ in 0..5 {
        snake.advance_dir();
        assert_eq!(snake.dir, Dir::D);
    }
}

#[test]
fn test_growth_keeps_tail() {
    let mut snake = Snake::new(BoardDim::DEFAULT);
    snake.grow();
    snake.advance();
    assert_eq!(snake.body, [Cell { x: 340, y: 240 }, Cell { x: 320, y: 240 }]);
    assert_eq!(snake.last_removed, None);

    snake.advance();
    assert_eq!(snake.body.len(), 2);
    assert_eq!(snake.last_removed, Some(Cell { x: 320, y: 240 }));
}

#[test]
fn test_hits_itself() {
    let snake = snake_with_body(&[(100, 100), (120, 100), (120, 120), (100, 120), (100, 100)], Dir::U);
    assert!(snake.hits_itself());

    let snake = snake_with_body(&[(100, 100), (120, 100), (120, 120)], Dir::L);
    assert!(!snake.hits_itself());
}

#[test]
fn test_reset() {
    use rand::{rngs::StdRng, SeedableRng};

    let mut snake = snake_with_body(&[(100, 100), (120, 100), (120, 120), (100, 120), (100, 100)], Dir::U);
    snake.pending_dir = Some(Dir::L);
    snake.last_removed = Some(Cell { x: 80, y: 100 });

    snake.reset(&mut StdRng::seed_from_u64(0));
    assert_eq!(snake.length, 1);
    assert_eq!(snake.body, [Cell { x: 320, y: 240 }]);
    assert_eq!(snake.pending_dir, None);
    assert_eq!(snake.last_removed, None);
}
