use rand::Rng;

use crate::basic::{random_free_cell, BoardDim, Cell};

pub struct Apple {
    pub pos: Cell,
}

impl Apple {
    /// An apple on a random cell that isn't in `occupied_cells`,
    /// None if there is no such cell
    pub fn new<'a>(
        occupied_cells: impl Iterator<Item = &'a Cell> + Clone,
        board_dim: BoardDim,
        rng: &mut impl Rng,
    ) -> Option<Self> {
        random_free_cell(occupied_cells, board_dim, rng).map(|pos| Self { pos })
    }

    /// Move the apple to a random free cell, if the board is full
    /// the apple stays where it is and false is returned
    pub fn place<'a>(
        &mut self,
        occupied_cells: impl Iterator<Item = &'a Cell> + Clone,
        board_dim: BoardDim,
        rng: &mut impl Rng,
    ) -> bool {
        match random_free_cell(occupied_cells, board_dim, rng) {
            Some(pos) => {
                self.pos = pos;
                true
            }
            None => {
                log::warn!("no free cell left for the apple, keeping it at {:?}", self.pos);
                false
            }
        }
    }
}

#[test]
fn test_place_avoids_snake() {
    use crate::snake::Snake;
    use rand::{rngs::StdRng, SeedableRng};

    let board_dim = BoardDim { width: 80, height: 80, cell: 20 };
    let mut rng = StdRng::seed_from_u64(11);
    let mut snake = Snake::new(board_dim);
    snake.length = 6;
    for _ in 0..5 {
        snake.advance();
    }
    assert_eq!(snake.body.len(), 6);

    let mut apple = Apple::new(snake.cells().iter(), board_dim, &mut rng).expect("board has free cells");
    for _ in 0..50 {
        assert!(apple.place(snake.cells().iter(), board_dim, &mut rng));
        assert!(board_dim.contains(apple.pos));
        assert!(!snake.cells().contains(&apple.pos), "apple placed on the snake at {:?}", apple.pos);
    }
}

#[test]
fn test_place_on_full_board_keeps_position() {
    use rand::{rngs::StdRng, SeedableRng};

    let board_dim = BoardDim { width: 40, height: 20, cell: 20 };
    let mut rng = StdRng::seed_from_u64(12);
    let mut apple = Apple { pos: Cell { x: 20, y: 0 } };
    let occupied = [Cell { x: 0, y: 0 }, Cell { x: 20, y: 0 }];
    assert!(!apple.place(occupied.iter(), board_dim, &mut rng));
    assert_eq!(apple.pos, Cell { x: 20, y: 0 });
}
