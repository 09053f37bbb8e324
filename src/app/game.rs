use rand::Rng;

use crate::app::stats::Stats;
use crate::apple::Apple;
use crate::basic::{BoardDim, Dir};
use crate::rendering::Frame;
use crate::snake::Snake;

/// Everything the game loop mutates, owned in one place
pub struct Game<R: Rng> {
    pub board_dim: BoardDim,
    pub snake: Snake,
    pub apple: Apple,
    pub stats: Stats,
    rng: R,
}

impl<R: Rng> Game<R> {
    pub fn new(board_dim: BoardDim, mut rng: R) -> Self {
        let snake = Snake::new(board_dim);
        // a fresh snake covers a single cell, there's always room
        let apple = Apple::new(snake.cells().iter(), board_dim, &mut rng)
            .unwrap_or(Apple { pos: board_dim.center().wrapping_translate(Dir::R, board_dim) });
        Self {
            board_dim,
            snake,
            apple,
            stats: Stats::default(),
            rng,
        }
    }

    /// Queue a turn for the next tick
    pub fn steer(&mut self, dir: Dir) {
        self.snake.set_pending_dir(dir);
    }

    /// Run one game step: apply the queued turn, eat, check
    /// for a crash, capture what should be drawn, then move
    pub fn tick(&mut self) -> Frame {
        self.snake.advance_dir();

        if self.snake.head() == self.apple.pos {
            self.snake.grow();
            // the eaten cell is still part of the snake so
            // the new apple can't land on it
            self.apple.place(self.snake.cells().iter(), self.board_dim, &mut self.rng);
            self.stats.apple_eaten(self.snake.length);
            log::debug!(
                "apple eaten, length {} -> new apple at {:?}",
                self.snake.length,
                self.apple.pos,
            );
        }

        let crashed = self.snake.hits_itself();
        if crashed {
            log::info!("snake crashed at {:?} ({})", self.snake.head(), self.stats.summary());
            self.snake.reset(&mut self.rng);
            self.stats.snake_reset();
        }

        let frame = Frame::capture(&self.snake, &self.apple, crashed);
        self.snake.advance();
        frame
    }

    /// The current state, as it would be drawn before the next tick
    pub fn frame(&self) -> Frame {
        Frame::capture(&self.snake, &self.apple, false)
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use rand::{rngs::StdRng, SeedableRng};

    use super::*;
    use crate::apple::Apple;
    use crate::basic::Cell;

    fn game(seed: u64) -> Game<StdRng> {
        Game::new(BoardDim::DEFAULT, StdRng::seed_from_u64(seed))
    }

    fn cell(x: i32, y: i32) -> Cell {
        Cell { x, y }
    }

    #[test]
    fn test_initial_state() {
        let game = game(0);
        assert_eq!(game.snake.body, [cell(320, 240)]);
        assert_eq!(game.snake.dir, Dir::R);
        assert_ne!(game.apple.pos, cell(320, 240));
        assert!(game.board_dim.contains(game.apple.pos));
    }

    #[test]
    fn test_tick_draws_before_moving() {
        let mut game = game(1);
        game.apple = Apple { pos: cell(0, 0) };

        let frame = game.tick();
        assert_eq!(frame.snake, [cell(320, 240)]);
        assert_eq!(frame.vacated, None);
        assert!(!frame.cleared);
        assert_eq!(game.snake.body, [cell(340, 240)]);

        let frame = game.tick();
        assert_eq!(frame.snake, [cell(340, 240)]);
        assert_eq!(frame.vacated, Some(cell(320, 240)));
        assert_eq!(game.snake.body, [cell(360, 240)]);
    }

    #[test]
    fn test_turn_applies_on_next_tick() {
        let mut game = game(2);
        game.apple = Apple { pos: cell(0, 0) };

        game.steer(Dir::U);
        assert_eq!(game.snake.dir, Dir::R);
        game.tick();
        assert_eq!(game.snake.body, [cell(320, 220)]);
    }

    #[test]
    fn test_reverse_is_ignored() {
        let mut game = game(3);
        game.apple = Apple { pos: cell(0, 0) };

        game.steer(Dir::L);
        game.tick();
        assert_eq!(game.snake.dir, Dir::R);
        assert_eq!(game.snake.body, [cell(340, 240)]);
    }

    #[test]
    fn test_eating_grows_by_one() {
        let mut game = game(4);
        game.apple = Apple { pos: cell(320, 240) };

        let frame = game.tick();
        assert_eq!(game.snake.length, 2);
        assert_eq!(game.stats.apples_eaten, 1);
        assert!(!frame.snake.contains(&game.apple.pos));
        assert_ne!(game.apple.pos, cell(320, 240));

        // the tail stays put while the body catches up
        assert_eq!(game.snake.body, [cell(340, 240), cell(320, 240)]);
        assert_eq!(game.snake.last_removed, None);
    }

    #[test]
    fn test_self_collision_resets() {
        let mut game = game(5);
        game.apple = Apple { pos: cell(0, 0) };
        game.snake.body = VecDeque::from([
            cell(100, 100),
            cell(120, 100),
            cell(120, 120),
            cell(100, 120),
            cell(100, 100),
        ]);
        game.snake.length = 5;
        game.snake.dir = Dir::U;

        let frame = game.tick();
        assert!(frame.cleared);
        assert_eq!(frame.snake, [cell(320, 240)]);
        assert_eq!(game.snake.length, 1);
        assert_eq!(game.snake.body.len(), 1);
        assert_eq!(game.stats.resets, 1);
    }

    #[test]
    fn test_cells_stay_on_grid() {
        let mut game = game(6);
        let dirs = [Dir::U, Dir::L, Dir::D, Dir::R];
        for i in 0..2000 {
            if i % 7 == 0 {
                game.steer(dirs[(i / 7) % dirs.len()]);
            }
            let frame = game.tick();
            for cell in frame.snake.iter().chain([&frame.apple]) {
                assert!(game.board_dim.contains(*cell), "{:?} off the grid at tick {}", cell, i);
            }
            assert_eq!(game.snake.body.len(), game.snake.length);
        }
    }

    #[test]
    fn test_apple_never_on_snake() {
        let mut game = game(7);
        for i in 0..500 {
            // steer into the apple's row, then column
            let (head, apple) = (game.snake.head(), game.apple.pos);
            if head.y != apple.y {
                game.steer(if head.y < apple.y { Dir::D } else { Dir::U });
            } else if head.x != apple.x {
                game.steer(if head.x < apple.x { Dir::R } else { Dir::L });
            }

            let (eaten, resets) = (game.stats.total_apples_eaten, game.stats.resets);
            game.tick();
            // a reset in the same tick replaces the body the apple avoided
            if game.stats.total_apples_eaten > eaten && game.stats.resets == resets {
                // the apple was placed before the move
                let mut before_move: Vec<_> = game.snake.cells().iter().skip(1).copied().collect();
                if let Some(tail) = game.snake.last_removed {
                    before_move.push(tail);
                }
                assert!(!before_move.contains(&game.apple.pos), "tick {}", i);
            }
        }
        assert!(game.stats.total_apples_eaten > 0);
    }
}
