pub use board::{random_free_cell, BoardDim};
pub use cell::Cell;
pub use dir::Dir;

pub mod board;
mod cell;
mod dir;
