use crate::app::palette::Palette;
use crate::basic::BoardDim;

pub struct Prefs {
    /// Game steps per second
    pub ticks_per_second: u32,
    pub board_dim: BoardDim,
    pub palette: Palette,
}

impl Default for Prefs {
    fn default() -> Self {
        Self {
            ticks_per_second: 10,
            board_dim: BoardDim::DEFAULT,
            palette: Palette::default(),
        }
    }
}
