use ggez::input::keyboard::KeyCode::{self, *};

use crate::basic::Dir;

#[derive(Copy, Clone)]
pub struct Controls {
    pub u: KeyCode,
    pub d: KeyCode,
    pub l: KeyCode,
    pub r: KeyCode,
}

impl Default for Controls {
    fn default() -> Self {
        Self::ARROWS
    }
}

impl Controls {
    pub const ARROWS: Self = Self { u: Up, d: Down, l: Left, r: Right };

    /// None for keys that don't steer the snake
    pub fn dir_for(&self, key: KeyCode) -> Option<Dir> {
        match key {
            k if k == self.u => Some(Dir::U),
            k if k == self.d => Some(Dir::D),
            k if k == self.l => Some(Dir::L),
            k if k == self.r => Some(Dir::R),
            _ => None,
        }
    }
}

#[test]
fn test_arrow_keys() {
    let controls = Controls::default();
    for (key, dir) in [(Up, Dir::U), (Down, Dir::D), (Left, Dir::L), (Right, Dir::R)] {
        assert_eq!(controls.dir_for(key), Some(dir), "{:?}", key);
    }
}

#[test]
fn test_other_keys_ignored() {
    let controls = Controls::default();
    for key in [Space, Escape, W, A, S, D, Return] {
        assert_eq!(controls.dir_for(key), None, "{:?}", key);
    }
}
