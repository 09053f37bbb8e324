use std::ops::Neg;

use rand::Rng;
use Dir::*;

use crate::basic::Cell;

// defined in clockwise order starting at U
#[repr(u8)]
#[derive(Copy, Clone, Eq, PartialEq, Debug, Hash)]
pub enum Dir {
    U = 0,
    R = 1,
    D = 2,
    L = 3,
}

impl From<u8> for Dir {
    fn from(num: u8) -> Self {
        match num % 4 {
            0 => U,
            1 => R,
            2 => D,
            _ => L,
        }
    }
}

impl Neg for Dir {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from(self as u8 + 2)
    }
}

impl Dir {
    /// Unit vector in screen coordinates (y grows downwards)
    pub fn delta(self) -> Cell {
        let (x, y) = match self {
            U => (0, -1),
            R => (1, 0),
            D => (0, 1),
            L => (-1, 0),
        };
        Cell { x, y }
    }

    pub fn random(rng: &mut impl Rng) -> Self {
        Self::from(rng.gen_range(0..4u8))
    }
}

#[test]
fn test_dir_neg() {
    for (dir, opposite) in [(U, D), (R, L), (D, U), (L, R)] {
        assert_eq!(-dir, opposite, "-{:?}", dir);
    }
}

#[test]
fn test_dir_delta_cancels_with_opposite() {
    for dir in [U, R, D, L] {
        assert_eq!(dir.delta() + (-dir).delta(), Cell { x: 0, y: 0 });
    }
}

#[test]
fn test_random_covers_all_dirs() {
    use rand::{rngs::StdRng, SeedableRng};

    let mut rng = StdRng::seed_from_u64(7);
    let mut seen = [false; 4];
    for _ in 0..200 {
        seen[Dir::random(&mut rng) as usize] = true;
    }
    assert_eq!(seen, [true; 4]);
}
