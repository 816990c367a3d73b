use crate::prelude::*;

mod color;
pub use color::*;

mod facelet;
pub use facelet::*;

mod surface;
pub use surface::Cube;

pub trait CubeLike: Sized + core::fmt::Debug + Eq {
    fn solved() -> Self;
    fn apply(self, move_: Move) -> Self;

    fn apply_all(self, moves: impl IntoIterator<Item = Move>) -> Self {
        moves.into_iter().fold(self, |cube, m| cube.apply(m))
    }
}

/// The six faces, in the order their stickers are serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, enum_iterator::Sequence)]
pub enum Face {
    Front,
    Right,
    Back,
    Left,
    Up,
    Down,
}

impl Face {
    pub fn index(self) -> usize {
        match self {
            Face::Front => 0,
            Face::Right => 1,
            Face::Back => 2,
            Face::Left => 3,
            Face::Up => 4,
            Face::Down => 5,
        }
    }

    pub fn from_index(index: usize) -> Face {
        match index {
            0 => Face::Front,
            1 => Face::Right,
            2 => Face::Back,
            3 => Face::Left,
            4 => Face::Up,
            5 => Face::Down,
            _ => panic!("face index {} out of range 0..=5", index),
        }
    }

    pub fn same_axis(a: Face, b: Face) -> bool {
        use Face::*;
        matches!(
            (a, b),
            (Front | Back, Front | Back) | (Left | Right, Left | Right) | (Up | Down, Up | Down)
        )
    }

    pub fn letter(self) -> char {
        match self {
            Face::Front => 'F',
            Face::Right => 'R',
            Face::Back => 'B',
            Face::Left => 'L',
            Face::Up => 'U',
            Face::Down => 'D',
        }
    }
}

pub fn all_faces() -> impl Iterator<Item = Face> {
    enum_iterator::all()
}
