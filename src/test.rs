use crate::prelude::*;

use rand::seq::SliceRandom;

pub fn cube_with_moves(moves: &str) -> Cube {
    Cube::solved().apply_all(Move::parse_sequence(moves).unwrap())
}

impl quickcheck::Arbitrary for Move {
    fn arbitrary<G: quickcheck::Gen>(g: &mut G) -> Move {
        *Move::ALL.choose(g).unwrap()
    }

    fn shrink(&self) -> Box<dyn Iterator<Item = Move>> {
        match self.direction {
            Direction::Clockwise => quickcheck::empty_shrinker(),
            Direction::CounterClockwise => quickcheck::single_shrinker(self.reverse()),
        }
    }
}
