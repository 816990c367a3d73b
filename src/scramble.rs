use crate::prelude::*;

use rand::Rng;
use smallvec::SmallVec;

pub const DEFAULT_SCRAMBLE_LENGTH: usize = 20;

/// The moves a scramble applied, in order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scramble(SmallVec<[Move; 32]>);

impl Scramble {
    /// The moves that undo this scramble.
    pub fn inverse(&self) -> Scramble {
        self.0.iter().rev().map(|m| m.reverse()).collect()
    }
}

impl Cube {
    pub fn scramble<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Scramble {
        let scramble = (0..count)
            .map(|_| {
                let move_ = Move::ALL[rng.gen_range(0, Move::ALL.len())];
                self.rotate(move_);
                move_
            })
            .collect::<Scramble>();

        log::debug!("Scrambled with {}", scramble);
        scramble
    }
}

impl core::ops::Deref for Scramble {
    type Target = [Move];

    fn deref(&self) -> &[Move] {
        &self.0
    }
}

impl FromIterator<Move> for Scramble {
    fn from_iter<I: IntoIterator<Item = Move>>(iter: I) -> Scramble {
        Scramble(iter.into_iter().collect())
    }
}

impl IntoIterator for Scramble {
    type Item = Move;
    type IntoIter = smallvec::IntoIter<[Move; 32]>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'s> IntoIterator for &'s Scramble {
    type Item = Move;
    type IntoIter = core::iter::Copied<core::slice::Iter<'s, Move>>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter().copied()
    }
}

impl std::fmt::Display for Scramble {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let mut moves = self.0.iter();
        if let Some(first) = moves.next() {
            write!(f, "{}", first)?;
        }
        for m in moves {
            write!(f, " {}", m)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck_macros::quickcheck;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn empty_scramble_leaves_cube_solved() {
        let mut cube = Cube::solved();
        let scramble = cube.scramble(0, &mut StdRng::seed_from_u64(7));
        assert!(scramble.is_empty());
        assert!(cube.is_solved());
        assert_eq!(scramble.to_string(), "");
    }

    #[test]
    fn scramble_records_what_it_applied() {
        let mut cube = Cube::solved();
        let scramble = cube.scramble(DEFAULT_SCRAMBLE_LENGTH, &mut StdRng::seed_from_u64(1));
        assert_eq!(scramble.len(), DEFAULT_SCRAMBLE_LENGTH);
        assert_eq!(Cube::solved().apply_all(&scramble), cube);
    }

    #[test]
    fn display_is_space_separated() {
        let scramble = Move::parse_sequence("R U' F")
            .unwrap()
            .into_iter()
            .collect::<Scramble>();
        assert_eq!(scramble.to_string(), "R U' F");
        assert_eq!(scramble.inverse().to_string(), "F' U R'");
    }

    #[test]
    fn long_scramble_spills_to_heap() {
        let mut cube = Cube::solved();
        let scramble = cube.scramble(100, &mut StdRng::seed_from_u64(3));
        assert_eq!(scramble.len(), 100);
        assert!(cube.apply_all(scramble.inverse()).is_solved());
    }

    #[quickcheck]
    fn same_seed_same_scramble(seed: u64, count: u8) -> bool {
        let (mut a, mut b) = (Cube::solved(), Cube::solved());
        let first = a.scramble(count as usize, &mut StdRng::seed_from_u64(seed));
        let second = b.scramble(count as usize, &mut StdRng::seed_from_u64(seed));
        first == second && a == b
    }

    #[quickcheck]
    fn inverse_undoes_scramble(seed: u64, count: u8) -> bool {
        let mut cube = Cube::solved();
        let scramble = cube.scramble(count as usize, &mut StdRng::seed_from_u64(seed));
        cube.apply_all(scramble.inverse()).is_solved()
    }
}
