use crate::cube::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    pub face: Face,
    pub direction: Direction,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Clockwise,
    CounterClockwise,
}

impl Direction {
    pub fn reverse(self) -> Direction {
        match self {
            Direction::Clockwise => Direction::CounterClockwise,
            Direction::CounterClockwise => Direction::Clockwise,
        }
    }
}

impl Move {
    pub const ALL: [Move; 12] = {
        use Direction::*;
        use Face::*;
        [
            Move::new(Front, Clockwise),
            Move::new(Front, CounterClockwise),
            Move::new(Right, Clockwise),
            Move::new(Right, CounterClockwise),
            Move::new(Up, Clockwise),
            Move::new(Up, CounterClockwise),
            Move::new(Down, Clockwise),
            Move::new(Down, CounterClockwise),
            Move::new(Left, Clockwise),
            Move::new(Left, CounterClockwise),
            Move::new(Back, Clockwise),
            Move::new(Back, CounterClockwise),
        ]
    };

    pub const fn new(face: Face, direction: Direction) -> Move {
        Move { face, direction }
    }

    pub fn all() -> impl Iterator<Item = Move> {
        Move::ALL.into_iter()
    }

    pub fn parse_sequence(s: &str) -> anyhow::Result<Vec<Move>> {
        s.split_whitespace().map(|s| s.parse()).collect()
    }

    pub fn reverse(&self) -> Move {
        Move::new(self.face, self.direction.reverse())
    }

    /// Turns of the same axis touch disjoint stickers.
    pub fn commutes_with(&self, other: &Move) -> bool {
        Face::same_axis(self.face, other.face)
    }
}

impl core::str::FromStr for Move {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Move> {
        let mut chars = s.chars();
        let face_char = match chars.next() {
            Some(c) => c,
            None => return Err(anyhow::anyhow!("No face for move")),
        };

        let face = match face_char {
            'F' => Face::Front,
            'R' => Face::Right,
            'U' => Face::Up,
            'L' => Face::Left,
            'B' => Face::Back,
            'D' => Face::Down,
            _ => return Err(anyhow::anyhow!("Unrecognized face {}", face_char)),
        };

        let direction = match chars.next() {
            None => Direction::Clockwise,
            Some('\'') => Direction::CounterClockwise,
            Some(c) => return Err(anyhow::anyhow!("Unrecognized direction {}", c)),
        };

        if let Some(c) = chars.next() {
            anyhow::bail!("Trailing {:?} after move {}", c, Move::new(face, direction));
        }

        Ok(Move { face, direction })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self.direction {
            Direction::Clockwise => write!(f, "{}", self.face.letter()),
            Direction::CounterClockwise => write!(f, "{}'", self.face.letter()),
        }
    }
}
