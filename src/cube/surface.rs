use crate::prelude::*;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Cube {
    front: Surface,
    right: Surface,
    back: Surface,
    left: Surface,
    up: Surface,
    down: Surface,
}

impl super::CubeLike for Cube {
    fn solved() -> Cube {
        Cube {
            front: Surface::from(Face::Front),
            right: Surface::from(Face::Right),
            back: Surface::from(Face::Back),
            left: Surface::from(Face::Left),
            up: Surface::from(Face::Up),
            down: Surface::from(Face::Down),
        }
    }

    fn apply(mut self, move_: Move) -> Self {
        self.rotate(move_);
        self
    }
}

impl Cube {
    pub fn rotate(&mut self, move_: impl Into<Move>) {
        let move_ = move_.into();
        log::debug!("Applying {}", move_);

        let surface = self.surface_mut(move_.face);
        match move_.direction {
            Direction::Clockwise => surface.rotate(),
            Direction::CounterClockwise => surface.rotate_reverse(),
        }

        let mut slices = self.slices(move_.face);

        match move_.direction {
            Direction::Clockwise => {
                let first = slices[0].owned();
                slices[0].set(slices[1].owned());
                slices[1].set(slices[2].owned());
                slices[2].set(slices[3].owned());
                slices[3].set(first);
            }
            Direction::CounterClockwise => {
                let last = slices[3].owned();
                slices[3].set(slices[2].owned());
                slices[2].set(slices[1].owned());
                slices[1].set(slices[0].owned());
                slices[0].set(last);
            }
        }
    }

    /// Parses `token` and applies it. Unknown tokens leave the cube untouched.
    pub fn execute(&mut self, token: &str) -> anyhow::Result<Move> {
        match token.parse::<Move>() {
            Ok(move_) => {
                self.rotate(move_);
                Ok(move_)
            }
            Err(e) => {
                log::warn!("Rejected move token {:?}: {}", token, e);
                Err(e)
            }
        }
    }

    pub fn get(&self, facelet: Facelet) -> Color {
        self.surface(facelet.face).0[facelet.position]
    }

    pub fn set(&mut self, facelet: Facelet, color: Color) {
        self.surface_mut(facelet.face).0[facelet.position] = color;
    }

    pub fn is_solved(&self) -> bool {
        all_faces().all(|face| self.surface(face).is_uniform())
    }

    pub fn population(&self, color: Color) -> usize {
        Facelet::all().filter(|&f| self.get(f) == color).count()
    }

    /// Every color appears exactly nine times.
    pub fn is_well_formed(&self) -> bool {
        all_colors().all(|color| self.population(color) == 9)
    }

    /// First edge sticker, in `Facelet::edges` order, whose piece shows
    /// exactly the two given colors.
    pub fn find_edge(&self, a: Color, b: Color) -> Option<Facelet> {
        Facelet::edges().find(|edge| {
            let other = match edge.adjacent_edge() {
                Some(other) => other,
                None => return false,
            };
            let (x, y) = (self.get(*edge), self.get(other));
            (x == a && y == b) || (x == b && y == a)
        })
    }

    pub fn to_facelet_string(&self) -> String {
        Facelet::all().map(|f| self.get(f).label()).collect()
    }

    pub fn from_facelets(s: &str) -> anyhow::Result<Cube> {
        let labels = s.chars().collect::<Vec<_>>();
        if labels.len() != 54 {
            anyhow::bail!("Expected 54 facelets, got {}", labels.len());
        }

        let mut cube = Cube::solved();
        for (facelet, label) in Facelet::all().zip(labels) {
            let color = Color::from_label(label)
                .ok_or_else(|| anyhow::anyhow!("Unrecognized color {:?} at {}", label, facelet))?;
            cube.set(facelet, color);
        }
        Ok(cube)
    }

    fn surface(&self, face: Face) -> &Surface {
        match face {
            Face::Front => &self.front,
            Face::Right => &self.right,
            Face::Back => &self.back,
            Face::Left => &self.left,
            Face::Up => &self.up,
            Face::Down => &self.down,
        }
    }

    fn surface_mut(&mut self, face: Face) -> &mut Surface {
        match face {
            Face::Front => &mut self.front,
            Face::Right => &mut self.right,
            Face::Back => &mut self.back,
            Face::Left => &mut self.left,
            Face::Up => &mut self.up,
            Face::Down => &mut self.down,
        }
    }

    // Clockwise, slice `i` receives the stickers of slice `i + 1`.
    fn slices(&mut self, face: Face) -> [SliceMut; 4] {
        match face {
            Face::Front => [
                self.up.slice_mut(6, 7, 8),
                self.left.slice_mut(8, 5, 2),
                self.down.slice_mut(2, 1, 0),
                self.right.slice_mut(0, 3, 6),
            ],
            Face::Right => [
                self.up.slice_mut(2, 5, 8),
                self.front.slice_mut(2, 5, 8),
                self.down.slice_mut(2, 5, 8),
                self.back.slice_mut(6, 3, 0),
            ],
            Face::Up => [
                self.front.slice_mut(0, 1, 2),
                self.right.slice_mut(0, 1, 2),
                self.back.slice_mut(0, 1, 2),
                self.left.slice_mut(0, 1, 2),
            ],
            Face::Down => [
                self.front.slice_mut(6, 7, 8),
                self.left.slice_mut(6, 7, 8),
                self.back.slice_mut(6, 7, 8),
                self.right.slice_mut(6, 7, 8),
            ],
            Face::Left => [
                self.up.slice_mut(0, 3, 6),
                self.back.slice_mut(8, 5, 2),
                self.down.slice_mut(0, 3, 6),
                self.front.slice_mut(0, 3, 6),
            ],
            Face::Back => [
                self.up.slice_mut(0, 1, 2),
                self.right.slice_mut(2, 5, 8),
                self.down.slice_mut(8, 7, 6),
                self.left.slice_mut(6, 3, 0),
            ],
        }
    }
}

impl core::str::FromStr for Cube {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> anyhow::Result<Cube> {
        Cube::from_facelets(s)
    }
}

impl std::fmt::Display for Cube {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        let rows = |surface: &Surface| [surface.row(0), surface.row(1), surface.row(2)];

        for row in rows(&self.up).iter() {
            writeln!(f, "    {}", row)?;
        }

        let middle_rows = [&self.left, &self.front, &self.right, &self.back]
            .into_iter()
            .map(rows)
            .collect::<Vec<_>>();

        for index in 0..3 {
            for row_list in &middle_rows {
                write!(f, "{} ", row_list[index])?;
            }
            writeln!(f)?;
        }

        for row in rows(&self.down).iter() {
            writeln!(f, "    {}", row)?;
        }

        Ok(())
    }
}

/// Destination `i` takes the sticker at `CLOCKWISE[i]`.
const CLOCKWISE: [usize; 9] = [6, 3, 0, 7, 4, 1, 8, 5, 2];
const COUNTER_CLOCKWISE: [usize; 9] = [2, 5, 8, 1, 4, 7, 0, 3, 6];

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
struct Surface([Color; 9]);

impl Surface {
    fn rotate(&mut self) {
        self.permute(&CLOCKWISE);
    }

    fn rotate_reverse(&mut self) {
        self.permute(&COUNTER_CLOCKWISE);
    }

    fn permute(&mut self, sources: &[usize; 9]) {
        let snapshot = self.0;
        for (dest, &source) in sources.iter().enumerate() {
            self.0[dest] = snapshot[source];
        }
    }

    fn is_uniform(&self) -> bool {
        self.0.iter().all(|&c| c == self.0[0])
    }

    fn row(&self, row: usize) -> Slice {
        Slice([self.0[row * 3], self.0[row * 3 + 1], self.0[row * 3 + 2]])
    }

    #[inline(always)]
    fn slice_mut(&mut self, first: u8, second: u8, third: u8) -> SliceMut {
        assert!((first as usize) < self.0.len());
        assert!((second as usize) < self.0.len());
        assert!((third as usize) < self.0.len());
        assert!(first != second);
        assert!(first != third);
        assert!(second != third);

        SliceMut {
            surface: self,
            indices: [first, second, third],
        }
    }
}

impl From<Face> for Surface {
    fn from(face: Face) -> Surface {
        Surface([Color::of(face); 9])
    }
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
struct Slice([Color; 3]);

impl std::fmt::Display for Slice {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}{}{}", self.0[0], self.0[1], self.0[2])
    }
}

struct SliceMut<'s> {
    surface: &'s mut Surface,
    indices: [u8; 3],
}

impl<'s> SliceMut<'s> {
    fn owned(&self) -> Slice {
        Slice(self.indices.map(|i| self.surface.0[i as usize]))
    }

    fn set(&mut self, owned: Slice) {
        for i in 0..3 {
            self.surface.0[self.indices[i] as usize] = owned.0[i];
        }
    }
}
