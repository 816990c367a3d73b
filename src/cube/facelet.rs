use crate::prelude::*;

use std::collections::hash_map::{Entry, HashMap};

/// One sticker: a face and a row-major position `0..=8` on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Facelet {
    pub face: Face,
    pub position: usize,
}

impl Facelet {
    pub const fn new(face: Face, position: usize) -> Facelet {
        assert!(position < 9);
        Facelet { face, position }
    }

    pub fn all() -> impl Iterator<Item = Facelet> {
        all_faces().flat_map(|face| (0..9).map(move |p| Facelet::new(face, p)))
    }

    /// The 24 edge stickers, face by face.
    pub fn edges() -> impl Iterator<Item = Facelet> {
        all_faces().flat_map(|face| EDGE_POSITIONS.into_iter().map(move |p| Facelet::new(face, p)))
    }

    pub fn is_edge(&self) -> bool {
        EDGE_POSITIONS.contains(&self.position)
    }

    /// The other sticker on the same edge piece.
    pub fn adjacent_edge(&self) -> Option<Facelet> {
        EDGE_NEIGHBORS.get(self).copied()
    }
}

impl std::fmt::Display for Facelet {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}:{}", self.face.letter(), self.position)
    }
}

const EDGE_POSITIONS: [usize; 4] = [1, 3, 5, 7];

const fn at(face: Face, position: usize) -> Facelet {
    Facelet::new(face, position)
}

const EDGE_PAIRS: [(Facelet, Facelet); 12] = {
    use Face::*;
    [
        (at(Front, 1), at(Up, 7)),
        (at(Front, 3), at(Left, 5)),
        (at(Front, 5), at(Right, 3)),
        (at(Front, 7), at(Down, 1)),
        (at(Right, 1), at(Up, 5)),
        (at(Right, 5), at(Back, 3)),
        (at(Right, 7), at(Down, 5)),
        (at(Back, 1), at(Up, 1)),
        (at(Back, 5), at(Left, 3)),
        (at(Back, 7), at(Down, 7)),
        (at(Left, 1), at(Up, 3)),
        (at(Left, 7), at(Down, 3)),
    ]
};

lazy_static::lazy_static! {
    static ref EDGE_NEIGHBORS: HashMap<Facelet, Facelet> = populate_edge_neighbors();
}

fn populate_edge_neighbors() -> HashMap<Facelet, Facelet> {
    log::info!("Populating edge adjacency table");

    let mut table = HashMap::with_capacity(24);
    for (a, b) in EDGE_PAIRS {
        for (from, to) in [(a, b), (b, a)] {
            match table.entry(from) {
                Entry::Vacant(v) => {
                    v.insert(to);
                }
                Entry::Occupied(o) => panic!("{} is on two edges: {} and {}", from, o.get(), to),
            }
        }
    }
    assert_eq!(table.len(), 24);

    table
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_facelets_is_all() {
        assert_eq!(Facelet::all().count(), 9 * 6);
    }

    #[test]
    fn edges_in_face_order() {
        let edges = Facelet::edges().collect::<Vec<_>>();
        assert_eq!(edges.len(), 24);
        assert_eq!(edges[0], Facelet::new(Face::Front, 1));
        assert_eq!(edges[5], Facelet::new(Face::Right, 3));
        assert_eq!(edges[23], Facelet::new(Face::Down, 7));
        assert!(edges.iter().all(Facelet::is_edge));
    }

    #[test]
    fn every_edge_has_a_neighbor() {
        for edge in Facelet::edges() {
            let other = edge.adjacent_edge().unwrap();
            assert_ne!(other.face, edge.face);
            assert!(!Face::same_axis(other.face, edge.face));
            assert_eq!(other.adjacent_edge(), Some(edge));
        }
    }

    #[test]
    fn corners_and_centers_have_no_neighbor() {
        for p in [0, 2, 4, 6, 8] {
            assert_eq!(Facelet::new(Face::Front, p).adjacent_edge(), None);
        }
    }

    #[test]
    fn known_neighbors() {
        use Face::*;
        assert_eq!(Facelet::new(Front, 1).adjacent_edge(), Some(Facelet::new(Up, 7)));
        assert_eq!(Facelet::new(Left, 5).adjacent_edge(), Some(Facelet::new(Front, 3)));
        assert_eq!(Facelet::new(Down, 7).adjacent_edge(), Some(Facelet::new(Back, 7)));
        assert_eq!(Facelet::new(Back, 3).adjacent_edge(), Some(Facelet::new(Right, 5)));
    }

    #[test]
    #[should_panic]
    fn position_out_of_range() {
        Facelet::new(Face::Up, 9);
    }
}
