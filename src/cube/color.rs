use crate::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, enum_iterator::Sequence)]
pub enum Color {
    Green,
    Red,
    Blue,
    Orange,
    White,
    Yellow,
}

impl Color {
    /// The color every sticker of `face` has on a solved cube.
    pub fn of(face: Face) -> Color {
        match face {
            Face::Front => Color::Green,
            Face::Right => Color::Red,
            Face::Back => Color::Blue,
            Face::Left => Color::Orange,
            Face::Up => Color::White,
            Face::Down => Color::Yellow,
        }
    }

    pub fn label(self) -> char {
        match self {
            Color::Green => 'g',
            Color::Red => 'r',
            Color::Blue => 'b',
            Color::Orange => 'o',
            Color::White => 'w',
            Color::Yellow => 'y',
        }
    }

    pub fn from_label(label: char) -> Option<Color> {
        let color = match label {
            'g' => Color::Green,
            'r' => Color::Red,
            'b' => Color::Blue,
            'o' => Color::Orange,
            'w' => Color::White,
            'y' => Color::Yellow,
            _ => return None,
        };
        Some(color)
    }
}

impl From<Face> for Color {
    fn from(face: Face) -> Color {
        Color::of(face)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

pub fn all_colors() -> impl Iterator<Item = Color> {
    enum_iterator::all()
}

const PLACEHOLDER: &str = "#cccccc";

/// Fill color the renderer uses for a serialized label.
pub fn display_color(label: char) -> &'static str {
    match Color::from_label(label) {
        Some(Color::White) => "#ffffff",
        Some(Color::Yellow) => "#ffff00",
        Some(Color::Red) => "#ff0000",
        Some(Color::Orange) => "#ff8000",
        Some(Color::Green) => "#00ff00",
        Some(Color::Blue) => "#0000ff",
        None => PLACEHOLDER,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip() {
        for color in all_colors() {
            assert_eq!(Color::from_label(color.label()), Some(color));
        }
        assert_eq!(Color::from_label('x'), None);
        assert_eq!(Color::from_label('G'), None);
    }

    #[test]
    fn each_face_has_its_own_color() {
        let seen = all_faces()
            .map(Color::of)
            .collect::<std::collections::HashSet<_>>();
        assert_eq!(seen.len(), 6);
        assert_eq!(Color::from(Face::Up), Color::White);
    }

    #[test]
    fn unknown_labels_are_placeholder() {
        assert_eq!(display_color('w'), "#ffffff");
        assert_eq!(display_color('o'), "#ff8000");
        assert_eq!(display_color('?'), "#cccccc");
    }
}
