/// The three forward directions along which edges leave a vertex.
/// Their order fixes the edge numbering.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub enum Direction {
    Down,
    Diagonal,
    Right,
}

impl Direction {
    pub const fn all() -> &'static [Self] {
        &[Self::Down, Self::Diagonal, Self::Right]
    }
    /// (dx, dy) displacement
    pub const fn offset(&self) -> (isize, isize) {
        match self {
            Self::Down => (0, 1),
            Self::Diagonal => (1, 1),
            Self::Right => (1, 0),
        }
    }
}
