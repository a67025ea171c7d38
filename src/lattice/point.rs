use super::direction::Direction;
use crate::Height;

/// A lattice coordinate. Signed so that neighbours above or left of
/// the boundary can be expressed and then rejected by `contains`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Point {
    x: isize,
    y: isize,
}

impl Point {
    pub fn x(&self) -> isize {
        self.x
    }
    pub fn y(&self) -> isize {
        self.y
    }
    pub fn contains(&self, height: Height) -> bool {
        let h = height as isize;
        self.x >= 0 && self.y >= 0 && self.x < h && self.y < h && self.x <= self.y
    }
    pub fn shift(&self, dx: isize, dy: isize) -> Self {
        Self::from((self.x + dx, self.y + dy))
    }
    pub fn step(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.offset();
        self.shift(dx, dy)
    }

    /// row-major, left to right. this order defines vertex ids.
    pub fn all(height: Height) -> impl Iterator<Item = Self> {
        (0..height as isize).flat_map(|y| (0..=y).map(move |x| Self::from((x, y))))
    }
}

impl From<(isize, isize)> for Point {
    fn from((x, y): (isize, isize)) -> Self {
        Self { x, y }
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounds() {
        assert!(Point::from((0, 0)).contains(4));
        assert!(Point::from((3, 3)).contains(4));
        assert!(!Point::from((1, 0)).contains(4));
        assert!(!Point::from((0, 4)).contains(4));
        assert!(!Point::from((-1, 2)).contains(4));
    }

    #[test]
    fn row_major() {
        let points = Point::all(3).collect::<Vec<_>>();
        assert_eq!(
            points,
            vec![
                Point::from((0, 0)),
                Point::from((0, 1)),
                Point::from((1, 1)),
                Point::from((0, 2)),
                Point::from((1, 2)),
                Point::from((2, 2)),
            ]
        );
    }

    #[test]
    fn steps() {
        let p = Point::from((1, 2));
        assert_eq!(p.step(Direction::Down), Point::from((1, 3)));
        assert_eq!(p.step(Direction::Diagonal), Point::from((2, 3)));
        assert_eq!(p.step(Direction::Right), Point::from((2, 2)));
    }
}
