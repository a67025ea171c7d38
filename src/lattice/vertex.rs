use super::point::Point;
use serde::Serialize;

/// 1-based vertex id, assigned row-major over the lattice.
/// Batch input refers to vertices by these ids.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Vertex(usize);

/// row y starts after the y(y+1)/2 vertices of the rows above it
impl From<Point> for Vertex {
    fn from(p: Point) -> Self {
        let x = p.x() as usize;
        let y = p.y() as usize;
        Self(y * (y + 1) / 2 + x + 1)
    }
}

impl From<usize> for Vertex {
    fn from(n: usize) -> Self {
        Self(n)
    }
}
impl From<Vertex> for usize {
    fn from(v: Vertex) -> Self {
        v.0
    }
}

impl std::fmt::Display for Vertex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
