use super::edge::Edge;
use crate::game::State;

/// A unit triangle, kept only as the mask of its three bounding edges.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord)]
pub struct Triangle(State);

impl Triangle {
    pub fn mask(&self) -> State {
        self.0
    }
    /// every bounding edge has been claimed
    pub fn complete(&self, state: State) -> bool {
        state.covers(self.0)
    }
    pub fn borders(&self, edge: Edge) -> bool {
        self.0.has(edge)
    }
}

/// we OR the edge bits together
impl FromIterator<Edge> for Triangle {
    fn from_iter<I: IntoIterator<Item = Edge>>(edges: I) -> Self {
        Self(
            edges
                .into_iter()
                .map(|e| e.mask())
                .fold(State::empty(), |a, b| a | b),
        )
    }
}

impl From<Triangle> for State {
    fn from(t: Triangle) -> Self {
        t.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completion() {
        let triangle = [0u8, 1, 4].into_iter().map(Edge::from).collect::<Triangle>();
        assert_eq!(u32::from(triangle.mask()), 0b10011);
        assert!(!triangle.complete(State::from(0b00011u32)));
        assert!(triangle.complete(State::from(0b10011u32)));
        assert!(triangle.complete(State::from(0b11111u32)));
        assert!(triangle.borders(Edge::from(4)));
        assert!(!triangle.borders(Edge::from(2)));
    }
}
