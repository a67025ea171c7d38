use crate::Arbitrary;
use crate::game::State;
use crate::lattice::Board;
use crate::lattice::Edge;

/// Forced moves both sides are known to have played, in order.
/// No edge appears twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Opening {
    moves: Vec<Edge>,
    played: State,
}

impl Opening {
    pub fn new() -> Self {
        Self::default()
    }
    /// append a move; refused if the edge is already in the opening
    pub fn push(&mut self, edge: Edge) -> bool {
        if self.played.has(edge) {
            false
        } else {
            self.moves.push(edge);
            self.played = self.played.with(edge);
            true
        }
    }
    pub fn get(&self, index: usize) -> Option<Edge> {
        self.moves.get(index).copied()
    }
    pub fn len(&self) -> usize {
        self.moves.len()
    }
    pub fn is_empty(&self) -> bool {
        self.moves.is_empty()
    }
    pub fn iter(&self) -> impl Iterator<Item = Edge> + '_ {
        self.moves.iter().copied()
    }
    /// state once the whole opening has been played
    pub fn state(&self) -> State {
        self.played
    }
}

/// a random prefix of a random permutation of the standard lattice's edges
impl Arbitrary for Opening {
    fn random() -> Self {
        use rand::seq::SliceRandom;
        let n = Board::edges_for(crate::HEIGHT);
        let mut edges = (0..n as u8).map(Edge::from).collect::<Vec<_>>();
        edges.shuffle(&mut rand::rng());
        edges.truncate(rand::random_range(0..=n));
        edges.into_iter().collect()
    }
}

/// repeated edges after the first occurrence are dropped
impl FromIterator<Edge> for Opening {
    fn from_iter<I: IntoIterator<Item = Edge>>(edges: I) -> Self {
        let mut opening = Self::new();
        for edge in edges {
            opening.push(edge);
        }
        opening
    }
}
