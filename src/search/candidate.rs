use crate::Score;
use crate::lattice::Edge;
use crate::lattice::Vertex;
use serde::Serialize;

/// One first free move after the opening, with the differential it
/// yields for the player making it. Purely diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Candidate {
    edge: Edge,
    endpoints: (Vertex, Vertex),
    score: Score,
}

impl Candidate {
    pub fn new(edge: Edge, endpoints: (Vertex, Vertex), score: Score) -> Self {
        Self {
            edge,
            endpoints,
            score,
        }
    }
    pub fn edge(&self) -> Edge {
        self.edge
    }
    pub fn endpoints(&self) -> (Vertex, Vertex) {
        self.endpoints
    }
    pub fn score(&self) -> Score {
        self.score
    }
}

impl std::fmt::Display for Candidate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (u, v) = self.endpoints;
        write!(f, "First move {},{} gives {}", u, v, self.score)
    }
}
