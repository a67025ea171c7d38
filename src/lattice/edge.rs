use crate::game::State;
use serde::Serialize;

/// 0-based edge id; also the bit position of the edge in a `State`.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Edge(u8);

impl Edge {
    pub fn mask(&self) -> State {
        State::from(1u32 << self.0)
    }
}

impl From<u8> for Edge {
    fn from(n: u8) -> Self {
        Self(n)
    }
}
impl From<Edge> for u8 {
    fn from(e: Edge) -> Self {
        e.0
    }
}
impl From<Edge> for usize {
    fn from(e: Edge) -> Self {
        e.0 as usize
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "e{}", self.0)
    }
}
