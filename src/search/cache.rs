use crate::Score;
use crate::UNSOLVED;
use crate::game::State;

/// Transposition table over every state of a lattice, indexed by mask.
/// `UNSOLVED` marks entries that have not been computed.
#[derive(Debug, Clone)]
pub struct Cache(Vec<Score>);

impl Cache {
    pub fn new(edges: usize) -> Self {
        Self(vec![UNSOLVED; 1 << edges])
    }
    pub fn reset(&mut self) {
        self.0.fill(UNSOLVED);
    }
    pub fn get(&self, state: State) -> Option<Score> {
        self.0
            .get(state.index())
            .copied()
            .filter(|score| *score != UNSOLVED)
    }
    pub fn set(&mut self, state: State, score: Score) {
        if let Some(slot) = self.0.get_mut(state.index()) {
            *slot = score;
        }
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
    /// number of entries computed since the last reset
    pub fn solved(&self) -> usize {
        self.0.iter().filter(|score| **score != UNSOLVED).count()
    }
}
