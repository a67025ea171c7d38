use super::cache::Cache;
use super::candidate::Candidate;
use super::opening::Opening;
use super::oracle::Evaluation;
use super::oracle::Oracle;
use crate::Score;
use crate::game::State;
use crate::lattice::Board;

/// Memoized negamax. Borrows the lattice, owns the per-game mutable
/// context: the transposition cache and the forced opening.
///
/// Values are differentials for the player about to move. A scoring move
/// keeps the turn, so its child value is added; a quiet move passes the
/// turn, so its child value is negated.
pub struct Solver<'b> {
    board: &'b Board,
    cache: Cache,
    opening: Opening,
    candidates: Vec<Candidate>,
}

impl<'b> Solver<'b> {
    pub fn new(board: &'b Board) -> Self {
        Self {
            board,
            cache: Cache::new(board.edge_count()),
            opening: Opening::new(),
            candidates: Vec::new(),
        }
    }

    pub fn cache(&self) -> &Cache {
        &self.cache
    }
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Clear all state from the previous game and install a new opening.
    pub fn prepare(&mut self, opening: &Opening) {
        self.cache.reset();
        self.candidates.clear();
        self.opening = opening.clone();
    }

    /// Best differential for the mover at `state`, the `index`-th move of the game.
    ///
    /// While `index` is inside the opening only the forced edge is legal.
    /// Every state reached before the opening is exhausted lies on the
    /// forced path, so caching by state alone is sound.
    pub fn recur(&mut self, index: usize, state: State) -> Score {
        if let Some(score) = self.cache.get(state) {
            return score;
        }
        let mut best = None;
        for edge in state.open(self.board.edge_count()) {
            if let Some(forced) = self.opening.get(index) {
                if forced != edge {
                    continue;
                }
            }
            let (child, delta) = self.board.claim(state, edge);
            let score = if delta > 0 {
                delta + self.recur(index + 1, child)
            } else {
                -self.recur(index + 1, child)
            };
            if index == self.opening.len() {
                let endpoints = self.board.endpoints(edge);
                self.candidates.push(Candidate::new(edge, endpoints, score));
            }
            best = best.max(Some(score));
        }
        // no legal move left
        let score = best.unwrap_or(0);
        self.cache.set(state, score);
        score
    }
}

impl Oracle for Solver<'_> {
    fn evaluate(&mut self, opening: &Opening) -> Evaluation {
        self.prepare(opening);
        let score = self.recur(0, State::empty());
        log::debug!(
            "memo: {} forced moves, value {}, {} states solved",
            opening.len(),
            score,
            self.cache.solved()
        );
        Evaluation {
            score,
            candidates: std::mem::take(&mut self.candidates),
        }
    }
}
