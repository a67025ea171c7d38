use super::candidate::Candidate;
use super::opening::Opening;
use super::oracle::Evaluation;
use super::oracle::Oracle;
use crate::Score;
use crate::game::Player;
use crate::game::State;
use crate::lattice::Board;

/// Value of every state of the lattice, for the player about to move.
///
/// Built bottom-up in decreasing mask order: claiming an edge sets a bit,
/// so every child is numerically larger than its parent and is already
/// final when the parent is visited.
pub struct Table<'b> {
    board: &'b Board,
    values: Vec<Score>,
}

impl<'b> Table<'b> {
    pub fn new(board: &'b Board) -> Self {
        let n = board.edge_count();
        let mut values = vec![0; 1usize << n];
        for index in (0..values.len()).rev() {
            let state = State::from(index as u32);
            let best = state
                .open(n)
                .map(|edge| board.claim(state, edge))
                .map(|(child, delta)| match delta {
                    0 => -values[child.index()],
                    _ => delta + values[child.index()],
                })
                .max()
                .unwrap_or(0);
            values[index] = best;
        }
        log::debug!("table: {} states solved", values.len());
        Self { board, values }
    }

    pub fn value(&self, state: State) -> Score {
        self.values[state.index()]
    }

    /// Play the opening out, tracking who moves next and the differential
    /// accrued so far from that player's point of view.
    pub fn replay(&self, opening: &Opening) -> (State, Player, Score) {
        let mut state = State::empty();
        let mut mover = Player::A;
        let mut running = 0;
        for edge in opening.iter() {
            let (child, delta) = self.board.claim(state, edge);
            if delta > 0 {
                running += delta;
            } else {
                running = -running;
                mover = mover.flip();
            }
            state = child;
        }
        (state, mover, running)
    }

    pub fn candidates(&self, state: State) -> Vec<Candidate> {
        state
            .open(self.board.edge_count())
            .map(|edge| {
                let (child, delta) = self.board.claim(state, edge);
                let score = match delta {
                    0 => -self.value(child),
                    _ => delta + self.value(child),
                };
                Candidate::new(edge, self.board.endpoints(edge), score)
            })
            .collect()
    }

    /// Same as `Oracle::evaluate`, but shareable across threads.
    pub fn answer(&self, opening: &Opening) -> Evaluation {
        let (state, mover, running) = self.replay(opening);
        let total = running + self.value(state);
        let score = match mover {
            Player::A => total,
            Player::B => -total,
        };
        Evaluation {
            score,
            candidates: self.candidates(state),
        }
    }
}

impl Oracle for Table<'_> {
    fn evaluate(&mut self, opening: &Opening) -> Evaluation {
        self.answer(opening)
    }
}
