use crate::Score;
use crate::game::Outcome;
use crate::search::Candidate;
use crate::search::Evaluation;
use serde::Serialize;

/// The verdict for one game of a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Report {
    game: usize,
    outcome: Outcome,
    score: Score,
    candidates: Vec<Candidate>,
}

impl Report {
    pub fn new(game: usize, evaluation: Evaluation) -> Self {
        Self {
            game,
            outcome: evaluation.outcome(),
            score: evaluation.score,
            candidates: evaluation.candidates,
        }
    }
    pub fn game(&self) -> usize {
        self.game
    }
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }
    pub fn score(&self) -> Score {
        self.score
    }
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }
}

/// the result line, e.g. `Game 3: B wins.`
impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game {}: {}", self.game, self.outcome)
    }
}
