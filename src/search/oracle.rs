use super::candidate::Candidate;
use super::opening::Opening;
use crate::Score;
use crate::game::Outcome;

/// Anything that can value a game under optimal play from its opening.
pub trait Oracle {
    fn evaluate(&mut self, opening: &Opening) -> Evaluation;
}

/// The first mover's optimal differential, plus the diagnostic
/// candidates at the first free move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub score: Score,
    pub candidates: Vec<Candidate>,
}

impl Evaluation {
    pub fn outcome(&self) -> Outcome {
        Outcome::from(self.score)
    }
}
